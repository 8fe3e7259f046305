use std::mem;

use super::parse::{Constraint, Pattern, Segment};
use super::{Node, RegexEdge, StaticChildren, STATIC_MAP_THRESHOLD};

impl<T> Node<T> {
    /// Walks a parsed pattern from this (method-root) node, creating or
    /// reusing one child per segment, then records the payload and the
    /// collected variable names on the reached node. Registering the same
    /// pattern again overwrites both.
    pub(crate) fn insert(&mut self, pattern: Pattern<'_>, data: T) {
        let Pattern { segments, names } = pattern;

        let mut node = self;
        for segment in segments {
            node = match segment {
                Segment::Static(literal) => node.static_child_or_insert(literal),
                Segment::Variable(None) => node.variable_child_or_insert(),
                Segment::Variable(Some(constraint)) => node.regex_child_or_insert(constraint),
                // Wildcard is final; flag the current node and stay on it.
                Segment::Wildcard => {
                    node.wildcard = true;
                    node
                }
            };
        }

        node.data = Some(data);
        node.param_names = names;
    }

    fn static_child_or_insert(&mut self, literal: &str) -> &mut Node<T> {
        self.maybe_promote_statics(literal);

        match &mut self.statics {
            StaticChildren::Compact { keys, nodes } => {
                let at = keys.iter().position(|k| &**k == literal);
                match at {
                    Some(i) => &mut nodes[i],
                    None => {
                        keys.push(literal.into());
                        nodes.push(Node::new());
                        nodes.last_mut().unwrap()
                    }
                }
            }
            StaticChildren::Hashed(map) => {
                map.entry(literal.into()).or_insert_with(Node::new)
            }
        }
    }

    /// Converts the parallel lists to a map right before a new literal would
    /// push the compact form past the threshold. Reusing an existing child
    /// never promotes, so the shape of the node is a deterministic function
    /// of the set of literals inserted.
    fn maybe_promote_statics(&mut self, literal: &str) {
        if let StaticChildren::Compact { keys, nodes } = &mut self.statics {
            if keys.len() >= STATIC_MAP_THRESHOLD && !keys.iter().any(|k| &**k == literal) {
                let keys = mem::take(keys);
                let nodes = mem::take(nodes);
                self.statics = StaticChildren::Hashed(keys.into_iter().zip(nodes).collect());
            }
        }
    }

    fn variable_child_or_insert(&mut self) -> &mut Node<T> {
        self.variable.get_or_insert_with(|| Box::new(Node::new()))
    }

    fn regex_child_or_insert(&mut self, constraint: Constraint) -> &mut Node<T> {
        let at = self.regexes.iter().position(|e| e.expr == constraint.expr);
        match at {
            Some(i) => &mut self.regexes[i].node,
            None => {
                // Appended, never reordered: first-registered wins ties
                // at match time.
                self.regexes.push(RegexEdge {
                    expr: constraint.expr,
                    regex: constraint.regex,
                    node: Node::new(),
                });
                &mut self.regexes.last_mut().unwrap().node
            }
        }
    }
}
