use super::{trim_slashes, Node};
use crate::params::{Param, ParamBuf};

/// State remembered on entering a wildcard-bearing node, restored only if
/// the more specific descent below it fails to reach a terminal.
struct Snapshot<'s, 'p, T> {
    node: &'s Node<T>,
    captured: usize,
    tail: &'p str,
}

impl<T> Node<T> {
    /// Resolves a request path against the trie rooted at this node,
    /// appending captured parameters to `buf`. On success the parameter
    /// names are bound positionally from the terminal's name list.
    pub(crate) fn find<'p, 's: 'p>(
        &'s self,
        path: &'p str,
        buf: &mut ParamBuf<'p>,
    ) -> Option<&'s T> {
        let mut rest = trim_slashes(path);
        if rest.is_empty() {
            return self.data.as_ref();
        }

        let mut node = self;
        let mut snapshot: Option<Snapshot<'s, 'p, T>> = None;
        let mut terminal: Option<&'s Node<T>> = None;

        loop {
            if node.wildcard {
                snapshot = Some(Snapshot {
                    node,
                    captured: buf.len(),
                    tail: rest,
                });
            }

            // The segment runs up to the next '/'; with none left this is
            // the final iteration.
            let mut last = false;
            let segment = match rest.find('/') {
                Some(i) if i > 0 => {
                    let s = &rest[..i];
                    rest = &rest[i + 1..];
                    s
                }
                Some(_) => rest,
                None => {
                    last = true;
                    rest
                }
            };

            // Statics win outright.
            if let Some(child) = node.static_child(segment) {
                node = child;
                if last {
                    if node.data.is_some() {
                        terminal = Some(node);
                    }
                    break;
                }
                continue;
            }

            // First-registered matching constraint wins; the plain variable
            // is the fallback when no constraint accepts the segment.
            let mut next = node.variable.as_deref();
            for edge in &node.regexes {
                if edge.regex.is_match(segment) {
                    next = Some(&edge.node);
                    break;
                }
            }

            match next {
                Some(child) => {
                    // Name is bound after the walk completes.
                    buf.push(Param {
                        name: "",
                        value: segment,
                    });
                    node = child;
                    if last {
                        if node.data.is_some() {
                            terminal = Some(node);
                        }
                        break;
                    }
                }
                None => break,
            }
        }

        if terminal.is_none() {
            if let Some(snap) = snapshot {
                buf.truncate(snap.captured);
                buf.push(Param {
                    name: "*",
                    value: snap.tail,
                });
                terminal = Some(snap.node);
            }
        }

        let terminal = terminal?;
        for (param, name) in buf.iter_mut().zip(terminal.param_names.iter()) {
            param.name = name;
        }
        terminal.data.as_ref()
    }
}
