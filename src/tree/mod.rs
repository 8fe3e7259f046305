mod find;
mod insert;
pub(crate) mod parse;

use std::collections::HashMap;

use regex::Regex;

/// Static children convert from parallel ordered lists to a hash map once a
/// node accumulates this many; short linear scans beat hashing below it.
const STATIC_MAP_THRESHOLD: usize = 5;

/// One vertex of the prioritized path trie.
///
/// Statics, regex variables, the plain variable and the wildcard flag all
/// coexist on a node; the match engine consults them in that strict order.
#[derive(Debug)]
pub(crate) struct Node<T> {
    statics: StaticChildren<T>,
    regexes: Vec<RegexEdge<T>>,
    variable: Option<Box<Node<T>>>,
    wildcard: bool,

    data: Option<T>,
    param_names: Vec<Box<str>>,
}

/// Compact form for small fan-out, hashed form after promotion.
#[derive(Debug)]
enum StaticChildren<T> {
    Compact {
        keys: Vec<Box<str>>,
        nodes: Vec<Node<T>>,
    },
    Hashed(HashMap<Box<str>, Node<T>>),
}

/// A `:name(expr)` child. `expr` keeps the parenthesized text verbatim;
/// two edges are distinct unless their expression text is byte-identical.
#[derive(Debug)]
struct RegexEdge<T> {
    expr: Box<str>,
    regex: Regex,
    node: Node<T>,
}

impl<T> Node<T> {
    pub(crate) fn new() -> Self {
        Self {
            statics: StaticChildren::Compact {
                keys: Vec::new(),
                nodes: Vec::new(),
            },
            regexes: Vec::new(),
            variable: None,
            wildcard: false,
            data: None,
            param_names: Vec::new(),
        }
    }

    fn static_child(&self, segment: &str) -> Option<&Node<T>> {
        match &self.statics {
            StaticChildren::Compact { keys, nodes } => keys
                .iter()
                .position(|k| &**k == segment)
                .map(|i| &nodes[i]),
            StaticChildren::Hashed(map) => map.get(segment),
        }
    }
}

pub(crate) fn trim_slashes(s: &str) -> &str {
    s.trim_start_matches('/').trim_end_matches('/')
}
