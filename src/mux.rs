use std::collections::HashMap;

pub use http::Method;
use tracing::debug;

use crate::error::RouteError;
use crate::params::RouteParams;
use crate::tree::{parse, trim_slashes, Node};

/// Stores one prioritized path trie per HTTP method.
///
/// Methods are independent: a pattern registered under `GET` is invisible to
/// `POST` lookups. Method trees are created lazily on first registration and
/// method tokens compare by exact byte equality (extension tokens via
/// [`Method::from_bytes`] work like any other).
///
/// Registration mutates the trees and matching only reads them, so a mux
/// built up front can serve lookups from any number of threads; there is no
/// internal locking.
#[derive(Debug, Default)]
pub struct RouteMux<T> {
    methods: HashMap<Method, Node<T>>,
}

impl<T> RouteMux<T> {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Registers `pattern` under `method`, storing `data` on the terminal.
    ///
    /// Leading and trailing slashes are stripped; an empty remainder
    /// registers the method root itself. Registering the same
    /// (method, pattern) again replaces the previous payload.
    pub fn add_route(&mut self, method: Method, pattern: &str, data: T) -> Result<(), RouteError> {
        let parsed = parse::parse(trim_slashes(pattern))?;
        debug!(%method, pattern, "route registered");
        let root = self.methods.entry(method).or_insert_with(Node::new);
        root.insert(parsed, data);
        Ok(())
    }

    /// Like [`add_route`](Self::add_route), panicking on an invalid pattern.
    pub fn insert(&mut self, method: Method, pattern: &str, data: T) -> &mut Self {
        if let Err(e) = self.add_route(method.clone(), pattern, data) {
            panic!("{}: method = {}, pattern = {:?}", e, method, pattern);
        }
        self
    }

    /// Resolves `(method, path)` to a registered payload and its bound path
    /// parameters, or `None` when nothing matches.
    ///
    /// Leading and trailing slashes on `path` are ignored; an empty
    /// remainder resolves to the method root's payload, if registered.
    pub fn find<'p, 's: 'p>(
        &'s self,
        method: &Method,
        path: &'p str,
    ) -> Option<(&'s T, RouteParams<'p>)> {
        let root = self.methods.get(method)?;
        let mut params = RouteParams::new();
        let data = root.find(path, params.buffer())?;
        Some((data, params))
    }
}

macro_rules! define_method {
    ($name:ident, $method:ident) => {
        pub fn $name(&mut self, pattern: &str, data: T) -> Result<(), RouteError> {
            self.add_route(Method::$method, pattern, data)
        }
    };
}

impl<T> RouteMux<T> {
    define_method!(get, GET);
    define_method!(put, PUT);
    define_method!(post, POST);
    define_method!(patch, PATCH);
    define_method!(delete, DELETE);
    define_method!(head, HEAD);
    define_method!(options, OPTIONS);
    define_method!(connect, CONNECT);
    define_method!(trace, TRACE);
}

#[macro_export]
macro_rules! route_mux {
    {$($method:tt $pattern:expr => $data:expr),+} => {{
        let mut __mux = $crate::RouteMux::new();
        $(route_mux!(@entry __mux, $method, $pattern, $data);)+
        __mux
    }};

    {@entry $mux:expr, GET, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::GET, $pattern, $data)
    };
    {@entry $mux:expr, POST, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::POST, $pattern, $data)
    };
    {@entry $mux:expr, PUT, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::PUT, $pattern, $data)
    };
    {@entry $mux:expr, DELETE, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::DELETE, $pattern, $data)
    };
    {@entry $mux:expr, HEAD, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::HEAD, $pattern, $data)
    };
    {@entry $mux:expr, OPTIONS, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::OPTIONS, $pattern, $data)
    };
    {@entry $mux:expr, CONNECT, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::CONNECT, $pattern, $data)
    };
    {@entry $mux:expr, PATCH, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::PATCH, $pattern, $data)
    };
    {@entry $mux:expr, TRACE, $pattern:expr, $data:expr} => {
        $mux.insert($crate::Method::TRACE, $pattern, $data)
    };
}

#[test]
fn test_macro() {
    let mux: RouteMux<i32> = route_mux! {
        GET "/people" => 1i32,
        GET "/people/:id" => 2,
        POST "/people" => 3,
        GET "/files/*" => 4
    };

    assert_eq!(*mux.find(&Method::GET, "/people").unwrap().0, 1);
    let (data, params) = mux.find(&Method::GET, "/people/42").unwrap();
    assert_eq!(*data, 2);
    assert_eq!(params.get("id"), Some("42"));
    assert_eq!(*mux.find(&Method::POST, "/people").unwrap().0, 3);
    assert_eq!(
        mux.find(&Method::GET, "/files/a/b")
            .unwrap()
            .1
            .get("*"),
        Some("a/b")
    );
    assert!(mux.find(&Method::DELETE, "/people").is_none());
}
