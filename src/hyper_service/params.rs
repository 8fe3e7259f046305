use crate::params::RouteParams;

use std::str::FromStr;

/// An owned copy of the parameters bound for one request, detached from the
/// borrow of the request path so it can travel into a `'static` future.
///
/// Stores the path once plus `(name, start, end)` offsets per parameter
/// rather than one `String` per captured value.
pub struct OwnedParams {
    path: Option<String>,
    offsets: Vec<(Box<str>, usize, usize)>,
}

impl OwnedParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        let path = self.path.as_deref()?;
        self.offsets
            .iter()
            .find_map(|&(ref n, start, end)| some_if(&**n == name, || &path[start..end]))
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let path = self.path.as_deref();
        self.offsets
            .iter()
            .filter_map(move |&(ref n, start, end)| Some((&**n, &path?[start..end])))
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}

impl OwnedParams {
    pub(super) fn empty() -> Self {
        Self {
            path: None,
            offsets: Vec::new(),
        }
    }

    pub(super) fn new(path: &str, params: &RouteParams<'_>) -> Self {
        let base = path.as_ptr() as usize;
        let offsets: Vec<(Box<str>, usize, usize)> = params
            .iter()
            .map(|p| {
                // Every captured value is a subslice of `path`, so a pair of
                // offsets reconstructs it from the single stored copy.
                let start = (p.value.as_ptr() as usize) - base;
                (p.name.into(), start, start + p.value.len())
            })
            .collect();
        let path = some_if(!offsets.is_empty(), || path.to_owned());
        Self { path, offsets }
    }
}

#[inline(always)]
fn some_if<T>(cond: bool, f: impl FnOnce() -> T) -> Option<T> {
    if cond {
        Some(f())
    } else {
        None
    }
}
