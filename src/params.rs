use std::fmt::{self, Debug};
use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameter counts up to this bound never touch the heap during a match.
pub const INLINE_PARAMS: usize = 10;

pub(crate) type ParamBuf<'a> = SmallVec<[Param<'a>; INLINE_PARAMS]>;

/// A single path parameter captured during a match.
///
/// `value` borrows from the request path; `name` borrows from the
/// multiplexer's stored pattern (or is `"*"` for a wildcard tail).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// The parameters bound by a successful match, in pattern order.
///
/// Backed by an inline array of [`INLINE_PARAMS`] entries, so a match never
/// allocates unless a route carries more variables than that.
pub struct RouteParams<'a> {
    buf: ParamBuf<'a>,
}

impl RouteParams<'_> {
    /// Returns the value captured for `name`, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|p| if p.name == name { Some(p.value) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }
}

impl<'a> Deref for RouteParams<'a> {
    type Target = [Param<'a>];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl<'a> RouteParams<'a> {
    pub(crate) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    #[inline(always)]
    pub(crate) fn buffer(&mut self) -> &mut ParamBuf<'a> {
        &mut self.buf
    }
}

impl Debug for RouteParams<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteParams")
            .field("buf", &self.buf.as_slice())
            .finish()
    }
}
