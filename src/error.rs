/// Error returned by route registration.
///
/// Lookup misses are not errors: [`RouteMux::find`](crate::RouteMux::find)
/// returns `None` for an unmatched path.
#[derive(Debug, thiserror::Error)]
pub enum RouteError {
    /// The pattern produced an empty segment (`//` inside the pattern).
    #[error("path contained invalid syntax")]
    BadSyntax,

    /// A `*` segment occurred before the end of the pattern.
    #[error("wildcard must be at the end of the path")]
    WildcardMisplaced,

    /// A variable's constraint expression failed to compile.
    /// The regex engine's message is passed through untouched.
    #[error(transparent)]
    Regex(#[from] regex::Error),
}
