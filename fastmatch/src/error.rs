use thiserror::Error;

/// An error that occurred while building a [`Matcher`](crate::Matcher).
#[derive(Debug, Error)]
pub enum BuildError {
    /// The pattern failed to parse.
    #[error(transparent)]
    Syntax(#[from] regex_syntax::Error),
    /// The general regex engine rejected the pattern, e.g. it is too big.
    #[error("fallback regex: {0}")]
    Fallback(#[from] regex::Error),
}
