use thiserror::Error;

/// Errors surfaced to callers of [`extract`](crate::extract).
///
/// Resolution problems (unsupported nodes, unsupported operators) are not
/// errors: they are logged as warnings and the affected candidate is
/// dropped, so a single unresolvable argument never aborts a scan.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// An option value was rejected before any parsing happened.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// The parser rejected the source text.
    #[error("failed to parse source: {0}")]
    ParseFailure(String),
}
