//! Error taxonomy for remote address parsing.

use thiserror::Error;

/// Errors returned by [`crate::parse`].
///
/// All variants are terminal: nothing is retried or recovered internally,
/// and callers are expected to surface them to their user as a malformed
/// repository address.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input is a `scheme://` prefix with nothing after it.
    #[error("malformed remote address contains a scheme only")]
    SchemeOnly,

    /// The input has no scheme and no usable colon to delimit the host:path
    /// boundary (colons inside an IPv6 `[...]` host do not count).
    #[error("no colon to delimit the host:path boundary in SCP-like remote address")]
    MissingDelimiter,

    /// The scheme-token scan found a character that can never appear in a
    /// URI scheme before any colon.
    #[error("invalid character {0:?} in URI scheme")]
    InvalidScheme(char),

    /// The generic URI grammar rejected the input (original or rewritten).
    #[error(transparent)]
    Url(#[from] url::ParseError),
}
