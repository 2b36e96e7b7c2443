//! Scheme-token scan: decides whether a remote address is scheme-qualified.

use crate::error::ParseError;

/// Splits a raw remote address into its scheme token and the remainder
/// after `://`.
///
/// A scheme token is a letter followed by letters, digits, `+`, `-`, or
/// `.`, terminated by a colon; only a colon followed by `//` counts as a
/// qualifying scheme here, because the SCP-like shorthand this crate
/// accepts also places a bare colon after a token that scans like a scheme
/// (`host.xz:path`).
///
/// Returns `Ok(None)` when the input carries no `scheme://` prefix (first
/// character is not a letter, the string ends before any colon, or the
/// colon is not followed by `//`) — such inputs are candidates for the
/// shorthand syntax. Fails with [`ParseError::InvalidScheme`] when a
/// character that can never appear in a scheme token shows up before any
/// colon.
pub fn split(raw: &str) -> Result<Option<(&str, &str)>, ParseError> {
    for (i, c) in raw.char_indices() {
        match c {
            'a'..='z' | 'A'..='Z' => {}
            '0'..='9' | '+' | '-' | '.' => {
                if i == 0 {
                    return Ok(None);
                }
            }
            ':' => {
                if i == 0 {
                    return Ok(None);
                }
                return Ok(raw[i + 1..]
                    .strip_prefix("//")
                    .map(|remainder| (&raw[..i], remainder)));
            }
            other => return Err(ParseError::InvalidScheme(other)),
        }
    }
    Ok(None)
}
