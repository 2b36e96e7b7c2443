//! Two-phase remote address normalization.

use url::Url;

use crate::error::ParseError;
use crate::git_url::GitUrl;
use crate::scheme;
use crate::shorthand;

/// How a raw address reaches the generic URI parser.
#[derive(Debug)]
enum Normalization {
    /// The input is parsed as-is.
    Direct,
    /// The input was SCP-like shorthand, rewritten to an `ssh://` URI.
    Rewritten(String),
}

/// Parses a Git remote address into a [`GitUrl`].
///
/// Scheme-qualified URIs (`https://…`, `ssh://…`, `file:///…`) are handed
/// to the `url` crate unchanged. Addresses without a `scheme://` prefix
/// that contain a colon are treated as SCP-like shorthand
/// (`[user@]host:path`), rewritten to an `ssh://` URI, and parsed in a
/// second pass. The delimiter colon becomes the slash that introduces the
/// path, so `git@github.com:user/repo.git` yields path `/user/repo.git`;
/// nothing is stripped from the reparsed path afterwards.
///
/// This is a pure function of its input: no state, no I/O, and the same
/// input always yields the same result.
pub fn parse(raw: &str) -> Result<GitUrl, ParseError> {
    match normalize(raw)? {
        Normalization::Direct => Ok(GitUrl::from(Url::parse(raw)?)),
        Normalization::Rewritten(rewritten) => Ok(GitUrl::from(Url::parse(&rewritten)?)),
    }
}

/// Decides whether `raw` is parsed directly or rewritten first.
fn normalize(raw: &str) -> Result<Normalization, ParseError> {
    match scheme::split(raw) {
        // A qualified URI with nothing after the scheme is junk.
        Ok(Some((_, ""))) => Err(ParseError::SchemeOnly),
        Ok(Some(_)) => Ok(Normalization::Direct),
        // No `scheme://` prefix (`Ok(None)`), or a character a scheme token
        // cannot contain (`Err`, e.g. the `@` in `git@github.com:…`): the
        // address may be SCP-like shorthand.
        Ok(None) | Err(_) => {
            if !raw.contains(':') {
                // No colon means no host:path boundary to rewrite; parse
                // directly and let the generic grammar state its verdict.
                return Ok(Normalization::Direct);
            }
            let rewritten = shorthand::rewrite(raw)?;
            tracing::debug!(raw, rewritten = %rewritten, "rewrote SCP-like remote address");
            Ok(Normalization::Rewritten(rewritten))
        }
    }
}
