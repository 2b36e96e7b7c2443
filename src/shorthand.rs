//! SCP-like shorthand rewriting.
//!
//! The legacy remote syntax `[user@]host:path` has no scheme and uses a
//! bare colon as the host/path separator:
//!
//! - `host.xz:/path/to/repo.git/`
//! - `host.xz:~user/path/to/repo.git/`
//! - `host.xz:path/to/repo.git`
//! - `[d:e:a:d::1]:/path/to/repo.git/`
//! - `10.10.10.10:/path/to/repo.git/`
//! - `user@10.10.10.10:/path/to/repo.git/`
//! - `user@[d:e:a:d::1]:/path/to/repo.git/`
//! - `user@host.xz:~user/path/to/repo.git/`
//!
//! Rewriting forces an `ssh://` scheme and turns the delimiter colon into a
//! slash, producing an ordinary URI the `url` crate can parse.

use crate::error::ParseError;

/// Rewrites an SCP-like shorthand address into an equivalent `ssh://` URI.
///
/// The delimiter colon is the first colon after a `]` when the input
/// contains one (an IPv6 literal host keeps its internal colons), and the
/// first colon anywhere otherwise. The delimiter colon becomes the slash
/// that introduces the path; when the shorthand path already starts with a
/// slash the two merge, so the result never carries a doubled slash and
/// the reparsed path needs no fixup afterwards.
pub(crate) fn rewrite(raw: &str) -> Result<String, ParseError> {
    let delimiter = match raw.find(']') {
        // Looks like an IPv6 literal host; skip the colons inside the
        // brackets when searching for the host:path separator.
        Some(bracket) => raw[bracket..].find(':').map(|j| bracket + j),
        None => raw.find(':'),
    };

    let delimiter = delimiter.ok_or(ParseError::MissingDelimiter)?;

    let host = &raw[..delimiter];
    let path = &raw[delimiter + 1..];

    Ok(format!(
        "ssh://{}/{}",
        host,
        path.strip_prefix('/').unwrap_or(path)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_host_path() {
        assert_eq!(
            rewrite("user@host.xz:path/to/repo.git").unwrap(),
            "ssh://user@host.xz/path/to/repo.git"
        );
        assert_eq!(
            rewrite("git@github.com:user/repo.git").unwrap(),
            "ssh://git@github.com/user/repo.git"
        );
    }

    #[test]
    fn bare_host_relative_and_absolute_paths() {
        assert_eq!(
            rewrite("host.xz:path/to/repo.git").unwrap(),
            "ssh://host.xz/path/to/repo.git"
        );
        assert_eq!(
            rewrite("host.xz:/path/to/repo.git/").unwrap(),
            "ssh://host.xz/path/to/repo.git/"
        );
        assert_eq!(
            rewrite("host.xz:~user/path/to/repo.git/").unwrap(),
            "ssh://host.xz/~user/path/to/repo.git/"
        );
    }

    #[test]
    fn ipv6_host_keeps_internal_colons() {
        assert_eq!(rewrite("[::1]:/p").unwrap(), "ssh://[::1]/p");
        assert_eq!(
            rewrite("user@[d:e:a:d::1]:/path/to/repo.git/").unwrap(),
            "ssh://user@[d:e:a:d::1]/path/to/repo.git/"
        );
    }

    #[test]
    fn only_the_delimiter_colon_is_replaced() {
        assert_eq!(rewrite("host:a:b").unwrap(), "ssh://host/a:b");
    }

    #[test]
    fn empty_path_after_delimiter() {
        assert_eq!(rewrite("host.xz:").unwrap(), "ssh://host.xz/");
    }

    #[test]
    fn bracket_without_following_colon() {
        assert_eq!(rewrite("[::1]"), Err(ParseError::MissingDelimiter));
        assert_eq!(rewrite("user@[d::1]"), Err(ParseError::MissingDelimiter));
    }

    #[test]
    fn no_colon() {
        assert_eq!(rewrite("hostonly"), Err(ParseError::MissingDelimiter));
    }
}
