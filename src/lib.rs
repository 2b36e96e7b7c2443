//! Git remote address parsing.
//!
//! Git remotes come in two incompatible syntaxes: conventional URIs with an
//! explicit `scheme://` prefix (`https://host/repo.git`,
//! `ssh://user@host/repo.git`, `file:///path`) and the legacy SCP-like
//! shorthand `[user@]host:path`, which has no scheme and separates host from
//! path with a bare colon. [`parse`] decides which syntax an input uses,
//! rewrites shorthand into an equivalent `ssh://` URI, and delegates the
//! actual URI grammar to the `url` crate.
//!
//! - `parse("https://example.com/repo.git")` → scheme `https`, path `/repo.git`
//! - `parse("git@github.com:user/repo.git")` → scheme `ssh`, user `git`,
//!   host `github.com`, path `/user/repo.git`
//! - `parse("[::1]:/repo.git")` → scheme `ssh`, host `[::1]`, path `/repo.git`

mod error;
mod git_url;
mod parse;
pub mod scheme;
mod shorthand;

pub use error::ParseError;
pub use git_url::GitUrl;
pub use parse::parse;
