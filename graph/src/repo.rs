//! Canonical repository URIs.
//!
//! A repository URI is `host/path`: no scheme, no user, no port, lowercase host, no `.git`
//! suffix, no empty or `.` path segments. Clone URLs in any of the usual shapes map to it:
//!
//! - `https://github.com/foo/bar.git`
//! - `git://github.com/foo/bar`
//! - `ssh://git@github.com:22/foo/bar.git`
//! - `git@github.com:foo/bar.git`
//! - `github.com/foo/bar`

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoUriError {
    Empty,
    InvalidCharacter { ch: char },
    MissingHost,
    /// A `..` segment walks above the repository root.
    EscapesRoot,
}

impl RepoUriError {
    pub fn message(&self) -> &'static str {
        match self {
            RepoUriError::Empty => "empty repository identifier",
            RepoUriError::InvalidCharacter { .. } => "whitespace or control character",
            RepoUriError::MissingHost => "no host",
            RepoUriError::EscapesRoot => "path escapes the repository root",
        }
    }
}

impl fmt::Display for RepoUriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepoUriError::InvalidCharacter { ch } => write!(f, "{} {ch:?}", self.message()),
            _ => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for RepoUriError {}

/// Converts a clone URL or repository identifier to its canonical URI. Idempotent.
pub fn make_uri(clone_url: &str) -> Result<String, RepoUriError> {
    if clone_url.is_empty() {
        return Err(RepoUriError::Empty);
    }
    if let Some(ch) = clone_url
        .chars()
        .find(|c| c.is_whitespace() || c.is_control())
    {
        return Err(RepoUriError::InvalidCharacter { ch });
    }

    let (authority, path) = split_authority(clone_url);

    let host = strip_port(strip_userinfo(authority));
    if host.is_empty() {
        return Err(RepoUriError::MissingHost);
    }

    let mut uri = host.to_ascii_lowercase();
    for segment in clean_path(path)? {
        uri.push('/');
        uri.push_str(segment);
    }
    Ok(uri)
}

/// Splits off everything before the path. Handles `scheme://authority/path`,
/// scp-style `user@host:path` and bare `host/path`.
fn split_authority(s: &str) -> (&str, &str) {
    if let Some((_, rest)) = s.split_once("://") {
        return rest.split_once('/').unwrap_or((rest, ""));
    }

    let slash = s.find('/').unwrap_or(s.len());
    match s[..slash].rfind(':') {
        // `host:22/path` keeps the port on the authority so `strip_port` drops it.
        Some(colon) if is_port(&s[colon + 1..slash]) => (&s[..slash], &s[slash..]),
        Some(colon) => (&s[..colon], &s[colon + 1..]),
        None => (&s[..slash], &s[slash..]),
    }
}

fn strip_userinfo(authority: &str) -> &str {
    authority
        .rsplit_once('@')
        .map_or(authority, |(_, host)| host)
}

fn strip_port(host: &str) -> &str {
    match host.rsplit_once(':') {
        Some((h, port)) if port.is_empty() || is_port(port) => h,
        _ => host,
    }
}

fn is_port(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn clean_path(path: &str) -> Result<Vec<&str>, RepoUriError> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop().ok_or(RepoUriError::EscapesRoot)?;
            }
            s => segments.push(s),
        }
    }
    let stem = segments
        .last()
        .copied()
        .and_then(|last| last.strip_suffix(".git"))
        .filter(|stem| !stem.is_empty());
    if let Some(stem) = stem {
        segments.pop();
        segments.push(stem);
    }
    Ok(segments)
}
