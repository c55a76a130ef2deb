use std::fmt;
use std::io;

use crate::repo::RepoUriError;

/// Why one span's offsets could not be converted to byte offsets.
///
/// These never abort a translation pass; the translator logs them and moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// The file exists but could not be stat'ed or read.
    Read { kind: io::ErrorKind, message: String },
    /// The file is too large for `u32` offsets.
    FileTooLarge { len: usize },
    /// The grapher reported an offset past the end of the file.
    OffsetOutOfRange { offset: u32, char_count: u32 },
}

impl TranslateError {
    pub(crate) fn read(err: &io::Error) -> Self {
        TranslateError::Read {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

impl fmt::Display for TranslateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranslateError::Read { message, .. } => write!(f, "read failed: {message}"),
            TranslateError::FileTooLarge { len } => {
                write!(f, "file of {len} bytes is too large for u32 offsets")
            }
            TranslateError::OffsetOutOfRange { offset, char_count } => write!(
                f,
                "codepoint offset {offset} is past the end of the file ({char_count} codepoints)"
            ),
        }
    }
}

impl std::error::Error for TranslateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    /// A ref's `def_repo` could not be turned into a repository URI.
    DefRepo { def_repo: String, source: RepoUriError },
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::DefRepo { def_repo, source } => {
                write!(f, "invalid def repo {def_repo:?}: {source}")
            }
        }
    }
}

impl std::error::Error for NormalizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            NormalizeError::DefRepo { source, .. } => Some(source),
        }
    }
}
