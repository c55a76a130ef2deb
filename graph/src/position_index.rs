use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::TranslateError;

/// Maps codepoint ordinals in one file to the byte offset where that codepoint begins.
///
/// Content is decoded as UTF-8. Each byte that is not part of a valid sequence counts as
/// one codepoint of width 1, so every byte string has an index.
///
/// Only multi-byte codepoints are recorded; an ASCII file has an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionIndex {
    /// `(ordinal, extra)` per multi-byte codepoint, ascending by ordinal. `extra` is the
    /// number of bytes beyond one-per-codepoint accumulated up to and including it.
    wide: Vec<(u32, u32)>,
    char_count: u32,
    byte_len: u32,
}

impl PositionIndex {
    pub fn new(content: &[u8]) -> Result<Self, TranslateError> {
        let byte_len = u32::try_from(content.len())
            .map_err(|_| TranslateError::FileTooLarge { len: content.len() })?;

        let mut wide = Vec::new();
        let mut ordinal = 0u32;
        let mut extra = 0u32;
        for chunk in content.utf8_chunks() {
            for ch in chunk.valid().chars() {
                let width = ch.len_utf8() as u32;
                if width > 1 {
                    extra += width - 1;
                    wide.push((ordinal, extra));
                }
                ordinal += 1;
            }
            ordinal += chunk.invalid().len() as u32;
        }

        Ok(Self {
            wide,
            char_count: ordinal,
            byte_len,
        })
    }

    /// Number of codepoints in the file.
    pub fn char_count(&self) -> u32 {
        self.char_count
    }

    /// Number of bytes in the file.
    pub fn byte_len(&self) -> u32 {
        self.byte_len
    }

    /// Byte offset of the codepoint at `ordinal`.
    ///
    /// `ordinal == char_count()` is the end of the file and maps to `byte_len()`.
    pub fn byte_offset(&self, ordinal: u32) -> Result<u32, TranslateError> {
        if ordinal > self.char_count {
            return Err(TranslateError::OffsetOutOfRange {
                offset: ordinal,
                char_count: self.char_count,
            });
        }
        let preceding = self.wide.partition_point(|&(o, _)| o < ordinal);
        let extra = match preceding {
            0 => 0,
            i => self.wide[i - 1].1,
        };
        Ok(ordinal + extra)
    }
}

/// Per-pass cache of position indices keyed by resolved path.
///
/// A path is stat'ed and read at most once: paths that turn out missing, non-regular or
/// unreadable are remembered as `None`.
#[derive(Debug, Default)]
pub(crate) struct IndexCache {
    files: HashMap<PathBuf, Option<PositionIndex>>,
    warn_missing_files: bool,
    builds: usize,
}

impl IndexCache {
    pub(crate) fn new(warn_missing_files: bool) -> Self {
        Self {
            warn_missing_files,
            ..Self::default()
        }
    }

    /// Number of indices built so far.
    pub(crate) fn builds(&self) -> usize {
        self.builds
    }

    /// Returns the index for `path`, building it on first use.
    ///
    /// `Ok(None)` means the path has no usable content and its spans are left alone.
    /// An error is returned only from the call that first hit it.
    pub(crate) fn get(&mut self, path: &Path) -> Result<Option<&PositionIndex>, TranslateError> {
        if !self.files.contains_key(path) {
            let built = self.build(path);
            let failed = built.as_ref().err().cloned();
            self.files.insert(path.to_path_buf(), built.ok().flatten());
            if let Some(err) = failed {
                return Err(err);
            }
        }
        Ok(self.files.get(path).and_then(Option::as_ref))
    }

    fn build(&mut self, path: &Path) -> Result<Option<PositionIndex>, TranslateError> {
        let metadata = match fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if is_missing(&err) => {
                if self.warn_missing_files {
                    warn!(file = %path.display(), "file does not exist, leaving its offsets unchanged");
                } else {
                    debug!(file = %path.display(), "file does not exist, leaving its offsets unchanged");
                }
                return Ok(None);
            }
            Err(err) => return Err(TranslateError::read(&err)),
        };
        if !metadata.is_file() {
            debug!(file = %path.display(), "not a regular file, leaving its offsets unchanged");
            return Ok(None);
        }

        let content = fs::read(path).map_err(|err| TranslateError::read(&err))?;
        let index = PositionIndex::new(&content)?;
        self.builds += 1;
        debug!(
            file = %path.display(),
            chars = index.char_count(),
            bytes = index.byte_len(),
            "built position index"
        );
        Ok(Some(index))
    }
}

fn is_missing(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
