//! Codepoint → byte offset translation for graphers that count in characters.
//!
//! The translator assumes every non-zero offset it sees is a codepoint ordinal. Running it
//! twice over the same output corrupts any offset past the first multi-byte character.

use std::path::{Component, Path, PathBuf};

use tracing::warn;

use crate::Output;
use crate::config::TranslateConfig;
use crate::error::TranslateError;
use crate::position_index::IndexCache;

/// What a translation pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslateReport {
    /// Offsets rewritten to byte offsets.
    pub translated: usize,
    /// Spans left alone: no file name, or a file that is missing, not regular, or failed
    /// to read earlier in the pass.
    pub skipped: usize,
    /// Distinct files read and indexed.
    pub indexed_files: usize,
    /// Recovered failures, in the order they happened.
    pub failures: Vec<TranslateFailure>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslateFailure {
    pub file: PathBuf,
    pub error: TranslateError,
}

/// Rewrites all codepoint offsets in `output` to byte offsets in place.
///
/// File names are resolved against `root`. Never fails: unreadable files and bad offsets
/// are logged and skipped. See [`translate_with_report`] to observe them.
pub fn translate<'o>(
    root: &Path,
    output: &'o mut Output,
    config: &TranslateConfig,
) -> &'o mut Output {
    translate_with_report(root, output, config);
    output
}

pub fn translate_with_report(
    root: &Path,
    output: &mut Output,
    config: &TranslateConfig,
) -> TranslateReport {
    let mut translator = OffsetTranslator::new(root, config);
    translator.translate_output(output);
    translator.finish()
}

/// One translation pass. Owns the position index cache for that pass.
pub struct OffsetTranslator<'a> {
    root: &'a Path,
    cache: IndexCache,
    report: TranslateReport,
}

impl<'a> OffsetTranslator<'a> {
    pub fn new(root: &'a Path, config: &TranslateConfig) -> Self {
        Self {
            root,
            cache: IndexCache::new(config.warn_missing_files),
            report: TranslateReport::default(),
        }
    }

    pub fn translate_output(&mut self, output: &mut Output) {
        for def in &mut output.defs {
            self.fix(&def.file, [&mut def.def_start, &mut def.def_end]);
        }
        for r in &mut output.refs {
            self.fix(&r.file, [&mut r.start, &mut r.end]);
        }
        for doc in &mut output.docs {
            self.fix(&doc.file, [&mut doc.start, &mut doc.end]);
        }
    }

    pub fn finish(mut self) -> TranslateReport {
        self.report.indexed_files = self.cache.builds();
        self.report
    }

    fn fix(&mut self, file: &str, offsets: [&mut u32; 2]) {
        if file.is_empty() {
            self.report.skipped += 1;
            return;
        }
        let path = resolve_under(self.root, file);
        if let Err(error) = self.fix_offsets(&path, offsets) {
            warn!(
                file = %path.display(),
                %error,
                "failed to convert codepoint offset to byte offset (did the grapher emit a nonexistent offset?), continuing anyway"
            );
            self.report.failures.push(TranslateFailure { file: path, error });
        }
    }

    /// Offsets rewritten before an error keep their new value.
    fn fix_offsets(&mut self, path: &Path, offsets: [&mut u32; 2]) -> Result<(), TranslateError> {
        let Some(index) = self.cache.get(path)? else {
            self.report.skipped += 1;
            return Ok(());
        };
        for offset in offsets {
            // Zero doubles as "unset" and is never looked up.
            if *offset == 0 {
                continue;
            }
            *offset = index.byte_offset(*offset)?;
            self.report.translated += 1;
        }
        Ok(())
    }
}

/// Joins `file` onto `root`, dropping any root or prefix component so an absolute span
/// file still resolves inside `root`.
fn resolve_under(root: &Path, file: &str) -> PathBuf {
    let mut path = root.to_path_buf();
    for component in Path::new(file).components() {
        match component {
            Component::Prefix(_) | Component::RootDir => {}
            other => path.push(other),
        }
    }
    path
}
