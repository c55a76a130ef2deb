use std::fs;
use std::io;
use std::path::Path;
use std::sync::{Arc, Mutex};

use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use crate::{Def, DefKey, Doc, Ref};

/// Routes `tracing` output through the test harness. Use `RUST_LOG=debug` to see it.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Collects formatted `tracing` output from code run under [`LogCapture::run`].
#[derive(Debug, Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// Runs `f` with a debug-level subscriber writing into this capture (current thread only).
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        let writer = self.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(move || writer.clone())
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        let buf = self.0.lock().expect("log capture poisoned");
        String::from_utf8_lossy(&buf).into_owned()
    }

    /// Captured lines logged at `level` (e.g. `"WARN"`).
    pub fn lines_at(&self, level: &str) -> Vec<String> {
        self.contents()
            .lines()
            .filter(|line| line.trim_start().starts_with(level))
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .expect("log capture poisoned")
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates a temp dir containing `files` (relative path, content).
pub fn fixture(files: &[(&str, &[u8])]) -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for (name, content) in files {
        write(dir.path(), name, content);
    }
    dir
}

pub fn write(root: &Path, name: &str, content: &[u8]) {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(&path, content).unwrap_or_else(|e| panic!("failed to write {:?}: {}", path, e));
}

pub fn def(file: &str, start: u32, end: u32) -> Def {
    Def {
        key: DefKey {
            repo: String::new(),
            unit_type: "GoPackage".into(),
            unit: "example.com/pkg".into(),
            path: format!("{file}/{start}"),
        },
        name: format!("d{start}"),
        file: file.into(),
        def_start: start,
        def_end: end,
        ..Def::default()
    }
}

pub fn reference(file: &str, start: u32, end: u32) -> Ref {
    Ref {
        def_unit_type: "GoPackage".into(),
        def_unit: "example.com/pkg".into(),
        def_path: "T".into(),
        unit_type: "GoPackage".into(),
        unit: "example.com/pkg".into(),
        file: file.into(),
        start,
        end,
        ..Ref::default()
    }
}

pub fn doc(file: &str, start: u32, end: u32) -> Doc {
    Doc {
        key: DefKey {
            unit_type: "GoPackage".into(),
            unit: "example.com/pkg".into(),
            path: "T".into(),
            ..DefKey::default()
        },
        format: "text/plain".into(),
        data: "T does things.".into(),
        file: file.into(),
        start,
        end,
    }
}
