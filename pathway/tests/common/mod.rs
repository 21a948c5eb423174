//! Shared helpers for pathway integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use pathway::fs::{Files, LocalFs};
use tempfile::TempDir;

/// A scratch directory and a [`Files`] rooted in it.
///
/// `root` is fixed at creation; it does not follow `files.chdir`.
pub struct Scratch {
    pub dir: TempDir,
    pub files: Files,
    root: PathBuf,
}

impl Scratch {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = dir.path().canonicalize().unwrap();
        let files = Files::new(LocalFs::with_working_dir(root.to_string_lossy()));
        Self { dir, files, root }
    }

    pub fn root(&self) -> String {
        self.root.to_string_lossy().into_owned()
    }

    pub fn child(&self, name: &str) -> PathBuf {
        Path::new(&self.root).join(name)
    }
}
