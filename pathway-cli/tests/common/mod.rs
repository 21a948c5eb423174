//! Shared helpers for CLI integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Isolated scratch directory the binary runs against.
///
/// `HOME` points at a separate directory so a user config on the host
/// never leaks into a test, and the `PATHWAY_*` variables are cleared.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    #[allow(dead_code)]
    home_dir: TempDir,
    /// Canonical path of the scratch directory.
    pub root: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let home_dir = tempfile::tempdir().expect("Failed to create home dir");
        let root = temp_dir
            .path()
            .canonicalize()
            .expect("Failed to canonicalize temp dir");
        Self {
            temp_dir,
            home_dir,
            root,
        }
    }

    /// The binary with a clean environment and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathway").expect("Failed to find pathway binary");
        cmd.env("HOME", self.home_dir.path())
            .env_remove("PATHWAY_WORKING_DIR")
            .env_remove("PATHWAY_CHARSET")
            .env_remove("PATHWAY_DEFAULT_MODE")
            .env_remove("PATHWAY_LOG_MODE");
        cmd
    }

    /// The binary with `--cwd` set to the scratch directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--cwd").arg(&self.root);
        cmd
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    pub fn child(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.child(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }
}
