//! Integration tests for configuration loading and its effect on `Files`.
//!
//! Tests that modify environment variables are marked with `#[serial]`.

#![cfg(unix)]

mod common;

use std::env;
use std::fs;
use std::path::Path;

use common::Scratch;
use pathway::config::{Config, ConfigBuilder};
use pathway::fs::{Content, Files, LocalFs};
use pathway::Error;
use serial_test::serial;
use tempfile::TempDir;

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(v) => env::set_var(self.key, v),
            None => env::remove_var(self.key),
        }
    }
}

fn build(project: &Path, user: &Path) -> pathway::Result<Config> {
    ConfigBuilder::new()
        .with_working_dir(project)
        .with_user_dir(user)
        .build()
}

#[test]
#[serial]
fn test_project_config_drives_files_defaults() {
    let scratch = Scratch::new();
    let user = TempDir::new().unwrap();
    fs::write(
        scratch.child("pathway.yaml"),
        "charset: latin1\nopen:\n  binary: false\n",
    )
    .unwrap();

    let config = build(Path::new(&scratch.root()), user.path()).unwrap();
    let files = scratch.files.clone().with_defaults(config.open_defaults());

    files.write("out.txt", "é", None).unwrap();
    assert_eq!(fs::read(scratch.child("out.txt")).unwrap(), vec![0xe9]);
    assert_eq!(
        files.read("out.txt", None).unwrap(),
        Content::Text("é".to_string())
    );
}

#[test]
#[serial]
fn test_binary_default_from_user_config() {
    let scratch = Scratch::new();
    let user = TempDir::new().unwrap();
    fs::write(user.path().join("config.yaml"), "open:\n  binary: true\n").unwrap();

    let config = build(Path::new(&scratch.root()), user.path()).unwrap();
    let files = scratch.files.clone().with_defaults(config.open_defaults());
    files.write("b", "xyz", None).unwrap();
    assert_eq!(
        files.read("b", None).unwrap(),
        Content::Bytes(b"xyz".to_vec())
    );
}

#[test]
#[serial]
fn test_environment_overrides_project_file() {
    let scratch = Scratch::new();
    let user = TempDir::new().unwrap();
    fs::write(scratch.child("pathway.yaml"), "default_mode: r\n").unwrap();

    let _mode = EnvGuard::set("PATHWAY_DEFAULT_MODE", "rb");
    let _dir = EnvGuard::set("PATHWAY_WORKING_DIR", "/srv/data");
    let config = build(Path::new(&scratch.root()), user.path()).unwrap();

    assert_eq!(config.default_mode.as_deref(), Some("rb"));
    assert_eq!(config.working_dir.as_deref(), Some("/srv/data"));
    let files = Files::new(LocalFs::with_working_dir(config.working_dir.unwrap()));
    assert_eq!(files.absolute("x").unwrap(), "/srv/data/x");
}

#[test]
#[serial]
fn test_invalid_environment_value_rejected() {
    let scratch = Scratch::new();
    let user = TempDir::new().unwrap();
    let _charset = EnvGuard::set("PATHWAY_CHARSET", "klingon");

    match build(Path::new(&scratch.root()), user.path()) {
        Err(Error::Validation { field, .. }) => assert_eq!(field, "charset"),
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_unknown_key_in_file_rejected() {
    let scratch = Scratch::new();
    let user = TempDir::new().unwrap();
    fs::write(scratch.child("pathway.yaml"), "open:\n  sparse: true\n").unwrap();

    assert!(matches!(
        build(Path::new(&scratch.root()), user.path()),
        Err(Error::Configuration(_))
    ));
}
