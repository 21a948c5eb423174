//! Integration tests for the path algebra and mode commands.
//!
//! These commands never touch the filesystem except `absolute`,
//! `relative` and `canonical`, which resolve against `--cwd`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_resolve_chain() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["resolve", "/usr", "local", "../lib"])
        .assert()
        .success()
        .stdout("/usr/lib\n");

    env.command_bare()
        .args(["resolve", "/a", "b", "/c", "d"])
        .assert()
        .success()
        .stdout("/c/d\n");
}

#[test]
fn test_resolve_requires_a_fragment() {
    let env = TestEnv::new();
    env.command_bare().arg("resolve").assert().failure().code(2);
}

#[test]
fn test_join_and_normal() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["join", "a", "/b", "c"])
        .assert()
        .success()
        .stdout("a/b/c\n");

    env.command_bare()
        .args(["normal", "/a/./b/../c"])
        .assert()
        .success()
        .stdout("/a/c\n");
}

#[test]
fn test_split_formats() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["split", "a/b/c"])
        .assert()
        .success()
        .stdout("a\nb\nc\n");

    let output = env
        .command_bare()
        .args(["split", "/a", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let segments: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(segments, vec!["", "a"]);
}

#[test]
fn test_name_components() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["basename", "src/lib.rs", "--ext", ".rs"])
        .assert()
        .success()
        .stdout("lib\n");

    env.command_bare()
        .args(["dirname", "/usr/lib/libc.so"])
        .assert()
        .success()
        .stdout("/usr/lib\n");

    env.command_bare()
        .args(["extension", "archive.tar.gz"])
        .assert()
        .success()
        .stdout(".gz\n");

    env.command_bare()
        .args(["extension", ".bashrc"])
        .assert()
        .success()
        .stdout("\n");
}

#[cfg(unix)]
#[test]
fn test_absolute_and_relative_use_cwd() {
    let env = TestEnv::new();
    let root = env.path().display().to_string();

    env.command()
        .args(["absolute", "src/../docs"])
        .assert()
        .success()
        .stdout(format!("{root}/docs\n"));

    env.command()
        .args(["relative", "a/b", "a/c/d"])
        .assert()
        .success()
        .stdout("../c/d\n");
}

#[cfg(unix)]
#[test]
fn test_canonical_requires_existing_path() {
    let env = TestEnv::new();
    env.write_file("real.txt", "x");
    let root = env.path().display().to_string();

    env.command()
        .args(["canonical", "./real.txt"])
        .assert()
        .success()
        .stdout(format!("{root}/real.txt\n"));

    env.command()
        .args(["canonical", "ghost.txt"])
        .assert()
        .failure()
        .code(5);
}

#[test]
fn test_mode_human_output() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["mode", "wb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intent:    wb"))
        .stdout(predicate::str::contains("stream:    binary"));

    env.command_bare()
        .args(["mode", "b", "-o", "charset=latin1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("effective: rb (latin1)"));
}

#[test]
fn test_mode_json_output() {
    let env = TestEnv::new();
    let output = env
        .command_bare()
        .args(["mode", "x", "-o", "charset=latin1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["intent"]["exclusive"], true);
    assert_eq!(report["intent"]["read"], false);
    assert_eq!(report["effective"]["read"], true);
    assert_eq!(report["stream"], "text (iso-8859-1)");
    assert!(report["error"].is_null());
}

#[test]
fn test_mode_update_reports_unsupported_stream() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["mode", "a+"])
        .assert()
        .success()
        .stdout(predicate::str::contains("intent:    a+"))
        .stdout(predicate::str::contains("update"));
}

#[test]
fn test_mode_rejects_unknown_flag() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["mode", "rz"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Error:"));

    env.command_bare()
        .args(["mode", "r", "-o", "colour=red"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_completions_bash() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pathway"));
}
