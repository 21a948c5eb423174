//! Integration tests for the commands that operate on files.

#![cfg(unix)]

mod common;

use std::fs;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_write_then_cat() {
    let env = TestEnv::new();
    env.command()
        .args(["write", "notes/today.md", "# today"])
        .assert()
        .failure()
        .code(5);

    env.command().args(["mkdir", "notes"]).assert().success();
    env.command()
        .args(["write", "notes/today.md", "# today"])
        .assert()
        .success();
    assert_eq!(
        fs::read_to_string(env.child("notes/today.md")).unwrap(),
        "# today"
    );

    env.command()
        .args(["cat", "notes/today.md"])
        .assert()
        .success()
        .stdout("# today");
}

#[test]
fn test_write_append_and_exclusive() {
    let env = TestEnv::new();
    env.command().args(["write", "log.txt", "one\n"]).assert().success();
    env.command()
        .args(["write", "log.txt", "two\n", "--append"])
        .assert()
        .success();
    assert_eq!(fs::read_to_string(env.child("log.txt")).unwrap(), "one\ntwo\n");

    env.command()
        .args(["write", "log.txt", "three\n", "--exclusive"])
        .assert()
        .failure()
        .code(5);
    assert_eq!(fs::read_to_string(env.child("log.txt")).unwrap(), "one\ntwo\n");
}

#[test]
fn test_cat_binary_and_charset() {
    let env = TestEnv::new();
    fs::write(env.child("menu.txt"), [b'c', b'r', 0xe8, b'm', b'e']).unwrap();

    env.command()
        .args(["cat", "menu.txt", "--charset", "latin1"])
        .assert()
        .success()
        .stdout("crème");

    env.command()
        .args(["cat", "menu.txt", "--binary"])
        .assert()
        .success()
        .stdout(predicate::eq(&[b'c', b'r', 0xe8, b'm', b'e'][..]));

    // not valid UTF-8
    env.command().args(["cat", "menu.txt"]).assert().failure();
}

#[test]
fn test_cat_rejects_write_modes() {
    let env = TestEnv::new();
    env.write_file("f.txt", "data");

    for mode in ["w", "a", "r+"] {
        env.command()
            .args(["cat", "f.txt", "--mode", mode])
            .assert()
            .failure()
            .code(4);
    }
    assert_eq!(fs::read_to_string(env.child("f.txt")).unwrap(), "data");

    env.command()
        .args(["cat", "f.txt", "--mode", "rb"])
        .assert()
        .success()
        .stdout("data");
}

#[test]
fn test_ls_sorted() {
    let env = TestEnv::new();
    env.write_file("dir/b.txt", "");
    env.write_file("dir/a.txt", "");
    env.write_file("dir/c/inner.txt", "");

    env.command()
        .args(["ls", "dir"])
        .assert()
        .success()
        .stdout("a.txt\nb.txt\nc\n");

    let output = env
        .command()
        .args(["ls", "dir", "--format", "json"])
        .output()
        .unwrap();
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(names, vec!["a.txt", "b.txt", "c"]);
}

#[test]
fn test_mkdir_parents() {
    let env = TestEnv::new();
    env.command().args(["mkdir", "a/b/c"]).assert().failure();
    env.command()
        .args(["mkdir", "-p", "a/b/c"])
        .assert()
        .success();
    assert!(env.child("a/b/c").is_dir());
}

#[test]
fn test_mv_and_cp() {
    let env = TestEnv::new();
    env.write_file("src.txt", "payload");

    env.command()
        .args(["--verbose", "cp", "src.txt", "copy.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("copied 7 bytes"));
    env.command()
        .args(["mv", "src.txt", "moved.txt"])
        .assert()
        .success();

    assert!(!env.child("src.txt").exists());
    assert_eq!(fs::read_to_string(env.child("moved.txt")).unwrap(), "payload");
    assert_eq!(fs::read_to_string(env.child("copy.txt")).unwrap(), "payload");
}

#[test]
fn test_rm_variants() {
    let env = TestEnv::new();
    env.write_file("tree/leaf.txt", "x");
    env.write_file("single.txt", "x");
    fs::create_dir(env.child("empty")).unwrap();

    env.command().args(["rm", "single.txt"]).assert().success();
    env.command()
        .args(["rm", "single.txt"])
        .assert()
        .failure()
        .code(5);

    env.command().args(["rm", "-d", "empty"]).assert().success();
    env.command().args(["rm", "-d", "tree"]).assert().failure();
    env.command().args(["rm", "-r", "tree"]).assert().success();

    assert!(!env.child("single.txt").exists());
    assert!(!env.child("empty").exists());
    assert!(!env.child("tree").exists());
}

#[test]
fn test_stat() {
    let env = TestEnv::new();
    env.write_file("m.txt", "12345");
    let root = env.path().display().to_string();

    env.command()
        .args(["stat", "m.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("path:     {root}/m.txt")))
        .stdout(predicate::str::contains("kind:     file"))
        .stdout(predicate::str::contains("size:     5"));

    let output = env
        .command()
        .args(["stat", ".", "--format", "json"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["kind"], "directory");
    assert_eq!(report["readable"], true);
}

#[test]
fn test_config_defaults_apply() {
    let env = TestEnv::new();
    env.write_file("pathway.yaml", "charset: latin1\n");

    env.command().args(["write", "out.txt", "é"]).assert().success();
    assert_eq!(fs::read(env.child("out.txt")).unwrap(), vec![0xe9]);
    env.command()
        .args(["cat", "out.txt"])
        .assert()
        .success()
        .stdout("é");
}

#[test]
fn test_cwd_from_environment() {
    let env = TestEnv::new();
    env.write_file("from-env.txt", "hi");

    env.command_bare()
        .env("PATHWAY_WORKING_DIR", env.path())
        .args(["cat", "from-env.txt"])
        .assert()
        .success()
        .stdout("hi");
}

#[test]
fn test_log_mode_from_config() {
    let env = TestEnv::new();
    env.write_file("pathway.yaml", "log_mode: verbose\n");
    env.write_file("f.txt", "data");

    env.command()
        .args(["cat", "f.txt"])
        .assert()
        .success()
        .stdout("data")
        .stderr(predicate::str::contains("DEBUG: open"));

    env.command()
        .args(["--quiet", "cat", "f.txt"])
        .assert()
        .success()
        .stderr(predicate::str::contains("DEBUG").not());
}

#[test]
fn test_normal_log_mode_is_silent() {
    let env = TestEnv::new();
    env.write_file("f.txt", "data");

    env.command()
        .args(["cat", "f.txt"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
