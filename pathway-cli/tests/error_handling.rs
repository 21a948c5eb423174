//! Exit code behavior.
//!
//! - 0: success
//! - 1: semantic failure
//! - 2: usage error reported by clap
//! - 4: invalid arguments
//! - 5: I/O error
//! - 7: configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command_bare()
        .args(["normal", "a/b"])
        .assert()
        .code(0);
}

#[test]
fn test_missing_path_is_semantic_failure() {
    let env = TestEnv::new();
    env.command()
        .args(["stat", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("no such path"));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let env = TestEnv::new();
    env.command_bare().arg("frobnicate").assert().code(2);
}

#[test]
fn test_invalid_mode_is_invalid_argument() {
    let env = TestEnv::new();
    env.command()
        .args(["cat", "f", "--mode", "q"])
        .assert()
        .code(4)
        .stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn test_unknown_charset_is_invalid_argument() {
    let env = TestEnv::new();
    env.write_file("f", "x");
    env.command()
        .args(["cat", "f", "--charset", "klingon"])
        .assert()
        .code(4);
}

#[test]
fn test_missing_file_is_io_error() {
    let env = TestEnv::new();
    env.command().args(["cat", "nothing"]).assert().code(5);
}

#[test]
fn test_unknown_config_key_is_configuration_error() {
    let env = TestEnv::new();
    env.write_file("pathway.yaml", "open:\n  sparse: true\n");
    env.command()
        .args(["ls"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_invalid_env_value_is_configuration_error() {
    let env = TestEnv::new();
    env.command()
        .env("PATHWAY_DEFAULT_MODE", "rz")
        .args(["ls"])
        .assert()
        .code(7);
}
