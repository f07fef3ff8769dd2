//! End-to-end tests for the `compound-objects completions` command.

#[allow(dead_code)]
mod common;
#[allow(unused_imports)]
use common::prelude::*;

#[test]
fn test_completions_help() {
    let mut cmd = cargo_bin_cmd!("compound-objects");
    cmd.arg("completions")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Generate shell completion scripts"))
        .stdout(predicate::str::contains("bash"))
        .stdout(predicate::str::contains("zsh"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = cargo_bin_cmd!("compound-objects");
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -F _compound__objects"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("scenarios"));
}

#[test]
fn test_completions_zsh() {
    let mut cmd = cargo_bin_cmd!("compound-objects");
    cmd.arg("completions")
        .arg("zsh")
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef compound-objects"));
}

#[test]
fn test_completions_invalid_shell() {
    let mut cmd = cargo_bin_cmd!("compound-objects");
    cmd.arg("completions")
        .arg("tcsh")
        .assert()
        .failure()
        .code(2);
}
