//! Tests for `lockbox completions`.

use predicates::prelude::*;

use crate::support::*;

#[test]
fn test_completions_for_every_shell() {
    let t = Test::new();

    for shell in ["bash", "zsh", "fish", "power-shell"] {
        t.bare_cmd()
            .args(["completions", shell])
            .assert()
            .success()
            .stdout(predicate::str::contains("lockbox"));
    }
}

#[test]
fn test_completions_ignore_broken_config() {
    let t = Test::new();
    std::fs::write(t.config_path(), "not = [valid").unwrap();

    t.bare_cmd()
        .args(["completions", "bash"])
        .assert()
        .success();
}

#[test]
fn test_unknown_shell_is_rejected() {
    let t = Test::new();

    t.bare_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}
