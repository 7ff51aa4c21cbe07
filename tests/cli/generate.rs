//! Tests for `lockbox generate`.

use crate::support::*;

#[test]
fn test_generate_default_length() {
    let t = Test::new();

    let output = t.cmd().arg("generate").output().unwrap();

    assert_success(&output);
    assert_eq!(stdout(&output).trim_end().chars().count(), 16);
}

#[test]
fn test_generate_custom_length_without_symbols() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["generate", "--length", "40", "--no-symbols"])
        .output()
        .unwrap();

    assert_success(&output);
    let password = stdout(&output).trim_end().to_string();
    assert_eq!(password.len(), 40);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    assert!(password.chars().any(|c| c.is_ascii_lowercase()));
    assert!(password.chars().any(|c| c.is_ascii_uppercase()));
    assert!(password.chars().any(|c| c.is_ascii_digit()));
}

#[test]
fn test_generate_too_short_fails() {
    let t = Test::new();

    let output = t.cmd().args(["generate", "--length", "3"]).output().unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "too short");
}

#[test]
fn test_generate_needs_no_passphrase() {
    let t = Test::new();

    let output = t.bare_cmd().arg("generate").output().unwrap();

    assert_success(&output);
    assert!(!t.vault_path().exists());
}

#[test]
fn test_generate_uses_config_defaults() {
    let t = Test::new();
    std::fs::write(
        t.config_path(),
        "iterations = 100000\n\n[generator]\nlength = 20\nsymbols = false\n",
    )
    .unwrap();

    let output = t.cmd().arg("generate").output().unwrap();

    assert_success(&output);
    let password = stdout(&output).trim_end().to_string();
    assert_eq!(password.len(), 20);
    assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
}
