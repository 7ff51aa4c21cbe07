//! Error reporting tests.

use base64::engine::general_purpose::URL_SAFE;
use base64::Engine as _;

use crate::support::*;

#[test]
fn test_wrong_passphrase() {
    let t = Test::with_credentials(&[("github", "alice", "s3cret")]);
    let before = std::fs::read(t.vault_path()).unwrap();

    let output = t
        .cmd()
        .env("LOCKBOX_PASSPHRASE", "not the passphrase")
        .arg("list")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
    assert_stderr_contains(&output, "check your passphrase");
    assert_eq!(std::fs::read(t.vault_path()).unwrap(), before);
}

#[test]
fn test_wrong_passphrase_does_not_add() {
    let t = Test::with_credentials(&[("github", "alice", "s3cret")]);
    let before = std::fs::read(t.vault_path()).unwrap();

    let output = t
        .cmd()
        .env("LOCKBOX_PASSPHRASE", "not the passphrase")
        .args(["add", "mail", "bob"])
        .write_stdin("hunter2\n")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_eq!(std::fs::read(t.vault_path()).unwrap(), before);
}

#[test]
fn test_missing_passphrase_non_interactive() {
    let t = Test::new();

    let output = t.bare_cmd().arg("list").output().unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "no passphrase available");
    assert_stderr_contains(&output, "LOCKBOX_PASSPHRASE");
}

#[test]
fn test_empty_passphrase_variable_counts_as_missing() {
    let t = Test::new();

    let output = t
        .bare_cmd()
        .env("LOCKBOX_PASSPHRASE", "")
        .arg("list")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "no passphrase available");
}

#[test]
fn test_corrupt_vault_file() {
    let t = Test::new();
    std::fs::write(t.vault_path(), "this is not json").unwrap();

    let output = t.list();

    assert_failure(&output);
    assert_stderr_contains(&output, "invalid store file");
}

#[test]
fn test_tampered_token() {
    let t = Test::with_credentials(&[("github", "alice", "s3cret")]);

    let raw = std::fs::read_to_string(t.vault_path()).unwrap();
    let mut json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let mut token = URL_SAFE.decode(json["data"].as_str().unwrap()).unwrap();
    let middle = token.len() / 2;
    token[middle] ^= 0x01;
    json["data"] = serde_json::Value::String(URL_SAFE.encode(&token));
    std::fs::write(t.vault_path(), json.to_string()).unwrap();

    let output = t.list();

    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
}

#[test]
fn test_invalid_config_is_reported() {
    let t = Test::new();
    std::fs::write(t.config_path(), "iterations = 10\n").unwrap();

    let output = t.list();

    assert_failure(&output);
    assert_stderr_contains(&output, "iterations");
}

#[test]
fn test_unknown_config_key_is_reported() {
    let t = Test::new();
    std::fs::write(t.config_path(), "iterations = 100000\ncolour = true\n").unwrap();

    let output = t.list();

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse config file");
}
