//! Tests for `lockbox tx`.

use crate::support::*;

#[test]
fn test_tx_add_and_list() {
    let t = Test::new();

    let output = t.tx_add("income", "1200.50", "salary");
    assert_success(&output);
    assert_stdout_contains(&output, "INCOME");
    assert_stdout_contains(&output, "$1200.50");

    assert_success(&t.tx_add("expense", "42", "groceries"));

    let output = t.tx_list_json(&[]);
    assert_success(&output);
    let json = stdout_json(&output);
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["type"], "income");
    assert_eq!(entries[0]["amount"], 1200.5);
    assert_eq!(entries[1]["type"], "expense");
    assert_eq!(entries[1]["category"], "groceries");
}

#[test]
fn test_tx_list_filters() {
    let t = Test::new();
    assert_success(&t.tx_add("income", "100", "salary"));
    assert_success(&t.tx_add("expense", "20", "Food"));
    assert_success(&t.tx_add("expense", "5", "transport"));

    let output = t.tx_list_json(&["--kind", "expense"]);
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 2);

    let output = t.tx_list_json(&["--category", "food"]);
    let json = stdout_json(&output);
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["category"], "Food");

    let output = t.tx_list_json(&["--days", "7"]);
    assert_eq!(stdout_json(&output).as_array().unwrap().len(), 3);

    let output = t.tx_list_json(&["--kind", "income", "--category", "food"]);
    assert_eq!(stdout_json(&output), serde_json::json!([]));
}

#[test]
fn test_tx_list_table_shows_totals() {
    let t = Test::new();
    assert_success(&t.tx_add("income", "100", "salary"));
    assert_success(&t.tx_add("expense", "30.25", "food"));

    let output = t.cmd().args(["tx", "list"]).output().unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "Transactions");
    assert_stdout_contains(&output, "$100.00");
    assert_stdout_contains(&output, "$30.25");
    assert_stdout_contains(&output, "$69.75");
}

#[test]
fn test_tx_description() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["tx", "add", "expense", "12", "food", "--description", "lunch"])
        .output()
        .unwrap();
    assert_success(&output);

    let output = t.tx_list_json(&[]);
    assert_eq!(stdout_json(&output)[0]["description"], "lunch");
}

#[test]
fn test_tx_rejects_bad_amounts() {
    let t = Test::new();

    for amount in ["0", "-5", "abc"] {
        let output = t.tx_add("expense", amount, "food");
        assert_failure(&output);
    }
    assert!(!t.ledger_path().exists());
}

#[test]
fn test_tx_rejects_unknown_kind() {
    let t = Test::new();

    let output = t.tx_add("refund", "10", "food");

    assert_failure(&output);
    assert!(!t.ledger_path().exists());
}

#[test]
fn test_ledger_and_vault_are_separate_files() {
    let t = Test::new();
    assert_success(&t.tx_add("income", "10", "gift"));

    assert!(t.ledger_path().exists());
    assert!(!t.vault_path().exists());
}
