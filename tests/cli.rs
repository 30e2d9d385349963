//! End-to-end CLI tests
//!
//! Each test runs the binary against its own temporary data directory via
//! the SPENDLOG_DATA_DIR override.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn empty_store_lists_nothing() {
    let dir = TempDir::new().unwrap();
    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn add_then_list_then_delete() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Lunch", "150.00", "--category", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded"));

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stdout(predicate::str::contains("🍔 Food"));

    spendlog(&dir)
        .args(["delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: Lunch"));

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses recorded yet."));
}

#[test]
fn delete_cancel_leaves_store_untouched() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Lunch", "150.00", "--category", "🍔 Food"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["delete", "c"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deletion cancelled."));

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"));
}

#[test]
fn delete_out_of_bounds_fails() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Lunch", "150.00", "--category", "1"])
        .assert()
        .success();

    spendlog(&dir)
        .args(["delete", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid selection"));
}

#[test]
fn add_rejects_bad_input() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Lunch", "abc", "--category", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));

    spendlog(&dir)
        .args(["add", "Lunch", "150.00", "--category", "Nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn budget_prints_allocation() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["budget", "--income", "5000", "--savings-goal", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("💰 Savings"))
        .stdout(predicate::str::contains("₹800.00"));
}

#[test]
fn summary_reports_current_month_spending() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Lunch", "150.00", "--category", "1"])
        .assert()
        .success();
    spendlog(&dir)
        .args(["savings-use", "300", "Car Repair"])
        .assert()
        .success()
        .stdout(predicate::str::contains("used from savings"));

    // Records were just created, so the default (current-month) period
    // includes them and the daily limit applies.
    spendlog(&dir)
        .args(["summary", "--income", "5000", "--savings-goal", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Summary"))
        .stdout(predicate::str::contains("Total Spent:  ₹150.00"))
        .stdout(predicate::str::contains("Adjusted Savings Goal: ₹700.00"))
        .stdout(predicate::str::contains("Daily Spending Limit"));
}

#[test]
fn summary_for_empty_period_signals_no_data() {
    let dir = TempDir::new().unwrap();

    spendlog(&dir)
        .args(["add", "Lunch", "150.00", "--category", "1"])
        .assert()
        .success();

    spendlog(&dir)
        .args([
            "summary",
            "--income",
            "5000",
            "--month",
            "1",
            "--year",
            "1999",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No expenses found"));
}

#[test]
fn malformed_lines_warn_but_do_not_fail() {
    let dir = TempDir::new().unwrap();

    // Initialize the data directory, then corrupt the store by hand
    spendlog(&dir)
        .args(["add", "Lunch", "150.00", "--category", "1"])
        .assert()
        .success();

    let store_path = dir.path().join("data").join("expenses.csv");
    let mut content = std::fs::read_to_string(&store_path).unwrap();
    content.push_str("Broken,42\n");
    std::fs::write(&store_path, content).unwrap();

    spendlog(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lunch"))
        .stderr(predicate::str::contains("too few fields"));
}
