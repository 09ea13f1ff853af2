//! End-to-end tests for the `expense` binary
//!
//! Every test runs the binary inside its own temporary working directory,
//! which is where the database, settings and audit log live.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn expense(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("expense").unwrap();
    cmd.current_dir(dir.path());
    cmd
}

fn add(dir: &TempDir, description: &str, amount: &str, category: Option<&str>) {
    let mut cmd = expense(dir);
    cmd.args(["add", "--description", description, "--amount", amount]);
    if let Some(category) = category {
        cmd.args(["--category", category]);
    }
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("Expense added successfully"));
}

#[test]
fn add_reports_new_id() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "--description", "Coffee", "--amount", "3.50"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n");

    expense(&dir)
        .args(["add", "-d", "Bus", "-a", "2", "-c", "transport"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 2)\n");

    assert!(dir.path().join("expense_storage.db").exists());
}

#[test]
fn negative_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "--description", "Refund", "--amount", "-5.00"])
        .assert()
        .success()
        .stdout("Invalid value\n");

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("ID Date Description Amount Category\n");
}

#[test]
fn unparsable_amount_is_a_usage_error() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "--description", "Coffee", "--amount", "lots"])
        .assert()
        .failure();
}

#[test]
fn empty_list_prints_header_only() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("ID Date Description Amount Category\n");
}

#[test]
fn list_shows_rows_and_filters_by_category() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", Some("food"));
    add(&dir, "Bus", "2.00", Some("transport"));
    add(&dir, "Bagel", "4.25", Some("food"));

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Coffee")
                .and(predicate::str::contains("Bus"))
                .and(predicate::str::contains("$4.25")),
        );

    let output = expense(&dir)
        .args(["list", "--category", "food"])
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("1 "));
    assert!(lines[1].contains("Coffee"));
    assert!(lines[2].starts_with("3 "));
    assert!(!stdout.contains("Bus"));

    expense(&dir)
        .args(["list", "--category", "none-such"])
        .assert()
        .success()
        .stdout("ID Date Description Amount Category\n");
}

#[test]
fn update_changes_amount() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", None);

    expense(&dir)
        .args(["update", "--id", "1", "--amount", "5"])
        .assert()
        .success()
        .stdout("Expense updated successfully\n");

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $5.00\n");
}

#[test]
fn missing_id_reports_invalid_id() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["update", "--id", "999", "--amount", "10"])
        .assert()
        .success()
        .stdout("Invalid ID\n");

    expense(&dir)
        .args(["delete", "--id", "999"])
        .assert()
        .success()
        .stdout("Invalid ID\n");
}

#[test]
fn delete_scenario() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", Some("food"));
    add(&dir, "Bus", "2.00", Some("transport"));

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $5.50\n");

    expense(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout("Expense deleted successfully\n");

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $2.00\n");

    expense(&dir)
        .args(["delete", "--id", "1"])
        .assert()
        .success()
        .stdout("Invalid ID\n");
}

#[test]
fn summary_for_month() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["summary", "--month", "3"])
        .assert()
        .success()
        .stdout("Total expenses for March: $0.00\n");

    expense(&dir)
        .args(["summary", "--month", "13"])
        .assert()
        .success()
        .stdout("Invalid month\n");

    expense(&dir)
        .args(["summary", "-m", "march"])
        .assert()
        .success()
        .stdout("Invalid month\n");
}

#[test]
fn export_csv_to_stdout() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Bread, milk", "6.75", Some("food"));

    expense(&dir)
        .args(["export", "-", "--format", "csv"])
        .assert()
        .success()
        .stdout(
            predicate::str::starts_with("ID,Date,Description,Amount,Category\n")
                .and(predicate::str::contains("\"Bread, milk\",6.75,food")),
        );
}

#[test]
fn export_json_to_file() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Coffee", "3.50", None);

    expense(&dir)
        .args(["export", "out.json", "--format", "json", "--pretty"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 expenses to: out.json"));

    let text = std::fs::read_to_string(dir.path().join("out.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["expense_count"], 1);
    assert_eq!(value["expenses"][0]["description"], "Coffee");
}

#[test]
fn history_lists_changes() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout("No history yet.\n");

    add(&dir, "Coffee", "3.50", None);
    expense(&dir)
        .args(["update", "--id", "1", "--amount", "5"])
        .assert()
        .success();

    expense(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("$3.50 -> $5.00"));
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("expense_storage.db")
                .and(predicate::str::contains("Stored expenses: 0")),
        );
}

#[test]
fn settings_change_listing() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings written to"));

    let settings_path = dir.path().join("expense_config.json");
    let text = std::fs::read_to_string(&settings_path).unwrap();
    let mut settings: serde_json::Value = serde_json::from_str(&text).unwrap();
    settings["currency_symbol"] = "€".into();
    settings["audit_enabled"] = false.into();
    std::fs::write(&settings_path, settings.to_string()).unwrap();

    add(&dir, "Coffee", "3.50", None);

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("€3.50"));

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: €3.50\n");

    assert!(!dir.path().join("expense_audit.log").exists());
}

#[test]
fn sub_cent_negative_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["add", "-d", "Refund", "-a", "-0.001"])
        .assert()
        .success()
        .stdout("Invalid value\n");

    expense(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout("ID Date Description Amount Category\n");
}

#[test]
fn extra_decimals_round_to_nearest_cent() {
    let dir = TempDir::new().unwrap();
    add(&dir, "Snack", "1.999", None);
    add(&dir, "Gum", "0.994", None);

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $2.99\n");
}

#[test]
fn audit_log_failure_still_reports_success() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join("expense_audit.log")).unwrap();

    expense(&dir)
        .args(["add", "-d", "Coffee", "-a", "3.50"])
        .assert()
        .success()
        .stdout("Expense added successfully (ID: 1)\n")
        .stderr(predicate::str::contains("audit entry was not written"));

    expense(&dir)
        .args(["update", "--id", "1", "--amount", "4"])
        .assert()
        .success()
        .stdout("Expense updated successfully\n");

    expense(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout("Total expenses: $4.00\n");
}

#[test]
fn list_help_mentions_date_format() {
    let dir = TempDir::new().unwrap();

    expense(&dir)
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("date_format"));
}

#[test]
fn fatal_error_is_one_line() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("expense_config.json"), "not json").unwrap();

    let output = expense(&dir)
        .env("RUST_BACKTRACE", "1")
        .env("RUST_LIB_BACKTRACE", "1")
        .arg("list")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("Error: Configuration error"));
    assert_eq!(stderr.lines().count(), 1);
}
