//! End-to-end tests for the socialfin binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's real settings
#[allow(deprecated)]
fn socialfin_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("socialfin").unwrap();
    cmd.env("SOCIALFIN_DATA_DIR", home.path())
        .env_remove("SOCIALFIN_DATA")
        .env_remove("SOCIALFIN_LOG")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_balances_uses_sample_data_by_default() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("Balances - Friends"))
        .stdout(predicate::str::contains("$895.50"))
        .stdout(predicate::str::contains("$120.00"))
        .stdout(predicate::str::contains("1 of 4 settled"));
}

#[test]
fn test_balances_groups_scope() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .args(["balances", "--scope", "groups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Europe Trip"))
        .stdout(predicate::str::contains("Sarah Chen").not());
}

#[test]
fn test_balances_json_output() {
    let home = TempDir::new().unwrap();

    let output = socialfin_cmd(&home)
        .args(["balances", "--scope", "all", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["scope"], "all");
    assert_eq!(value["rows"].as_array().unwrap().len(), 7);
    // friends 775.50 net, groups -200.00 net
    assert_eq!(value["totals"]["net"], 575.5);
}

#[test]
fn test_budget_flags_over_budget_category() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .arg("budget")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Overview"))
        .stdout(predicate::str::contains("Over budget"))
        .stdout(predicate::str::contains("Entertainment is over by $30.00"));
}

#[test]
fn test_budget_zero_limit_import_shows_placeholder() {
    let home = TempDir::new().unwrap();
    let csv_path = home.path().join("budget.csv");
    fs::write(&csv_path, "name,spent,limit\nGifts,25.00,0\n").unwrap();

    socialfin_cmd(&home)
        .args(["budget", "--import-csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("no budget set"))
        .stdout(predicate::str::contains("n/a"));
}

#[test]
fn test_budget_csv_export_to_file() {
    let home = TempDir::new().unwrap();
    let out_path = home.path().join("budget-report.csv");

    socialfin_cmd(&home)
        .args(["budget", "--format", "csv", "--output"])
        .arg(&out_path)
        .assert()
        .success();

    let contents = fs::read_to_string(&out_path).unwrap();
    assert!(contents.starts_with("Category,Spent,Limit,Over Budget,Overage,Progress"));
    assert!(contents.contains("TOTAL,1550.00,1800.00"));
}

#[test]
fn test_budget_import_rejects_bad_row() {
    let home = TempDir::new().unwrap();
    let csv_path = home.path().join("budget.csv");
    fs::write(&csv_path, "name,spent,limit\nFood,abc,100\n").unwrap();

    socialfin_cmd(&home)
        .args(["budget", "--import-csv"])
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 2"));
}

#[test]
fn test_trend_empty_import_shows_placeholder() {
    let home = TempDir::new().unwrap();
    let csv_path = home.path().join("trend.csv");
    fs::write(&csv_path, "label,amount\n").unwrap();

    socialfin_cmd(&home)
        .args(["trend", "--import-csv"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("No data yet"));
}

#[test]
fn test_trend_width_override() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .args(["trend", "--width", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mar      ██████████  $2800.00"))
        .stdout(predicate::str::contains("Peak: $2800.00"));
}

#[test]
fn test_trend_rejects_zero_width() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .args(["trend", "--width", "0"])
        .assert()
        .failure();
}

#[test]
fn test_ask_routes_spending_question() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .args(["ask", "--show-intent", "How much did I spend?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[spending insight]"));
}

#[test]
fn test_ask_falls_back_on_unknown_message() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .args(["ask", "--show-intent", "hello", "there"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[fallback]"));
}

#[test]
fn test_sample_yaml_loads_back_as_data() {
    let home = TempDir::new().unwrap();

    let output = socialfin_cmd(&home)
        .args(["sample", "--format", "yaml"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let yaml = String::from_utf8(output.stdout).unwrap();
    assert!(yaml.starts_with("# SocialFin dataset"));

    let data_path = home.path().join("mine.yaml");
    fs::write(&data_path, yaml).unwrap();

    socialfin_cmd(&home)
        .arg("--data")
        .arg(&data_path)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("$895.50"));
}

#[test]
fn test_custom_dataset_replaces_sample() {
    let home = TempDir::new().unwrap();
    let data_path = home.path().join("data.json");
    fs::write(
        &data_path,
        r#"{"friends": [{"name": "Ana", "amount": -10}]}"#,
    )
    .unwrap();

    socialfin_cmd(&home)
        .args(["balances", "--data"])
        .arg(&data_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana"))
        .stdout(predicate::str::contains("$10.00"))
        .stdout(predicate::str::contains("Sarah Chen").not());
}

#[test]
fn test_missing_dataset_fails() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .args(["balances", "--data", "does-not-exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_init_writes_settings_once() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote settings"));
    assert!(home.path().join("config.json").exists());

    socialfin_cmd(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exist"));
}

#[test]
fn test_config_shows_sample_source() {
    let home = TempDir::new().unwrap();

    socialfin_cmd(&home)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("SocialFin Configuration"))
        .stdout(predicate::str::contains("Chart width:     40"))
        .stdout(predicate::str::contains("Default scope:   friends"));
}

#[test]
fn test_dataset_path_from_environment() {
    let home = TempDir::new().unwrap();
    let data_path = home.path().join("env.yaml");
    fs::write(&data_path, "groups:\n  - name: Ski Cabin\n    amount: -12.5\n").unwrap();

    socialfin_cmd(&home)
        .env("SOCIALFIN_DATA", &data_path)
        .args(["balances", "--scope", "groups"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ski Cabin"))
        .stdout(predicate::str::contains("$12.50"));
}

#[test]
fn test_oversized_import_amount_is_an_error_not_a_crash() {
    let home = TempDir::new().unwrap();
    let csv_path = home.path().join("budget.csv");
    fs::write(&csv_path, "name,spent,limit\nFood,99999999999999999,100\n").unwrap();

    socialfin_cmd(&home)
        .args(["budget", "--import-csv"])
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Row 2"))
        .stderr(predicate::str::contains("panicked").not());
}

#[test]
fn test_negative_trend_import_rejected() {
    let home = TempDir::new().unwrap();
    let csv_path = home.path().join("trend.csv");
    fs::write(&csv_path, "label,amount\nJan,-5\nFeb,-10\n").unwrap();

    socialfin_cmd(&home)
        .args(["trend", "--import-csv"])
        .arg(&csv_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("negative"));
}
