use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn eventdesk(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eventdesk").expect("bin");
    cmd.env("EVENTDESK_DATA_DIR", dir.path())
        .env_remove("EVENTDESK_LOG");
    cmd
}

fn demo_dir() -> TempDir {
    let dir = TempDir::new().expect("tempdir");
    eventdesk(&dir)
        .args(["init", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete!"));
    dir
}

#[test]
fn init_creates_data_files() {
    let dir = demo_dir();

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data/events.json").exists());
    assert!(dir.path().join("data/tasks.json").exists());
    assert!(dir.path().join("data/expenses.json").exists());
}

#[test]
fn event_list_shows_demo_events() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["event", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Annual Tech Conference"))
        .stdout(predicate::str::contains("Holiday Company Party"));
}

#[test]
fn event_search_filters_by_status() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["event", "list", "--status", "cancelled"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Team Offsite"))
        .stdout(predicate::str::contains("Annual Tech Conference").not());
}

#[test]
fn dashboard_lists_upcoming_events() {
    let dir = demo_dir();

    eventdesk(&dir)
        .arg("dashboard")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Events:"))
        .stdout(predicate::str::contains("Product Launch Event"))
        .stdout(predicate::str::contains("Team Offsite").not());
}

#[test]
fn event_add_then_show() {
    let dir = TempDir::new().expect("tempdir");

    eventdesk(&dir)
        .args([
            "event",
            "add",
            "Board Retreat",
            "--date",
            "2030-05-01",
            "--budget",
            "2,500",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID:     evt-1"))
        .stdout(predicate::str::contains("Status: Planning"));

    eventdesk(&dir)
        .args(["event", "show", "evt-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Board Retreat"))
        .stdout(predicate::str::contains("$2,500.00"));
}

#[test]
fn event_add_rejects_blank_title() {
    let dir = TempDir::new().expect("tempdir");

    eventdesk(&dir)
        .args(["event", "add", "   ", "--date", "2030-05-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn expense_add_requires_category() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["expense", "add", "Badges", "120", "--event", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Category is required"));
}

#[test]
fn expense_add_rejects_non_numeric_amount() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args([
            "expense", "add", "Badges", "lots", "--event", "2", "--category", "Other",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));
}

#[test]
fn expense_add_rejects_malformed_amounts() {
    let dir = demo_dir();

    for amount in ["1.€", "10.-5"] {
        eventdesk(&dir)
            .args([
                "expense", "add", "Flowers", amount, "--event", "2", "--category", "Other",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Amount must be greater than 0"));
    }
}

#[test]
fn expense_edit_reports_bad_amount_like_add() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["expense", "edit", "1", "--amount", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount must be greater than 0"));
}

#[test]
fn init_demo_twice_keeps_existing_data() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["expense", "add", "Badges", "120", "--event", "2", "--category", "Other"])
        .assert()
        .success();

    eventdesk(&dir)
        .args(["init", "--demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo collection was not written"));

    eventdesk(&dir)
        .args(["expense", "list", "--event", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Badges"));
}

#[test]
fn expense_add_updates_budget() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args([
            "expense", "add", "Badges", "120", "--event", "2", "--category", "other",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Other"));

    // 4,000.00 + 2,150.50 + 120.00 against a 15,000.00 budget
    eventdesk(&dir)
        .args(["event", "budget", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$6,270.50"));
}

#[test]
fn task_toggle_flips_completion() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["task", "toggle", "task-3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[x]"));

    eventdesk(&dir)
        .args(["task", "toggle", "task-3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[ ]"));
}

#[test]
fn delete_without_force_keeps_event() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["event", "delete", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));

    eventdesk(&dir)
        .args(["event", "show", "5"])
        .assert()
        .success();

    eventdesk(&dir)
        .args(["event", "delete", "5", "--force"])
        .assert()
        .success();

    eventdesk(&dir)
        .args(["event", "show", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event not found"));
}

#[test]
fn mutations_are_audited() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["task", "toggle", "4"])
        .assert()
        .success();

    eventdesk(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE Task task-4"));
}

#[test]
fn export_csv_to_stdout() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["export", "event", "1", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ID,Date,Event,Description,Category,Amount,Recorded At",
        ))
        .stdout(predicate::str::contains("TOTAL"));
}

#[test]
fn export_json_file_verifies() {
    let dir = demo_dir();
    let out = dir.path().join("report.json");

    eventdesk(&dir)
        .args(["export", "event", "1", "--format", "json", "--output"])
        .arg(&out)
        .assert()
        .success();

    let contents = fs::read_to_string(&out).expect("report");
    assert!(contents.contains("\"schema_version\": \"1.0.0\""));

    eventdesk(&dir)
        .args(["export", "verify"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report is valid"))
        .stdout(predicate::str::contains("Expenses: 3"));
}

#[test]
fn unknown_event_is_not_found() {
    let dir = demo_dir();

    eventdesk(&dir)
        .args(["export", "event", "999999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event not found: evt-999999"));
}
