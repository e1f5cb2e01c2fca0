//! Integration tests: run the binary against fixtures.

use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    let log_file = std::env::temp_dir().join("searchexport_cli_test").join("cli.log");
    Command::new(env!("CARGO_BIN_EXE_searchexport"))
        .args(args)
        .env("SEARCHEXPORT_CONFIG", "/nonexistent/searchexport/config.toml")
        .env("SEARCHEXPORT_LOG_FILE", log_file)
        .output()
        .expect("Failed to execute binary")
}

#[test]
fn binary_prints_version() {
    let output = run(&["--version"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn exports_all_messages_for_search_without_widgets() {
    let output = run(&["tests/fixtures/search_no_widgets.json", "--fields", "message"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let requests: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(requests[0]["kind"], "all_messages");
    assert_eq!(requests[0]["payload"]["fields_in_order"], serde_json::json!(["message"]));
    assert_eq!(requests[0]["payload"]["streams"], serde_json::json!(["s1"]));
}

#[test]
fn exports_selected_table_with_sort_overrides() {
    let output = run(&[
        "tests/fixtures/search_two_tables.json",
        "--widget",
        "w1",
        "--sort",
        "source",
        "--direction",
        "asc",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let requests: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(requests[0]["kind"], "search_type");
    assert_eq!(requests[0]["search_type_id"], "st-1");
    assert_eq!(
        requests[0]["payload"]["sort"],
        serde_json::json!([{"field": "source", "direction": "Ascending"}])
    );
}

#[test]
fn dashboard_without_widget_fails() {
    let output = run(&["tests/fixtures/dashboard.json"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "Nothing may be emitted on failure");
}

#[test]
fn fixed_widget_cannot_be_switched_with_widget_flag() {
    let output = run(&[
        "tests/fixtures/dashboard.json",
        "--fixed-widget",
        "w-a",
        "--widget",
        "w-b",
    ]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "Nothing may be emitted on failure");
    assert!(String::from_utf8_lossy(&output.stderr).contains("WidgetSelectionLocked"));
}

#[test]
fn fixed_widget_exports_its_search_type() {
    let output = run(&["tests/fixtures/dashboard.json", "--fixed-widget", "w-a"]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let requests: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(requests[0]["search_id"], "search-dash");
    assert_eq!(requests[0]["search_type_id"], "st-a");
}

#[test]
fn list_shows_tables_and_fields() {
    let output = run(&["tests/fixtures/dashboard.json", "--list"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Export message table search results"));
    assert!(stdout.contains("w-a  Web requests"));
    assert!(stdout.contains("w-b  Message table without title"));
    assert!(stdout.contains("(select one with --widget)"));
    assert!(stdout.contains("timestamp (date)"));
}

#[test]
fn log_file_records_resolved_path() {
    let log_dir = std::env::temp_dir().join("searchexport_cli_log_path_test");
    let log_file = log_dir.join("resolved.log");
    let _ = std::fs::remove_dir_all(&log_dir);

    let output = Command::new(env!("CARGO_BIN_EXE_searchexport"))
        .args(["tests/fixtures/dashboard.json", "--list"])
        .env("SEARCHEXPORT_CONFIG", "/nonexistent/searchexport/config.toml")
        .env("SEARCHEXPORT_LOG_FILE", &log_file)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute binary");
    assert!(output.status.success());

    let log = std::fs::read_to_string(&log_file).expect("log file should exist");
    assert!(log.contains("Logging initialized"), "log was: {log}");
    assert!(log.contains(&log_file.display().to_string()), "log was: {log}");

    let _ = std::fs::remove_dir_all(&log_dir);
}
