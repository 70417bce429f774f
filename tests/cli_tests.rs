use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;

// Helper function to set up a test Command instance pointed at `api_url`
fn set_up_command(api_url: &str) -> Command {
    let mut cmd = Command::cargo_bin("days").unwrap();
    cmd.env_clear()
        .env("DAYS_API_URL", api_url)
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_cli_fields() {
    let mut cmd = set_up_command("http://127.0.0.1:9");

    cmd.arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("POSITION_LON\n"))
        .stdout(predicate::str::contains("WORKING\n"))
        .stdout(predicate::str::ends_with("SLEEP_TXT\n"));
}

#[test]
fn test_cli_get_prints_entry() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/entries/2025-06-01")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"date":"2025-06-01","timestamp":"2025-06-01T20:00:00Z","fields":{"MOOD":"good"}}"#)
        .create();

    set_up_command(&server.url())
        .args(["get", "20250601"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"date\": \"2025-06-01\""))
        .stdout(predicate::str::contains("\"MOOD\": \"good\""));

    mock.assert();
}

#[test]
fn test_cli_get_missing_entry_succeeds() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/entries/2025-06-02")
        .with_status(404)
        .create();

    set_up_command(&server.url())
        .args(["get", "2025-06-02"])
        .assert()
        .success()
        .stdout("No entry for 2025-06-02\n");
}

#[test]
fn test_cli_get_backend_error_fails() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/entries/2025-06-02")
        .with_status(500)
        .create();

    set_up_command(&server.url())
        .args(["get", "2025-06-02"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to fetch entry"));
}

#[test]
fn test_cli_invalid_date_fails_without_request() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", mockito::Matcher::Any)
        .expect(0)
        .create();

    set_up_command(&server.url())
        .args(["get", "June 1st"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    mock.assert();
}

#[test]
fn test_cli_save_sends_fields() {
    let mut server = Server::new();
    let mock = server
        .mock("POST", "/api/entries/2025-06-01")
        .match_body(mockito::Matcher::PartialJsonString(
            r#"{"fields":{"RATING":"4","SLEEP_TXT":"woke at 3"}}"#.to_string(),
        ))
        .with_status(200)
        .with_body(r#"{"date":"2025-06-01","timestamp":"2025-06-01T20:00:00Z","fields":{"RATING":"4","SLEEP_TXT":"woke at 3"}}"#)
        .create();

    set_up_command(&server.url())
        .args(["save", "2025-06-01", "-f", "RATING=4", "--field", "sleep_txt=woke at 3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-06-01T20:00:00Z"));

    mock.assert();
}

#[test]
fn test_cli_save_unknown_field_fails() {
    set_up_command("http://127.0.0.1:9")
        .args(["save", "2025-06-01", "-f", "SNACK=chips"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("SNACK"));
}

#[test]
fn test_cli_delete() {
    let mut server = Server::new();
    server
        .mock("DELETE", "/api/entries/2025-06-01")
        .with_status(204)
        .create();

    set_up_command(&server.url())
        .args(["delete", "2025-06-01"])
        .assert()
        .success()
        .stdout("Deleted entry for 2025-06-01\n");
}

#[test]
fn test_cli_month() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/entries/month/2025/6")
        .with_status(200)
        .with_body(r#"["2025-06-01","2025-06-14"]"#)
        .create();

    set_up_command(&server.url())
        .args(["month", "2025", "6"])
        .assert()
        .success()
        .stdout("2025-06-01\n2025-06-14\n");
}

#[test]
fn test_cli_summary() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/entries/month/2025/6/summary")
        .with_status(200)
        .with_body(r#"[{"date":"2025-06-01","working":"home"}]"#)
        .create();

    set_up_command(&server.url())
        .args(["summary", "2025", "6"])
        .assert()
        .success()
        .stdout("2025-06-01\thome\n");
}

#[test]
fn test_cli_api_url_flag_overrides_environment() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/entries/month/2025/1")
        .with_status(200)
        .with_body("[]")
        .create();

    let url = server.url();
    set_up_command("http://127.0.0.1:9")
        .args(["month", "2025", "1", "--api-url", url.as_str()])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_cli_api_url_flag_replaces_invalid_environment_url() {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/api/entries/month/2025/1")
        .with_status(200)
        .with_body(r#"["2025-01-03"]"#)
        .create();

    let url = server.url();
    set_up_command("journal.local")
        .args(["month", "2025", "1", "--api-url", url.as_str()])
        .assert()
        .success()
        .stdout("2025-01-03\n");

    mock.assert();
}

#[test]
fn test_cli_log_format_flag_replaces_invalid_environment_format() {
    let mut server = Server::new();
    server
        .mock("GET", "/api/entries/month/2025/1")
        .with_status(200)
        .with_body("[]")
        .create();

    set_up_command(&server.url())
        .env("DAYS_LOG_FORMAT", "xml")
        .args(["month", "2025", "1", "--log-format", "json"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn test_cli_invalid_environment_format_without_flag_fails() {
    set_up_command("http://127.0.0.1:9")
        .env("DAYS_LOG_FORMAT", "xml")
        .arg("fields")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown log format 'xml'"));
}

#[test]
fn test_cli_rejects_invalid_api_url() {
    set_up_command("journal.local")
        .arg("fields")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_cli_json_logs_go_to_stderr() {
    let mut server = Server::new();
    server
        .mock("DELETE", "/api/entries/2025-06-01")
        .with_status(204)
        .create();

    set_up_command(&server.url())
        .env("RUST_LOG", "info")
        .args(["delete", "2025-06-01", "--log-format", "json"])
        .assert()
        .success()
        .stdout("Deleted entry for 2025-06-01\n")
        .stderr(predicate::str::contains("\"correlation_id\""))
        .stderr(predicate::str::is_match(r#""timestamp":"\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}"#).unwrap())
        .stderr(predicate::str::contains("Deleted entry 2025-06-01"));
}
