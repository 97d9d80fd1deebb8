//! End-to-end tests for the `board` binary against the built-in demo data.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn board() -> Command {
    Command::cargo_bin("board").unwrap()
}

#[test]
fn list_prints_every_post() {
    board()
        .args(["--mock", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Welcome to Postboard"))
        .stdout(predicate::str::contains("[3] Quiet week"));
}

#[test]
fn list_filters_by_title_case_insensitively() {
    board()
        .args(["--mock", "list", "--query", "WELCOME"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Postboard"))
        .stdout(predicate::str::contains("Quiet week").not());
}

#[test]
fn list_without_matches_prints_empty_state() {
    board()
        .args(["--mock", "list", "--query", "nothing like this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No posts to display."));
}

#[test]
fn show_prints_post_and_comments() {
    board()
        .args(["--mock", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Comments (2):"))
        .stdout(predicate::str::contains("Glad to be here."));
}

#[test]
fn show_without_comments_prints_empty_state() {
    board()
        .args(["--mock", "show", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No comments to display."));
}

#[test]
fn show_missing_post_exits_with_error() {
    board()
        .args(["--mock", "show", "42"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to fetch post details. Please try again later.",
        ));
}

#[test]
fn add_assigns_next_id() {
    board()
        .args(["--mock", "add", "--title", "Hello", "--body", "World"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added post 4"))
        .stdout(predicate::str::contains("[4] Hello"));
}

#[test]
fn add_with_blank_body_exits_with_error() {
    board()
        .args(["--mock", "add", "--title", "Hello", "--body", "   "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Title and body are required."));
}

#[test]
fn unreadable_config_exits_with_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "timeout_ms = \"not a number\"").unwrap();

    board()
        .arg("--config")
        .arg(file.path())
        .args(["--mock", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn unreachable_api_reports_fetch_failure() {
    board()
        .args(["--base-url", "http://127.0.0.1:9", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to fetch posts. Please try again later.",
        ));
}
