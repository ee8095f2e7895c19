//! Basic CLI surface tests.
//!
//! Network-free: only the help/version surface is exercised here.

use std::process::Command;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "holiday-clock-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

#[test]
fn test_help_lists_subcommands() {
    let (stdout, _, code) = run_cli(&["--help"]);
    assert_eq!(code, 0, "Help failed");
    assert!(stdout.contains("watch"));
    assert!(stdout.contains("status"));
    assert!(stdout.contains("holidays"));
}

#[test]
fn test_version() {
    let (_, _, code) = run_cli(&["--version"]);
    assert_eq!(code, 0, "Version failed");
}

#[test]
fn test_watch_help_documents_server_flag() {
    let (stdout, _, code) = run_cli(&["watch", "--help"]);
    assert_eq!(code, 0, "Watch help failed");
    assert!(stdout.contains("--server"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let (_, _, code) = run_cli(&["frobnicate"]);
    assert_ne!(code, 0, "Unknown subcommand unexpectedly succeeded");
}

#[test]
fn test_status_against_unreachable_server_fails() {
    // Reserved port on localhost; connection is refused immediately.
    let (_, stderr, code) = run_cli(&["status", "--server", "http://127.0.0.1:1"]);
    assert_ne!(code, 0, "Status against dead server unexpectedly succeeded");
    assert!(stderr.contains("error:"));
}
