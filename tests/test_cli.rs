//! Demo binary tests
//!
//! Runs the `argrt` binary end to end: exit codes, stdout, usage on stderr.

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

use common::{argrt, argrt_command, ExitStatus, MockEnvironment};

fn cmd(env: &MockEnvironment) -> Command {
    Command::from_std(argrt_command(env))
}

// ============================================================================
// Successful Runs
// ============================================================================

#[test]
fn test_defaults() {
    let r = argrt(&[]);

    assert_eq!(r.exit_status, ExitStatus::Success);
    assert_eq!(r.stdout, "n: 42\nlen(s): 5\nf: Off\nd: 3.14\ng: 2911939\n");
}

#[test]
fn test_options_applied() {
    let r = argrt(&["-n", "7", "-s", "hello world", "-f", "-d", "0.618", "-g", "1"]);

    assert_eq!(r.exit_code, 0);
    assert!(r.contains("n: 7\n"));
    assert!(r.contains("len(s): 11\n"));
    assert!(r.contains("f: On\n"));
    assert!(r.contains("d: 0.618\n"));
    assert!(r.contains("g: 1\n"));
}

#[test]
fn test_repeated_flags() {
    let env = MockEnvironment::new();
    cmd(&env)
        .args(["-n", "1", "-n", "2", "-f", "-f"])
        .assert()
        .success()
        .stdout(predicate::str::contains("n: 2\n"))
        .stdout(predicate::str::contains("f: Off\n"));
}

// ============================================================================
// Help
// ============================================================================

#[test]
fn test_help_prints_usage_and_exits_zero() {
    let env = MockEnvironment::new();
    cmd(&env)
        .args(["-n", "5", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("usage: argrt\n"))
        .stderr(predicate::str::contains("\t-d <global double>: 3.14\n"))
        .stderr(predicate::str::contains("\t-f <boolean flag>: Off\n"))
        .stderr(predicate::str::contains("\t-g <global int>: 2911939\n"))
        .stderr(predicate::str::contains("\t-h <print usage info?>: On\n"))
        .stderr(predicate::str::contains("\t-n <integer>: 5\n"))
        .stderr(predicate::str::contains("\t-s <string>: hello\n"));
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unknown_argument() {
    let env = MockEnvironment::new();
    cmd(&env)
        .args(["-z"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Error: unknown argument: -z"));
}

#[test]
fn test_missing_value() {
    let r = argrt(&["-s"]);

    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("Error: last argument without value: -s"));
}

#[test]
fn test_malformed_value() {
    let env = MockEnvironment::new();
    cmd(&env)
        .args(["-n", "forty-two"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid value 'forty-two' for -n"));
}

#[test]
fn test_long_form_not_supported() {
    let r = argrt(&["--n", "3"]);

    assert_eq!(r.exit_status, ExitStatus::Error);
    assert!(r.stderr.contains("unknown argument: --n"));
}

// ============================================================================
// Logging
// ============================================================================

#[test]
fn test_debug_logging_goes_to_stderr() {
    let env = MockEnvironment::new();
    cmd(&env)
        .env("ARGRT_LOG", "argrt=debug")
        .args(["-n", "3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("n: 3\n"))
        .stderr(predicate::str::contains("option registered"));
}

#[test]
fn test_json_logging() {
    let env = MockEnvironment::new();
    cmd(&env)
        .env("ARGRT_LOG", "argrt=debug")
        .env("ARGRT_LOG_FORMAT", "json")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"message\":\"option registered\""));
}

#[test]
fn test_failed_option_is_logged() {
    let env = MockEnvironment::new();
    cmd(&env)
        .env("ARGRT_LOG", "argrt=debug")
        .args(["-n", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to apply option"))
        .stderr(predicate::str::contains("invalid value 'x' for -n"));
}
