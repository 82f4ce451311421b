//! Integration tests for the non-interactive CLI surface.

use assert_cmd::Command;

fn ocommit() -> Command {
    Command::cargo_bin("ocommit").unwrap()
}

#[test]
fn test_help_lists_subcommands() {
    let output = ocommit().arg("--help").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("commit"));
    assert!(stdout.contains("cancel"));
    assert!(stdout.contains("list-actions"));
}

#[test]
fn test_list_actions_prints_all_twelve_tags() {
    let output = ocommit().arg("list-actions").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert_eq!(stdout.lines().count(), 12);

    for tag in [
        "FIX", "REF", "ADD", "REM", "REV", "MOV", "REL", "IMP", "MERGE", "CLA", "I18N", "PERF",
    ] {
        assert!(
            stdout.lines().any(|line| line.starts_with(tag)),
            "missing tag {tag}"
        );
    }
}

#[test]
fn test_cancel_without_active_workflow_warns() {
    let output = ocommit().arg("cancel").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("No commit workflow in progress"));
}

#[test]
fn test_completions_generate_for_bash() {
    let output = ocommit().args(["completions", "bash"]).output().unwrap();

    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}
