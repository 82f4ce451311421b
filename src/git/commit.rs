//! Commit Dispatch
//!
//! The two ways a composed message leaves the tool: rendered as a
//! `git commit -m "..."` line for the user's terminal, or executed
//! directly as a subprocess in the repository's working directory.

use std::{
    path::Path,
    process::{Command, Output},
};

use crate::errors::{GitError, Result};

/// Renders the shell line for the terminal dispatch mode.
///
/// The message is interpolated into a double-quoted string; the composer's
/// validation already rejected double quotes and backticks, which is the
/// only thing keeping this line shell-safe.
#[must_use]
pub fn terminal_command(message: &str) -> String {
    format!("git commit -m \"{message}\"")
}

/// Runs `git commit -m <message>` in `repo_dir`.
///
/// The message is passed as a plain argument, not through a shell, so no
/// quoting rules apply here.
///
/// # Errors
/// * If the git command cannot be spawned
/// * If the commit itself fails (nothing staged, hooks, ...)
pub fn execute_commit(repo_dir: &Path, message: &str, verbose: bool) -> Result<()> {
    if verbose {
        println!("Committing in {}...", repo_dir.display());
    }

    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["commit", "-m"])
        .arg(message)
        .output()?;

    handle_output("commit", &output, verbose)
}

/// Handles the output of a git command: prints stdout on success, pretty
/// prints stderr and returns an error on failure.
fn handle_output(method_name: &str, output: &Output, verbose: bool) -> Result<()> {
    if output.status.success() {
        if verbose {
            println!("{method_name} successful!");
        }

        if !output.stdout.is_empty() {
            println!("{}", String::from_utf8_lossy(&output.stdout).trim());
        }

        Ok(())
    } else {
        let error_message = String::from_utf8_lossy(&output.stderr);

        eprintln!("\n🚨 Git {method_name} failed:");
        for line in error_message.lines() {
            eprintln!("  {line}");
        }

        Err(GitError::CommandFailed {
            command: format!("git {method_name}"),
            output: error_message.to_string(),
        }
        .into())
    }
}
