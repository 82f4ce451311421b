//! Branch Operations
//!
//! Current-branch lookup for a repository directory, with the lenient
//! fallback used while labelling repositories during a scan.

use std::{path::Path, process::Command};

use crate::errors::{GitError, Result};

/// Sentinel branch name used when the branch lookup fails during a scan.
pub const UNKNOWN_BRANCH: &str = "unknown";

/// Gets the name of the currently checked out branch of the repository at
/// `repo_dir`. For detached HEAD states git reports `HEAD`.
///
/// # Errors
///
/// Returns an error if:
/// - The git command cannot be spawned
/// - `repo_dir` is not a git repository
/// - Git cannot determine the current branch
pub fn current_branch(repo_dir: &Path) -> Result<String> {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(["rev-parse", "--abbrev-ref", "HEAD"])
        .output()?;

    if output.status.success() {
        let branch = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(branch)
    } else {
        let error_message = String::from_utf8_lossy(&output.stderr);
        Err(GitError::CommandFailed {
            command: "git rev-parse --abbrev-ref HEAD".to_string(),
            output: error_message.to_string(),
        }
        .into())
    }
}

/// Like [`current_branch`], but recovers from any failure with the
/// [`UNKNOWN_BRANCH`] sentinel so a single broken repository does not
/// abort a whole scan.
#[must_use]
pub fn branch_or_unknown(repo_dir: &Path) -> String {
    current_branch(repo_dir).unwrap_or_else(|_| UNKNOWN_BRANCH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_branch_lookup_fails_outside_a_repository() {
        let temp_dir = TempDir::new().unwrap();

        assert!(current_branch(temp_dir.path()).is_err());
    }

    #[test]
    fn test_branch_or_unknown_falls_back() {
        let temp_dir = TempDir::new().unwrap();

        assert_eq!(branch_or_unknown(temp_dir.path()), UNKNOWN_BRANCH);
    }
}
