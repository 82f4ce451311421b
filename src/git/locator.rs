//! Repository/Module Locator
//!
//! Filesystem discovery of git repositories under a root directory, and of
//! the "modules" (immediate subdirectories) inside a chosen repository.

use std::{
    fmt,
    fs,
    path::{Path, PathBuf},
};

use crate::{GIT_DIR, errors::Result, git::branch::branch_or_unknown};

/// A repository found during a scan: its path and the label shown in the
/// selection menu (`"<basename> (<branch>)"`).
///
/// Entries live only for the duration of one workflow; nothing is persisted
/// between scans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    pub label: String,
    pub path: PathBuf,
}

impl fmt::Display for RepositoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Finds all git repositories under `root` with a depth-first traversal.
///
/// Every directory containing a `.git` subdirectory is recorded, and the
/// traversal keeps descending into recorded repositories so nested
/// repositories are found as well. The traversal never descends into `.git`
/// directories themselves, mirroring the exclusion in [`list_modules`].
///
/// # Errors
/// An unreadable directory aborts the whole scan by propagating the
/// underlying IO error; partial results are discarded.
pub fn find_repositories(root: &Path) -> Result<Vec<RepositoryEntry>> {
    let mut found = Vec::new();
    scan(root, &mut found)?;

    Ok(found)
}

fn scan(dir: &Path, found: &mut Vec<RepositoryEntry>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if !path.is_dir() || entry.file_name() == GIT_DIR {
            continue;
        }

        if path.join(GIT_DIR).is_dir() {
            let name = entry.file_name().to_string_lossy().into_owned();
            let branch = branch_or_unknown(&path);

            found.push(RepositoryEntry {
                label: format!("{name} ({branch})"),
                path: path.clone(),
            });
        }

        scan(&path, found)?;
    }

    Ok(())
}

/// Lists the modules of the repository at `repo_dir`: its immediate child
/// directories, excluding `.git`, as base names in directory-read order.
///
/// # Errors
/// Propagates the IO error if the repository directory cannot be read.
pub fn list_modules(repo_dir: &Path) -> Result<Vec<String>> {
    let mut modules = Vec::new();

    for entry in fs::read_dir(repo_dir)? {
        let entry = entry?;

        if entry.path().is_dir() && entry.file_name() != GIT_DIR {
            modules.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(modules)
}
