//! Commit Action Tags
//!
//! The fixed vocabulary of action tags used in Odoo-style commit headers,
//! together with the explanatory text shown in the selection menu.

use std::fmt;

/// Classifier word describing the nature of a commit, written as the
/// bracketed prefix of the commit header (e.g. `[FIX] sale: ...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fix,
    Ref,
    Add,
    Rem,
    Rev,
    Mov,
    Rel,
    Imp,
    Merge,
    Cla,
    I18n,
    Perf,
}

impl Action {
    /// Every recognized tag, in the order shown to the user.
    pub const ALL: [Action; 12] = [
        Action::Fix,
        Action::Ref,
        Action::Add,
        Action::Rem,
        Action::Rev,
        Action::Mov,
        Action::Rel,
        Action::Imp,
        Action::Merge,
        Action::Cla,
        Action::I18n,
        Action::Perf,
    ];

    /// The uppercase tag as it appears in the commit header.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Action::Fix => "FIX",
            Action::Ref => "REF",
            Action::Add => "ADD",
            Action::Rem => "REM",
            Action::Rev => "REV",
            Action::Mov => "MOV",
            Action::Rel => "REL",
            Action::Imp => "IMP",
            Action::Merge => "MERGE",
            Action::Cla => "CLA",
            Action::I18n => "I18N",
            Action::Perf => "PERF",
        }
    }

    /// The description shown next to the tag in the selection menu.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Action::Fix => {
                "For bug fixes: mostly used in stable versions but also valid if fixing a recent bug in the development version."
            }
            Action::Ref => "For refactoring: when a feature is heavily rewritten.",
            Action::Add => "For adding new modules or features.",
            Action::Rem => "For removing resources: removing dead code, views, modules, etc.",
            Action::Rev => {
                "For reverting commits: if a commit causes issues or is unwanted, it is reverted using this tag."
            }
            Action::Mov => {
                "For moving files: use git move and do not change the content of the moved file, otherwise Git may lose track of the file's history."
            }
            Action::Rel => "For release commits: new major or minor stable versions.",
            Action::Imp => {
                "For improvements: most changes in the development version are incremental improvements not related to another tag."
            }
            Action::Merge => {
                "For merge commits: used in forward port of bug fixes or as the main commit for a feature involving several separated commits."
            }
            Action::Cla => "For signing the Odoo Individual Contributor License.",
            Action::I18n => "For changes in translation files.",
            Action::Perf => "For performance patches.",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}
