//! Commit Message Composer
//!
//! Validation and formatting of the structured commit message: an action
//! tag, a module name, a short description and an optional long
//! description, rendered as
//!
//! ```text
//!
//! [ACTION] module: short description
//!
//! wrapped long description
//! ```
//!
//! Descriptions may not contain backticks or double quotes: the composed
//! message ends up inside a shell-quoted `git commit -m "..."` line when
//! the terminal dispatch mode is used, and nothing downstream escapes it.

use crate::{
    actions::Action,
    errors::{OcommitError, Result},
};

/// Maximum length of the short description, in characters.
pub const SHORT_DESCRIPTION_LIMIT: usize = 80;

/// Maximum length of the long description, in characters.
pub const LONG_DESCRIPTION_LIMIT: usize = 300;

/// Line width used when wrapping the long description.
pub const WRAP_WIDTH: usize = 80;

/// Checks the short description: non-empty, within the length limit, and
/// free of backticks and double quotes.
///
/// # Errors
/// Returns the user-facing message describing the violation. Length
/// violations include the observed length.
pub fn validate_short_description(text: &str) -> std::result::Result<(), String> {
    if contains_forbidden_chars(text) {
        return Err("The short description cannot contain backticks (`) or (\").".to_string());
    }

    let length = text.chars().count();

    if length == 0 {
        return Err("The short description cannot be empty.".to_string());
    }

    if length > SHORT_DESCRIPTION_LIMIT {
        return Err(format!(
            "The description must not exceed {SHORT_DESCRIPTION_LIMIT} characters ({length})"
        ));
    }

    Ok(())
}

/// Checks the long description: may be empty, but must stay within the
/// length limit and contain neither backticks nor double quotes.
///
/// # Errors
/// Returns the user-facing message describing the violation.
pub fn validate_long_description(text: &str) -> std::result::Result<(), String> {
    if contains_forbidden_chars(text) {
        return Err("The long description cannot contain backticks (`) or (\").".to_string());
    }

    let length = text.chars().count();

    if length > LONG_DESCRIPTION_LIMIT {
        return Err(format!(
            "The long description must not exceed {LONG_DESCRIPTION_LIMIT} characters ({length})"
        ));
    }

    Ok(())
}

fn contains_forbidden_chars(text: &str) -> bool {
    text.contains('`') || text.contains('"')
}

/// Wraps `text` into hard chunks of at most `width` characters, joined by
/// newlines. This is character-count wrapping, not word-boundary wrapping;
/// concatenating the resulting lines reproduces the input exactly. An empty
/// input produces an empty string.
#[must_use]
pub fn wrap_text(text: &str, width: usize) -> String {
    if text.is_empty() {
        return String::new();
    }

    text.chars()
        .collect::<Vec<char>>()
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}

/// A complete, validated commit message draft.
///
/// Construction through [`CommitDraft::new`] is the only way to obtain a
/// draft, so holding one guarantees the descriptions passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDraft {
    pub action: Action,
    pub module: String,
    pub short_description: String,
    pub long_description: String,
}

impl CommitDraft {
    /// Validates all fields and builds the draft.
    ///
    /// # Errors
    /// * `OcommitError::InvalidInput` if the module name is empty or either
    ///   description fails validation.
    pub fn new(
        action: Action,
        module: impl Into<String>,
        short_description: impl Into<String>,
        long_description: impl Into<String>,
    ) -> Result<Self> {
        let module = module.into();
        let short_description = short_description.into();
        let long_description = long_description.into();

        if module.trim().is_empty() {
            return Err(OcommitError::InvalidInput(
                "The module name cannot be empty.".to_string(),
            ));
        }

        validate_short_description(&short_description).map_err(OcommitError::InvalidInput)?;
        validate_long_description(&long_description).map_err(OcommitError::InvalidInput)?;

        Ok(CommitDraft {
            action,
            module,
            short_description,
            long_description,
        })
    }

    /// Renders the final multi-line commit message: a leading blank line,
    /// the `[ACTION] module: description` header, a blank line, then the
    /// long description wrapped to [`WRAP_WIDTH`] characters per line
    /// (empty when no long description was given).
    #[must_use]
    pub fn compose(&self) -> String {
        let body = wrap_text(&self.long_description, WRAP_WIDTH);

        format!(
            "\n[{}] {}: {}\n\n{body}",
            self.action, self.module, self.short_description
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(short: &str, long: &str) -> Result<CommitDraft> {
        CommitDraft::new(Action::Fix, "sale", short, long)
    }

    #[test]
    fn test_compose_shape() {
        let message = draft("fix rounding in tax computation", "")
            .unwrap()
            .compose();

        assert!(message.starts_with('\n'));
        assert_eq!(
            message
                .matches("[FIX] sale: fix rounding in tax computation")
                .count(),
            1
        );
        assert!(message.ends_with("\n\n"));
    }

    #[test]
    fn test_compose_includes_wrapped_body() {
        let long = "a".repeat(100);
        let message = draft("short", &long).unwrap().compose();

        let body = message
            .split_once("\n\n")
            .map(|(_, body)| body)
            .unwrap();

        assert_eq!(body, format!("{}\n{}", "a".repeat(80), "a".repeat(20)));
    }

    #[test]
    fn test_wrap_line_arithmetic() {
        for length in [1, 79, 80, 81, 160, 161, 300] {
            let text = "x".repeat(length);
            let wrapped = wrap_text(&text, WRAP_WIDTH);
            let lines: Vec<&str> = wrapped.split('\n').collect();

            assert_eq!(lines.len(), length.div_ceil(WRAP_WIDTH));
            assert!(lines.iter().all(|line| line.chars().count() <= WRAP_WIDTH));
            assert_eq!(lines.concat(), text);
        }
    }

    #[test]
    fn test_wrap_empty_is_empty() {
        assert_eq!(wrap_text("", WRAP_WIDTH), "");
    }

    #[test]
    fn test_wrap_counts_characters_not_bytes() {
        let text = "é".repeat(81);
        let wrapped = wrap_text(&text, WRAP_WIDTH);

        assert_eq!(wrapped.split('\n').count(), 2);
        assert_eq!(wrapped.replace('\n', ""), text);
    }

    #[test]
    fn test_rejects_backtick_and_quote() {
        assert!(validate_short_description("has a ` backtick").is_err());
        assert!(validate_short_description("has a \" quote").is_err());
        assert!(validate_long_description("has a ` backtick").is_err());
        assert!(validate_long_description("has a \" quote").is_err());

        assert!(draft("has a ` backtick", "").is_err());
        assert!(draft("fine", "has a \" quote").is_err());
    }

    #[test]
    fn test_length_error_names_observed_length() {
        let error = validate_short_description(&"x".repeat(81)).unwrap_err();
        assert!(error.contains("80"));
        assert!(error.contains("(81)"));

        let error = validate_long_description(&"x".repeat(301)).unwrap_err();
        assert!(error.contains("300"));
        assert!(error.contains("(301)"));
    }

    #[test]
    fn test_short_description_required_long_optional() {
        assert!(validate_short_description("").is_err());
        assert!(validate_long_description("").is_ok());

        assert!(draft("present", "").is_ok());
    }

    #[test]
    fn test_limits_are_inclusive() {
        assert!(validate_short_description(&"x".repeat(80)).is_ok());
        assert!(validate_long_description(&"x".repeat(300)).is_ok());
    }

    #[test]
    fn test_empty_module_rejected() {
        assert!(matches!(
            CommitDraft::new(Action::Add, "  ", "short", ""),
            Err(OcommitError::InvalidInput(_))
        ));
    }
}
