// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message validation.
//!
//! Issues make a message invalid. Warnings are advisory and never block.

use crate::config::RulesConfig;
use crate::types;
use serde::Serialize;

use super::message::{split_emoji, HEADER_REGEX};

/// Past-tense title openings and the order they are checked in.
const NON_IMPERATIVE_PREFIXES: &[&str] = &["added", "adds", "fixed", "fixes", "updated", "updates"];

/// Result of validating a commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    /// True iff `issues` is empty.
    pub valid: bool,
    /// Blocking problems, in the order they were found.
    pub issues: Vec<String>,
    /// Advisory notes; `None` when there are none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

impl ValidationOutcome {
    fn new(issues: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: issues.is_empty(),
            issues,
            warnings: if warnings.is_empty() {
                None
            } else {
                Some(warnings)
            },
        }
    }

    fn rejected(issue: &str) -> Self {
        Self::new(vec![issue.to_string()], Vec::new())
    }

    /// Warnings as a slice, empty when there are none.
    pub fn warnings(&self) -> &[String] {
        self.warnings.as_deref().unwrap_or(&[])
    }
}

/// Validate a message with the default limits (50 char title, 72 char body lines).
pub fn validate(message: &str) -> ValidationOutcome {
    validate_with(message, &RulesConfig::default())
}

/// Validate a message against configured limits.
pub fn validate_with(message: &str, rules: &RulesConfig) -> ValidationOutcome {
    if message.trim().is_empty() {
        return ValidationOutcome::rejected("Commit message cannot be empty");
    }

    let lines: Vec<&str> = message.split('\n').collect();
    let first_line = lines[0];

    let Some((emoji, rest)) = split_emoji(first_line) else {
        return ValidationOutcome::rejected("Commit message must start with an emoji");
    };

    let Some(captures) = HEADER_REGEX.captures(rest) else {
        return ValidationOutcome::rejected(
            "Invalid commit format. Expected: <emoji> <type>(<scope>): <title>",
        );
    };

    let commit_type = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    let title = captures.get(4).map(|m| m.as_str()).unwrap_or_default();

    let mut issues = Vec::new();
    let mut warnings = Vec::new();

    match types::lookup(commit_type) {
        Err(_) => issues.push(format!("Invalid commit type: {}", commit_type)),
        Ok(info) if info.emoji != emoji => issues.push(format!(
            "Emoji {} doesn't match type {}. Expected {}",
            emoji, commit_type, info.emoji
        )),
        Ok(_) => {}
    }

    if title.trim().is_empty() {
        issues.push("Title cannot be empty".to_string());
    }

    let title_length = title.chars().count();
    if title_length > rules.max_title_length {
        warnings.push(format!(
            "Title is too long ({} characters). Keep it under {} characters",
            title_length, rules.max_title_length
        ));
    }

    if title.chars().next().is_some_and(has_lowercase_form) {
        warnings.push("Title should start with a lowercase letter".to_string());
    }

    if title.ends_with('.') {
        warnings.push("Title should not end with a period".to_string());
    }

    let lowered = title.to_lowercase();
    if let Some(prefix) = NON_IMPERATIVE_PREFIXES
        .iter()
        .find(|p| lowered.starts_with(*p))
    {
        warnings.push(format!(
            "Use imperative mood: \"{}\" instead of \"{}\"",
            imperative_stem(prefix),
            prefix
        ));
    }

    if lines.len() > 1 {
        if !lines[1].trim().is_empty() {
            warnings.push("Second line should be blank".to_string());
        }

        for (index, line) in lines.iter().enumerate().skip(2) {
            let length = line.chars().count();
            if length > rules.max_line_length {
                warnings.push(format!(
                    "Line {} is too long ({} characters). Keep body lines under {} characters",
                    index + 1,
                    length,
                    rules.max_line_length
                ));
            }
        }
    }

    ValidationOutcome::new(issues, warnings)
}

/// True for uppercase letters that have a distinct lowercase form.
fn has_lowercase_form(c: char) -> bool {
    c.is_uppercase() && !c.to_lowercase().eq(std::iter::once(c))
}

fn imperative_stem(prefix: &str) -> &str {
    prefix
        .strip_suffix("ed")
        .or_else(|| prefix.strip_suffix("es"))
        .or_else(|| prefix.strip_suffix('s'))
        .unwrap_or(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commit::CommitFields;
    use crate::types::CommitType;

    #[test]
    fn test_valid_message() {
        let outcome = validate("✨ feat(auth): add OAuth2 authentication");
        assert!(outcome.valid);
        assert!(outcome.issues.is_empty());
        assert!(outcome.warnings.is_none());
    }

    #[test]
    fn test_empty_message() {
        let outcome = validate("  \n\t ");
        assert!(!outcome.valid);
        assert_eq!(outcome.issues, vec!["Commit message cannot be empty"]);
    }

    #[test]
    fn test_missing_emoji() {
        let outcome = validate("feat:add-login");
        assert_eq!(outcome.issues, vec!["Commit message must start with an emoji"]);
    }

    #[test]
    fn test_missing_emoji_with_spaces_is_bad_format() {
        let outcome = validate("feat: add login");
        assert_eq!(
            outcome.issues,
            vec!["Invalid commit format. Expected: <emoji> <type>(<scope>): <title>"]
        );
    }

    #[test]
    fn test_invalid_format_short_circuits() {
        let outcome = validate("✨ feat add login\nsecond line");
        assert_eq!(
            outcome.issues,
            vec!["Invalid commit format. Expected: <emoji> <type>(<scope>): <title>"]
        );
        assert!(outcome.warnings.is_none());
    }

    #[test]
    fn test_unknown_type() {
        let outcome = validate("🚧 wip: half done");
        assert!(!outcome.valid);
        assert_eq!(outcome.issues, vec!["Invalid commit type: wip"]);
    }

    #[test]
    fn test_emoji_mismatch() {
        let outcome = validate("🐛 feat: add login");
        assert_eq!(
            outcome.issues,
            vec!["Emoji 🐛 doesn't match type feat. Expected ✨"]
        );
    }

    #[test]
    fn test_blank_title() {
        let outcome = validate("✨ feat:  ");
        assert!(outcome.issues.contains(&"Title cannot be empty".to_string()));
    }

    #[test]
    fn test_long_title_is_only_a_warning() {
        let title = "a".repeat(51);
        let outcome = validate(&format!("✨ feat: {}", title));
        assert!(outcome.valid);
        assert_eq!(
            outcome.warnings(),
            ["Title is too long (51 characters). Keep it under 50 characters"]
        );
    }

    #[test]
    fn test_title_of_exactly_fifty_chars() {
        let title = "a".repeat(50);
        assert!(validate(&format!("✨ feat: {}", title)).warnings.is_none());
    }

    #[test]
    fn test_added_login_warnings() {
        let outcome = validate("✨ feat: Added login.");
        assert!(outcome.valid);
        let warnings = outcome.warnings();
        assert!(warnings.contains(&"Title should start with a lowercase letter".to_string()));
        assert!(warnings.contains(&"Title should not end with a period".to_string()));
        assert!(warnings.contains(&"Use imperative mood: \"add\" instead of \"added\"".to_string()));
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn test_imperative_only_first_prefix() {
        let outcome = validate("🐛 fix: fixes crash on startup");
        assert_eq!(
            outcome.warnings(),
            ["Use imperative mood: \"fix\" instead of \"fixes\""]
        );
    }

    #[test]
    fn test_imperative_stems() {
        assert_eq!(imperative_stem("added"), "add");
        assert_eq!(imperative_stem("adds"), "add");
        assert_eq!(imperative_stem("fixed"), "fix");
        assert_eq!(imperative_stem("updated"), "updat");
        assert_eq!(imperative_stem("updates"), "updat");
    }

    #[test]
    fn test_uncased_first_char_not_flagged() {
        let outcome = validate("🌐 i18n: 日本語 translations");
        assert!(outcome.warnings.is_none());
    }

    #[test]
    fn test_second_line_not_blank() {
        let outcome = validate("✨ feat: add login\nmore text");
        assert_eq!(outcome.warnings(), ["Second line should be blank"]);
    }

    #[test]
    fn test_long_body_line() {
        let long_line = "b".repeat(80);
        let message = format!("✨ feat: add login\n\nshort\n{}", long_line);
        let outcome = validate(&message);
        assert!(outcome.valid);
        assert_eq!(
            outcome.warnings(),
            ["Line 4 is too long (80 characters). Keep body lines under 72 characters"]
        );
    }

    #[test]
    fn test_custom_limits() {
        let rules = RulesConfig {
            max_title_length: 10,
            max_line_length: 20,
        };
        let outcome = validate_with("✨ feat: add a long title", &rules);
        assert_eq!(
            outcome.warnings(),
            ["Title is too long (16 characters). Keep it under 10 characters"]
        );
    }

    #[test]
    fn test_formatted_messages_validate() {
        for t in CommitType::all() {
            let fields = CommitFields::new(*t, "tidy module layout")
                .with_scope("core")
                .with_description("Moves helpers next to their callers.");
            let outcome = validate(&fields.format());
            assert!(outcome.valid, "{} failed: {:?}", t, outcome.issues);
        }
    }

    #[test]
    fn test_breaking_footer_validates() {
        let fields = CommitFields::new(CommitType::Feat, "drop v1 api")
            .with_description("Clients must migrate.")
            .with_breaking(true);
        assert!(validate(&fields.format()).valid);
    }

    #[test]
    fn test_outcome_json_omits_empty_warnings() {
        let json = serde_json::to_value(validate("✨ feat: add login")).unwrap();
        assert_eq!(json["valid"], true);
        assert!(json.get("warnings").is_none());
    }
}
