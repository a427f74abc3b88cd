// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Plain-text rendering of tool results.

use crate::analysis::{ChangeStats, Suggestion};
use crate::commit::ValidationOutcome;

/// Render a validation outcome as a numbered report.
pub fn validation_report(outcome: &ValidationOutcome) -> String {
    let mut text = if outcome.valid {
        "✅ Commit message is valid".to_string()
    } else {
        "❌ Commit message is invalid".to_string()
    };

    if !outcome.issues.is_empty() {
        text.push_str("\n\nIssues:\n");
        text.push_str(&numbered(&outcome.issues));
    }

    if !outcome.warnings().is_empty() {
        text.push_str("\n\nWarnings:\n");
        text.push_str(&numbered(outcome.warnings()));
    }

    text
}

/// Render a type suggestion with the staged summary.
pub fn suggestion_report(suggestion: &Suggestion, stats: &ChangeStats) -> String {
    let info = suggestion.commit_type.info();
    format!(
        "Suggested type: {} {}\nConfidence: {}\nReason: {}\nStaged: {}\n\n{}: {}",
        suggestion.emoji,
        info.id,
        suggestion.confidence,
        suggestion.reason,
        stats.summary(),
        info.title,
        info.description
    )
}

/// Render the result of a successful commit.
pub fn commit_report(sha: &str, message: &str, warnings: &[String]) -> String {
    let mut text = format!(
        "✅ Commit created: {}\n\nMessage:\n{}",
        &sha[..7.min(sha.len())],
        message
    );
    text.push_str(&format!("\n\nCommit id: {}", sha));

    if !warnings.is_empty() {
        text.push_str("\n\nWarnings:\n");
        text.push_str(&numbered(warnings));
    }

    text
}

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}
