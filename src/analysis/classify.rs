// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit type suggestion from staged change statistics.

use crate::error::{GitError, Result};
use crate::types::CommitType;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;
use std::collections::BTreeSet;

lazy_static! {
    static ref DOCS_EXTENSION: Regex = Regex::new(r"(?i)\.(md|txt|rst|adoc)$").unwrap();
    static ref TEST_FILE: Regex = Regex::new(r"\.(test|spec)\.(ts|js|tsx|jsx)$").unwrap();
    static ref YAML_FILE: Regex = Regex::new(r"(?i)\.ya?ml$").unwrap();
    static ref CONFIG_EXTENSION: Regex =
        Regex::new(r"(?i)\.(json|ya?ml|toml|ini|cfg|conf|env|xml)$").unwrap();
}

const TEST_DIRS: &[&str] = &["__tests__/", "test/", "tests/"];
const CI_MARKERS: &[&str] = &[".github/", ".gitlab/", "jenkins", "circle"];

/// Lock files across package managers.
const LOCK_FILES: &[&str] = &[
    "Cargo.lock",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Gemfile.lock",
    "Pipfile.lock",
    "poetry.lock",
    "composer.lock",
    "go.sum",
];

/// Manifests that declare dependencies.
const DEPENDENCY_MANIFESTS: &[&str] = &[
    "Cargo.toml",
    "package.json",
    "go.mod",
    "requirements.txt",
    "Pipfile",
    "pyproject.toml",
    "Gemfile",
    "composer.json",
];

/// Manifests that only describe how to build.
const BUILD_MANIFESTS: &[&str] = &[
    "Makefile",
    "CMakeLists.txt",
    "build.gradle",
    "build.gradle.kts",
    "pom.xml",
    "setup.py",
    "Dockerfile",
];

/// Aggregate statistics about a staged change-set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangeStats {
    /// Lines added.
    pub additions: usize,
    /// Lines deleted.
    pub deletions: usize,
    /// Changed paths, relative to the repository root.
    pub files: BTreeSet<String>,
}

impl ChangeStats {
    /// Build stats from counts and any iterable of paths.
    pub fn new<I, S>(additions: usize, deletions: usize, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            additions,
            deletions,
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Total lines touched.
    pub fn total_lines(&self) -> usize {
        self.additions + self.deletions
    }

    /// Short summary such as `3 files changed, 10 insertions(+), 2 deletions(-)`.
    pub fn summary(&self) -> String {
        let count = self.files.len();
        format!(
            "{} file{} changed, {} insertion{}(+), {} deletion{}(-)",
            count,
            if count == 1 { "" } else { "s" },
            self.additions,
            if self.additions == 1 { "" } else { "s" },
            self.deletions,
            if self.deletions == 1 { "" } else { "s" },
        )
    }
}

/// How sure the classifier is about a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Confidence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Confidence::High => write!(f, "high"),
            Confidence::Medium => write!(f, "medium"),
            Confidence::Low => write!(f, "low"),
        }
    }
}

/// A suggested commit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Suggested type.
    #[serde(rename = "type")]
    pub commit_type: CommitType,
    /// Emoji for the suggested type.
    pub emoji: &'static str,
    /// Why this type was picked.
    pub reason: String,
    /// Confidence level.
    pub confidence: Confidence,
}

impl Suggestion {
    fn new(commit_type: CommitType, confidence: Confidence, reason: impl Into<String>) -> Self {
        Self {
            commit_type,
            emoji: commit_type.emoji(),
            reason: reason.into(),
            confidence,
        }
    }
}

/// Suggest a commit type for the staged changes.
///
/// Category rules are tried in order and the first match wins; when no
/// category covers the change-set the addition/deletion volume decides.
pub fn classify(stats: &ChangeStats) -> Result<Suggestion> {
    if stats.files.is_empty() {
        return Err(GitError::NoStagedChanges.into());
    }

    let files = || stats.files.iter().map(String::as_str);

    if files().all(is_docs_file) {
        return Ok(Suggestion::new(
            CommitType::Docs,
            Confidence::High,
            "Only documentation files changed",
        ));
    }

    if files().all(is_test_file) {
        return Ok(Suggestion::new(
            CommitType::Test,
            Confidence::High,
            "Only test files changed",
        ));
    }

    if files().all(is_ci_file) {
        return Ok(Suggestion::new(
            CommitType::Ci,
            Confidence::High,
            "CI configuration files changed",
        ));
    }

    let manifests: BTreeSet<&str> = files()
        .map(file_name)
        .filter(|name| is_manifest(name))
        .collect();
    if !manifests.is_empty() {
        let names = manifests.iter().copied().collect::<Vec<_>>().join(", ");
        let is_deps = manifests
            .iter()
            .any(|name| name.contains("lock") || DEPENDENCY_MANIFESTS.contains(name));

        return Ok(if is_deps {
            Suggestion::new(
                CommitType::Deps,
                Confidence::High,
                format!("Dependency files changed: {}", names),
            )
        } else {
            Suggestion::new(
                CommitType::Build,
                Confidence::High,
                format!("Build configuration changed: {}", names),
            )
        });
    }

    if files().all(is_config_file) {
        return Ok(Suggestion::new(
            CommitType::Chore,
            Confidence::High,
            "Only configuration files changed",
        ));
    }

    Ok(classify_by_volume(stats.additions, stats.deletions))
}

fn classify_by_volume(additions: usize, deletions: usize) -> Suggestion {
    let ratio = if deletions > 0 {
        additions as f64 / deletions as f64
    } else if additions > 0 {
        10.0
    } else {
        0.0
    };
    let total = additions + deletions;

    if ratio > 2.0 && additions > 50 {
        Suggestion::new(
            CommitType::Feat,
            Confidence::Medium,
            format!(
                "Significant additions ({} lines added, {} lines removed) suggest a new feature",
                additions, deletions
            ),
        )
    } else if ratio > 0.7 && ratio < 1.3 && total > 100 {
        Suggestion::new(
            CommitType::Refactor,
            Confidence::Medium,
            format!(
                "Balanced changes ({} additions, {} deletions) suggest refactoring",
                additions, deletions
            ),
        )
    } else if total < 50 {
        Suggestion::new(
            CommitType::Fix,
            Confidence::Low,
            format!("Small change ({} lines) suggests a bug fix", total),
        )
    } else {
        Suggestion::new(CommitType::Feat, Confidence::Low, "General code changes")
    }
}

fn file_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

fn is_docs_file(path: &str) -> bool {
    DOCS_EXTENSION.is_match(path) || path.contains("README") || path.contains("docs/")
}

fn is_test_file(path: &str) -> bool {
    TEST_FILE.is_match(path) || TEST_DIRS.iter().any(|dir| path.contains(dir))
}

fn is_ci_file(path: &str) -> bool {
    let lowered = path.to_lowercase();
    YAML_FILE.is_match(path) && CI_MARKERS.iter().any(|marker| lowered.contains(marker))
}

fn is_manifest(name: &str) -> bool {
    LOCK_FILES.contains(&name) || DEPENDENCY_MANIFESTS.contains(&name) || BUILD_MANIFESTS.contains(&name)
}

fn is_config_file(path: &str) -> bool {
    CONFIG_EXTENSION.is_match(path) || file_name(path).starts_with('.')
}
