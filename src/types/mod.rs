// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit type registry.
//!
//! The identifiers and glyphs below are part of the wire format: clients
//! match on them byte for byte, so they must never change.

use crate::error::{CommitError, Result};
use serde::Serialize;

/// Registry entry for a commit type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    /// Identifier as it appears in commit headers.
    pub id: &'static str,
    /// Emoji glyph prefixed to the header.
    pub emoji: &'static str,
    /// Short human-readable title.
    pub title: &'static str,
    /// One-line description of when to use the type.
    pub description: &'static str,
}

/// Commit type identifiers.
///
/// Declaration order matches [`TYPES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    Feat,
    Fix,
    Docs,
    Style,
    Refactor,
    Perf,
    Test,
    Build,
    Ci,
    Chore,
    Revert,
    Security,
    Deprecate,
    Breaking,
    I18n,
    A11y,
    Deps,
}

static TYPES: [TypeInfo; 17] = [
    TypeInfo {
        id: "feat",
        emoji: "\u{2728}",
        title: "Features",
        description: "A new feature",
    },
    TypeInfo {
        id: "fix",
        emoji: "\u{1F41B}",
        title: "Bug Fixes",
        description: "A bug fix",
    },
    TypeInfo {
        id: "docs",
        emoji: "\u{1F4DD}",
        title: "Documentation",
        description: "Documentation only changes",
    },
    TypeInfo {
        id: "style",
        emoji: "\u{1F484}",
        title: "Styles",
        description: "Changes that do not affect the meaning of the code (white-space, formatting, etc)",
    },
    TypeInfo {
        id: "refactor",
        emoji: "\u{267B}\u{FE0F}",
        title: "Code Refactoring",
        description: "A code change that neither fixes a bug nor adds a feature",
    },
    TypeInfo {
        id: "perf",
        emoji: "\u{26A1}",
        title: "Performance Improvements",
        description: "A code change that improves performance",
    },
    TypeInfo {
        id: "test",
        emoji: "\u{2705}",
        title: "Tests",
        description: "Adding missing tests or correcting existing tests",
    },
    TypeInfo {
        id: "build",
        emoji: "\u{1F4E6}",
        title: "Builds",
        description: "Changes that affect the build system or external dependencies",
    },
    TypeInfo {
        id: "ci",
        emoji: "\u{1F477}",
        title: "Continuous Integration",
        description: "Changes to CI configuration files and scripts",
    },
    TypeInfo {
        id: "chore",
        emoji: "\u{1F527}",
        title: "Chores",
        description: "Other changes that don't modify src or test files",
    },
    TypeInfo {
        id: "revert",
        emoji: "\u{23EA}",
        title: "Reverts",
        description: "Reverts a previous commit",
    },
    TypeInfo {
        id: "security",
        emoji: "\u{1F512}",
        title: "Security",
        description: "Fix security issues",
    },
    TypeInfo {
        id: "deprecate",
        emoji: "\u{1F5D1}\u{FE0F}",
        title: "Deprecations",
        description: "Deprecate code that needs to be cleaned up",
    },
    TypeInfo {
        id: "breaking",
        emoji: "\u{1F4A5}",
        title: "Breaking Changes",
        description: "Introduce breaking changes",
    },
    TypeInfo {
        id: "i18n",
        emoji: "\u{1F310}",
        title: "Internationalization",
        description: "Internationalization and localization",
    },
    TypeInfo {
        id: "a11y",
        emoji: "\u{267F}",
        title: "Accessibility",
        description: "Improve accessibility",
    },
    TypeInfo {
        id: "deps",
        emoji: "\u{2B06}\u{FE0F}",
        title: "Dependencies",
        description: "Add, update or remove dependencies",
    },
];

impl CommitType {
    /// Get the registry entry for this type.
    pub fn info(&self) -> &'static TypeInfo {
        &TYPES[*self as usize]
    }

    /// Get the string representation of the commit type.
    pub fn as_str(&self) -> &'static str {
        self.info().id
    }

    /// Get the emoji glyph for this type.
    pub fn emoji(&self) -> &'static str {
        self.info().emoji
    }

    /// Get all commit types, in registry order.
    pub fn all() -> &'static [CommitType] {
        &[
            CommitType::Feat,
            CommitType::Fix,
            CommitType::Docs,
            CommitType::Style,
            CommitType::Refactor,
            CommitType::Perf,
            CommitType::Test,
            CommitType::Build,
            CommitType::Ci,
            CommitType::Chore,
            CommitType::Revert,
            CommitType::Security,
            CommitType::Deprecate,
            CommitType::Breaking,
            CommitType::I18n,
            CommitType::A11y,
            CommitType::Deps,
        ]
    }
}

impl std::str::FromStr for CommitType {
    type Err = CommitError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CommitType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CommitError::UnknownType {
                commit_type: s.to_string(),
            })
    }
}

impl std::fmt::Display for CommitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Look up a type identifier in the registry.
pub fn lookup(id: &str) -> Result<&'static TypeInfo> {
    Ok(id.parse::<CommitType>()?.info())
}

/// Iterate over every registry entry.
pub fn registry() -> impl Iterator<Item = &'static TypeInfo> {
    TYPES.iter()
}
