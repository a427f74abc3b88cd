// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Commit message structure, formatting and parsing.

use crate::error::{CommitError, GmcError, Result};
use crate::types::CommitType;
use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// Leading emoji token of the header line.
    pub(super) static ref EMOJI_REGEX: Regex = Regex::new(r"^(\S+)\s+").unwrap();

    /// `type(scope)!: title` remainder of the header line.
    pub(super) static ref HEADER_REGEX: Regex =
        Regex::new(r"^([a-z][a-z0-9]*)(\([^)]+\))?(!)?:\s+(.+)$").unwrap();
}

/// Footer marker appended to breaking changes that carry a description.
pub const BREAKING_MARKER: &str = "BREAKING CHANGE:";

/// The fields of a gitmoji-style commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitFields {
    /// Commit type.
    #[serde(rename = "type")]
    pub commit_type: CommitType,
    /// Optional scope.
    pub scope: Option<String>,
    /// Title (subject) line text.
    pub title: String,
    /// Optional description (body).
    pub description: Option<String>,
    /// Whether this is a breaking change.
    pub breaking: bool,
}

impl CommitFields {
    /// Create new fields with just a type and title.
    pub fn new(commit_type: CommitType, title: impl Into<String>) -> Self {
        Self {
            commit_type,
            scope: None,
            title: title.into(),
            description: None,
            breaking: false,
        }
    }

    /// Create fields from a raw type identifier.
    pub fn from_type_str(type_str: &str, title: impl Into<String>) -> Result<Self> {
        let commit_type = type_str.parse::<CommitType>()?;
        Ok(Self::new(commit_type, title))
    }

    /// Set the scope. Empty scopes are ignored.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        let scope = scope.into();
        if !scope.is_empty() {
            self.scope = Some(scope);
        }
        self
    }

    /// Set the description. Empty descriptions are ignored.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        let description = description.into();
        if !description.is_empty() {
            self.description = Some(description);
        }
        self
    }

    /// Set the breaking flag.
    pub fn with_breaking(mut self, breaking: bool) -> Self {
        self.breaking = breaking;
        self
    }

    /// Format the fields as a commit message.
    pub fn format(&self) -> String {
        format(self)
    }
}

impl std::str::FromStr for CommitFields {
    type Err = GmcError;

    fn from_str(message: &str) -> Result<Self> {
        let parsed = parse(message).ok_or_else(|| CommitError::MalformedMessage {
            message: "expected <emoji> <type>(<scope>): <title>".to_string(),
        })?;
        parsed.into_fields()
    }
}

/// Format commit fields into the textual wire form.
///
/// A breaking change that has a description gets an empty
/// `BREAKING CHANGE: ` footer unless the description already carries one.
/// Breaking changes without a description get no footer at all.
pub fn format(fields: &CommitFields) -> String {
    let info = fields.commit_type.info();
    let mut result = String::new();

    result.push_str(info.emoji);
    result.push(' ');
    result.push_str(info.id);

    if let Some(scope) = fields.scope.as_deref().filter(|s| !s.is_empty()) {
        result.push('(');
        result.push_str(scope);
        result.push(')');
    }

    if fields.breaking {
        result.push('!');
    }

    result.push_str(": ");
    result.push_str(&fields.title);

    if let Some(description) = fields.description.as_deref().filter(|d| !d.is_empty()) {
        result.push_str("\n\n");
        result.push_str(description);

        if fields.breaking && !description.contains(BREAKING_MARKER) {
            result.push_str("\n\n");
            result.push_str(BREAKING_MARKER);
            result.push(' ');
        }
    }

    result
}

/// Structural decomposition of a commit message.
///
/// The type is kept as written; nothing here has been checked against the
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedMessage {
    /// Leading emoji token.
    pub emoji: String,
    /// Type identifier as written.
    #[serde(rename = "type")]
    pub commit_type: String,
    /// Scope without parentheses.
    pub scope: Option<String>,
    /// Title text.
    pub title: String,
    /// Lines after the blank separator, trimmed.
    pub description: Option<String>,
    /// Whether the `!` marker was present.
    pub breaking: bool,
}

impl ParsedMessage {
    /// Convert into registry-checked commit fields.
    pub fn into_fields(self) -> Result<CommitFields> {
        let commit_type = self.commit_type.parse::<CommitType>()?;
        Ok(CommitFields {
            commit_type,
            scope: self.scope,
            title: self.title,
            description: self.description,
            breaking: self.breaking,
        })
    }
}

/// Parse a commit message without validating it.
///
/// Returns `None` only when the header does not have the
/// `<emoji> <type>(<scope>)!: <title>` shape.
pub fn parse(message: &str) -> Option<ParsedMessage> {
    let lines: Vec<&str> = message.split('\n').collect();
    let first_line = lines.first().copied().unwrap_or("");

    let (emoji, rest) = split_emoji(first_line)?;
    let captures = HEADER_REGEX.captures(rest)?;

    let commit_type = captures.get(1)?.as_str().to_string();
    let scope = captures.get(2).map(|m| {
        let s = m.as_str();
        s[1..s.len() - 1].to_string()
    });
    let breaking = captures.get(3).is_some();
    let title = captures.get(4)?.as_str().to_string();

    let description = if lines.len() >= 3 {
        Some(lines[2..].join("\n").trim().to_string())
    } else {
        None
    };

    Some(ParsedMessage {
        emoji: emoji.to_string(),
        commit_type,
        scope,
        title,
        description,
        breaking,
    })
}

/// Split the leading emoji token off a header line.
///
/// The remainder starts after exactly one separating whitespace character.
pub(super) fn split_emoji(line: &str) -> Option<(&str, &str)> {
    let emoji = EMOJI_REGEX.captures(line)?.get(1)?.as_str();
    let after = &line[emoji.len()..];
    let separator = after.chars().next()?;
    Some((emoji, &after[separator.len_utf8()..]))
}
