// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Tool dispatcher.
//!
//! Maps the four tool names to handlers, coerces their arguments and renders
//! every result, success or failure, as text.

pub mod args;
pub mod render;

use crate::analysis::classify;
use crate::commit::{validate_with, CommitFields};
use crate::config::GmcConfig;
use crate::error::{CommitError, GitError, Result, ToolError};
use crate::git::VersionControl;
use crate::types::CommitType;
use serde::Serialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

pub use args::Arguments;
use args::{coerce, CommitRequest, MessageRequest, SuggestRequest, ValidateRequest};

pub const FORMAT_MESSAGE: &str = "git_format_message";
pub const VALIDATE_MESSAGE: &str = "git_validate_message";
pub const SUGGEST_TYPE: &str = "git_suggest_type";
pub const COMMIT: &str = "git_commit";

type Handler<V> = fn(&ToolDispatcher<V>, &Arguments) -> Result<String>;

/// Text payload returned for a tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub text: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Dispatches tool calls against a version-control backend.
pub struct ToolDispatcher<V> {
    vcs: V,
    config: GmcConfig,
}

impl<V: VersionControl> ToolDispatcher<V> {
    /// Create a dispatcher.
    pub fn new(vcs: V, config: GmcConfig) -> Self {
        Self { vcs, config }
    }

    /// The configuration the dispatcher was built with.
    pub fn config(&self) -> &GmcConfig {
        &self.config
    }

    fn handlers() -> [(&'static str, Handler<V>); 4] {
        [
            (FORMAT_MESSAGE, Self::format_message as Handler<V>),
            (VALIDATE_MESSAGE, Self::validate_message as Handler<V>),
            (SUGGEST_TYPE, Self::suggest_type as Handler<V>),
            (COMMIT, Self::commit as Handler<V>),
        ]
    }

    /// Run a tool and return its text, propagating failures.
    pub fn dispatch(&self, name: &str, args: &Arguments) -> Result<String> {
        let handler = Self::handlers()
            .into_iter()
            .find(|(tool, _)| *tool == name)
            .map(|(_, handler)| handler)
            .ok_or_else(|| ToolError::UnknownOperation {
                name: name.to_string(),
            })?;

        handler(self, args)
    }

    /// Run a tool, turning any failure into an error payload.
    pub fn call(&self, name: &str, args: &Arguments) -> ToolOutput {
        tracing::debug!("Calling tool {}", name);

        match self.dispatch(name, args) {
            Ok(text) => ToolOutput::text(text),
            Err(e) => {
                tracing::warn!("Tool {} failed: {}", name, e);
                ToolOutput::error(format!("Error: {}", e))
            }
        }
    }

    fn repo_path<'a>(&'a self, requested: &'a Option<PathBuf>) -> Option<&'a Path> {
        requested
            .as_deref()
            .or(self.config.repository.path.as_deref())
    }

    fn format_message(&self, args: &Arguments) -> Result<String> {
        let request: MessageRequest = coerce(FORMAT_MESSAGE, args)?;
        let fields = CommitFields::try_from(request)?;
        Ok(fields.format())
    }

    fn validate_message(&self, args: &Arguments) -> Result<String> {
        let request: ValidateRequest = coerce(VALIDATE_MESSAGE, args)?;
        let outcome = validate_with(&request.message, &self.config.rules);
        Ok(render::validation_report(&outcome))
    }

    fn suggest_type(&self, args: &Arguments) -> Result<String> {
        let request: SuggestRequest = coerce(SUGGEST_TYPE, args)?;
        let stats = self.vcs.staged_stats(self.repo_path(&request.repo_path))?;
        let suggestion = classify(&stats)?;

        tracing::debug!(
            "Suggested {} ({}) for {} files",
            suggestion.commit_type,
            suggestion.confidence,
            stats.files.len()
        );

        Ok(render::suggestion_report(&suggestion, &stats))
    }

    fn commit(&self, args: &Arguments) -> Result<String> {
        let request: CommitRequest = coerce(COMMIT, args)?;
        let repo_path = self.repo_path(&request.repo_path);

        if !self.vcs.has_staged_changes(repo_path)? {
            return Err(GitError::NoStagedChanges.into());
        }

        let fields = CommitFields::try_from(request.message)?;
        let message = fields.format();

        let outcome = validate_with(&message, &self.config.rules);
        if !outcome.valid {
            return Err(CommitError::InvalidMessage {
                issues: outcome.issues,
            }
            .into());
        }

        let sha = self.vcs.commit(&message, repo_path)?;
        Ok(render::commit_report(&sha, &message, outcome.warnings()))
    }
}

/// Tool metadata advertised to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: &'static str,
    pub description: String,
    pub input_schema: Value,
}

/// Definitions for every tool, with JSON input schemas.
pub fn tool_definitions() -> Vec<ToolDefinition> {
    let type_ids: Vec<&str> = CommitType::all().iter().map(|t| t.as_str()).collect();

    let message_properties = json!({
        "type": {
            "type": "string",
            "enum": type_ids,
            "description": "Commit type"
        },
        "title": {
            "type": "string",
            "description": "Short imperative summary, lowercase, no trailing period"
        },
        "scope": {
            "type": "string",
            "description": "Optional scope, e.g. a module or package name"
        },
        "description": {
            "type": "string",
            "description": "Optional longer description (commit body)"
        },
        "breaking": {
            "type": "boolean",
            "description": "Mark as a breaking change",
            "default": false
        }
    });

    let mut commit_properties = message_properties.clone();
    commit_properties["repo_path"] = repo_path_schema();

    vec![
        ToolDefinition {
            name: FORMAT_MESSAGE,
            description: "Format a gitmoji commit message: <emoji> <type>(<scope>): <title>"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": message_properties,
                "required": ["type", "title"]
            }),
        },
        ToolDefinition {
            name: VALIDATE_MESSAGE,
            description: "Validate a gitmoji commit message and report issues and warnings"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "message": {
                        "type": "string",
                        "description": "The full commit message"
                    }
                },
                "required": ["message"]
            }),
        },
        ToolDefinition {
            name: SUGGEST_TYPE,
            description: "Suggest a commit type from the staged changes".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "repo_path": repo_path_schema()
                }
            }),
        },
        ToolDefinition {
            name: COMMIT,
            description: "Format, validate and commit the staged changes".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": commit_properties,
                "required": ["type", "title"]
            }),
        },
    ]
}

fn repo_path_schema() -> Value {
    json!({
        "type": "string",
        "description": "Repository path (defaults to the configured or current directory)"
    })
}
