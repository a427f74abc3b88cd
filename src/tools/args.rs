// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Typed tool arguments.
//!
//! Raw JSON arguments are deserialized into these structs before anything
//! reaches the codec or classifier.

use crate::commit::CommitFields;
use crate::error::{GmcError, Result, ToolError};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::PathBuf;

/// Untyped tool arguments as received from the protocol layer.
pub type Arguments = Map<String, Value>;

/// Deserialize raw arguments for `tool` into a typed request.
pub fn coerce<T: DeserializeOwned>(tool: &str, args: &Arguments) -> Result<T> {
    serde_json::from_value(Value::Object(args.clone())).map_err(|e| {
        ToolError::InvalidArguments {
            tool: tool.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Arguments describing a commit message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    #[serde(rename = "type")]
    pub commit_type: String,
    pub title: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub breaking: bool,
}

impl TryFrom<MessageRequest> for CommitFields {
    type Error = GmcError;

    fn try_from(request: MessageRequest) -> Result<Self> {
        let mut fields = CommitFields::from_type_str(&request.commit_type, request.title)?
            .with_breaking(request.breaking);
        if let Some(scope) = request.scope {
            fields = fields.with_scope(scope);
        }
        if let Some(description) = request.description {
            fields = fields.with_description(description);
        }
        Ok(fields)
    }
}

/// Arguments for `git_validate_message`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub message: String,
}

/// Arguments for `git_suggest_type`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub repo_path: Option<PathBuf>,
}

/// Arguments for `git_commit`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitRequest {
    #[serde(flatten)]
    pub message: MessageRequest,
    #[serde(default)]
    pub repo_path: Option<PathBuf>,
}
