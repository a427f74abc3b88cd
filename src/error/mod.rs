// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Error types for gmc.
//!
//! Every failure the codec, classifier, git backend or tool layer can raise is
//! one of these. The tool dispatcher turns all of them into a text payload, so
//! nothing here ever reaches an MCP client as a raw fault.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for gmc operations.
#[derive(Error, Debug)]
pub enum GmcError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Git errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    // Commit message errors
    #[error("Commit error: {0}")]
    Commit(#[from] CommitError),

    // Tool dispatch errors
    #[error("Tool error: {0}")]
    Tool(#[from] ToolError),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON encoding/decoding errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Configuration file already exists: {path}. Use --force to overwrite")]
    AlreadyExists { path: PathBuf },

    #[error("Failed to parse configuration: {message}")]
    ParseError { message: String },

    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Errors raised by the version-control collaborator.
#[derive(Error, Debug)]
pub enum GitError {
    #[error("No staged changes found. Stage files with `git add` first")]
    NoStagedChanges,

    #[error("Git operation '{operation}' failed: {message}")]
    OperationFailed { operation: String, message: String },
}

impl GitError {
    /// Wrap a libgit2 failure for the named operation.
    pub fn operation(operation: impl Into<String>, err: git2::Error) -> Self {
        GitError::OperationFailed {
            operation: operation.into(),
            message: err.message().to_string(),
        }
    }
}

/// Commit message errors.
#[derive(Error, Debug)]
pub enum CommitError {
    #[error("Unknown commit type: '{commit_type}'")]
    UnknownType { commit_type: String },

    #[error("Malformed commit message: {message}")]
    MalformedMessage { message: String },

    #[error("Commit message failed validation: {}", .issues.join("; "))]
    InvalidMessage { issues: Vec<String> },
}

/// Tool dispatch errors.
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("Unknown tool: {name}")]
    UnknownOperation { name: String },

    #[error("Invalid arguments for {tool}: {message}")]
    InvalidArguments { tool: String, message: String },
}

/// Result type alias for gmc operations.
pub type Result<T> = std::result::Result<T, GmcError>;
