// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! gmc - Gitmoji commit tools for AI assistants
//!
//! Formats, validates and creates gitmoji-style commits
//! (`<emoji> <type>(<scope>)!: <title>`), and exposes those operations as
//! MCP tools over stdio.
//!
//! # Features
//!
//! - **Type Registry**: fixed table of commit types and their emoji
//! - **Message Codec**: format, parse and validate commit messages
//! - **Change Classifier**: suggest a commit type from staged changes
//! - **MCP Server**: `git_format_message`, `git_validate_message`,
//!   `git_suggest_type` and `git_commit` tools for AI assistants
//!
//! # Example
//!
//! ```
//! use gmc::commit::{validate, CommitFields};
//! use gmc::types::CommitType;
//!
//! let message = CommitFields::new(CommitType::Feat, "add OAuth2 authentication")
//!     .with_scope("auth")
//!     .format();
//! assert_eq!(message, "✨ feat(auth): add OAuth2 authentication");
//! assert!(validate(&message).valid);
//! ```

// Module declarations
pub mod analysis;
pub mod cli;
pub mod commit;
pub mod config;
pub mod error;
pub mod git;
pub mod server;
pub mod tools;
pub mod types;

// Re-exports for convenience
pub use config::GmcConfig;
pub use error::{GmcError, Result};

/// Version information embedded at compile time.
pub mod version {
    /// The current version of gmc.
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");

    /// The git SHA at compile time (if available).
    pub const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

    /// The git commit date at compile time (if available).
    pub const GIT_COMMIT_DATE: Option<&str> = option_env!("VERGEN_GIT_COMMIT_DATE");

    /// Get a formatted version string.
    pub fn version_string() -> String {
        match (GIT_SHA, GIT_COMMIT_DATE) {
            (Some(sha), Some(date)) => {
                format!("{} ({} {})", VERSION, &sha[..7.min(sha.len())], date)
            }
            (Some(sha), None) => {
                format!("{} ({})", VERSION, &sha[..7.min(sha.len())])
            }
            _ => VERSION.to_string(),
        }
    }
}
