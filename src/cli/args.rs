// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// gmc - Gitmoji commit tools for AI assistants
///
/// Runs as an MCP server by default. The subcommands run the same
/// operations directly from a shell.
#[derive(Parser, Debug)]
#[command(name = "gmc")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(about = "Gitmoji commit tools for AI assistants", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run (defaults to serve if not specified)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "GMC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Repository to operate on (defaults to the current directory)
    #[arg(long, global = true, env = "GMC_REPO")]
    pub repo: Option<PathBuf>,
}

/// Output format for scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Run the MCP server on stdio (default command)
    Serve,

    /// Format a commit message
    Format(MessageArgs),

    /// Validate a commit message
    Validate(ValidateArgs),

    /// Parse a commit message into its fields
    Parse(ParseArgs),

    /// Suggest a commit type from staged changes
    Suggest,

    /// Validate and create a commit from staged changes
    Commit(MessageArgs),

    /// List the commit types
    Types,

    /// Initialize gmc configuration
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Fields of a commit message.
#[derive(Parser, Debug, Clone)]
pub struct MessageArgs {
    /// Commit type (feat, fix, docs, ...)
    #[arg(short = 't', long = "type")]
    pub commit_type: String,

    /// Commit title
    #[arg(short = 'm', long = "message")]
    pub title: String,

    /// Commit scope
    #[arg(short, long)]
    pub scope: Option<String>,

    /// Commit body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Mark as breaking change
    #[arg(long)]
    pub breaking: bool,

    /// Wrap the body at the configured width
    #[arg(short, long)]
    pub wrap: bool,
}

/// Arguments for the validate command.
#[derive(Parser, Debug, Clone, Default)]
pub struct ValidateArgs {
    /// Message to validate; `-` or omitted reads stdin
    pub message: Option<String>,
}

/// Arguments for the parse command.
#[derive(Parser, Debug, Clone)]
pub struct ParseArgs {
    /// Message to parse
    pub message: String,
}

/// Arguments for the init command.
#[derive(Parser, Debug, Clone, Default)]
pub struct InitArgs {
    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// Get the effective command (defaults to Serve).
    pub fn effective_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Serve)
    }

    /// Check if JSON output was requested.
    pub fn is_json(&self) -> bool {
        self.format == Some(OutputFormat::Json)
    }
}
