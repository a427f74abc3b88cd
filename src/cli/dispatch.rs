// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use std::io::Read;
use std::path::Path;

use console::style;
use serde_json::Value;

use crate::commit::{parse, validate_with, wrap_paragraphs};
use crate::config::GmcConfig;
use crate::error::{CommitError, ConfigError, Result};
use crate::git::GitBackend;
use crate::server::McpServer;
use crate::tools::{render, Arguments, ToolDispatcher, COMMIT, FORMAT_MESSAGE, SUGGEST_TYPE};

use super::args::{Cli, Commands, InitArgs, MessageArgs, ParseArgs, ValidateArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    // Load configuration
    let mut config = if let Some(config_path) = &cli.config {
        GmcConfig::load_from(config_path)?
    } else {
        GmcConfig::load()?
    };

    if let Some(repo) = &cli.repo {
        config.repository.path = Some(repo.clone());
    }

    // Dispatch to the appropriate command handler
    match cli.effective_command() {
        Commands::Serve => run_serve(config),
        Commands::Format(args) => run_format(config, args),
        Commands::Validate(args) => run_validate(&cli, &config, args),
        Commands::Parse(args) => run_parse(args),
        Commands::Suggest => run_suggest(config),
        Commands::Commit(args) => run_commit(config, args),
        Commands::Types => run_types(&cli),
        Commands::Init(args) => run_init(args),
        Commands::Version => run_version(),
    }
}

/// Run the MCP server.
fn run_serve(config: GmcConfig) -> Result<()> {
    let server = McpServer::new(ToolDispatcher::new(GitBackend, config));
    server.run()
}

/// Run the format command.
fn run_format(config: GmcConfig, args: MessageArgs) -> Result<()> {
    tracing::debug!("Running format command with args: {:?}", args);

    let arguments = message_arguments(&config, &args);
    let tools = ToolDispatcher::new(GitBackend, config);
    println!("{}", tools.dispatch(FORMAT_MESSAGE, &arguments)?);
    Ok(())
}

/// Run the validate command.
fn run_validate(cli: &Cli, config: &GmcConfig, args: ValidateArgs) -> Result<()> {
    let message = match args.message.as_deref() {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim_end().to_string()
        }
        Some(message) => message.to_string(),
    };

    tracing::debug!("Validating {} byte message", message.len());

    let outcome = validate_with(&message, &config.rules);

    if cli.is_json() {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        let report = render::validation_report(&outcome);
        if outcome.valid {
            println!("{}", style(report).green());
        } else {
            println!("{}", style(report).red());
        }
    }

    if outcome.valid {
        Ok(())
    } else {
        Err(CommitError::InvalidMessage {
            issues: outcome.issues,
        }
        .into())
    }
}

/// Run the parse command.
fn run_parse(args: ParseArgs) -> Result<()> {
    let parsed = parse(&args.message).ok_or_else(|| CommitError::MalformedMessage {
        message: args.message.clone(),
    })?;

    println!("{}", serde_json::to_string_pretty(&parsed)?);
    Ok(())
}

/// Run the suggest command.
fn run_suggest(config: GmcConfig) -> Result<()> {
    let tools = ToolDispatcher::new(GitBackend, config);
    println!("{}", tools.dispatch(SUGGEST_TYPE, &Arguments::new())?);
    Ok(())
}

/// Run the commit command.
fn run_commit(config: GmcConfig, args: MessageArgs) -> Result<()> {
    tracing::debug!("Running commit command with args: {:?}", args);

    let arguments = message_arguments(&config, &args);
    let tools = ToolDispatcher::new(GitBackend, config);
    println!("{}", tools.dispatch(COMMIT, &arguments)?);
    Ok(())
}

/// Run the types command.
fn run_types(cli: &Cli) -> Result<()> {
    if cli.is_json() {
        let types: Vec<_> = crate::types::registry().collect();
        println!("{}", serde_json::to_string_pretty(&types)?);
        return Ok(());
    }

    for info in crate::types::registry() {
        println!(
            "{} {:<10} {}",
            info.emoji,
            style(info.id).bold(),
            style(info.description).dim()
        );
    }

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("gmc {}", crate::version::version_string());

    if let Some(sha) = crate::version::GIT_SHA {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::GIT_COMMIT_DATE {
        println!("commit date: {}", date);
    }

    Ok(())
}

/// Run the init command.
fn run_init(args: InitArgs) -> Result<()> {
    use crate::config::default::example_config;

    tracing::debug!("Running init command with args: {:?}", args);

    let config_path = Path::new("gmc.toml");

    if config_path.exists() && !args.force {
        return Err(ConfigError::AlreadyExists {
            path: config_path.to_path_buf(),
        }
        .into());
    }

    std::fs::write(config_path, example_config())?;

    println!(
        "{} Created {}",
        style("✓").green(),
        style(config_path.display()).bold()
    );

    Ok(())
}

/// Build tool arguments from the message flags.
fn message_arguments(config: &GmcConfig, args: &MessageArgs) -> Arguments {
    let description = args.body.as_ref().map(|body| {
        if args.wrap {
            wrap_paragraphs(body, config.format.wrap_width)
        } else {
            body.clone()
        }
    });

    let mut arguments = Arguments::new();
    arguments.insert("type".to_string(), Value::String(args.commit_type.clone()));
    arguments.insert("title".to_string(), Value::String(args.title.clone()));
    if let Some(scope) = &args.scope {
        arguments.insert("scope".to_string(), Value::String(scope.clone()));
    }
    if let Some(description) = description {
        arguments.insert("description".to_string(), Value::String(description));
    }
    if args.breaking {
        arguments.insert("breaking".to_string(), Value::Bool(true));
    }
    arguments
}
