//! tagpick CLI - nested-set tag tree selector
//!
//! Usage: tagpick [--tags FILE] <COMMAND>
//!
//! Commands:
//!   tree   Print the reconstructed tag tree
//!   query  Apply a selection and query, then print the derived views
//!   check  Validate the nested-set structure
//!   pick   Pick tags interactively

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use tagpick::config::Config;
use tagpick::presentation::{Cli, Commands};

mod commands;
mod ui;

use commands::CommandContext;

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("tagpick={default_level}")));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::resolve(cli.config.as_deref(), &cwd)?;
    for warning in &warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => tracing::warn!(
                "unknown config key '{}' in {} (did you mean '{}'?)",
                warning.key,
                location,
                suggestion
            ),
            None => tracing::warn!("unknown config key '{}' in {}", warning.key, location),
        }
    }

    let caps = ui::terminal::detect_capabilities();
    let ctx = CommandContext::new(cli.json, cli.tags, &config, caps);
    tracing::debug!(?ctx, "resolved command context");

    match cli.command {
        Commands::Tree => commands::tree::cmd_tree(&ctx).map(|()| true),
        Commands::Query {
            select,
            deselect,
            query,
        } => commands::query::cmd_query(&ctx, &select, &deselect, &query).map(|()| true),
        Commands::Check => commands::check::cmd_check(&ctx),
        Commands::Pick => commands::pick::cmd_pick(&ctx).map(|()| true),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
