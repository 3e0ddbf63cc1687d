//! Subcommand implementations for the tagpick binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tagpick::{load_tags, Config, Tag};

use crate::ui::terminal::TerminalCapabilities;

pub mod check;
pub mod pick;
pub mod query;
pub mod tree;

/// Settings shared by every subcommand, resolved from CLI flags, config and
/// the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandContext {
    pub json: bool,
    pub unicode: bool,
    pub tags_file: PathBuf,
    pub caps: TerminalCapabilities,
}

impl CommandContext {
    pub fn new(
        cli_json: bool,
        cli_tags: Option<PathBuf>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json: cli_json || config.output.json,
            unicode: config.output.unicode && caps.supports_unicode,
            tags_file: cli_tags.unwrap_or_else(|| config.tags.file.clone()),
            caps,
        }
    }

    pub fn load_tags(&self) -> Result<Vec<Tag>> {
        load_tags(&self.tags_file)
            .with_context(|| format!("failed to load tags from {}", self.tags_file.display()))
    }
}
