//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --tags, --config) are inherited by all subcommands
//! - `query` applies transitions in a fixed order: selects, then deselects, then the query

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// tagpick - nested-set tag tree selector
#[derive(Parser, Debug)]
#[command(name = "tagpick")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Tag collection (JSON array of nested-set records)
    #[arg(long, global = true, value_name = "FILE")]
    pub tags: Option<PathBuf>,

    /// Config file (default: ./tagpick.toml, then the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Print the reconstructed tag tree
    Tree,

    /// Apply a selection and query, then print the derived views
    Query {
        /// Tag id to select (repeatable, applied in order)
        #[arg(short, long = "select", value_name = "ID")]
        select: Vec<String>,

        /// Tag id to deselect (repeatable, applied after selects)
        #[arg(short, long = "deselect", value_name = "ID")]
        deselect: Vec<String>,

        /// Free-text filter, case-insensitive
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// Validate the nested-set structure of the tag collection
    Check,

    /// Pick tags interactively
    Pick,
}
