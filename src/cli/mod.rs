//! CLI argument parsing for traipse
//!
//! Uses clap for argument parsing.
//! Supports global flags: --world, --format, --quiet, --verbose

pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use traipse_core::format::OutputFormat;
use parse::parse_format;

/// Traipse - text-based graph exploration game
#[derive(Parser, Debug)]
#[command(name = "traipse")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// World definition file (TOML); defaults to the built-in island
    #[arg(long, global = true)]
    pub world: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive session (default)
    Play {
        /// Player name; read from stdin when omitted
        #[arg(long)]
        player: Option<String>,

        /// Player nickname; read from stdin when omitted
        #[arg(long)]
        alias: Option<String>,
    },

    /// Print every node with its outgoing connections
    Map,

    /// Validate a world definition and report its shape
    Check,
}
