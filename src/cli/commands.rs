//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - summary: numbered availability report (default)
//! - list: catalog blocks for every tool
//! - reservations: return dates for one tool
//! - available: available quantity for one tool

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// toolshed - browse a tool reservation library
#[derive(Parser, Debug)]
#[command(name = "toolshed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file (.yml, .yaml or .json), overrides the config
    #[arg(short = 'f', long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show every tool with its available quantity
    Summary,

    /// Show the catalog listing for every tool
    List,

    /// Show the return dates booked against a tool
    Reservations {
        /// Tool name (exact match)
        tool: String,
    },

    /// Show how many units of a tool are available
    Available {
        /// Tool name (exact match)
        tool: String,
    },
}
