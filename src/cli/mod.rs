//! CLI module for toolshed - command-line interface and subcommands.
//!
//! Loads a catalog file and prints its summaries.

pub mod commands;

pub use commands::Cli;
