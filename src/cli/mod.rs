//! CLI module for calltools - command-line interface and subcommands.
//!
//! Provides catalog printing, tool execution and direct geocoding.

pub mod commands;
pub mod console;

pub use commands::Cli;
