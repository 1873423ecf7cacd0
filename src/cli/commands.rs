//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - catalog: print the published tool catalog
//! - exec: run one tool with parameter bindings
//! - geocode: resolve a city to coordinates

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// calltools - weather, geocoding and web search tools for function-calling models
#[derive(Parser, Debug)]
#[command(name = "calltools")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the tool catalog as JSON
    Catalog {
        /// Include internal tools that are not published
        #[arg(short, long)]
        all: bool,

        /// Print model-API definitions with JSON Schema inputs instead
        #[arg(short, long)]
        schema: bool,
    },

    /// Execute a tool
    Exec {
        /// Tool name, e.g. WeatherFromLatLon
        tool: String,

        /// Parameter binding as name=value (repeatable)
        #[arg(short = 'p', long = "param", value_name = "NAME=VALUE")]
        params: Vec<String>,

        /// Bindings as a JSON array of {parameterName, parameterValue}
        #[arg(long)]
        json: Option<String>,
    },

    /// Resolve a city to latitude and longitude
    Geocode {
        /// City or place name
        city: String,
    },
}
