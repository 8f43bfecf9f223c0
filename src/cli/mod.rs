//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

use usagewire::config::Config;
use usagewire::error::Result;
use usagewire::registry::ModelKind;

pub mod completion;
pub mod config;
pub mod enums;
pub mod input;
pub mod inspect;
pub mod models;
pub mod normalize;
pub mod status;

/// usagewire - decode, inspect and normalize usage-metering JSON payloads
#[derive(Parser, Debug)]
#[command(name = "usagewire")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (pretty, table, json)
    #[arg(
        long,
        global = true,
        env = "USAGEWIRE_FORMAT",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "USAGEWIRE_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "USAGEWIRE_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-oriented summary
    #[default]
    Pretty,
    /// One row per entry
    Table,
    /// Structured output with metadata
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode a payload and report whether it typed or fell back to raw
    Inspect {
        /// Model to decode as (see `usagewire models`)
        model: ModelKind,

        /// JSON file to read; stdin when omitted or `-`
        file: Option<String>,
    },

    /// Decode then re-encode a payload
    Normalize {
        /// Model to decode as (see `usagewire models`)
        model: ModelKind,

        /// JSON file to read; stdin when omitted or `-`
        file: Option<String>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,

        /// Fail when the payload cannot be typed
        #[arg(long)]
        strict: bool,
    },

    /// List decodable models and their required fields
    Models,

    /// List enums and their allowed values
    Enums {
        /// Show a single enum
        name: Option<String>,

        /// Check a value against the named enum
        #[arg(long, requires = "name")]
        check: Option<String>,
    },

    /// Show configuration status
    Status,

    /// Manage preferences in the config file
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Display version information
    Version,
}

/// Config file subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Set a preference (format: pretty|table|json, pretty: true|false)
    Set {
        #[arg(value_parser = ["format", "pretty"])]
        key: String,

        value: String,
    },
}

/// Options shared by every command handler
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Format resolved from flag, env, config and default, in that order
    pub format: OutputFormat,

    /// Custom config file path (defaults to ~/.usagewire/config.yaml)
    pub config: Option<String>,

    pub preferences_pretty: bool,
}

impl GlobalOptions {
    /// Resolve global options, reading the config file when one exists.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let config = Config::load_or_default(cli.config.as_deref())?;

        let format = match cli.format {
            Some(format) => format,
            None => config
                .preferences
                .format
                .as_deref()
                .and_then(|f| <OutputFormat as clap::ValueEnum>::from_str(f, true).ok())
                .unwrap_or_default(),
        };

        Ok(Self {
            format,
            config: cli.config.clone(),
            preferences_pretty: config.preferences.pretty,
        })
    }

    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}
