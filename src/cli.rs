//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for menufind using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: Interactive terminal search over a catalog
//! - **query**: Run one query and print what the page would show
//! - **categories**: List the catalog's categories
//! - **contact**: Validate a contact form submission
//! - **config**: Show or create the configuration file
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use menufind::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["menufind", "query", "menu.toml", "pizza", "--json"]);
//! assert!(matches!(cli.command, Commands::Query { json: true, .. }));
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "menufind")]
#[command(about = "Live search over a restaurant menu", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Search a catalog interactively
    #[command(visible_alias = "b")]
    Browse {
        /// Catalog file (TOML or JSON)
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
    },

    /// Run a single query against a catalog
    #[command(visible_alias = "q")]
    Query {
        /// Catalog file (TOML or JSON)
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,

        /// Query text, matched against item names and descriptions
        #[arg(value_name = "TEXT", default_value = "")]
        text: String,

        /// Only show items of this category
        #[arg(short = 'c', long = "category", value_name = "KEY")]
        category: Option<String>,

        /// Print the result as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// List the categories of a catalog
    Categories {
        /// Catalog file (TOML or JSON)
        #[arg(value_name = "CATALOG")]
        catalog: PathBuf,
    },

    /// Validate a contact form submission
    Contact {
        #[arg(long = "name", default_value = "")]
        name: String,

        #[arg(long = "email", default_value = "")]
        email: String,

        #[arg(long = "message", default_value = "")]
        message: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Print the path of the configuration file
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long = "force")]
        force: bool,
    },
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_with_category() {
        let cli = Cli::try_parse_from([
            "menufind", "query", "menu.toml", "salad", "--category", "starters",
        ])
        .unwrap();

        match cli.command {
            Commands::Query { catalog, text, category, json } => {
                assert_eq!(catalog, PathBuf::from("menu.toml"));
                assert_eq!(text, "salad");
                assert_eq!(category.as_deref(), Some("starters"));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_query_text_defaults_to_empty() {
        let cli = Cli::try_parse_from(["menufind", "q", "menu.toml"]).unwrap();
        assert!(matches!(cli.command, Commands::Query { ref text, .. } if text.is_empty()));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "menufind", "categories", "menu.json", "--quiet", "--config", "/tmp/c.toml",
        ])
        .unwrap();

        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_parse_contact() {
        let cli = Cli::try_parse_from([
            "menufind", "contact", "--name", "Ada", "--email", "ada@example.com",
        ])
        .unwrap();

        match cli.command {
            Commands::Contact { name, email, message } => {
                assert_eq!(name, "Ada");
                assert_eq!(email, "ada@example.com");
                assert!(message.is_empty());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_init() {
        let cli = Cli::try_parse_from(["menufind", "config", "init", "--force"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config { command: ConfigCommands::Init { force: true } }
        ));
    }

    #[test]
    fn test_browse_requires_catalog() {
        assert!(Cli::try_parse_from(["menufind", "browse"]).is_err());
    }
}
