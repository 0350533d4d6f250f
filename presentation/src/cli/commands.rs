//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Formatted text for the terminal
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for tripmate_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => tripmate_domain::OutputFormat::Text,
            OutputFormat::Json => tripmate_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for tripmate
#[derive(Parser, Debug)]
#[command(name = "tripmate")]
#[command(author, version, about = "Travel survey and place recommendations")]
#[command(long_about = r#"
Tripmate asks five short questions about your travel style and recommends
three places that fit.

Configuration files are loaded from (in priority order):
1. --config <path>       Explicit config file
2. ./tripmate.toml       Project-level config
3. ~/.config/tripmate/config.toml   Global config

Example:
  tripmate survey
  tripmate results
  tripmate place 1
  tripmate feedback 1 --rating 5 --comment "최고예요"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Output format (overrides [output] format)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Never contact the catalog service; use bundled data only
    #[arg(long, global = true)]
    pub offline: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Answer the travel survey and get recommendations (default)
    Survey,
    /// Show the recommendations from the last survey
    Results,
    /// Show details for a place
    Place {
        /// Place id
        id: u64,
    },
    /// Add or remove a bookmark
    Bookmark {
        /// Place id
        id: u64,
    },
    /// List bookmarked places
    Bookmarks,
    /// Rate a place
    Feedback {
        /// Place id
        id: u64,
        /// Stars from 1 to 5
        #[arg(short, long, default_value_t = 5)]
        rating: u8,
        /// Review text
        #[arg(short, long, default_value = "")]
        comment: String,
    },
    /// Show or set the location sent with recommendation requests
    Location {
        /// New location
        name: Option<String>,
    },
}

impl Cli {
    /// The subcommand to run, `survey` when none was given
    pub fn subcommand(&self) -> Command {
        self.command.clone().unwrap_or(Command::Survey)
    }
}
