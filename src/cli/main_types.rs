use crate::display::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster-pager")]
#[command(about = "Paginate and search a roster of rendered student entries")]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (defaults to <config dir>/roster-pager/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Entries per page
    #[arg(long, global = true, env = "ROSTER_PAGE_SIZE")]
    pub page_size: Option<usize>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Treat multi-character queries as regular expressions
    #[arg(long, global = true)]
    pub pattern: bool,

    /// Render out-of-range pages as empty instead of clamping them
    #[arg(long, global = true)]
    pub no_clamp: bool,

    /// Disable colors in table output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the full roster
    Show {
        /// Collection file (.json array of strings, or markup with <li> items)
        file: PathBuf,
        /// Page to show
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Search the roster by name and show a page of the matches
    Search {
        /// Collection file
        file: PathBuf,
        /// A single initial, or text contained in the full name
        query: String,
        /// Page of the matches to show
        #[arg(long, default_value = "1")]
        page: usize,
    },
    /// Page through and search the roster interactively
    Browse {
        /// Collection file
        file: PathBuf,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Set a configuration value and save it
    Set {
        /// Configuration key (page_size, search_mode, clamp_pages, regions.*)
        key: String,
        /// Configuration value
        value: String,
    },
    /// Print the configuration file location
    Path,
}
