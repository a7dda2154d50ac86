use serde::{Deserialize, Serialize};
use std::fmt;

/// How rendered pages are written to stdout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The three rendered regions as markup
    #[default]
    Html,
    /// A terminal table of the visible entries
    Table,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Table => write!(f, "table"),
        }
    }
}

/// Struct to manage display options
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Output format
    pub format: OutputFormat,
    /// Disable the use of colors
    pub no_color: bool,
    /// Fixed table width instead of the terminal width
    pub max_width: Option<usize>,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Html,
            no_color: false,
            max_width: None,
        }
    }
}

impl DisplayOptions {
    /// Create a new DisplayOptions instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set color disable
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        self.no_color = no_color;
        self
    }

    /// Set a fixed width
    pub fn with_max_width(mut self, max_width: Option<usize>) -> Self {
        self.max_width = max_width;
        self
    }

    /// Set options from environment variables
    pub fn from_env() -> Self {
        let mut options = Self::default();

        if std::env::var("NO_COLOR").is_ok() {
            options.no_color = true;
        }

        if let Ok(width_str) = std::env::var("ROSTER_TABLE_WIDTH") {
            if let Ok(width) = width_str.parse::<usize>() {
                options.max_width = Some(width);
            }
        }

        options
    }

    /// Colors only make sense on a terminal
    pub fn use_colors(&self) -> bool {
        !self.no_color && atty::is(atty::Stream::Stdout)
    }
}

/// Whether an interactive session should print prompts
pub fn is_interactive_terminal() -> bool {
    atty::is(atty::Stream::Stdin) && atty::is(atty::Stream::Stdout) && is_terminal_supported()
}

/// Check terminal support
fn is_terminal_supported() -> bool {
    term_supported(std::env::var("TERM").ok().as_deref())
}

fn term_supported(term: Option<&str>) -> bool {
    term.is_some_and(|term| !term.is_empty() && !term.starts_with("dumb"))
}
