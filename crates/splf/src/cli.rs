//! Command line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use splf_core::{OpenMode, OpenOptions, SortOptions, SortOrder, ToolConfig};

/// Reformat and search spooled file print streams.
#[derive(Parser, Debug, Clone)]
#[command(name = "splf")]
#[command(version)]
#[command(about = "Reformat and search spooled file print streams", long_about = None)]
pub struct Cli {
    /// Path to a YAML config file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Replay carriage control of raw print streams into readable text
    Reformat(ReformatArgs),
    /// Search print streams for a term
    Search(SearchArgs),
    /// Filter and sort a spooled file catalog and print local file names
    List(ListArgs),
}

/// Rendering flags shared by commands that read print streams.
#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    /// Lines per page (overrides the configured default)
    #[arg(long, value_name = "LINES")]
    pub page_length: Option<usize>,

    /// Keep the text as extracted, without replaying carriage control
    #[arg(long)]
    pub raw: bool,
}

impl RenderArgs {
    /// Open options from the config with command line overrides applied.
    pub fn open_options(&self, config: &ToolConfig) -> OpenOptions {
        let mut options = config.open_options();
        if let Some(page_length) = self.page_length {
            options.page_length = Some(page_length);
        }
        if self.raw {
            options.open_mode = OpenMode::WithoutSpaces;
        }
        options
    }
}

/// Arguments of `splf reformat`.
#[derive(Args, Debug, Clone)]
pub struct ReformatArgs {
    /// Raw print-stream files
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Directory receiving one output file per input (stdout for a single input when omitted)
    #[arg(short, long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Rendering flags
    #[command(flatten)]
    pub render: RenderArgs,
}

/// Arguments of `splf search`.
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Text to look for (case-insensitive)
    pub term: String,

    /// Raw print-stream files
    #[arg(required = true, value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Rendering flags
    #[command(flatten)]
    pub render: RenderArgs,
}

/// Sort key accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Spooled file name
    Name,
    /// Creation timestamp
    Date,
}

/// Arguments of `splf list`.
#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// JSON file holding an array of spooled file entries
    #[arg(value_name = "CATALOG")]
    pub catalog: PathBuf,

    /// Space separated words; entries matching any word are kept
    #[arg(short, long, value_name = "WORDS")]
    pub search: Option<String>,

    /// Sort key
    #[arg(long, value_enum, default_value_t = SortKey::Date)]
    pub sort: SortKey,

    /// Sort ascending (default is descending)
    #[arg(long)]
    pub ascending: bool,

    /// Name files after the output queue instead of the job user
    #[arg(long)]
    pub outq: bool,
}

impl ListArgs {
    /// Sort options selected on the command line.
    pub fn sort_options(&self) -> SortOptions {
        SortOptions {
            order: match self.sort {
                SortKey::Name => SortOrder::Name,
                SortKey::Date => SortOrder::Date,
            },
            ascending: self.ascending,
        }
    }
}
