//! CLI command definitions and argument parsing.

use clap::{Args, Parser, Subcommand};

/// Prospector CLI - Build Japanese B2B sales lead lists.
#[derive(Debug, Parser)]
#[command(name = "prospector")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliFormat {
    /// Summary table (default)
    Table,
    /// Detailed listing grouped by company
    Detail,
    /// CSV
    Csv,
    /// Tab separated
    Tsv,
    /// JSON
    Json,
    /// Markdown table
    Markdown,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find companies and keymen by industry and revenue band
    Search(SearchArgs),

    /// Find companies and keymen from free-text conditions
    Lookup(LookupArgs),

    /// List saved search jobs
    History(HistoryArgs),

    /// Show one saved search job
    Show(ShowArgs),

    /// Export a saved job's results (csv, tsv, json or markdown)
    Export(ExportArgs),
}

/// Options shared by commands that run the pipeline.
#[derive(Debug, Clone, Args)]
pub struct RunOptions {
    /// Maximum keymen per company (1-10)
    #[arg(short = 'k', long)]
    pub max_keymen: Option<usize>,

    /// Look up Facebook and X profiles for every keyman
    #[arg(long)]
    pub social: bool,

    /// Never touch the network; use synthetic data
    #[arg(long)]
    pub offline: bool,

    /// Fixed catalog seed for reproducible runs
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the rendered output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Industry key (e.g., it_saas, fintech, beauty)
    #[arg(short, long)]
    pub industry: String,

    /// Revenue band key (e.g., under10, 30to50, over1000)
    #[arg(short, long)]
    pub revenue: String,

    /// Number of companies (1-100)
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,

    /// Free keywords recorded with the search
    #[arg(long, default_value = "")]
    pub keywords: String,

    /// Record the run as a job in the configured store
    #[arg(long)]
    pub save: bool,

    #[command(flatten)]
    pub run: RunOptions,
}

/// Arguments for the lookup command.
#[derive(Debug, Parser)]
pub struct LookupArgs {
    /// Free-text conditions (e.g., "東京 物流 SaaS")
    pub conditions: String,

    /// Number of companies
    #[arg(short = 'n', long, default_value = "5")]
    pub count: usize,

    #[command(flatten)]
    pub run: RunOptions,
}

/// Arguments for the history command.
#[derive(Debug, Parser)]
pub struct HistoryArgs {
    /// Maximum number of jobs
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Arguments for the show command.
#[derive(Debug, Parser)]
pub struct ShowArgs {
    /// Job ID
    pub id: i64,
}

/// Arguments for the export command.
#[derive(Debug, Parser)]
pub struct ExportArgs {
    /// Job ID
    pub id: i64,

    /// Output file; defaults to stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Detail => crate::config::OutputFormat::Detail,
            CliFormat::Csv => crate::config::OutputFormat::Csv,
            CliFormat::Tsv => crate::config::OutputFormat::Tsv,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Markdown => crate::config::OutputFormat::Markdown,
        }
    }
}
