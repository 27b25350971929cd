//! CLI argument definitions for the directory enquiry tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use enquiry_map::DEFAULT_SUGGESTION_LIMIT;

#[derive(Parser)]
#[command(
    name = "enquiry",
    version,
    about = "Directory enquiry - find where people sit from a free-text question",
    long_about = "Answer questions like \"Where is Dr. Manoj Pandey?\" or \"HOD room number\".\n\n\
                  Queries are matched by name, alias and role keywords, tolerating\n\
                  misspellings and filler words."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory file (.toml or .json) to use instead of the built-in one.
    ///
    /// Falls back to the ENQUIRY_DIRECTORY environment variable.
    #[arg(long = "directory", value_name = "PATH", global = true)]
    pub directory: Option<PathBuf>,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Answer a single question.
    Ask(AskArgs),

    /// List the entries that plausibly match a query.
    Suggest(SuggestArgs),

    /// Show the directory, or the answer for one entry.
    Directory(DirectoryArgs),

    /// Answer questions read line by line from stdin.
    Interactive(InteractiveArgs),
}

#[derive(Parser)]
pub struct AskArgs {
    /// The question, e.g. "where is the dean".
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Seed for choosing the reply wording.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct SuggestArgs {
    /// Partial name, alias or role.
    #[arg(value_name = "QUERY", required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Maximum number of suggestions.
    #[arg(long = "limit", default_value_t = DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,
}

#[derive(Parser)]
pub struct DirectoryArgs {
    /// Print the answer for the entry with this full name.
    #[arg(long = "entry", value_name = "NAME")]
    pub entry: Option<String>,

    /// Seed for choosing the reply wording.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Parser)]
pub struct InteractiveArgs {
    /// Seed for choosing the reply wording.
    #[arg(long = "seed", value_name = "N")]
    pub seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
