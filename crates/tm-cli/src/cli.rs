//! CLI argument definitions for the topic-modelling toolkit.

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tm_model::Periodicity;

#[derive(Parser)]
#[command(
    name = "tm",
    version,
    about = "Topic-modelling corpus preparation",
    long_about = "Prepare text corpora for topic modelling.\n\n\
                  Onboards .txt corpora, extracts LCCN metadata from file names,\n\
                  counts records over time and builds token dictionaries."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
    /// Build a corpus table from a zip archive, a directory or a Zenodo record.
    Onboard(OnboardArgs),

    /// Add date, publication reference and publication name columns.
    Lccn(LccnArgs),

    /// Count records per day, month or year and title.
    TimeDist(TimeDistArgs),

    /// Build a token dictionary from tokenised documents.
    Dictionary(DictionaryArgs),
}

#[derive(Parser)]
#[command(group(
    ArgGroup::new("source")
        .required(true)
        .args(["zip", "dir", "zenodo_doi"])
))]
pub struct OnboardArgs {
    /// Zip archive containing .txt files.
    #[arg(long = "zip", value_name = "PATH")]
    pub zip: Option<PathBuf>,

    /// Directory containing .txt files.
    #[arg(long = "dir", value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Zenodo record identifier.
    #[arg(long = "zenodo-doi", value_name = "DOI", requires = "zenodo_file")]
    pub zenodo_doi: Option<String>,

    /// Zip file name within the Zenodo record.
    #[arg(long = "zenodo-file", value_name = "NAME", requires = "zenodo_doi")]
    pub zenodo_file: Option<String>,

    /// Output CSV path for the corpus table.
    #[arg(long = "output", short = 'o', value_name = "CSV")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct LccnArgs {
    /// Input CSV table.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column holding the file names.
    #[arg(long = "file-name-col", value_name = "COL", default_value = "file_name")]
    pub file_name_col: String,

    /// Reference map JSON: [[codes...], [names...]].
    #[arg(long = "map", value_name = "JSON")]
    pub map: Option<PathBuf>,

    /// Output CSV path for the augmented table.
    #[arg(long = "output", short = 'o', value_name = "CSV")]
    pub output: PathBuf,
}

#[derive(Parser)]
pub struct TimeDistArgs {
    /// Input CSV table.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Bucket size.
    #[arg(long = "periodicity", value_enum, default_value = "month")]
    pub periodicity: PeriodicityArg,

    /// Column holding YYYY-MM-DD dates.
    #[arg(long = "date-col", value_name = "COL", default_value = "date")]
    pub date_col: String,

    /// Column holding the publication title.
    #[arg(long = "title-col", value_name = "COL", default_value = "publication_name")]
    pub title_col: String,

    /// Output CSV path (prints the table when omitted).
    #[arg(long = "output", short = 'o', value_name = "CSV")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct DictionaryArgs {
    /// Tokenised documents JSON: [["token", ...], ...].
    #[arg(value_name = "TOKENS")]
    pub tokens: PathBuf,

    /// Keep tokens contained in at least this many documents.
    #[arg(long = "no-below", value_name = "N")]
    pub no_below: Option<u64>,

    /// Keep tokens contained in at most this fraction of documents.
    #[arg(long = "no-above", value_name = "FRACTION")]
    pub no_above: Option<f64>,

    /// Keep only the N most frequent tokens.
    #[arg(long = "keep-n", value_name = "N")]
    pub keep_n: Option<usize>,

    /// Token kept regardless of frequency (repeatable).
    #[arg(long = "keep-token", value_name = "TOKEN")]
    pub keep_tokens: Vec<String>,

    /// Number of most common tokens to report.
    #[arg(long = "most-common", value_name = "N", default_value_t = 10)]
    pub most_common: usize,

    /// Output CSV path for the dictionary (key, word, cf, df).
    #[arg(long = "output", short = 'o', value_name = "CSV")]
    pub output: Option<PathBuf>,
}

/// CLI periodicity choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum PeriodicityArg {
    Day,
    Month,
    Year,
}

impl From<PeriodicityArg> for Periodicity {
    fn from(value: PeriodicityArg) -> Self {
        match value {
            PeriodicityArg::Day => Periodicity::Day,
            PeriodicityArg::Month => Periodicity::Month,
            PeriodicityArg::Year => Periodicity::Year,
        }
    }
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
