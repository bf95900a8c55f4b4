use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// JSON wrapped in a `{ success, data }` envelope
    Json,
    /// Markdown report
    Markdown,
    /// Colored human-readable output (default)
    Terminal,
}

impl From<OutputFormat> for io::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => io::OutputFormat::Json,
            OutputFormat::Markdown => io::OutputFormat::Markdown,
            OutputFormat::Terminal => io::OutputFormat::Terminal,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "subjectline")]
#[command(about = "Email subject line analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one or more subject lines
    Analyze {
        /// Subject lines to analyze
        #[arg(required_unless_present = "file")]
        subjects: Vec<String>,

        /// Read subject lines from a file, one per line ("-" for stdin)
        #[arg(short = 'f', long)]
        file: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Seed for the suggested power word sample
        #[arg(long, env = "SUBJECTLINE_SEED")]
        seed: Option<u64>,

        /// Configuration file (defaults to the nearest .subjectline.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Fail when a subject line misses the quality thresholds
    Check {
        /// Subject line to check
        subject: String,

        /// Minimum acceptable overall score
        #[arg(long, default_value = "60")]
        min_score: u32,

        /// Maximum acceptable spam score
        #[arg(long)]
        max_spam: Option<u32>,

        /// Output format (overrides the config file)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Seed for the suggested power word sample
        #[arg(long, env = "SUBJECTLINE_SEED")]
        seed: Option<u64>,

        /// Configuration file (defaults to the nearest .subjectline.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List the spam trigger table
    Triggers {
        #[arg(long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// List the power word table
    PowerWords {
        #[arg(long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
