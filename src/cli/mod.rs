//! CLI module for subjectline
//!
//! This module provides the command-line interface, including:
//! - Argument parsing (`args`)
//! - Runtime setup (`setup`)

pub mod args;
pub mod setup;

// Re-export commonly used types for convenience
pub use args::{Cli, Commands, OutputFormat};
pub use setup::{init_logging, load_settings, log_filter};

/// Parse CLI arguments using Clap
pub fn parse_args() -> Cli {
    args::parse_args()
}
