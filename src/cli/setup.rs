//! Setup and initialization functions for CLI
//!
//! This module contains functions for initializing the runtime environment:
//! logging and configuration loading.

use crate::config::{self, SubjectLineConfig};
use anyhow::Result;
use std::path::Path;

/// Map `-v` occurrences to a default log filter
pub fn log_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise env_logger once. `RUST_LOG` overrides the verbosity flag.
pub fn init_logging(verbosity: u8) {
    let env = env_logger::Env::default().default_filter_or(log_filter(verbosity));
    if let Err(e) = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init()
    {
        // Already initialised - this is fine, just ignore
        eprintln!("Note: Logger already configured: {}", e);
    }
}

/// Load an explicit config file, or search for `.subjectline.toml`
pub fn load_settings(path: Option<&Path>) -> Result<SubjectLineConfig> {
    match path {
        Some(path) => Ok(config::load_config_from_path(path)?),
        None => Ok(config::load_config()),
    }
}
