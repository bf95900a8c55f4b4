pub mod analyze;
pub mod check;
pub mod init;
pub mod rules;

use crate::config::SubjectLineConfig;
use crate::core::Result;
use crate::io::OutputFormat;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Pick the output format: command line first, then config, then terminal
pub fn resolve_format(
    requested: Option<crate::cli::OutputFormat>,
    settings: &SubjectLineConfig,
) -> OutputFormat {
    if let Some(format) = requested {
        return format.into();
    }

    match settings.default_format().map(str::parse::<OutputFormat>) {
        Some(Ok(format)) => format,
        Some(Err(e)) => {
            log::warn!("{} in config. Using terminal output.", e);
            OutputFormat::Terminal
        }
        None => OutputFormat::Terminal,
    }
}

/// Open the report destination: a file when given, stdout otherwise
pub fn open_destination(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(std::io::stdout())),
    }
}
