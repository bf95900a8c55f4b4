pub mod envelope;
pub mod output;

pub use envelope::{ApiResponse, ErrorBody, ErrorEnvelope};
pub use output::{
    create_writer, AnalysisReport, JsonWriter, MarkdownWriter, OutputFormat, OutputWriter,
    ReportEntry, RuleListing, TerminalWriter,
};

use crate::core::Result;
use std::fs;
use std::path::Path;

pub fn read_file(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

/// Non-blank lines of `content`, kept exactly as written apart from the
/// line ending, so a subject scores the same from a file as from an argument.
pub fn subject_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
