use super::{open_destination, resolve_format};
use crate::cli::{self, OutputFormat};
use crate::io::{self, create_writer, AnalysisReport};
use crate::scoring::SubjectLineScorer;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub struct AnalyzeConfig {
    pub subjects: Vec<String>,
    pub file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(config: AnalyzeConfig) -> Result<()> {
    let settings = cli::load_settings(config.config.as_deref())?;
    let subjects = collect_subjects(config.subjects, config.file.as_deref())?;
    if subjects.is_empty() {
        anyhow::bail!("No subject lines to analyze");
    }

    let scorer = SubjectLineScorer::from_config(&settings);
    let results = scorer.analyze_batch(&subjects, config.seed);
    let report = AnalysisReport::from_results(&subjects, results);

    let format = resolve_format(config.format, &settings);
    let destination = open_destination(config.output.as_deref())?;
    create_writer(format, destination).write_report(&report)?;

    if report.has_failures() {
        anyhow::bail!(
            "{} of {} subject lines could not be analyzed",
            report.summary.failed,
            report.entries.len()
        );
    }
    Ok(())
}

/// Arguments first, then lines from the file (or stdin for "-")
fn collect_subjects(mut subjects: Vec<String>, file: Option<&Path>) -> Result<Vec<String>> {
    if let Some(path) = file {
        let content = if path == Path::new("-") {
            std::io::read_to_string(std::io::stdin()).context("Failed to read stdin")?
        } else {
            io::read_file(path)
                .with_context(|| format!("Failed to read subject lines from {}", path.display()))?
        };
        subjects.extend(io::subject_lines(&content));
    }
    Ok(subjects)
}
