use super::{open_destination, resolve_format};
use crate::cli::{self, OutputFormat};
use crate::core::AnalysisResult;
use crate::io::{create_writer, AnalysisReport, ReportEntry};
use crate::scoring::{RandomSampler, SubjectLineScorer};
use anyhow::Result;
use std::path::PathBuf;

pub struct CheckConfig {
    pub subject: String,
    pub min_score: u32,
    pub max_spam: Option<u32>,
    pub format: Option<OutputFormat>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
}

/// Threshold violations for one result; empty means the subject passes
pub fn gate_failures(
    result: &AnalysisResult,
    min_score: u32,
    max_spam: Option<u32>,
) -> Vec<String> {
    let mut failures = Vec::new();

    if result.overall_score < min_score {
        failures.push(format!(
            "overall score {} is below the minimum of {}",
            result.overall_score, min_score
        ));
    }

    if let Some(max_spam) = max_spam {
        if result.spam_score > max_spam {
            failures.push(format!(
                "spam score {} exceeds the maximum of {}",
                result.spam_score, max_spam
            ));
        }
    }

    failures
}

pub fn handle_check(config: CheckConfig) -> Result<()> {
    let settings = cli::load_settings(config.config.as_deref())?;
    let scorer = SubjectLineScorer::from_config(&settings);

    let result = match config.seed {
        Some(seed) => scorer.analyze_with(&config.subject, &mut RandomSampler::seeded(seed)),
        None => scorer.analyze(&config.subject),
    };
    let report = AnalysisReport::from_results(std::slice::from_ref(&config.subject), vec![result]);

    let format = resolve_format(config.format, &settings);
    create_writer(format, open_destination(None)?).write_report(&report)?;

    let analysis = match report.entries.first() {
        Some(ReportEntry::Analyzed(analysis)) => analysis,
        Some(ReportEntry::Failed { error, .. }) => anyhow::bail!("{}", error.message),
        None => anyhow::bail!("No result produced"),
    };

    let failures = gate_failures(analysis, config.min_score, config.max_spam);
    if !failures.is_empty() {
        for failure in &failures {
            log::warn!("{}", failure);
        }
        anyhow::bail!("Subject line failed the quality gate: {}", failures.join("; "));
    }

    log::info!("Subject line passed the quality gate");
    Ok(())
}
