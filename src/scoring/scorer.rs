use super::breakdown::ScoreBreakdown;
use super::feedback::{build_issues, build_suggestions};
use super::sampler::{PowerWordSampler, RandomSampler};
use crate::config::{ScoringWeights, SubjectLineConfig, DEFAULT_POWER_WORD_SAMPLES};
use crate::core::{AnalysisInput, AnalysisResult, Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use rayon::prelude::*;

/// Scores subject lines against the static rule tables.
///
/// The scorer holds only immutable configuration, so one instance can be
/// shared across threads and called concurrently.
#[derive(Debug, Clone)]
pub struct SubjectLineScorer {
    weights: ScoringWeights,
    power_word_samples: usize,
}

impl Default for SubjectLineScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SubjectLineScorer {
    pub fn new() -> Self {
        Self::with_weights(ScoringWeights::default())
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            weights,
            power_word_samples: DEFAULT_POWER_WORD_SAMPLES,
        }
    }

    pub fn from_config(config: &SubjectLineConfig) -> Self {
        Self {
            weights: config.scoring_weights(),
            power_word_samples: config.power_word_samples(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a subject line, sampling suggested power words at random.
    pub fn analyze(&self, subject_line: &str) -> Result<AnalysisResult> {
        let mut sampler = RandomSampler::thread_local();
        self.analyze_with(subject_line, &mut sampler)
    }

    /// Score a subject line with a caller-supplied power word sampler.
    pub fn analyze_with(
        &self,
        subject_line: &str,
        sampler: &mut dyn PowerWordSampler,
    ) -> Result<AnalysisResult> {
        self.analyze_at(subject_line, sampler, Utc::now())
    }

    /// Fully deterministic variant: both the sampler and the timestamp are injected.
    pub fn analyze_at(
        &self,
        subject_line: &str,
        sampler: &mut dyn PowerWordSampler,
        analyzed_at: DateTime<Utc>,
    ) -> Result<AnalysisResult> {
        let breakdown = self.breakdown(subject_line)?;
        let issues = build_issues(&breakdown, &self.weights);
        let suggestions =
            build_suggestions(&breakdown, &self.weights, sampler, self.power_word_samples);

        log::debug!(
            "Analyzed subject ({} chars): spam={} overall={} issues={}",
            breakdown.length,
            breakdown.spam_score,
            breakdown.overall_score,
            issues.len()
        );

        Ok(AnalysisResult {
            subject_line: subject_line.to_string(),
            length: breakdown.length,
            word_count: breakdown.word_count,
            spam_score: breakdown.spam_score,
            overall_score: breakdown.overall_score,
            power_words: breakdown
                .power_words
                .iter()
                .map(|pw| pw.word.to_string())
                .collect(),
            issues,
            suggestions,
            has_punctuation: breakdown.has_punctuation,
            analyzed_at: analyzed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        })
    }

    /// Every intermediate value behind the scores, without issues or suggestions.
    pub fn breakdown(&self, subject_line: &str) -> Result<ScoreBreakdown> {
        validate_subject(subject_line)?;
        Ok(ScoreBreakdown::compute(subject_line, &self.weights))
    }

    /// Score a request body that may be missing its subject line.
    pub fn analyze_input(&self, input: &AnalysisInput) -> Result<AnalysisResult> {
        match input.subject_line.as_deref() {
            Some(subject_line) => self.analyze(subject_line),
            None => Err(Error::invalid_subject()),
        }
    }

    /// Score a raw JSON body of the form `{ "subjectLine": "..." }`.
    ///
    /// A missing field, `null`, or any non-string value is invalid input.
    pub fn analyze_json(&self, body: &serde_json::Value) -> Result<AnalysisResult> {
        let subject_line = body
            .get("subjectLine")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(Error::invalid_subject)?;
        self.analyze(subject_line)
    }

    /// Score many subject lines in parallel, keeping input order.
    ///
    /// With a seed, line `i` samples with `seed + i`, so reports are
    /// reproducible regardless of thread scheduling.
    pub fn analyze_batch(
        &self,
        subject_lines: &[String],
        seed: Option<u64>,
    ) -> Vec<Result<AnalysisResult>> {
        log::info!("Analyzing {} subject lines", subject_lines.len());

        subject_lines
            .par_iter()
            .enumerate()
            .map(|(idx, line)| match seed {
                Some(seed) => {
                    let mut sampler = RandomSampler::seeded(seed.wrapping_add(idx as u64));
                    self.analyze_with(line, &mut sampler)
                }
                None => self.analyze(line),
            })
            .collect()
    }
}

fn validate_subject(subject_line: &str) -> Result<()> {
    if subject_line.is_empty() {
        return Err(Error::invalid_subject());
    }
    Ok(())
}

/// Score a subject line with the default weights.
pub fn analyze(subject_line: &str) -> Result<AnalysisResult> {
    SubjectLineScorer::new().analyze(subject_line)
}
