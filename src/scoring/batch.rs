//! Aggregate view over one batch of analyses.

use crate::core::{AnalysisResult, Result};
use serde::Serialize;
use std::collections::HashMap;

const TOP_TRIGGER_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerFrequency {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub analyzed: usize,
    pub failed: usize,
    pub average_overall_score: f64,
    pub average_spam_score: f64,
    pub min_overall_score: Option<u32>,
    pub max_overall_score: Option<u32>,
    /// Most common spam triggers, most frequent first, ties broken alphabetically
    pub top_spam_triggers: Vec<TriggerFrequency>,
}

impl BatchSummary {
    pub fn from_results(results: &[Result<AnalysisResult>]) -> Self {
        let successes: Vec<&AnalysisResult> =
            results.iter().filter_map(|r| r.as_ref().ok()).collect();
        Self::from_successes(&successes, results.len() - successes.len())
    }

    pub fn from_successes(successes: &[&AnalysisResult], failed: usize) -> Self {
        let analyzed = successes.len();

        Self {
            analyzed,
            failed,
            average_overall_score: average(successes.iter().map(|r| r.overall_score), analyzed),
            average_spam_score: average(successes.iter().map(|r| r.spam_score), analyzed),
            min_overall_score: successes.iter().map(|r| r.overall_score).min(),
            max_overall_score: successes.iter().map(|r| r.overall_score).max(),
            top_spam_triggers: top_triggers(successes),
        }
    }
}

fn average(values: impl Iterator<Item = u32>, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    let total: u64 = values.map(u64::from).sum();
    total as f64 / count as f64
}

fn top_triggers(successes: &[&AnalysisResult]) -> Vec<TriggerFrequency> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for result in successes {
        for word in result.spam_trigger_words() {
            *counts.entry(word).or_default() += 1;
        }
    }

    let mut frequencies: Vec<TriggerFrequency> = counts
        .into_iter()
        .map(|(word, count)| TriggerFrequency {
            word: word.to_string(),
            count,
        })
        .collect();
    frequencies.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
    frequencies.truncate(TOP_TRIGGER_LIMIT);
    frequencies
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::scoring::SubjectLineScorer;

    #[test]
    fn test_summary_over_mixed_results() {
        let scorer = SubjectLineScorer::new();
        let results = vec![
            scorer.analyze("Free cash for the winner"),
            scorer.analyze("Your free trial ends soon"),
            Err(Error::invalid_subject()),
        ];
        let summary = BatchSummary::from_results(&results);

        assert_eq!(summary.analyzed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(
            summary.top_spam_triggers[0],
            TriggerFrequency {
                word: "free".into(),
                count: 2
            }
        );
        assert!(summary.min_overall_score <= summary.max_overall_score);
    }

    #[test]
    fn test_empty_summary() {
        let summary = BatchSummary::from_results(&[]);
        assert_eq!(summary.analyzed, 0);
        assert_eq!(summary.average_overall_score, 0.0);
        assert_eq!(summary.min_overall_score, None);
        assert!(summary.top_spam_triggers.is_empty());
    }
}
