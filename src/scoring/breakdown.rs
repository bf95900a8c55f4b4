//! Score arithmetic.
//!
//! A [`ScoreBreakdown`] holds every intermediate the scorer derives from a
//! subject line. Issues, suggestions and both public scores are computed from
//! it, so the arithmetic lives in one place.

use super::detectors::{
    detect_capitalization, detect_power_words, detect_spam_triggers, has_caps_run,
    has_punctuation, has_repeated_exclamations, is_personalized, CapitalizationIssue,
    NormalizedSubject,
};
use crate::config::ScoringWeights;
use crate::config::scoring::MAX_SCORE;
use crate::core::{PowerWord, SpamTrigger};
use crate::rules::{POWER_WORDS, SPAM_TRIGGERS};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    /// Character count of the raw subject
    pub length: usize,
    pub word_count: usize,
    pub spam_triggers: Vec<&'static SpamTrigger>,
    pub power_words: Vec<&'static PowerWord>,
    pub caps_run: bool,
    pub repeated_exclamations: bool,
    pub capitalization: Option<CapitalizationIssue>,
    pub has_punctuation: bool,
    pub personalized: bool,
    /// Intermediate score from the length bands; feeds the overall score only
    pub length_score: f64,
    pub spam_score: u32,
    pub overall_score: u32,
}

impl ScoreBreakdown {
    pub fn compute(subject_line: &str, weights: &ScoringWeights) -> Self {
        let normalized = NormalizedSubject::new(subject_line);
        let spam_triggers = detect_spam_triggers(&normalized, SPAM_TRIGGERS);
        let power_words = detect_power_words(&normalized, POWER_WORDS);
        let caps_run = has_caps_run(subject_line);
        let repeated_exclamations = has_repeated_exclamations(subject_line);
        let length = subject_line.chars().count();
        let word_count = normalized.word_count();
        let capitalization = detect_capitalization(subject_line);

        let spam_score = spam_score(&spam_triggers, caps_run, repeated_exclamations, weights);
        let length_score = weights.length.score(length);
        let overall_score = overall_score(
            spam_score,
            length_score,
            power_words.len(),
            capitalization.is_some(),
            word_count,
            weights,
        );

        Self {
            length,
            word_count,
            spam_triggers,
            power_words,
            caps_run,
            repeated_exclamations,
            capitalization,
            has_punctuation: has_punctuation(subject_line),
            personalized: is_personalized(&normalized),
            length_score,
            spam_score,
            overall_score,
        }
    }
}

// Pure function: sum trigger and formatting points, capped at 100
pub fn spam_score(
    triggers: &[&SpamTrigger],
    caps_run: bool,
    repeated_exclamations: bool,
    weights: &ScoringWeights,
) -> u32 {
    let caps_points = if caps_run { weights.spam.caps_run } else { 0 };
    let exclamation_points = if repeated_exclamations {
        weights.spam.exclamations
    } else {
        0
    };

    // Configured points are unbounded, so the sum saturates before the cap
    triggers
        .iter()
        .map(|t| weights.spam.for_impact(t.impact))
        .chain([caps_points, exclamation_points])
        .fold(0u32, u32::saturating_add)
        .min(MAX_SCORE)
}

// Pure function: fold every factor into the overall score, rounded and clamped
pub fn overall_score(
    spam_score: u32,
    length_score: f64,
    power_word_count: usize,
    has_caps_issue: bool,
    word_count: usize,
    weights: &ScoringWeights,
) -> u32 {
    let mut score = weights.base_score;
    score -= f64::from(spam_score) * weights.spam_weight;
    score += length_score * weights.length_weight;
    score += power_word_count as f64 * weights.power_word_bonus;

    if power_word_count > weights.power_word_saturation {
        let excess = power_word_count - weights.power_word_saturation;
        score -= excess as f64 * weights.power_word_overuse_penalty;
    }

    if has_caps_issue {
        score -= weights.caps_penalty;
    }

    if weights.word_count_out_of_range(word_count) {
        score -= weights.word_count_penalty;
    }

    score.round().clamp(0.0, f64::from(MAX_SCORE)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SpamPoints;
    use crate::rules::find_spam_trigger;

    #[test]
    fn test_spam_score_sums_impacts() {
        let weights = ScoringWeights::default();
        let triggers = vec![
            find_spam_trigger("free").unwrap(),
            find_spam_trigger("limited time").unwrap(),
            find_spam_trigger("offer").unwrap(),
        ];
        assert_eq!(spam_score(&triggers, false, false, &weights), 45);
        assert_eq!(spam_score(&triggers, true, true, &weights), 80);
    }

    #[test]
    fn test_spam_score_caps_at_100() {
        let weights = ScoringWeights::default();
        let triggers: Vec<_> = SPAM_TRIGGERS.iter().collect();
        assert_eq!(spam_score(&triggers, true, true, &weights), 100);
    }

    #[test]
    fn test_spam_score_saturates_huge_points() {
        let weights = ScoringWeights {
            spam: SpamPoints {
                high: u32::MAX,
                exclamations: u32::MAX,
                ..Default::default()
            },
            ..Default::default()
        };
        let triggers = vec![
            find_spam_trigger("free").unwrap(),
            find_spam_trigger("cash").unwrap(),
        ];
        assert_eq!(spam_score(&triggers, true, true, &weights), 100);
    }

    #[test]
    fn test_overall_score_base_case() {
        let weights = ScoringWeights::default();
        // 70 + 100 * 0.2
        assert_eq!(overall_score(0, 100.0, 0, false, 5, &weights), 90);
    }

    #[test]
    fn test_overall_score_power_word_saturation() {
        let weights = ScoringWeights::default();
        // 70 + 20 + 5*5 - 2*3 = 109 -> clamped
        assert_eq!(overall_score(0, 100.0, 5, false, 5, &weights), 100);
        // 70 + 10 + 5*5 - 2*3 = 99
        assert_eq!(overall_score(0, 50.0, 5, false, 5, &weights), 99);
    }

    #[test]
    fn test_overall_score_penalties() {
        let weights = ScoringWeights::default();
        // 70 - 40 + 10 - 15 - 10 = 15
        assert_eq!(overall_score(100, 50.0, 0, true, 2, &weights), 15);
    }

    #[test]
    fn test_overall_score_exact_with_defaults() {
        let weights = ScoringWeights::default();
        // 70 - 0.4*5 + 0.2*60 = 80
        assert_eq!(overall_score(5, 60.0, 0, false, 5, &weights), 80);
        // 70 - 0.4*45 + 0.2*80 = 68
        assert_eq!(overall_score(45, 80.0, 0, false, 5, &weights), 68);
    }

    #[test]
    fn test_overall_score_rounds_to_nearest() {
        let weights = ScoringWeights {
            spam_weight: 0.33,
            ..Default::default()
        };
        // 70 - 3.3 + 20 = 86.7
        assert_eq!(overall_score(10, 100.0, 0, false, 5, &weights), 87);
        // 70 - 6.6 + 20 = 83.4
        assert_eq!(overall_score(20, 100.0, 0, false, 5, &weights), 83);
    }

    #[test]
    fn test_overall_score_never_negative() {
        let weights = ScoringWeights {
            base_score: 0.0,
            ..Default::default()
        };
        assert_eq!(overall_score(100, 0.0, 0, true, 1, &weights), 0);
    }

    #[test]
    fn test_breakdown_for_caps_heavy_subject() {
        let weights = ScoringWeights::default();
        let breakdown =
            ScoreBreakdown::compute("FREE Exclusive Offer: LIMITED TIME ONLY!!!", &weights);
        let words: Vec<_> = breakdown.spam_triggers.iter().map(|t| t.word).collect();
        assert_eq!(words, vec!["free", "limited time", "offer"]);
        assert!(breakdown.caps_run);
        assert!(breakdown.repeated_exclamations);
        assert_eq!(breakdown.spam_score, 80);
        assert_eq!(breakdown.length, 42);
        assert_eq!(breakdown.length_score, 100.0);
        assert_eq!(breakdown.word_count, 6);
        // 70 - 32 + 20 + 5 - 15
        assert_eq!(breakdown.overall_score, 48);
    }
}
