//! Human-readable issues and suggestions derived from a [`ScoreBreakdown`].

use super::breakdown::ScoreBreakdown;
use super::sampler::PowerWordSampler;
use crate::config::ScoringWeights;
use crate::core::{Issue, Severity};
use crate::rules::POWER_WORDS;

pub const TOO_LONG: &str = "Subject line is too long";
pub const TOO_SHORT: &str = "Subject line is too short";
pub const TOO_FEW_WORDS: &str = "Too few words";

pub const SUGGEST_LENGTHEN: &str =
    "Add more detail to increase subject line length (aim for 30-50 characters)";
pub const SUGGEST_SHORTEN: &str =
    "Shorten your subject line to 50-70 characters for better deliverability";
pub const SUGGEST_FEWER_POWER_WORDS: &str = "Using too many power words can reduce effectiveness";
pub const SUGGEST_NO_CAPS: &str = "Avoid using ALL CAPS as it can trigger spam filters";
pub const SUGGEST_PERSONALIZE: &str = "Add personalization to increase engagement";
pub const SUGGEST_MORE_WORDS: &str = "Use at least 3-5 words for better impact";
pub const SUGGEST_FEWER_WORDS: &str = "Consider reducing word count for better readability";

/// Issues in fixed order: spam triggers (table order), capitalization,
/// too long, too short, too few words.
pub fn build_issues(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> Vec<Issue> {
    let spam_issues = breakdown
        .spam_triggers
        .iter()
        .copied()
        .map(Issue::spam_trigger);

    let other_issues = [
        breakdown
            .capitalization
            .map(|caps| Issue::new(caps.message(), Severity::Medium)),
        weights
            .length
            .is_too_long(breakdown.length)
            .then(|| Issue::new(TOO_LONG, Severity::Medium)),
        weights
            .length
            .is_too_short(breakdown.length)
            .then(|| Issue::new(TOO_SHORT, Severity::Low)),
        (breakdown.word_count < weights.min_words)
            .then(|| Issue::new(TOO_FEW_WORDS, Severity::Medium)),
    ];

    spam_issues.chain(other_issues.into_iter().flatten()).collect()
}

/// Suggestions in fixed order: length, spam, power words, capitalization,
/// personalization, word count.
pub fn build_suggestions(
    breakdown: &ScoreBreakdown,
    weights: &ScoringWeights,
    sampler: &mut dyn PowerWordSampler,
    power_word_samples: usize,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if weights.length.is_too_short(breakdown.length) {
        suggestions.push(SUGGEST_LENGTHEN.to_string());
    } else if weights.length.is_too_long(breakdown.length) {
        suggestions.push(SUGGEST_SHORTEN.to_string());
    }

    if !breakdown.spam_triggers.is_empty() {
        let words: Vec<_> = breakdown.spam_triggers.iter().map(|t| t.word).collect();
        suggestions.push(format!("Replace spam trigger words: {}", words.join(", ")));
    }

    if breakdown.power_words.is_empty() {
        let sample = sampler.sample(POWER_WORDS, power_word_samples);
        suggestions.push(format!(
            "Consider adding power words like: {}",
            sample.join(", ")
        ));
    } else if breakdown.power_words.len() > weights.power_word_saturation {
        suggestions.push(SUGGEST_FEWER_POWER_WORDS.to_string());
    }

    if breakdown.capitalization.is_some() {
        suggestions.push(SUGGEST_NO_CAPS.to_string());
    }

    if !breakdown.personalized {
        suggestions.push(SUGGEST_PERSONALIZE.to_string());
    }

    if breakdown.word_count < weights.min_words {
        suggestions.push(SUGGEST_MORE_WORDS.to_string());
    } else if breakdown.word_count > weights.max_words {
        suggestions.push(SUGGEST_FEWER_WORDS.to_string());
    }

    suggestions
}
