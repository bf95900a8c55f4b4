//! Scoring configuration for subject line analysis
//!
//! Every number the scorer uses is a product-tuning constant rather than the
//! output of a model. Each one is named here, and each can be overridden from
//! `.subjectline.toml` without touching the scorer's control flow:
//! - Spam points per trigger impact and per formatting red flag
//! - Weights that fold the spam and length scores into the overall score
//! - Power word bonus and its saturation penalty
//! - Length bands and word-count bounds

use crate::core::Severity;
use serde::{Deserialize, Serialize};

/// Starting point for the overall score before any adjustment.
pub const BASE_SCORE: f64 = 70.0;
/// Fraction of the spam score subtracted from the overall score.
pub const SPAM_WEIGHT: f64 = 0.4;
/// Fraction of the length score added to the overall score.
pub const LENGTH_WEIGHT: f64 = 0.2;
/// Flat bonus per matched power word.
pub const POWER_WORD_BONUS: f64 = 5.0;
/// Number of power words after which each extra word is penalised.
pub const POWER_WORD_SATURATION: usize = 3;
/// Penalty per power word beyond the saturation point.
pub const POWER_WORD_OVERUSE_PENALTY: f64 = 3.0;
/// Penalty when a capitalization issue is present.
pub const CAPS_PENALTY: f64 = 15.0;
/// Penalty when the word count is outside `[MIN_WORDS, MAX_WORDS]`.
pub const WORD_COUNT_PENALTY: f64 = 10.0;
/// Fewest words before the subject counts as too terse.
pub const MIN_WORDS: usize = 3;
/// Most words before the subject counts as too wordy.
pub const MAX_WORDS: usize = 15;

/// Spam points for a high-impact trigger.
pub const SPAM_POINTS_HIGH: u32 = 25;
/// Spam points for a medium-impact trigger.
pub const SPAM_POINTS_MEDIUM: u32 = 15;
/// Spam points for a low-impact trigger.
pub const SPAM_POINTS_LOW: u32 = 5;
/// Spam points for a run of three or more capital letters.
pub const SPAM_POINTS_CAPS_RUN: u32 = 15;
/// Spam points for two or more consecutive exclamation marks.
pub const SPAM_POINTS_EXCLAMATIONS: u32 = 20;
/// Upper bound for both the spam and overall scores.
pub const MAX_SCORE: u32 = 100;

/// Below this many characters a subject is too short.
pub const LENGTH_SHORT_BELOW: usize = 20;
/// Upper bound (inclusive) of the ideal length band.
pub const LENGTH_IDEAL_MAX: usize = 50;
/// Above this many characters a subject is too long.
pub const LENGTH_ACCEPTABLE_MAX: usize = 70;
pub const LENGTH_SCORE_SHORT: f64 = 50.0;
pub const LENGTH_SCORE_IDEAL: f64 = 100.0;
pub const LENGTH_SCORE_ACCEPTABLE: f64 = 80.0;
pub const LENGTH_SCORE_LONG: f64 = 60.0;

/// Spam points awarded per detected signal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpamPoints {
    #[serde(default = "default_spam_high")]
    pub high: u32,

    #[serde(default = "default_spam_medium")]
    pub medium: u32,

    #[serde(default = "default_spam_low")]
    pub low: u32,

    /// Added once when the subject has a run of 3+ capital letters
    #[serde(default = "default_caps_run")]
    pub caps_run: u32,

    /// Added once when the subject has `!!` or longer
    #[serde(default = "default_exclamations")]
    pub exclamations: u32,
}

impl Default for SpamPoints {
    fn default() -> Self {
        Self {
            high: default_spam_high(),
            medium: default_spam_medium(),
            low: default_spam_low(),
            caps_run: default_caps_run(),
            exclamations: default_exclamations(),
        }
    }
}

impl SpamPoints {
    pub fn for_impact(&self, impact: Severity) -> u32 {
        match impact {
            Severity::High => self.high,
            Severity::Medium => self.medium,
            Severity::Low => self.low,
        }
    }
}

/// Length bands mapping character count to an intermediate length score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LengthBands {
    #[serde(default = "default_short_below")]
    pub short_below: usize,

    #[serde(default = "default_ideal_max")]
    pub ideal_max: usize,

    #[serde(default = "default_acceptable_max")]
    pub acceptable_max: usize,

    #[serde(default = "default_short_score")]
    pub short_score: f64,

    #[serde(default = "default_ideal_score")]
    pub ideal_score: f64,

    #[serde(default = "default_acceptable_score")]
    pub acceptable_score: f64,

    #[serde(default = "default_long_score")]
    pub long_score: f64,
}

impl Default for LengthBands {
    fn default() -> Self {
        Self {
            short_below: default_short_below(),
            ideal_max: default_ideal_max(),
            acceptable_max: default_acceptable_max(),
            short_score: default_short_score(),
            ideal_score: default_ideal_score(),
            acceptable_score: default_acceptable_score(),
            long_score: default_long_score(),
        }
    }
}

impl LengthBands {
    pub fn is_too_short(&self, length: usize) -> bool {
        length < self.short_below
    }

    pub fn is_too_long(&self, length: usize) -> bool {
        length > self.acceptable_max
    }

    // Pure function: band lookup
    pub fn score(&self, length: usize) -> f64 {
        if length < self.short_below {
            self.short_score
        } else if length <= self.ideal_max {
            self.ideal_score
        } else if length <= self.acceptable_max {
            self.acceptable_score
        } else {
            self.long_score
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.short_below <= self.ideal_max && self.ideal_max <= self.acceptable_max) {
            return Err(format!(
                "length bands must be ordered (short_below {} <= ideal_max {} <= acceptable_max {})",
                self.short_below, self.ideal_max, self.acceptable_max
            ));
        }
        for (name, value) in [
            ("short_score", self.short_score),
            ("ideal_score", self.ideal_score),
            ("acceptable_score", self.acceptable_score),
            ("long_score", self.long_score),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!("length {name} must be between 0 and 100"));
            }
        }
        Ok(())
    }
}

/// Weights that shape the overall score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringWeights {
    #[serde(default = "default_base_score")]
    pub base_score: f64,

    /// Multiplier applied to the spam score before subtracting it
    #[serde(default = "default_spam_weight")]
    pub spam_weight: f64,

    /// Multiplier applied to the length score before adding it
    #[serde(default = "default_length_weight")]
    pub length_weight: f64,

    #[serde(default = "default_power_word_bonus")]
    pub power_word_bonus: f64,

    #[serde(default = "default_power_word_saturation")]
    pub power_word_saturation: usize,

    #[serde(default = "default_power_word_overuse_penalty")]
    pub power_word_overuse_penalty: f64,

    #[serde(default = "default_caps_penalty")]
    pub caps_penalty: f64,

    #[serde(default = "default_word_count_penalty")]
    pub word_count_penalty: f64,

    #[serde(default = "default_min_words")]
    pub min_words: usize,

    #[serde(default = "default_max_words")]
    pub max_words: usize,

    #[serde(default)]
    pub spam: SpamPoints,

    #[serde(default)]
    pub length: LengthBands,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base_score: default_base_score(),
            spam_weight: default_spam_weight(),
            length_weight: default_length_weight(),
            power_word_bonus: default_power_word_bonus(),
            power_word_saturation: default_power_word_saturation(),
            power_word_overuse_penalty: default_power_word_overuse_penalty(),
            caps_penalty: default_caps_penalty(),
            word_count_penalty: default_word_count_penalty(),
            min_words: default_min_words(),
            max_words: default_max_words(),
            spam: SpamPoints::default(),
            length: LengthBands::default(),
        }
    }
}

impl ScoringWeights {
    // Pure function: Validate a single non-negative weight with name
    pub fn validate_non_negative(value: f64, name: &str) -> Result<(), String> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(format!("{name} must be a non-negative number"))
        }
    }

    // Pure function: Collect all weight validations
    pub fn collect_weight_validations(&self) -> Vec<Result<(), String>> {
        vec![
            Self::validate_non_negative(self.base_score, "base_score"),
            Self::validate_non_negative(self.spam_weight, "spam_weight"),
            Self::validate_non_negative(self.length_weight, "length_weight"),
            Self::validate_non_negative(self.power_word_bonus, "power_word_bonus"),
            Self::validate_non_negative(
                self.power_word_overuse_penalty,
                "power_word_overuse_penalty",
            ),
            Self::validate_non_negative(self.caps_penalty, "caps_penalty"),
            Self::validate_non_negative(self.word_count_penalty, "word_count_penalty"),
        ]
    }

    /// Validate every weight and the structural bounds between them
    pub fn validate(&self) -> Result<(), String> {
        for validation in self.collect_weight_validations() {
            validation?;
        }

        if self.min_words > self.max_words {
            return Err(format!(
                "min_words ({}) must not exceed max_words ({})",
                self.min_words, self.max_words
            ));
        }

        self.length.validate()
    }

    /// Whether the word count falls outside the preferred range
    pub fn word_count_out_of_range(&self, word_count: usize) -> bool {
        word_count < self.min_words || word_count > self.max_words
    }
}

pub fn default_base_score() -> f64 {
    BASE_SCORE
}
pub fn default_spam_weight() -> f64 {
    SPAM_WEIGHT
}
pub fn default_length_weight() -> f64 {
    LENGTH_WEIGHT
}
pub fn default_power_word_bonus() -> f64 {
    POWER_WORD_BONUS
}
pub fn default_power_word_saturation() -> usize {
    POWER_WORD_SATURATION
}
pub fn default_power_word_overuse_penalty() -> f64 {
    POWER_WORD_OVERUSE_PENALTY
}
pub fn default_caps_penalty() -> f64 {
    CAPS_PENALTY
}
pub fn default_word_count_penalty() -> f64 {
    WORD_COUNT_PENALTY
}
pub fn default_min_words() -> usize {
    MIN_WORDS
}
pub fn default_max_words() -> usize {
    MAX_WORDS
}
pub fn default_spam_high() -> u32 {
    SPAM_POINTS_HIGH
}
pub fn default_spam_medium() -> u32 {
    SPAM_POINTS_MEDIUM
}
pub fn default_spam_low() -> u32 {
    SPAM_POINTS_LOW
}
pub fn default_caps_run() -> u32 {
    SPAM_POINTS_CAPS_RUN
}
pub fn default_exclamations() -> u32 {
    SPAM_POINTS_EXCLAMATIONS
}
pub fn default_short_below() -> usize {
    LENGTH_SHORT_BELOW
}
pub fn default_ideal_max() -> usize {
    LENGTH_IDEAL_MAX
}
pub fn default_acceptable_max() -> usize {
    LENGTH_ACCEPTABLE_MAX
}
pub fn default_short_score() -> f64 {
    LENGTH_SCORE_SHORT
}
pub fn default_ideal_score() -> f64 {
    LENGTH_SCORE_IDEAL
}
pub fn default_acceptable_score() -> f64 {
    LENGTH_SCORE_ACCEPTABLE
}
pub fn default_long_score() -> f64 {
    LENGTH_SCORE_LONG
}
