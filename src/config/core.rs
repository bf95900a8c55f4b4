use serde::{Deserialize, Serialize};

use super::scoring::ScoringWeights;

/// Default number of power words sampled for the "consider adding" suggestion.
pub const DEFAULT_POWER_WORD_SAMPLES: usize = 3;

/// Root configuration structure for subjectline
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SubjectLineConfig {
    /// Scoring weights configuration
    #[serde(default)]
    pub scoring: Option<ScoringWeights>,

    /// Suggestion generation settings
    #[serde(default)]
    pub suggestions: Option<SuggestionConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

impl SubjectLineConfig {
    pub fn scoring_weights(&self) -> ScoringWeights {
        self.scoring.clone().unwrap_or_default()
    }

    pub fn power_word_samples(&self) -> usize {
        self.suggestions
            .as_ref()
            .map(|s| s.power_word_samples)
            .unwrap_or(DEFAULT_POWER_WORD_SAMPLES)
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|o| o.default_format.as_deref())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionConfig {
    #[serde(default = "default_power_word_samples")]
    pub power_word_samples: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            power_word_samples: default_power_word_samples(),
        }
    }
}

fn default_power_word_samples() -> usize {
    DEFAULT_POWER_WORD_SAMPLES
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// One of `terminal`, `json`, `markdown`
    #[serde(default)]
    pub default_format: Option<String>,
}
