pub mod errors;

use serde::{Deserialize, Serialize};

pub use errors::{Error, Result};

/// Impact level shared by spam triggers, power words and issues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        static DISPLAY_STRINGS: &[(Severity, &str)] = &[
            (Severity::Low, "low"),
            (Severity::Medium, "medium"),
            (Severity::High, "high"),
        ];

        let display_str = DISPLAY_STRINGS
            .iter()
            .find(|(s, _)| s == self)
            .map(|(_, s)| *s)
            .unwrap_or("unknown");

        write!(f, "{display_str}")
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            other => Err(format!("unknown severity '{other}'")),
        }
    }
}

/// A phrase that spam filters tend to flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SpamTrigger {
    pub word: &'static str,
    pub impact: Severity,
    pub reason: &'static str,
}

/// A persuasive word that lifts engagement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PowerWord {
    pub word: &'static str,
    pub category: &'static str,
    pub impact: Severity,
}

/// One detected problem with a subject line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub text: String,
    pub impact: Severity,
}

/// Opening of every spam trigger issue; the trigger word follows in quotes.
const SPAM_TRIGGER_ISSUE_PREFIX: &str = "Contains spam trigger word \"";

impl Issue {
    pub fn new(text: impl Into<String>, impact: Severity) -> Self {
        Self {
            text: text.into(),
            impact,
        }
    }

    /// Issue reported for a detected spam trigger
    pub fn spam_trigger(trigger: &SpamTrigger) -> Self {
        Self::new(
            format!("{SPAM_TRIGGER_ISSUE_PREFIX}{}\"", trigger.word),
            trigger.impact,
        )
    }

    /// The trigger word, when this issue was built by [`Issue::spam_trigger`]
    pub fn spam_trigger_word(&self) -> Option<&str> {
        self.text
            .strip_prefix(SPAM_TRIGGER_ISSUE_PREFIX)
            .and_then(|rest| rest.strip_suffix('"'))
    }
}

/// Request body accepted at the JSON boundary: `{ "subjectLine": "..." }`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    #[serde(default)]
    pub subject_line: Option<String>,
}

impl AnalysisInput {
    pub fn new(subject_line: impl Into<String>) -> Self {
        Self {
            subject_line: Some(subject_line.into()),
        }
    }
}

/// Full diagnostic report for a single subject line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub subject_line: String,
    pub length: usize,
    pub word_count: usize,
    pub spam_score: u32,
    pub overall_score: u32,
    pub power_words: Vec<String>,
    pub issues: Vec<Issue>,
    pub suggestions: Vec<String>,
    pub has_punctuation: bool,
    pub analyzed_at: String,
}

impl AnalysisResult {
    /// Spam trigger words reported in `issues`, in table order.
    pub fn spam_trigger_words(&self) -> Vec<&str> {
        self.issues
            .iter()
            .filter_map(Issue::spam_trigger_word)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_lowercase() {
        let json = serde_json::to_string(&Severity::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
        let back: Severity = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(back, Severity::High);
    }

    #[test]
    fn test_severity_from_str() {
        assert_eq!("LOW".parse::<Severity>(), Ok(Severity::Low));
        assert!("extreme".parse::<Severity>().is_err());
    }

    #[test]
    fn test_analysis_input_accepts_missing_field() {
        let input: AnalysisInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input.subject_line, None);

        let input: AnalysisInput = serde_json::from_str(r#"{"subjectLine":"Hi"}"#).unwrap();
        assert_eq!(input.subject_line.as_deref(), Some("Hi"));
    }

    #[test]
    fn test_result_uses_camel_case_fields() {
        let result = AnalysisResult {
            subject_line: "Hi".into(),
            length: 2,
            word_count: 1,
            spam_score: 0,
            overall_score: 50,
            power_words: vec![],
            issues: vec![Issue::new("Too few words", Severity::Medium)],
            suggestions: vec![],
            has_punctuation: false,
            analyzed_at: "2026-01-01T00:00:00.000Z".into(),
        };
        let value = serde_json::to_value(&result).unwrap();
        for key in [
            "subjectLine",
            "length",
            "wordCount",
            "spamScore",
            "overallScore",
            "powerWords",
            "issues",
            "suggestions",
            "hasPunctuation",
            "analyzedAt",
        ] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
        assert_eq!(value["issues"][0]["impact"], "medium");
    }

    #[test]
    fn test_spam_trigger_issue_round_trips_every_trigger() {
        for trigger in crate::rules::SPAM_TRIGGERS {
            let issue = Issue::spam_trigger(trigger);
            assert_eq!(issue.impact, trigger.impact);
            assert_eq!(issue.spam_trigger_word(), Some(trigger.word));
        }
        assert_eq!(
            Issue::new("Subject line is too short", Severity::Low).spam_trigger_word(),
            None
        );
    }

    #[test]
    fn test_spam_trigger_words_extracts_from_issues() {
        let result = AnalysisResult {
            subject_line: "free cash".into(),
            length: 9,
            word_count: 2,
            spam_score: 50,
            overall_score: 40,
            power_words: vec![],
            issues: vec![
                Issue::new("Contains spam trigger word \"free\"", Severity::High),
                Issue::new("Contains spam trigger word \"cash\"", Severity::High),
                Issue::new("Subject line is too short", Severity::Low),
            ],
            suggestions: vec![],
            has_punctuation: false,
            analyzed_at: String::new(),
        };
        assert_eq!(result.spam_trigger_words(), vec!["free", "cash"]);
    }
}
