//! Pure detectors over a subject line.
//!
//! Spam triggers match by substring on the lower-cased subject, so
//! "guaranteed" also fires inside "unguaranteed". Power words only match a
//! whole whitespace-delimited token. The two detectors are independent: one
//! word may count as both.

use crate::core::{PowerWord, SpamTrigger};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static CAPS_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z]{3,}").unwrap());
static REPEATED_EXCLAMATIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"!{2,}").unwrap());
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"[!?.]").unwrap());

/// Lower-cased subject plus its whitespace-delimited tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSubject {
    pub lower: String,
    pub words: Vec<String>,
}

impl NormalizedSubject {
    pub fn new(subject_line: &str) -> Self {
        let lower = subject_line.to_lowercase();
        let words = lower.split_whitespace().map(str::to_string).collect();
        Self { lower, words }
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

/// Which capitalization problem a subject has, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CapitalizationIssue {
    /// At least one run of three or more capital letters
    CapsWords,
    /// The whole subject is unchanged by upper-casing
    EntireSubject,
}

impl CapitalizationIssue {
    pub fn message(self) -> &'static str {
        match self {
            CapitalizationIssue::CapsWords => "Contains words in ALL CAPS",
            CapitalizationIssue::EntireSubject => "Entire subject is in ALL CAPS",
        }
    }
}

/// Triggers whose word occurs anywhere in the lower-cased subject, in table order
pub fn detect_spam_triggers(
    subject: &NormalizedSubject,
    table: &'static [SpamTrigger],
) -> Vec<&'static SpamTrigger> {
    table
        .iter()
        .filter(|trigger| subject.lower.contains(trigger.word))
        .collect()
}

/// Power words equal to some token of the subject, in table order
pub fn detect_power_words(
    subject: &NormalizedSubject,
    table: &'static [PowerWord],
) -> Vec<&'static PowerWord> {
    table
        .iter()
        .filter(|pw| subject.words.iter().any(|w| w == pw.word))
        .collect()
}

pub fn has_caps_run(subject_line: &str) -> bool {
    CAPS_RUN.is_match(subject_line)
}

pub fn has_repeated_exclamations(subject_line: &str) -> bool {
    REPEATED_EXCLAMATIONS.is_match(subject_line)
}

pub fn has_punctuation(subject_line: &str) -> bool {
    PUNCTUATION.is_match(subject_line)
}

/// First matching capitalization problem; a caps run wins over full upper-case
pub fn detect_capitalization(subject_line: &str) -> Option<CapitalizationIssue> {
    if has_caps_run(subject_line) {
        Some(CapitalizationIssue::CapsWords)
    } else if subject_line == subject_line.to_uppercase() {
        Some(CapitalizationIssue::EntireSubject)
    } else {
        None
    }
}

/// A subject is personalized when it has a merge tag (`[`) or the token "you".
///
/// Tokens are the same whitespace-delimited words power words match against,
/// so "you," and "you're" do not count.
pub fn is_personalized(subject: &NormalizedSubject) -> bool {
    subject.lower.contains('[') || subject.words.iter().any(|w| w == "you")
}
