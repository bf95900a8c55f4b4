use crate::core::{PowerWord, Severity};

/// Words that make a subject line more compelling.
///
/// Matching is whole-token and case-insensitive, so every entry must be a
/// single lower-case word.
pub static POWER_WORDS: &[PowerWord] = &[
    PowerWord {
        word: "exclusive",
        category: "exclusivity",
        impact: Severity::Medium,
    },
    PowerWord {
        word: "guaranteed",
        category: "assurance",
        impact: Severity::High,
    },
    PowerWord {
        word: "proven",
        category: "assurance",
        impact: Severity::High,
    },
    PowerWord {
        word: "secret",
        category: "curiosity",
        impact: Severity::High,
    },
    PowerWord {
        word: "discover",
        category: "curiosity",
        impact: Severity::Medium,
    },
    PowerWord {
        word: "instant",
        category: "urgency",
        impact: Severity::Medium,
    },
    PowerWord {
        word: "new",
        category: "novelty",
        impact: Severity::Medium,
    },
    PowerWord {
        word: "amazing",
        category: "emotion",
        impact: Severity::Low,
    },
    PowerWord {
        word: "essential",
        category: "value",
        impact: Severity::Medium,
    },
    PowerWord {
        word: "save",
        category: "value",
        impact: Severity::Medium,
    },
    PowerWord {
        word: "boost",
        category: "results",
        impact: Severity::Medium,
    },
    PowerWord {
        word: "ultimate",
        category: "quality",
        impact: Severity::Medium,
    },
    PowerWord {
        word: "insider",
        category: "exclusivity",
        impact: Severity::High,
    },
    PowerWord {
        word: "announcing",
        category: "novelty",
        impact: Severity::Low,
    },
    PowerWord {
        word: "breakthrough",
        category: "novelty",
        impact: Severity::High,
    },
];

/// The full power word table, in detection order.
pub fn power_words() -> &'static [PowerWord] {
    POWER_WORDS
}

/// Look up a power word by its exact (case-insensitive) word.
pub fn find_power_word(word: &str) -> Option<&'static PowerWord> {
    let needle = word.to_lowercase();
    POWER_WORDS.iter().find(|p| p.word == needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_are_single_lowercase_tokens() {
        for pw in POWER_WORDS {
            assert_eq!(pw.word, pw.word.to_lowercase());
            assert_eq!(pw.word.split_whitespace().count(), 1);
        }
    }

    #[test]
    fn test_guaranteed_is_assurance() {
        let pw = find_power_word("GUARANTEED").unwrap();
        assert_eq!(pw.category, "assurance");
        assert_eq!(pw.impact, Severity::High);
    }
}
