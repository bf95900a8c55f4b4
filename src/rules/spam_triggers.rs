use crate::core::{Severity, SpamTrigger};

/// Phrases that push a subject line toward the spam folder.
///
/// Matching is by substring on the lower-cased subject, so every entry must
/// be lower-case.
pub static SPAM_TRIGGERS: &[SpamTrigger] = &[
    SpamTrigger {
        word: "free",
        impact: Severity::High,
        reason: "Frequently flagged by spam filters",
    },
    SpamTrigger {
        word: "guaranteed",
        impact: Severity::High,
        reason: "Overpromising language looks like a scam",
    },
    SpamTrigger {
        word: "cash",
        impact: Severity::High,
        reason: "Money-related terms are heavily filtered",
    },
    SpamTrigger {
        word: "act now",
        impact: Severity::High,
        reason: "High-pressure call to action",
    },
    SpamTrigger {
        word: "click here",
        impact: Severity::High,
        reason: "Classic spam call to action",
    },
    SpamTrigger {
        word: "winner",
        impact: Severity::High,
        reason: "Prize language is heavily filtered",
    },
    SpamTrigger {
        word: "earn money",
        impact: Severity::High,
        reason: "Get-rich-quick phrasing",
    },
    SpamTrigger {
        word: "urgent",
        impact: Severity::Medium,
        reason: "Artificial urgency erodes trust",
    },
    SpamTrigger {
        word: "limited time",
        impact: Severity::Medium,
        reason: "Overused scarcity phrase",
    },
    SpamTrigger {
        word: "buy now",
        impact: Severity::Medium,
        reason: "Pushy sales language",
    },
    SpamTrigger {
        word: "100%",
        impact: Severity::Medium,
        reason: "Absolute claims look suspicious",
    },
    SpamTrigger {
        word: "no cost",
        impact: Severity::Medium,
        reason: "Variant of free that filters also catch",
    },
    SpamTrigger {
        word: "order now",
        impact: Severity::Medium,
        reason: "Pushy sales language",
    },
    SpamTrigger {
        word: "congratulations",
        impact: Severity::Medium,
        reason: "Common opener in prize scams",
    },
    SpamTrigger {
        word: "discount",
        impact: Severity::Low,
        reason: "Promotional term that adds mild risk",
    },
    SpamTrigger {
        word: "offer",
        impact: Severity::Low,
        reason: "Overused promotional term",
    },
];

/// The full spam trigger table, in detection order.
pub fn spam_triggers() -> &'static [SpamTrigger] {
    SPAM_TRIGGERS
}

/// Look up a trigger by its exact (case-insensitive) word.
pub fn find_spam_trigger(word: &str) -> Option<&'static SpamTrigger> {
    let needle = word.to_lowercase();
    SPAM_TRIGGERS.iter().find(|t| t.word == needle)
}
