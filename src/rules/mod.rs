//! Static rule tables consulted by the scorer.
//!
//! Both tables are process-wide constants. They are exposed read-only so
//! that callers can list them (for instance a "list triggers" endpoint)
//! without reaching into scorer internals.

pub mod power_words;
pub mod spam_triggers;

pub use power_words::{find_power_word, power_words, POWER_WORDS};
pub use spam_triggers::{find_spam_trigger, spam_triggers, SPAM_TRIGGERS};
