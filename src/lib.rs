//! Email subject line analysis.
//!
//! Scores a subject line for spam risk and overall effectiveness and explains
//! the result as ordered issues and suggestions. Scoring is rule-based: a
//! static spam trigger table, a static power word table and a handful of
//! tunable weights (see [`config::ScoringWeights`]).
//!
//! ```
//! use subjectline::scoring::{FixedSampler, SubjectLineScorer};
//!
//! let scorer = SubjectLineScorer::new();
//! let result = scorer
//!     .analyze_with("Quick question about your project", &mut FixedSampler::TableOrder)
//!     .unwrap();
//! assert_eq!(result.spam_score, 0);
//! assert_eq!(result.overall_score, 90);
//! ```

// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod rules;
pub mod scoring;

// Re-export commonly used types
pub use crate::core::{
    AnalysisInput, AnalysisResult, Error, Issue, PowerWord, Result, Severity, SpamTrigger,
};

pub use crate::rules::{power_words, spam_triggers};

pub use crate::scoring::{
    analyze, BatchSummary, FixedSampler, PowerWordSampler, RandomSampler, ScoreBreakdown,
    SubjectLineScorer,
};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};
