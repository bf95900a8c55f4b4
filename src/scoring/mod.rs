pub mod batch;
pub mod breakdown;
pub mod detectors;
pub mod feedback;
pub mod sampler;
pub mod scorer;

pub use batch::{BatchSummary, TriggerFrequency};
pub use breakdown::{overall_score, spam_score, ScoreBreakdown};
pub use detectors::CapitalizationIssue;
pub use sampler::{FixedSampler, PowerWordSampler, RandomSampler};
pub use scorer::{analyze, SubjectLineScorer};
