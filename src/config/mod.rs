// Sub-modules
mod core;
mod loader;
pub mod scoring;

// Re-export scoring types
pub use scoring::{LengthBands, ScoringWeights, SpamPoints};

// Re-export core types
pub use core::{OutputConfig, SubjectLineConfig, SuggestionConfig, DEFAULT_POWER_WORD_SAMPLES};

pub use loader::{
    directory_ancestors, load_config, load_config_from_dir, load_config_from_path,
    parse_and_validate_config, parse_config_strict, CONFIG_FILE_NAME,
};
