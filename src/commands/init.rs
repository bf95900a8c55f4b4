use crate::config::CONFIG_FILE_NAME;
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG: &str = r#"# Subject line scoring configuration
#
# Every value below is the built-in default. Remove a line to keep the
# default, or change it to tune the scorer.

[scoring]
base_score = 70.0
spam_weight = 0.4
length_weight = 0.2
power_word_bonus = 5.0
power_word_saturation = 3
power_word_overuse_penalty = 3.0
caps_penalty = 15.0
word_count_penalty = 10.0
min_words = 3
max_words = 15

[scoring.spam]
high = 25
medium = 15
low = 5
caps_run = 15
exclamations = 20

[scoring.length]
short_below = 20
ideal_max = 50
acceptable_max = 70
short_score = 50.0
ideal_score = 100.0
acceptable_score = 80.0
long_score = 60.0

[suggestions]
power_word_samples = 3

[output]
default_format = "terminal"
"#;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    write_default_config(&config_path, force)?;
    println!("Created {CONFIG_FILE_NAME} configuration file");
    Ok(())
}

pub fn write_default_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
