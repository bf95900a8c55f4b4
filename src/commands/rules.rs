use crate::cli::OutputFormat;
use crate::io::{create_writer, RuleListing};
use crate::rules::{power_words, spam_triggers};
use anyhow::Result;

pub fn handle_list_spam_triggers(format: OutputFormat) -> Result<()> {
    write_listing(RuleListing::SpamTriggers(spam_triggers()), format)
}

pub fn handle_list_power_words(format: OutputFormat) -> Result<()> {
    write_listing(RuleListing::PowerWords(power_words()), format)
}

fn write_listing(listing: RuleListing, format: OutputFormat) -> Result<()> {
    create_writer(format.into(), Box::new(std::io::stdout())).write_rules(listing)
}
