use anyhow::Result;
use subjectline::cli::{self, Commands};
use subjectline::commands::{analyze, check, init, rules};

// Main orchestrator function
fn main() -> Result<()> {
    let cli = cli::parse_args();
    cli::init_logging(cli.verbosity);

    match cli.command {
        Commands::Analyze {
            subjects,
            file,
            format,
            output,
            seed,
            config,
        } => analyze::handle_analyze(analyze::AnalyzeConfig {
            subjects,
            file,
            format,
            output,
            seed,
            config,
        }),
        Commands::Check {
            subject,
            min_score,
            max_spam,
            format,
            seed,
            config,
        } => check::handle_check(check::CheckConfig {
            subject,
            min_score,
            max_spam,
            format,
            seed,
            config,
        }),
        Commands::Triggers { format } => rules::handle_list_spam_triggers(format),
        Commands::PowerWords { format } => rules::handle_list_power_words(format),
        Commands::Init { force } => init::init_config(force),
    }
}
