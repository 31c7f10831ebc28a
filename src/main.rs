use dediacritic::cli;
use dediacritic::commands::handle_strip;
use dediacritic::config::StripConfig;
use dediacritic::errors::Error;
use dediacritic::formatting::FormattingConfig;
use dediacritic::observability::init_logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::parse_args();
    init_logging(cli.verbosity, cli.plain);

    let formatting = create_formatting_config(cli.plain);

    match handle_strip(&StripConfig::default(), formatting) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => exit_code_for(e),
    }
}

// Pure function to create formatting configuration
fn create_formatting_config(plain: bool) -> FormattingConfig {
    if plain {
        FormattingConfig::plain()
    } else {
        FormattingConfig::from_env()
    }
}

fn exit_code_for(error: Error) -> ExitCode {
    match error {
        // Notice already printed by the reporter
        Error::RootMissing { .. } | Error::RootNotDirectory { .. } => ExitCode::from(1),
        other => {
            let report = anyhow::Error::new(other).context("run did not complete");
            eprintln!("Error: {report:#}");
            ExitCode::from(2)
        }
    }
}
