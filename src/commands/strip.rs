use crate::config::StripConfig;
use crate::errors::Result;
use crate::formatting::FormattingConfig;
use crate::io::{FileWalker, StderrDestination, StdoutDestination};
use crate::report::Reporter;
use crate::rewrite::{process_file, FileOutcome};
use crate::summary::RunSummary;
use tracing::{debug_span, info};

/// Walk `config.root` once, rewriting every eligible file that contains
/// diacritics.
///
/// Returns an error only when the root is unusable or the report itself
/// cannot be written; per-file faults are reported and counted.
pub fn run_strip(config: &StripConfig, reporter: &Reporter<'_>) -> Result<RunSummary> {
    let walker = FileWalker::from_config(config);

    if let Err(e) = walker.check_root() {
        reporter.fatal(&e)?;
        return Err(e);
    }

    let _span = debug_span!("strip", root = %config.root.display()).entered();
    reporter.start(walker.root())?;

    let mut summary = RunSummary::new();
    for candidate in walker.walk() {
        let path = match candidate {
            Ok(path) => path,
            Err(e) => {
                summary.record_walk_failure();
                reporter.file_error(&e)?;
                continue;
            }
        };

        let outcome = process_file(&path);
        summary.record(&outcome);
        match &outcome {
            FileOutcome::Modified(path) => reporter.modified(path)?,
            FileOutcome::Failed(e) => reporter.file_error(e)?,
            FileOutcome::Unchanged(_) => {}
        }
    }

    info!(
        scanned = summary.files_scanned,
        modified = summary.files_modified,
        failed = summary.files_failed,
        "strip finished"
    );
    reporter.summary(&summary)?;
    Ok(summary)
}

/// Run with stdout/stderr as destinations.
pub fn handle_strip(config: &StripConfig, formatting: FormattingConfig) -> Result<RunSummary> {
    let out = StdoutDestination::new();
    let err = StderrDestination::new();
    let reporter = Reporter::new(&out, &err, formatting);
    run_strip(config, &reporter)
}
