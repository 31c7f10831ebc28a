//! Human-readable progress and summary lines.
//!
//! Normal progress goes to `out`; per-file faults and fatal notices go to
//! `err`. All text is built here so the wording stays in one place.

use crate::errors::{Error, Result};
use crate::formatting::{FormattingConfig, OutputFormatter};
use crate::io::OutputDestination;
use crate::summary::RunSummary;
use std::path::Path;

pub struct Reporter<'a> {
    out: &'a dyn OutputDestination,
    err: &'a dyn OutputDestination,
    formatter: Box<dyn OutputFormatter>,
}

impl<'a> Reporter<'a> {
    pub fn new(
        out: &'a dyn OutputDestination,
        err: &'a dyn OutputDestination,
        formatting: FormattingConfig,
    ) -> Self {
        Self {
            out,
            err,
            formatter: formatting.formatter(),
        }
    }

    pub fn start(&self, root: &Path) -> Result<()> {
        self.out.write_line(&format!(
            "Scanning files in {}/ for diacritics...",
            root.display()
        ))
    }

    pub fn modified(&self, path: &Path) -> Result<()> {
        self.out.write_line(&format!(
            "{} {}",
            self.formatter.success("Modified:"),
            path.display()
        ))
    }

    pub fn file_error(&self, error: &Error) -> Result<()> {
        let line = match error.path() {
            Some(path) => format!("Error processing {}: {}", path.display(), error.reason()),
            None => format!("Error: {}", error),
        };
        self.err.write_line(&self.formatter.error(&line))
    }

    pub fn fatal(&self, error: &Error) -> Result<()> {
        self.err.write_line(&self.formatter.error(&error.to_string()))?;
        self.err.flush()
    }

    pub fn summary(&self, summary: &RunSummary) -> Result<()> {
        self.out.write_line("")?;
        self.out.write_line(&self.formatter.header("Result:"))?;
        self.out
            .write_line(&format!("- Files scanned: {}", summary.files_scanned))?;
        self.out
            .write_line(&format!("- Files modified: {}", summary.files_modified))?;
        if summary.files_failed > 0 {
            self.out.write_line(&self.formatter.warning(&format!(
                "- Files failed: {}",
                summary.files_failed
            )))?;
        }

        let closing = if summary.any_modified() {
            self.formatter.success("Diacritics removed successfully!")
        } else {
            self.formatter
                .dim("No diacritics found in the scanned files.")
        };
        self.out.write_line(&closing)?;
        self.out.flush()
    }
}
