//! Strip Romanian diacritics from text files in place.
//!
//! A run walks a root directory (`lib` by default), picks files by
//! extension, replaces `ă â î ș ț` (and their capitals) with plain ASCII
//! letters, and rewrites only the files whose content changed.
//!
//! ```rust,no_run
//! use dediacritic::commands::handle_strip;
//! use dediacritic::config::StripConfig;
//! use dediacritic::formatting::FormattingConfig;
//!
//! let summary = handle_strip(&StripConfig::default(), FormattingConfig::plain())?;
//! println!("{} of {} files rewritten", summary.files_modified, summary.files_scanned);
//! # Ok::<(), dediacritic::errors::Error>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod formatting;
pub mod io;
pub mod observability;
pub mod report;
pub mod rewrite;
pub mod summary;
pub mod transform;

// Re-export commonly used types
pub use crate::commands::{handle_strip, run_strip};
pub use crate::config::StripConfig;
pub use crate::errors::{Error, Result};
pub use crate::rewrite::{process_file, FileOutcome};
pub use crate::summary::RunSummary;
pub use crate::transform::{contains_diacritics, remove_diacritics};
