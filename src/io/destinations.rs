//! Output destinations for the console report.
//!
//! The report is written through the `OutputDestination` trait so a run can
//! print to stdout/stderr from the binary and to memory from tests.
//!
//! # Example
//!
//! ```rust
//! use dediacritic::io::destinations::{MemoryDestination, OutputDestination};
//!
//! let dest = MemoryDestination::new();
//! dest.write_line("Modified: lib/a.dart").unwrap();
//! assert!(dest.get_content().contains("lib/a.dart"));
//! ```

use crate::errors::Error;
use std::io::{self, Write};
use std::sync::{Arc, RwLock};

/// Trait for destinations that receive report lines.
pub trait OutputDestination {
    /// Write string content to the destination.
    fn write_str(&self, content: &str) -> Result<(), Error>;

    /// Write `line` followed by a newline.
    fn write_line(&self, line: &str) -> Result<(), Error> {
        self.write_str(line)?;
        self.write_str("\n")
    }

    /// Flush any buffered content.
    fn flush(&self) -> Result<(), Error>;

    /// Get a description of the destination for error messages.
    fn description(&self) -> String;
}

/// In-memory output destination for testing.
///
/// Captures all output in a shared buffer that can be inspected after the
/// run.
#[derive(Debug, Clone)]
pub struct MemoryDestination {
    buffer: Arc<RwLock<String>>,
}

impl Default for MemoryDestination {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDestination {
    /// Create a new in-memory destination with an empty buffer.
    pub fn new() -> Self {
        Self {
            buffer: Arc::new(RwLock::new(String::new())),
        }
    }

    /// Get the current content of the buffer.
    pub fn get_content(&self) -> String {
        self.buffer.read().expect("RwLock poisoned").clone()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.read().expect("RwLock poisoned").is_empty()
    }
}

impl OutputDestination for MemoryDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        self.buffer
            .write()
            .expect("RwLock poisoned")
            .push_str(content);
        Ok(())
    }

    fn flush(&self) -> Result<(), Error> {
        Ok(())
    }

    fn description(&self) -> String {
        "memory".to_string()
    }
}

/// Standard output destination.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutDestination;

impl StdoutDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StdoutDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        io::stdout()
            .lock()
            .write_all(content.as_bytes())
            .map_err(|source| report_error(self, source))
    }

    fn flush(&self) -> Result<(), Error> {
        io::stdout()
            .lock()
            .flush()
            .map_err(|source| report_error(self, source))
    }

    fn description(&self) -> String {
        "stdout".to_string()
    }
}

/// Standard error destination, used for per-file faults and fatal notices.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDestination;

impl StderrDestination {
    pub fn new() -> Self {
        Self
    }
}

impl OutputDestination for StderrDestination {
    fn write_str(&self, content: &str) -> Result<(), Error> {
        io::stderr()
            .lock()
            .write_all(content.as_bytes())
            .map_err(|source| report_error(self, source))
    }

    fn flush(&self) -> Result<(), Error> {
        io::stderr()
            .lock()
            .flush()
            .map_err(|source| report_error(self, source))
    }

    fn description(&self) -> String {
        "stderr".to_string()
    }
}

fn report_error(dest: &dyn OutputDestination, source: io::Error) -> Error {
    Error::Report {
        destination: dest.description(),
        source,
    }
}
