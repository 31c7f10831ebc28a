//! Error types for a strip run.
//!
//! Errors fall into two tiers:
//!
//! - **Fatal**: the root directory is missing or is not a directory. The run
//!   aborts before touching any file.
//! - **Per-file**: reading, decoding, writing, or listing a single entry
//!   failed. The file is reported, counted as scanned, and the walk continues.

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Main error type for dediacritic operations
#[derive(Debug, Error)]
pub enum Error {
    /// Root directory does not exist
    #[error("Directory {}/ does not exist!", path.display())]
    RootMissing { path: PathBuf },

    /// Root path exists but is not a directory
    #[error("{} is not a directory!", path.display())]
    RootNotDirectory { path: PathBuf },

    /// Opening or reading a file failed
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// Writing the rewritten content failed
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A directory entry could not be listed during the walk
    #[error("failed to list {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// Writing the console report failed
    #[error("failed to write report to {destination}: {source}")]
    Report {
        destination: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Whether this error aborts the whole run rather than a single file.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::RootMissing { .. } | Self::RootNotDirectory { .. } | Self::Report { .. }
        )
    }

    /// Path of the file or directory this error concerns, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::RootMissing { path }
            | Self::RootNotDirectory { path }
            | Self::Read { path, .. }
            | Self::Decode { path, .. }
            | Self::Write { path, .. }
            | Self::Walk { path, .. } => Some(path),
            Self::Report { .. } => None,
        }
    }

    /// Underlying reason without the path prefix, for per-file notices.
    pub fn reason(&self) -> String {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => source.to_string(),
            Self::Decode { source, .. } => source.to_string(),
            Self::Walk { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
