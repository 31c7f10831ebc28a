//! Per-file processing: read, decide, then write or skip.

use crate::errors::Error;
use crate::io::{read_text, write_text_atomic};
use crate::transform::strip;
use std::borrow::Cow;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What happened to one candidate file.
#[derive(Debug)]
pub enum FileOutcome {
    /// Content had no diacritics; nothing was written.
    Unchanged(PathBuf),
    /// Content was rewritten in place.
    Modified(PathBuf),
    /// Reading or writing failed; the file was left as it was.
    Failed(Error),
}

impl FileOutcome {
    pub fn is_modified(&self) -> bool {
        matches!(self, Self::Modified(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Strip diacritics from a single file.
///
/// Never returns an error: failures are folded into
/// [`FileOutcome::Failed`] so the caller can keep walking.
pub fn process_file(path: &Path) -> FileOutcome {
    debug!(path = %path.display(), "reading");

    let original = match read_text(path) {
        Ok(content) => content,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable file");
            return FileOutcome::Failed(e);
        }
    };

    match strip(&original) {
        Cow::Borrowed(_) => FileOutcome::Unchanged(path.to_path_buf()),
        Cow::Owned(stripped) => match write_text_atomic(path, &stripped) {
            Ok(()) => {
                info!(path = %path.display(), "rewrote file");
                FileOutcome::Modified(path.to_path_buf())
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "failed to rewrite file");
                FileOutcome::Failed(e)
            }
        },
    }
}
