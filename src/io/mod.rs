pub mod destinations;
pub mod walker;

pub use destinations::{MemoryDestination, OutputDestination, StderrDestination, StdoutDestination};
pub use walker::{check_root, FileWalker};

use crate::errors::{Error, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Read a file as UTF-8 text. The handle is closed before returning on
/// every path.
pub fn read_text(path: &Path) -> Result<String> {
    let read_err = |source: std::io::Error| Error::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .map_err(read_err)?;

    String::from_utf8(bytes).map_err(|source| Error::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the content of `path` with `content`.
///
/// Symlinks are resolved first so the file they point at is rewritten and
/// the link itself stays in place. The new content goes to a temporary file
/// next to that target which is then renamed over it, so readers never see a
/// half-written file. The original file's permissions are carried over.
///
/// A file with other hard links is truncated and rewritten in place instead,
/// since a rename would detach it from its other names.
pub fn write_text_atomic(path: &Path, content: &str) -> Result<()> {
    let write_err = |source: std::io::Error| Error::Write {
        path: path.to_path_buf(),
        source,
    };

    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if has_other_links(&target) {
        return write_in_place(&target, content).map_err(write_err);
    }

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_err)?;
    temp.write_all(content.as_bytes()).map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = fs::metadata(&target) {
        fs::set_permissions(temp.path(), metadata.permissions()).map_err(write_err)?;
    }

    // Dropping the temp file on error removes it, leaving the original intact
    temp.persist(&target).map_err(|e| write_err(e.error))?;
    Ok(())
}

fn write_in_place(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().write(true).truncate(true).open(path)?;
    file.write_all(content.as_bytes())?;
    file.sync_all()
}

#[cfg(unix)]
fn has_other_links(path: &Path) -> bool {
    use std::os::unix::fs::MetadataExt;

    fs::metadata(path).is_ok_and(|metadata| metadata.nlink() > 1)
}

#[cfg(not(unix))]
fn has_other_links(_path: &Path) -> bool {
    false
}
