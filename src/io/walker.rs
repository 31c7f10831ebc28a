use crate::config::{has_allowed_extension, StripConfig};
use crate::errors::{Error, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursive enumeration of the files a strip run should visit.
pub struct FileWalker {
    root: PathBuf,
    extensions: Vec<String>,
}

impl FileWalker {
    pub fn from_config(config: &StripConfig) -> Self {
        Self {
            root: config.root.clone(),
            extensions: config.extensions.clone(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fail unless the root exists and is a directory.
    pub fn check_root(&self) -> Result<()> {
        check_root(&self.root)
    }

    /// Lazily walk the tree, yielding matching files in traversal order.
    ///
    /// Entries that cannot be listed are yielded as [`Error::Walk`] so the
    /// caller can report them and keep going.
    pub fn walk(&self) -> impl Iterator<Item = Result<PathBuf>> + '_ {
        WalkDir::new(&self.root)
            .into_iter()
            .filter_map(move |entry| match entry {
                Ok(entry) => {
                    let path = entry.path();
                    if path.is_file() && self.should_process(path) {
                        Some(Ok(path.to_path_buf()))
                    } else {
                        None
                    }
                }
                Err(source) => {
                    let path = source
                        .path()
                        .map(Path::to_path_buf)
                        .unwrap_or_else(|| self.root.clone());
                    Some(Err(Error::Walk { path, source }))
                }
            })
    }

    fn should_process(&self, path: &Path) -> bool {
        has_allowed_extension(path, &self.extensions)
    }
}

pub fn check_root(root: &Path) -> Result<()> {
    if !root.exists() {
        return Err(Error::RootMissing {
            path: root.to_path_buf(),
        });
    }
    if !root.is_dir() {
        return Err(Error::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }
    Ok(())
}
