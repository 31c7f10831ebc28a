use std::path::{Path, PathBuf};

/// Directory scanned when no other root is supplied, relative to the
/// current working directory.
pub const DEFAULT_ROOT: &str = "lib";

/// File extensions (without the leading dot) eligible for rewriting.
pub const DEFAULT_EXTENSIONS: [&str; 6] = ["dart", "yaml", "yml", "json", "md", "txt"];

/// Settings for a single strip run.
///
/// The binary always runs with [`StripConfig::default`]; other roots are
/// only reachable through the library API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from(DEFAULT_ROOT),
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl StripConfig {
    /// Default extensions under a different root.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Exact, case-sensitive match on the suffix after the last dot.
    pub fn matches_extension(&self, path: &Path) -> bool {
        has_allowed_extension(path, &self.extensions)
    }
}

pub fn has_allowed_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|allowed| allowed == ext))
}
