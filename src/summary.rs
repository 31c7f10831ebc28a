use crate::rewrite::FileOutcome;

/// Counters for a single run. Created empty, updated once per candidate
/// file, reported at the end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files_scanned: usize,
    pub files_modified: usize,
    pub files_failed: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every outcome counts as scanned; only a successful rewrite counts as
    /// modified.
    pub fn record(&mut self, outcome: &FileOutcome) {
        self.files_scanned += 1;
        match outcome {
            FileOutcome::Modified(_) => self.files_modified += 1,
            FileOutcome::Failed(_) => self.files_failed += 1,
            FileOutcome::Unchanged(_) => {}
        }
    }

    /// A listing error that never produced a file still shows up as a fault.
    pub fn record_walk_failure(&mut self) {
        self.files_failed += 1;
    }

    pub fn any_modified(&self) -> bool {
        self.files_modified > 0
    }
}
