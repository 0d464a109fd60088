//! Run summary reporting.

use std::time::Duration;

use promptfile_core::WalkWarning;

use crate::walker::WalkReport;

/// What a collection run did.
#[derive(Debug, Clone, Default)]
pub struct CollectSummary {
    /// Blocks written, including those with an error body.
    pub files_collected: u64,
    /// Blocks whose file could not be read as text.
    pub unreadable_files: u64,
    /// Files skipped by name.
    pub ignored_files: u64,
    /// Directories skipped by name.
    pub pruned_dirs: u64,
    /// Bytes handed to the sink.
    pub bytes_written: u64,
    /// Directories that could not be listed.
    pub warnings: Vec<WalkWarning>,
    /// Wall time of the run.
    pub elapsed: Duration,
}

impl CollectSummary {
    pub(crate) fn record_block(&mut self, bytes: usize, is_error: bool) {
        self.files_collected += 1;
        self.bytes_written += bytes as u64;
        if is_error {
            self.unreadable_files += 1;
        }
    }

    pub(crate) fn absorb_walk(&mut self, report: WalkReport) {
        self.ignored_files = report.ignored_files;
        self.pruned_dirs = report.pruned_dirs;
        self.warnings = report.warnings;
    }

    /// Files whose text made it into the output.
    pub fn readable_files(&self) -> u64 {
        self.files_collected - self.unreadable_files
    }

    /// Check if any directory could not be listed.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_block() {
        let mut summary = CollectSummary::default();
        summary.record_block(100, false);
        summary.record_block(40, true);

        assert_eq!(summary.files_collected, 2);
        assert_eq!(summary.unreadable_files, 1);
        assert_eq!(summary.readable_files(), 1);
        assert_eq!(summary.bytes_written, 140);
    }

    #[test]
    fn test_absorb_walk() {
        let mut summary = CollectSummary::default();
        summary.absorb_walk(WalkReport {
            ignored_files: 4,
            pruned_dirs: 2,
            warnings: vec![WalkWarning::new("/locked", "Permission denied")],
        });

        assert_eq!(summary.ignored_files, 4);
        assert_eq!(summary.pruned_dirs, 2);
        assert!(summary.has_warnings());
    }
}
