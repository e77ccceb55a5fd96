//! Run report types.

use std::path::PathBuf;

use serde::Serialize;

use crate::classify::StrategyKind;
use crate::error::FileIssue;

/// Result of one sift run.
///
/// Callers that care about coverage must check `issues` as well as the
/// counters — a non-empty issue list means some file was not read or not
/// copied as intended, even when `copied` looks plausible.
#[derive(Debug, Clone, Serialize)]
#[non_exhaustive]
pub struct SiftReport {
    /// Number of candidate documents found by the enumerator.
    pub found: usize,
    /// Number of candidates copied into the destination directory.
    pub copied: usize,
    /// Number of candidates skipped as investment advice.
    pub skipped: usize,
    /// Number of candidates whose copy failed.
    pub failed: usize,
    /// Whether the run was interrupted before processing every candidate.
    pub interrupted: bool,
    /// The classification strategy that was actually used.
    pub strategy: StrategyKind,
    /// The dated destination directory of this run.
    pub dest_dir: PathBuf,
    /// Per-file failures collected during the run (walk, pattern, read, copy).
    pub issues: Vec<FileIssue>,
}

impl SiftReport {
    /// Number of candidates that reached a terminal outcome.
    #[must_use]
    pub fn processed(&self) -> usize {
        self.copied + self.skipped + self.failed
    }

    /// Whether the run completed with no per-file failures and no interrupt.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && !self.interrupted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IssueKind;

    fn sample_report() -> SiftReport {
        SiftReport {
            found: 3,
            copied: 2,
            skipped: 1,
            failed: 0,
            interrupted: false,
            strategy: StrategyKind::Content,
            dest_dir: PathBuf::from("results/2026.08.28"),
            issues: vec![],
        }
    }

    #[test]
    fn test_processed_sums_terminal_outcomes() {
        let report = sample_report();
        assert_eq!(report.processed(), 3);
        assert!(report.is_clean());
    }

    #[test]
    fn test_issues_make_the_run_dirty() {
        let mut report = sample_report();
        report.issues.push(FileIssue {
            path: PathBuf::from("a.docx"),
            kind: IssueKind::Read,
            message: "unreadable".to_owned(),
        });
        assert!(!report.is_clean());
    }
}
