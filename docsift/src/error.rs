//! Error types for a sift run.
//!
//! Two tiers: [`SiftError`] aborts the whole invocation before any copy
//! happens; [`FileIssue`] records a per-file failure that the run survives.
//! Per-file failures are data, not control flow — they are collected in the
//! report and never silently discarded.

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A fatal error that aborts the invocation without processing any files.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SiftError {
    /// The source root for tree mode does not exist or is not a directory.
    #[error("source directory does not exist: {}", .0.display())]
    MissingSourceDir(PathBuf),

    /// The explicit single file does not exist or lacks the document
    /// extension.
    #[error("not an existing document file: {}", .0.display())]
    InvalidSingleFile(PathBuf),

    /// The content strategy was forced but docx parsing is not compiled in.
    #[error("content strategy requested but docx parsing is not compiled in")]
    ContentStrategyUnavailable,

    /// The dated destination directory could not be created.
    #[error("failed to create destination directory {}", .path.display())]
    CreateDestDir {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// The kind of per-file failure recorded during a run.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IssueKind {
    /// A directory traversal error (permission denied, loop detected, etc.).
    Walk,
    /// An exclude glob pattern could not be parsed.
    Pattern,
    /// The document could not be opened or parsed; the file was treated as
    /// safe to copy.
    Read,
    /// The copy to the destination failed.
    Copy,
}

/// A per-file failure. The run continues past these; they end up in the
/// report so a caller can tell a clean run from a degraded one.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[non_exhaustive]
pub struct FileIssue {
    /// The affected file (or the offending pattern for [`IssueKind::Pattern`]).
    pub path: PathBuf,
    /// The kind of failure.
    pub kind: IssueKind,
    /// Human-readable description of the failure.
    pub message: String,
}

impl FileIssue {
    /// Format the issue for human-readable output.
    #[must_use]
    pub fn format_human_readable(&self) -> String {
        format!("{}: {}", self.path.display(), self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sift_error_messages_name_the_path() {
        let err = SiftError::MissingSourceDir(PathBuf::from("results"));
        assert!(err.to_string().contains("results"));

        let err = SiftError::InvalidSingleFile(PathBuf::from("notes.txt"));
        assert!(err.to_string().contains("notes.txt"));
    }

    #[test]
    fn test_file_issue_human_format() {
        let issue = FileIssue {
            path: PathBuf::from("results/a.docx"),
            kind: IssueKind::Read,
            message: "failed to parse docx: bad zip".to_owned(),
        };
        let formatted = issue.format_human_readable();
        assert!(formatted.starts_with("results/a.docx: "));
        assert!(formatted.contains("bad zip"));
    }
}
