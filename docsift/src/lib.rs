//! # docsift
//!
//! Batch classify-and-copy for generated report documents.
//!
//! Scans a tree of `.docx` files (or one explicit file), classifies each as
//! investment advice or not by its first non-empty paragraph, and copies the
//! non-advice documents into a date-stamped destination folder, renaming on
//! collision. Per-file failures never abort a run; they are collected in the
//! returned report.
//!
//! This crate is the engine only: it never prints. Progress is surfaced
//! through the [`SiftEvent`] observer callback, and end-of-run formatting
//! lives in [`output`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::atomic::AtomicBool;
//! use docsift::{DestConfig, SiftConfig, SourceConfig, sift_fs};
//!
//! let source = SourceConfig::default();
//! let dest = DestConfig::default();
//! let config = SiftConfig::default();
//! let cancel = AtomicBool::new(false);
//!
//! let report = sift_fs(&source, &dest, &config, &cancel, |_event| {}).unwrap();
//! println!("copied {} of {} documents", report.copied, report.found);
//! ```

mod classify;
mod config;
mod copy;
#[cfg(feature = "docx")]
mod docx;
mod error;
pub mod output;
mod report;
mod scan;
mod sift;

#[cfg(feature = "docx")]
pub use classify::ContentClassifier;
pub use classify::{
    Classification, Classifier, FilenameClassifier, StrategyKind, content_available,
    resolve as resolve_classifier,
};
pub use config::{DestConfig, SiftConfig, SourceConfig, Strategy};
pub use error::{FileIssue, IssueKind, SiftError};
pub use report::SiftReport;
pub use sift::{SiftEvent, sift_fs};
