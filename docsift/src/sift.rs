//! Run orchestration: enumerate, classify, copy, report.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::classify::{self, Classifier};
use crate::config::{DestConfig, SiftConfig, SourceConfig};
use crate::copy::{DatedDestination, copy_preserving};
use crate::error::{FileIssue, IssueKind, SiftError};
use crate::report::SiftReport;
use crate::scan;

/// Progress notifications emitted during a run, in order. The library never
/// prints; a CLI observer turns these into user-facing messages.
#[derive(Debug)]
#[non_exhaustive]
pub enum SiftEvent<'a> {
    /// The dated destination directory exists and will receive copies.
    DestinationReady {
        /// The destination directory.
        dir: &'a Path,
    },
    /// Tree mode found this many candidates.
    Scanned {
        /// Number of candidates found.
        count: usize,
    },
    /// Single-file mode is processing exactly this file.
    SingleFile {
        /// The explicit file.
        source: &'a Path,
    },
    /// A candidate was copied.
    Copied {
        /// The source file.
        source: &'a Path,
        /// The (possibly collision-renamed) destination file.
        target: &'a Path,
    },
    /// A candidate was classified as investment advice and skipped.
    Skipped {
        /// The skipped file.
        source: &'a Path,
    },
    /// A candidate could not be read or parsed; it will be copied by default.
    ReadIssue {
        /// The unreadable file.
        source: &'a Path,
        /// Description of the failure.
        message: &'a str,
    },
    /// A candidate's copy failed; the run continues.
    CopyFailed {
        /// The source file.
        source: &'a Path,
        /// Description of the failure.
        message: &'a str,
    },
}

/// Run the whole pipeline against the filesystem.
///
/// Enumerates candidates per `source`, resolves the classification strategy
/// once, creates the dated destination under `dest.base`, then processes
/// every candidate sequentially. The cancellation flag is polled between
/// candidates; when set, the run stops and the report is marked interrupted
/// (copies already made stay on disk).
///
/// Per-file failures (unreadable documents, failed copies, walk errors) are
/// collected in the report and never abort the run.
///
/// # Errors
///
/// Hard failures only: missing source root, invalid single file, a forced
/// strategy that is not compiled in, or a destination directory that cannot
/// be created. All of them occur before any copy.
pub fn sift_fs<F>(
    source: &SourceConfig,
    dest: &DestConfig,
    config: &SiftConfig,
    cancel: &AtomicBool,
    mut observer: F,
) -> Result<SiftReport, SiftError>
where
    F: FnMut(&SiftEvent<'_>),
{
    let (candidates, issues) = scan::find_candidates(source)?;
    let classifier = classify::resolve(config)?;
    let destination = DatedDestination::create(&dest.base)?;

    observer(&SiftEvent::DestinationReady {
        dir: destination.dir(),
    });
    match source.single_file.as_deref() {
        Some(file) => observer(&SiftEvent::SingleFile { source: file }),
        None => observer(&SiftEvent::Scanned {
            count: candidates.len(),
        }),
    }

    tracing::info!(
        found = candidates.len(),
        strategy = ?classifier.kind(),
        dest = %destination.dir().display(),
        "starting sift run"
    );

    Ok(process_all(
        &candidates,
        classifier.as_ref(),
        &destination,
        issues,
        cancel,
        &mut observer,
    ))
}

/// Process every candidate in enumeration order, one terminal outcome each:
/// skipped, copied, or errored. No retries.
fn process_all(
    candidates: &[PathBuf],
    classifier: &dyn Classifier,
    destination: &DatedDestination,
    issues: Vec<FileIssue>,
    cancel: &AtomicBool,
    observer: &mut dyn FnMut(&SiftEvent<'_>),
) -> SiftReport {
    let mut report = SiftReport {
        found: candidates.len(),
        copied: 0,
        skipped: 0,
        failed: 0,
        interrupted: false,
        strategy: classifier.kind(),
        dest_dir: destination.dir().to_path_buf(),
        issues,
    };

    for candidate in candidates {
        if cancel.load(Ordering::SeqCst) {
            tracing::warn!("run interrupted, stopping before the next candidate");
            report.interrupted = true;
            break;
        }

        let verdict = classifier.classify(candidate);
        if let Some(message) = &verdict.read_error {
            observer(&SiftEvent::ReadIssue {
                source: candidate,
                message,
            });
            report.issues.push(FileIssue {
                path: candidate.clone(),
                kind: IssueKind::Read,
                message: message.clone(),
            });
        }

        if verdict.is_advice {
            tracing::debug!(path = %candidate.display(), "skipping investment advice");
            report.skipped += 1;
            observer(&SiftEvent::Skipped { source: candidate });
            continue;
        }

        let file_name = candidate
            .file_name()
            .unwrap_or_else(|| candidate.as_os_str());
        let target = destination.target_for(file_name);
        match copy_preserving(candidate, &target) {
            Ok(()) => {
                tracing::debug!(path = %candidate.display(), target = %target.display(), "copied");
                report.copied += 1;
                observer(&SiftEvent::Copied {
                    source: candidate,
                    target: &target,
                });
            }
            Err(e) => {
                tracing::warn!(path = %candidate.display(), error = %e, "copy failed");
                let message = format!("copy to {} failed: {e}", target.display());
                observer(&SiftEvent::CopyFailed {
                    source: candidate,
                    message: &message,
                });
                report.failed += 1;
                report.issues.push(FileIssue {
                    path: candidate.clone(),
                    kind: IssueKind::Copy,
                    message,
                });
            }
        }
    }

    report
}
