//! Shared output formatting for run reports.
//!
//! Provides JSON and human-readable formatters for [`SiftReport`].
//! Color/terminal formatting is intentionally excluded from this module —
//! that concern belongs to the CLI layer.

use std::io::Write;

use crate::report::SiftReport;

/// Format a [`SiftReport`] as JSON to a writer.
///
/// # Errors
///
/// Returns an error if serialization or writing fails.
pub fn write_json(report: &SiftReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

/// Format a [`SiftReport`] as the end-of-run summary, matching the tool's
/// historical console output.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_human(report: &SiftReport, writer: &mut dyn Write) -> anyhow::Result<()> {
    writeln!(writer)?;
    writeln!(
        writer,
        "🎉 完成! 共复制了 {} 个文件到 {}",
        report.copied,
        report.dest_dir.display()
    )?;
    if report.skipped > 0 {
        writeln!(writer, "⏭️  跳过了 {} 个投资建议文件", report.skipped)?;
    }
    if !report.issues.is_empty() {
        writeln!(writer, "⚠️  {} 个文件处理时出现问题:", report.issues.len())?;
        for issue in &report.issues {
            writeln!(writer, "   {}", issue.format_human_readable())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::StrategyKind;
    use crate::error::{FileIssue, IssueKind};
    use std::path::PathBuf;

    fn sample_report() -> SiftReport {
        SiftReport {
            found: 2,
            copied: 1,
            skipped: 1,
            failed: 0,
            interrupted: false,
            strategy: StrategyKind::Content,
            dest_dir: PathBuf::from("results/2026.08.28"),
            issues: vec![],
        }
    }

    #[test]
    fn test_write_human_reports_copied_count_and_destination() {
        let mut buf = Vec::new();
        write_human(&sample_report(), &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("共复制了 1 个文件"), "got: {text}");
        assert!(text.contains("results/2026.08.28"), "got: {text}");
    }

    #[test]
    fn test_write_human_lists_issues() {
        let mut report = sample_report();
        report.issues.push(FileIssue {
            path: PathBuf::from("a.docx"),
            kind: IssueKind::Copy,
            message: "disk full".to_owned(),
        });
        let mut buf = Vec::new();
        write_human(&report, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("disk full"), "got: {text}");
    }

    #[test]
    fn test_write_json_round_trips_counters() {
        let mut buf = Vec::new();
        write_json(&sample_report(), &mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["found"], 2);
        assert_eq!(value["copied"], 1);
        assert_eq!(value["strategy"], "content");
        assert!(value["issues"].is_array());
    }
}
