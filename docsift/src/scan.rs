//! Candidate enumeration.
//!
//! Discovers document files on disk for the classification pipeline.
//! Properties enforced here:
//! - Symlinks are not followed by default (`follow_links: false`)
//! - Maximum directory depth is enforced to prevent infinite recursion
//! - Walk errors are collected as issues, never silently discarded
//! - Single-file mode validates existence and extension up front

use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::config::SourceConfig;
use crate::error::{FileIssue, IssueKind, SiftError};

/// Check if a path carries the configured document extension
/// (case-insensitive).
fn matches_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(extension))
}

/// Check if a path matches any of the exclude patterns. Patterns are tried
/// against the full path and the bare file name, like the usual ignore-file
/// semantics.
fn matches_exclude(path: &Path, exclude_patterns: &[Pattern]) -> bool {
    let path_str = path.to_string_lossy();
    for pattern in exclude_patterns {
        if pattern.matches(&path_str)
            || path
                .file_name()
                .is_some_and(|name| pattern.matches(&name.to_string_lossy()))
        {
            return true;
        }
    }
    false
}

/// Compile the exclude list; invalid patterns become issues, not fatal errors.
fn compile_excludes(exclude: &[String], issues: &mut Vec<FileIssue>) -> Vec<Pattern> {
    let mut patterns = Vec::with_capacity(exclude.len());
    for pat_str in exclude {
        match Pattern::new(pat_str) {
            Ok(pat) => patterns.push(pat),
            Err(e) => issues.push(FileIssue {
                path: PathBuf::from(pat_str),
                kind: IssueKind::Pattern,
                message: format!("invalid exclude glob pattern '{pat_str}': {e}"),
            }),
        }
    }
    patterns
}

/// Find all candidate documents per the source config.
///
/// Tree mode walks `config.root` recursively and keeps every regular file
/// with the document extension. Single-file mode validates the one explicit
/// path. Returns the candidates plus any non-fatal discovery issues (walk
/// errors, bad exclude patterns).
///
/// The candidate list is sorted for deterministic output; downstream logic
/// must not depend on the order — classification and copy are independent
/// per candidate.
///
/// # Errors
///
/// [`SiftError::InvalidSingleFile`] if the explicit file is missing or has
/// the wrong extension; [`SiftError::MissingSourceDir`] if the tree root
/// does not exist. Both abort before any side effect.
pub fn find_candidates(config: &SourceConfig) -> Result<(Vec<PathBuf>, Vec<FileIssue>), SiftError> {
    if let Some(file) = config.single_file.as_deref() {
        if !file.is_file() || !matches_extension(file, &config.extension) {
            return Err(SiftError::InvalidSingleFile(file.to_path_buf()));
        }
        return Ok((vec![file.to_path_buf()], Vec::new()));
    }

    if !config.root.is_dir() {
        return Err(SiftError::MissingSourceDir(config.root.clone()));
    }

    let mut issues = Vec::new();
    let exclude_patterns = compile_excludes(&config.exclude, &mut issues);

    let mut candidates = Vec::new();
    for entry_result in WalkDir::new(&config.root)
        .follow_links(config.follow_links)
        .max_depth(config.max_depth)
    {
        let entry = match entry_result {
            Ok(e) => e,
            Err(walk_err) => {
                let path = walk_err
                    .path()
                    .map_or_else(|| config.root.clone(), Path::to_path_buf);
                issues.push(FileIssue {
                    path,
                    kind: IssueKind::Walk,
                    message: format!("directory traversal error: {walk_err}"),
                });
                continue;
            }
        };

        let file_path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }
        if !matches_extension(file_path, &config.extension) {
            continue;
        }
        if matches_exclude(file_path, &exclude_patterns) {
            continue;
        }
        candidates.push(file_path.to_path_buf());
    }

    candidates.sort();
    candidates.dedup();
    Ok((candidates, issues))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"stub").unwrap();
    }

    #[test]
    fn test_tree_mode_keeps_only_document_extension() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.docx"));
        touch(&tmp.path().join("b.DOCX"));
        touch(&tmp.path().join("c.txt"));
        fs::create_dir(tmp.path().join("nested")).unwrap();
        touch(&tmp.path().join("nested/d.docx"));

        let mut config = SourceConfig::default();
        config.root = tmp.path().to_path_buf();
        let (candidates, issues) = find_candidates(&config).unwrap();

        assert!(issues.is_empty());
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().all(|p| {
            p.extension()
                .is_some_and(|e| e.eq_ignore_ascii_case("docx"))
        }));
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let tmp = TempDir::new().unwrap();
        let mut config = SourceConfig::default();
        config.root = tmp.path().join("does_not_exist");
        let err = find_candidates(&config).unwrap_err();
        assert!(matches!(err, SiftError::MissingSourceDir(_)));
    }

    #[test]
    fn test_single_file_mode_validates_extension() {
        let tmp = TempDir::new().unwrap();
        let doc = tmp.path().join("report.docx");
        let txt = tmp.path().join("notes.txt");
        touch(&doc);
        touch(&txt);

        let mut config = SourceConfig::default();
        config.single_file = Some(doc.clone());
        let (candidates, _) = find_candidates(&config).unwrap();
        assert_eq!(candidates, vec![doc]);

        config.single_file = Some(txt);
        let err = find_candidates(&config).unwrap_err();
        assert!(matches!(err, SiftError::InvalidSingleFile(_)));

        config.single_file = Some(tmp.path().join("missing.docx"));
        let err = find_candidates(&config).unwrap_err();
        assert!(matches!(err, SiftError::InvalidSingleFile(_)));
    }

    #[test]
    fn test_exclude_patterns_filter_by_name_and_path() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("keep.docx"));
        touch(&tmp.path().join("draft_old.docx"));

        let mut config = SourceConfig::default();
        config.root = tmp.path().to_path_buf();
        config.exclude = vec!["draft_*".to_owned()];
        let (candidates, issues) = find_candidates(&config).unwrap();

        assert!(issues.is_empty());
        assert_eq!(candidates.len(), 1);
        assert!(candidates[0].ends_with("keep.docx"));
    }

    #[test]
    fn test_invalid_exclude_pattern_is_an_issue_not_fatal() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.docx"));

        let mut config = SourceConfig::default();
        config.root = tmp.path().to_path_buf();
        config.exclude = vec!["[bad".to_owned()];
        let (candidates, issues) = find_candidates(&config).unwrap();

        assert_eq!(candidates.len(), 1);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Pattern);
    }
}
