//! Configuration types for a sift run.
//!
//! Split into source config (how candidates are discovered), destination
//! config (where copies land), and sift config (how candidates are
//! classified). The `Default` impls carry the tool's original fixed values,
//! so a caller that overrides nothing gets the historical behavior.

use std::path::PathBuf;

/// Classification strategy selection, resolved once at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum Strategy {
    /// Use the content strategy when docx parsing is compiled in,
    /// otherwise fall back to the filename strategy with a warning (default).
    #[default]
    Auto,
    /// Force the content strategy. Startup error if docx parsing is
    /// not compiled in.
    Content,
    /// Force the filename strategy, even when docx parsing is available.
    Filename,
}

/// Where and how candidate documents are discovered.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SourceConfig {
    /// Root directory scanned recursively in tree mode (default: `results`).
    pub root: PathBuf,
    /// When set, process exactly this one file instead of scanning `root`.
    /// Must exist and carry the document extension.
    pub single_file: Option<PathBuf>,
    /// Document extension, matched case-insensitively (default: `docx`).
    pub extension: String,
    /// Exclude patterns (glob format), matched against the full path and
    /// the file name.
    pub exclude: Vec<String>,
    /// Whether to follow symbolic links during traversal.
    ///
    /// Defaults to `false` — following symlinks allows escaping the source
    /// tree. Only enable if you trust every symlink under `root`.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    /// Prevents infinite recursion via deeply nested symlinks or directories.
    pub max_depth: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("results"),
            single_file: None,
            extension: "docx".to_owned(),
            exclude: Vec::new(),
            follow_links: false,
            max_depth: 64,
        }
    }
}

/// Where copies are written.
///
/// The actual destination directory is `base/YYYY.MM.DD`, computed once per
/// run from the local date.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct DestConfig {
    /// Base directory; the dated subdirectory is appended (default: `results`).
    pub base: PathBuf,
}

impl Default for DestConfig {
    fn default() -> Self {
        Self {
            base: PathBuf::from("results"),
        }
    }
}

/// How candidates are classified.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct SiftConfig {
    /// Strategy selection (default: [`Strategy::Auto`]).
    pub strategy: Strategy,
    /// Marker phrase the first non-empty paragraph must start with to
    /// classify as investment advice (default: `投资建议`).
    pub marker_phrase: String,
    /// Keywords for the filename strategy; a lowercased file name containing
    /// any of them classifies as investment advice.
    pub filename_keywords: Vec<String>,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::Auto,
            marker_phrase: "投资建议".to_owned(),
            filename_keywords: ["买入", "卖出", "持有", "投资", "建议"]
                .iter()
                .map(|s| (*s).to_owned())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_original_fixed_values() {
        let source = SourceConfig::default();
        assert_eq!(source.root, PathBuf::from("results"));
        assert_eq!(source.extension, "docx");
        assert!(!source.follow_links);

        let dest = DestConfig::default();
        assert_eq!(dest.base, PathBuf::from("results"));

        let sift = SiftConfig::default();
        assert_eq!(sift.strategy, Strategy::Auto);
        assert_eq!(sift.marker_phrase, "投资建议");
        assert_eq!(sift.filename_keywords.len(), 5);
    }
}
