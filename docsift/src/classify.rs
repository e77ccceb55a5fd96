//! Classification strategies.
//!
//! One [`Classifier`] interface, two implementations: the content strategy
//! inspects the document's first non-empty paragraph; the filename strategy
//! is a coarser fallback for builds without docx parsing. The strategy is
//! resolved once at startup and held for the whole run.

use std::path::Path;

use serde::Serialize;

use crate::config::{SiftConfig, Strategy};
use crate::error::SiftError;

/// The strategy a verdict was produced with.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// First-paragraph inspection of the document content.
    Content,
    /// Keyword matching on the file name.
    Filename,
}

/// A per-candidate verdict.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Classification {
    /// Whether the candidate is investment advice (true means skip).
    pub is_advice: bool,
    /// A non-fatal read/parse failure. When set, `is_advice` is `false`
    /// so the failure does not silently suppress output.
    pub read_error: Option<String>,
}

/// Classifies one candidate document. Implementations never fail the run;
/// an unreadable document yields a copy-by-default verdict with the error
/// recorded on the [`Classification`].
pub trait Classifier {
    /// Which strategy this classifier implements.
    fn kind(&self) -> StrategyKind;

    /// Produce a verdict for one candidate.
    fn classify(&self, path: &Path) -> Classification;
}

/// Content strategy: the document is investment advice iff its first
/// non-empty paragraph starts with the marker phrase.
#[cfg(feature = "docx")]
pub struct ContentClassifier {
    marker: String,
}

#[cfg(feature = "docx")]
impl ContentClassifier {
    /// Build a content classifier for the given marker phrase.
    #[must_use]
    pub fn new(marker: String) -> Self {
        Self { marker }
    }
}

#[cfg(feature = "docx")]
impl Classifier for ContentClassifier {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Content
    }

    fn classify(&self, path: &Path) -> Classification {
        match crate::docx::first_non_empty_paragraph(path) {
            Ok(Some(first)) => Classification {
                is_advice: first.starts_with(&self.marker),
                read_error: None,
            },
            Ok(None) => Classification {
                is_advice: false,
                read_error: None,
            },
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable document, copying by default");
                Classification {
                    is_advice: false,
                    read_error: Some(e.to_string()),
                }
            }
        }
    }
}

/// Filename strategy: the document is investment advice iff its lowercased
/// file name contains any configured keyword. Deliberately coarser than the
/// content strategy; may over-classify.
pub struct FilenameClassifier {
    keywords: Vec<String>,
}

impl FilenameClassifier {
    /// Build a filename classifier for the given keyword set.
    #[must_use]
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Classifier for FilenameClassifier {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Filename
    }

    fn classify(&self, path: &Path) -> Classification {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        Classification {
            is_advice: self.keywords.iter().any(|kw| name.contains(kw.as_str())),
            read_error: None,
        }
    }
}

/// Whether the content strategy is compiled into this build.
#[must_use]
pub const fn content_available() -> bool {
    cfg!(feature = "docx")
}

/// Resolve the configured strategy into a classifier, once at startup.
///
/// `Auto` prefers the content strategy and falls back to the filename
/// strategy (with a one-time warning) when docx parsing is not compiled in.
///
/// # Errors
///
/// [`SiftError::ContentStrategyUnavailable`] when `Content` is forced in a
/// build without the `docx` feature.
pub fn resolve(config: &SiftConfig) -> Result<Box<dyn Classifier>, SiftError> {
    match config.strategy {
        Strategy::Filename => Ok(Box::new(FilenameClassifier::new(
            config.filename_keywords.clone(),
        ))),
        Strategy::Content => {
            #[cfg(feature = "docx")]
            {
                Ok(Box::new(ContentClassifier::new(
                    config.marker_phrase.clone(),
                )))
            }
            #[cfg(not(feature = "docx"))]
            {
                Err(SiftError::ContentStrategyUnavailable)
            }
        }
        Strategy::Auto => {
            #[cfg(feature = "docx")]
            {
                Ok(Box::new(ContentClassifier::new(
                    config.marker_phrase.clone(),
                )))
            }
            #[cfg(not(feature = "docx"))]
            {
                tracing::warn!(
                    "docx parsing is not compiled in, falling back to filename matching"
                );
                Ok(Box::new(FilenameClassifier::new(
                    config.filename_keywords.clone(),
                )))
            }
        }
    }
}
