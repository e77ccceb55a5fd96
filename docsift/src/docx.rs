//! First-paragraph extraction from `.docx` files.
//!
//! Walks the document body in order and returns the text of the first
//! paragraph that is non-empty after trimming. Tables and other non-paragraph
//! children are ignored; only the leading narrative text matters for
//! classification.

use std::path::Path;

use anyhow::Context;
use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};

fn push_run_text(run: &docx_rs::Run, out: &mut String) {
    for child in &run.children {
        if let RunChild::Text(text) = child {
            out.push_str(&text.text);
        }
    }
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    for child in &para.children {
        match child {
            ParagraphChild::Run(run) => push_run_text(run, &mut text),
            ParagraphChild::Hyperlink(link) => {
                for link_child in &link.children {
                    if let ParagraphChild::Run(run) = link_child {
                        push_run_text(run, &mut text);
                    }
                }
            }
            _ => {}
        }
    }
    text
}

/// Extract the first non-empty paragraph of a `.docx` file.
///
/// Returns `Ok(None)` when the document has no non-empty paragraph at all.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a parseable docx
/// archive. Callers treat this as a non-fatal per-file condition.
pub fn first_non_empty_paragraph(path: &Path) -> anyhow::Result<Option<String>> {
    tracing::debug!(path = %path.display(), "extracting first paragraph");

    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read file {}", path.display()))?;
    let doc = docx_rs::read_docx(&bytes)
        .map_err(|e| anyhow::anyhow!("failed to parse docx {}: {e}", path.display()))?;

    for child in &doc.document.children {
        if let DocumentChild::Paragraph(para) = child {
            let text = paragraph_text(para);
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                return Ok(Some(trimmed.to_owned()));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Run};
    use tempfile::TempDir;

    fn write_docx(path: &Path, paragraphs: &[&str]) {
        let file = std::fs::File::create(path).unwrap();
        let mut docx = Docx::new();
        for text in paragraphs {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*text)));
        }
        docx.build().pack(file).unwrap();
    }

    #[test]
    fn test_skips_leading_empty_paragraphs() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.docx");
        write_docx(&path, &["", "   ", "投资建议：买入XYZ", "第二段"]);

        let first = first_non_empty_paragraph(&path).unwrap();
        assert_eq!(first.as_deref(), Some("投资建议：买入XYZ"));
    }

    #[test]
    fn test_empty_document_yields_none() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("empty.docx");
        write_docx(&path, &["", "  "]);

        assert!(first_non_empty_paragraph(&path).unwrap().is_none());
    }

    #[test]
    fn test_unparseable_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("corrupt.docx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();

        assert!(first_non_empty_paragraph(&path).is_err());
    }
}
