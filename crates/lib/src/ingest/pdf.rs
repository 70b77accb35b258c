//! # PDF Text Extraction
//!
//! Pulls the visible text out of every page of a PDF, in page order. Failures
//! are reported through [`PdfExtractError`] so callers can tell a document the
//! engine could not read apart from one that simply has no text (for example a
//! scanned, image-only PDF).

use pdf::content::{Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PdfExtractError {
    #[error("Failed to open PDF document: {0}")]
    Load(String),
    #[error("Failed to read page {page}: {reason}")]
    Page { page: u32, reason: String },
    #[error("PDF extraction task failed: {0}")]
    Worker(String),
}

/// The text of a PDF, one entry per page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPdf {
    pub pages: Vec<String>,
}

impl ExtractedPdf {
    /// All page texts joined with a blank line.
    pub fn text(&self) -> String {
        self.pages.join("\n\n")
    }

    /// True when no page yielded anything but whitespace.
    pub fn is_blank(&self) -> bool {
        self.pages.iter().all(|p| p.trim().is_empty())
    }
}

/// Extracts the text of every page of a PDF.
///
/// This is CPU-bound; from async code use [`extract_pdf_text_async`].
pub fn extract_pdf_text(pdf_data: &[u8]) -> Result<ExtractedPdf, PdfExtractError> {
    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| PdfExtractError::Load(e.to_string()))?;
    let resolver = file.resolver();
    let mut pages = Vec::new();

    for page_num in 0..file.num_pages() {
        let page = file.get_page(page_num).map_err(|e| PdfExtractError::Page {
            page: page_num + 1,
            reason: e.to_string(),
        })?;

        let Some(content) = &page.contents else {
            warn!("Page {} has no content stream.", page_num + 1);
            pages.push(String::new());
            continue;
        };

        let operations = content
            .operations(&resolver)
            .map_err(|e| PdfExtractError::Page {
                page: page_num + 1,
                reason: e.to_string(),
            })?;
        pages.push(page_text(&operations));
    }

    Ok(ExtractedPdf { pages })
}

/// Runs [`extract_pdf_text`] on the blocking thread pool.
#[instrument(skip(pdf_data), fields(bytes = pdf_data.len()))]
pub async fn extract_pdf_text_async(pdf_data: Vec<u8>) -> Result<ExtractedPdf, PdfExtractError> {
    let extracted = tokio::task::spawn_blocking(move || extract_pdf_text(&pdf_data))
        .await
        .map_err(|e| PdfExtractError::Worker(e.to_string()))??;

    info!(
        pages = extracted.pages.len(),
        "Extracted text from PDF. Total length: {} characters.",
        extracted.pages.iter().map(|p| p.chars().count()).sum::<usize>()
    );
    Ok(extracted)
}

/// Collects the text-showing operators of one page. Line moves and the end
/// of a text object become line breaks.
fn page_text(operations: &[Op]) -> String {
    fn break_line(text: &mut String) {
        if !text.is_empty() && !text.ends_with('\n') {
            text.push('\n');
        }
    }

    let mut text = String::new();
    for op in operations {
        match op {
            Op::TextDraw { text: s } => text.push_str(&s.to_string_lossy()),
            Op::TextDrawAdjusted { array } => {
                for item in array {
                    if let TextDrawAdjusted::Text(s) = item {
                        text.push_str(&s.to_string_lossy());
                    }
                }
            }
            Op::TextNewline | Op::EndText => break_line(&mut text),
            Op::MoveTextPosition { translation } if translation.y != 0.0 => {
                break_line(&mut text)
            }
            _ => {}
        }
    }

    text.trim_end_matches('\n').to_string()
}
