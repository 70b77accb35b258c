//! # Input Acquisition
//!
//! Turns what the user submitted (pasted text, an uploaded PDF or an uploaded
//! plain-text file) into the single RFP string that goes into the prompt.

pub mod errors;
pub mod pdf;
pub mod types;

pub use errors::InputError;
pub use pdf::{extract_pdf_text, extract_pdf_text_async, ExtractedPdf, PdfExtractError};
pub use types::{AcquiredText, InputSource, RfpInput, Upload, UploadKind};

use crate::constants::PREVIEW_CHARS;
use tracing::{info, instrument, warn};

/// Resolves the RFP text for one request.
///
/// An upload is read first. A PDF that cannot be read, or that has no text,
/// is an error even when pasted text is present. Non-blank pasted text takes
/// precedence over uploaded text. Blank input is rejected.
#[instrument(skip_all, fields(has_pasted = input.pasted.is_some(), has_upload = input.upload.is_some()))]
pub async fn acquire_text(input: RfpInput) -> Result<AcquiredText, InputError> {
    let mut uploaded: Option<(String, InputSource)> = None;
    let mut preview = None;

    if let Some(upload) = input.upload.filter(|u| !u.is_empty()) {
        match UploadKind::detect(&upload) {
            Some(UploadKind::Pdf) => {
                let extracted = extract_pdf_text_async(upload.data).await?;
                if extracted.is_blank() {
                    warn!("PDF upload yielded no extractable text.");
                    return Err(InputError::NoExtractableText);
                }
                let text = extracted.text();
                preview = Some(text.chars().take(PREVIEW_CHARS).collect());
                uploaded = Some((text, InputSource::PdfUpload));
            }
            Some(UploadKind::PlainText) => {
                let text = String::from_utf8(upload.data).map_err(|_| InputError::NotUtf8)?;
                uploaded = Some((text, InputSource::TextUpload));
            }
            None => {
                let declared = upload
                    .content_type
                    .or(upload.file_name)
                    .unwrap_or_else(|| "unknown".to_string());
                return Err(InputError::UnsupportedType(declared));
            }
        }
    }

    let chosen = match input.pasted.filter(|t| !t.trim().is_empty()) {
        Some(text) => Some((text, InputSource::Pasted)),
        None => uploaded,
    };

    match chosen {
        Some((text, source)) if !text.trim().is_empty() => {
            info!(?source, chars = text.chars().count(), "Acquired RFP text.");
            Ok(AcquiredText {
                text,
                source,
                preview,
            })
        }
        _ => Err(InputError::EmptyInput),
    }
}
