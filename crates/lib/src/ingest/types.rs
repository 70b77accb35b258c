//! # Input Types
//!
//! Request-scoped values describing where the RFP text came from.

use serde::Serialize;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// A file uploaded alongside (or instead of) pasted text.
#[derive(Debug, Clone, Default)]
pub struct Upload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Upload {
    /// A multipart file input left empty by the browser still arrives as a
    /// part with no name and no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty() && self.file_name.as_deref().unwrap_or("").is_empty()
    }
}

/// The kinds of upload the assistant can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadKind {
    Pdf,
    PlainText,
}

impl UploadKind {
    /// Classifies an upload by its declared content type, then its file
    /// extension, then the PDF magic bytes.
    pub fn detect(upload: &Upload) -> Option<Self> {
        let content_type = upload
            .content_type
            .as_deref()
            .unwrap_or("")
            .to_ascii_lowercase();
        let file_name = upload.file_name.as_deref().unwrap_or("").to_ascii_lowercase();

        if content_type.starts_with("application/pdf")
            || file_name.ends_with(".pdf")
            || upload.data.starts_with(PDF_MAGIC)
        {
            Some(UploadKind::Pdf)
        } else if content_type.starts_with("text/plain") || file_name.ends_with(".txt") {
            Some(UploadKind::PlainText)
        } else {
            None
        }
    }
}

/// Everything the user submitted for one drafting request.
#[derive(Debug, Clone, Default)]
pub struct RfpInput {
    pub pasted: Option<String>,
    pub upload: Option<Upload>,
}

/// Where the text that will be sent to the model came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputSource {
    Pasted,
    PdfUpload,
    TextUpload,
}

/// The RFP text chosen for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AcquiredText {
    pub text: String,
    pub source: InputSource,
    /// The first characters of text extracted from an uploaded PDF.
    pub preview: Option<String>,
}
