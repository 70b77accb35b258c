use super::pdf::PdfExtractError;
use thiserror::Error;

/// Problems with the user's input. All of them block submission; none is
/// retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Couldn't extract text from PDF (try a different PDF): {0}")]
    Pdf(#[from] PdfExtractError),
    #[error("Couldn't extract text from PDF (try a different PDF).")]
    NoExtractableText,
    #[error("Unsupported upload type '{0}'. Upload a PDF or plain-text file.")]
    UnsupportedType(String),
    #[error("The uploaded text file is not valid UTF-8.")]
    NotUtf8,
    #[error("Please paste RFP text or upload a PDF.")]
    EmptyInput,
}
