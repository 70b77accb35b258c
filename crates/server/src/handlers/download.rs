use crate::{errors::AppError, types::DownloadForm};
use axum::{
    http::header,
    response::{IntoResponse, Response},
    Form,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rfpdraft::constants::DOWNLOAD_FILE_NAME;

/// Returns the raw model output as a plain-text attachment, byte for byte.
pub async fn download_handler(Form(form): Form<DownloadForm>) -> Result<Response, AppError> {
    let raw = STANDARD
        .decode(form.raw_base64.trim())
        .map_err(|e| AppError::BadRequest(format!("Invalid download payload: {e}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILE_NAME}\""),
            ),
        ],
        raw,
    )
        .into_response())
}
