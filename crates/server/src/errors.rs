use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rfpdraft::{InputError, PromptError};
use serde_json::json;
use tracing::{error, warn};

/// A custom error type for the server application.
///
/// Each variant maps to a status code and a user-facing message; the JSON API
/// returns them as `{ "error": ... }` and the HTML form shows them as alerts.
#[derive(Debug)]
pub enum AppError {
    /// Errors from the completion round trip.
    Prompt(PromptError),
    /// Problems with the submitted RFP text or upload.
    Input(InputError),
    /// A malformed request (bad multipart body, bad base64, ...).
    BadRequest(String),
    /// Generic internal server errors.
    Internal(anyhow::Error),
}

impl From<PromptError> for AppError {
    fn from(err: PromptError) -> Self {
        AppError::Prompt(err)
    }
}

impl From<InputError> for AppError {
    fn from(err: InputError) -> Self {
        AppError::Input(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}

impl AppError {
    /// The status code and message shown to the user. Logs the original error.
    pub fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            AppError::Prompt(err) => {
                error!("PromptError: {:?}", err);
                match err {
                    PromptError::AiRequest(_)
                    | PromptError::AiApi(_)
                    | PromptError::AiDeserialization(_) => {
                        (StatusCode::BAD_GATEWAY, format!("OpenAI API error: {err}"))
                    }
                    PromptError::InvalidOption(_) => (StatusCode::BAD_REQUEST, err.to_string()),
                    PromptError::MissingApiKey => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Server is not configured correctly.".to_string(),
                    ),
                    PromptError::ReqwestClientBuild(e) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("Failed to build HTTP client: {e}"),
                    ),
                }
            }
            AppError::Input(err) => {
                warn!("Rejected input: {err}");
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            AppError::BadRequest(message) => {
                warn!("Bad request: {message}");
                (StatusCode::BAD_REQUEST, message.clone())
            }
            AppError::Internal(err) => {
                error!("Internal server error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        }
    }

    /// Missing input is a warning rather than a failure.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::Input(InputError::EmptyInput))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = self.status_and_message();
        let body = Json(json!({
            "error": error_message,
        }));

        (status_code, body).into_response()
    }
}
