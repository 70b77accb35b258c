//! # Form Handler
//!
//! `POST /draft` receives the browser form as multipart data and answers with
//! the full page: the form as submitted plus either the result or an alert.

use super::{run_draft, AppError, AppState, DraftRun};
use crate::views::{render_page, Alert, AlertKind, FormValues, ResultSection};
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
};
use axum_extra::extract::Multipart;
use rfpdraft::{DraftView, GenerationOptions, ModelChoice, PromptError, RfpInput, Upload};
use std::str::FromStr;
use tracing::{info, warn};

/// Handles a form submission.
///
/// On failure the page is rendered again with the user's input and an alert,
/// and without any result section.
pub async fn draft_form_handler(
    State(app_state): State<AppState>,
    multipart: Multipart,
) -> Response {
    let mut values = FormValues::default();

    match submit_form(&app_state, multipart, &mut values).await {
        Ok(run) => {
            let view = DraftView::from(&run.outcome.response);
            let page = render_page(
                &values,
                &[],
                Some(ResultSection {
                    preview: run.acquired.preview.as_deref(),
                    view: &view,
                }),
            );
            Html(page).into_response()
        }
        Err(err) => {
            let (status, message) = err.status_and_message();
            let kind = if err.is_warning() {
                AlertKind::Warning
            } else {
                AlertKind::Error
            };
            let page = render_page(&values, &[Alert::new(kind, message)], None);
            (status, Html(page)).into_response()
        }
    }
}

async fn submit_form(
    app_state: &AppState,
    multipart: Multipart,
    values: &mut FormValues,
) -> Result<DraftRun, AppError> {
    let upload = read_form(multipart, values).await?;
    let options = parse_options(values)?;
    info!(
        model = %options.model(),
        has_upload = upload.is_some(),
        "Received draft form submission."
    );

    let input = RfpInput {
        pasted: Some(values.rfp_text.clone()),
        upload,
    };
    run_draft(app_state, input, &options).await
}

/// Copies the text fields into `values` and returns the uploaded file, if any.
async fn read_form(
    mut multipart: Multipart,
    values: &mut FormValues,
) -> Result<Option<Upload>, AppError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid form data: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?
                    .to_vec();
                upload = Some(Upload {
                    file_name,
                    content_type,
                    data,
                });
            }
            "rfp_text" | "model" | "temperature" | "max_tokens" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Invalid field '{name}': {e}")))?;
                match name.as_str() {
                    "rfp_text" => values.rfp_text = text,
                    "model" => values.model = text.trim().to_string(),
                    "temperature" => values.temperature = text.trim().to_string(),
                    _ => values.max_tokens = text.trim().to_string(),
                }
            }
            _ => warn!("Ignoring unknown multipart field: {}", name),
        }
    }

    Ok(upload)
}

fn parse_options(values: &FormValues) -> Result<GenerationOptions, PromptError> {
    GenerationOptions::from_parts(
        parse_field::<ModelChoice>(&values.model, "model")?,
        parse_field::<f32>(&values.temperature, "temperature")?,
        parse_field::<u32>(&values.max_tokens, "max_tokens")?,
    )
}

// Blank means "use the default".
fn parse_field<T: FromStr>(raw: &str, name: &str) -> Result<Option<T>, PromptError> {
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| PromptError::InvalidOption(format!("invalid {name}: '{raw}'")))
}
