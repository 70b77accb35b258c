//! # JSON API Handler
//!
//! `POST /api/draft` runs the same pipeline as the form for programmatic
//! clients. Uploads travel base64 encoded inside the JSON body.

use super::{run_draft, wrap_response, ApiResponse, AppError, AppState, DebugParams};
use crate::types::{DraftApiRequest, DraftApiResponse, DraftDebugInfo};
use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rfpdraft::{DraftView, GenerationOptions, RfpInput, Upload};
use tracing::info;

/// The upload's kind is taken from `content_type`, then the `file_name`
/// extension, then the `%PDF-` header.
pub async fn draft_api_handler(
    State(app_state): State<AppState>,
    debug_params: Query<DebugParams>,
    WithRejection(Json(payload), _): WithRejection<Json<DraftApiRequest>, AppError>,
) -> Result<Json<ApiResponse<DraftApiResponse>>, AppError> {
    let options =
        GenerationOptions::from_parts(payload.model, payload.temperature, payload.max_tokens)?;

    let upload = match payload.file_data_base64 {
        Some(encoded) => {
            let data = STANDARD
                .decode(encoded.trim())
                .map_err(|e| AppError::BadRequest(format!("Invalid base64 file data: {e}")))?;
            Some(Upload {
                file_name: payload.file_name,
                content_type: payload.content_type,
                data,
            })
        }
        None => None,
    };
    info!(
        model = %options.model(),
        has_upload = upload.is_some(),
        "Received draft API request."
    );

    let input = RfpInput {
        pasted: payload.text,
        upload,
    };
    let run = run_draft(&app_state, input, &options).await?;

    let debug_info = serde_json::to_value(DraftDebugInfo {
        options,
        prompt_chars: run.outcome.prompt_chars,
    })
    .ok();
    let response = DraftApiResponse {
        source: run.acquired.source,
        preview: run.acquired.preview,
        draft: run.outcome.response.structured().cloned(),
        view: DraftView::from(&run.outcome.response),
    };

    Ok(wrap_response(response, debug_params, debug_info))
}
