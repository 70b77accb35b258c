//! # Route Handlers
//!
//! The Axum handlers for `rfpdraft-server`: the HTML form flow, the JSON API,
//! the download endpoint and the health check. The form and the API share
//! [`run_draft`], so both paths validate and call the model the same way.

pub mod api;
pub mod download;
pub mod draft;
pub mod general;

pub use api::*;
pub use download::*;
pub use draft::*;
pub use general::*;

use super::{
    errors::AppError,
    state::AppState,
    types::{ApiResponse, DebugParams},
};
use axum::{extract::Query, Json};
use rfpdraft::{acquire_text, AcquiredText, DraftOutcome, GenerationOptions, RfpInput};
use serde_json::Value;

/// A shared helper function to wrap a successful result in the standard `ApiResponse`
/// format, optionally including debug information if requested.
pub(crate) fn wrap_response<T>(
    result: T,
    debug_params: Query<DebugParams>,
    debug_info: Option<Value>,
) -> Json<ApiResponse<T>> {
    let debug = if debug_params.debug.unwrap_or(false) {
        debug_info
    } else {
        None
    };
    Json(ApiResponse { debug, result })
}

/// Everything a successful drafting request produced.
pub(crate) struct DraftRun {
    pub acquired: AcquiredText,
    pub outcome: DraftOutcome,
}

/// Resolves the input and makes the single completion call.
pub(crate) async fn run_draft(
    app_state: &AppState,
    input: RfpInput,
    options: &GenerationOptions,
) -> Result<DraftRun, AppError> {
    let acquired = acquire_text(input).await?;
    let outcome = app_state.assistant.draft(&acquired.text, options).await?;
    Ok(DraftRun { acquired, outcome })
}
