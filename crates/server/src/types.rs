use rfpdraft::{
    ingest::InputSource, response::RfpDraft, DraftView, GenerationOptions, ModelChoice,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize, Default)]
pub struct DebugParams {
    pub debug: Option<bool>,
}

#[derive(Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<Value>,
    pub result: T,
}

/// The JSON body of `POST /api/draft`.
#[derive(Debug, Deserialize, Default)]
pub struct DraftApiRequest {
    /// Pasted RFP text.
    #[serde(default)]
    pub text: Option<String>,
    /// An uploaded PDF or plain-text file, base64 encoded.
    #[serde(default)]
    pub file_data_base64: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub model: Option<ModelChoice>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub max_tokens: Option<u32>,
}

/// The result of `POST /api/draft`.
#[derive(Debug, Serialize)]
pub struct DraftApiResponse {
    pub source: InputSource,
    /// Leading text extracted from an uploaded PDF.
    pub preview: Option<String>,
    /// The parsed response, uncapped, when the model returned a JSON object.
    pub draft: Option<RfpDraft>,
    /// What the web UI shows: raw text, capped items, fallback notice.
    pub view: DraftView,
}

/// The form posted to `POST /download`: the raw model output, base64 encoded.
#[derive(Debug, Deserialize)]
pub struct DownloadForm {
    pub raw_base64: String,
}

/// Echoes the options a request was served with in debug output.
#[derive(Debug, Serialize)]
pub struct DraftDebugInfo {
    pub options: GenerationOptions,
    pub prompt_chars: usize,
}
