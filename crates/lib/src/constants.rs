//! # Shared Constants
//!
//! Limits and fixed names shared by the library, the server and the CLI.

/// The longest RFP text, in characters, that is embedded into the prompt.
pub const MAX_INPUT_CHARS: usize = 15_000;

/// Appended to RFP text that had to be shortened.
pub const TRUNCATION_PLACEHOLDER: &str = "...";

/// The most question/answer pairs rendered from a single response.
pub const MAX_RENDERED_ITEMS: usize = 50;

/// Number of characters of extracted PDF text shown as a preview.
pub const PREVIEW_CHARS: usize = 4_000;

/// The file name offered for the raw-output download.
pub const DOWNLOAD_FILE_NAME: &str = "rfp_draft_response.txt";

/// The default OpenAI-compatible chat-completion endpoint.
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// The environment variable holding the completion API credential.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Shown instead of the structured sections when the response is not JSON.
pub const PARSE_FALLBACK_NOTICE: &str =
    "Could not parse JSON automatically; view raw output above.";
