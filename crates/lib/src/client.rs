//! # RFP Assistant
//!
//! Ties prompt construction, the completion call and response parsing into
//! the single request/response round trip.

use crate::{
    errors::PromptError,
    prompts::{build_rfp_prompt, rfp::RFP_SYSTEM_PROMPT},
    providers::ai::AiProvider,
    response::DraftResponse,
    types::GenerationOptions,
};
use std::fmt;
use tracing::{debug, info, instrument};

/// The result of one drafting request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftOutcome {
    /// Length, in characters, of the user prompt that was sent.
    pub prompt_chars: usize,
    pub response: DraftResponse,
}

/// Drafts RFP answers through a configured [`AiProvider`].
#[derive(Clone)]
pub struct RfpAssistant {
    pub ai_provider: Box<dyn AiProvider>,
}

impl fmt::Debug for RfpAssistant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RfpAssistant")
            .field("ai_provider", &self.ai_provider)
            .finish()
    }
}

impl RfpAssistant {
    pub fn new(ai_provider: Box<dyn AiProvider>) -> Self {
        Self { ai_provider }
    }

    /// Sends the RFP text to the model exactly once.
    ///
    /// Provider failures are returned as-is; there is no retry and no
    /// partial result. A response that is not JSON is not an error.
    #[instrument(skip(self, rfp_text), fields(input_chars = rfp_text.chars().count()))]
    pub async fn draft(
        &self,
        rfp_text: &str,
        options: &GenerationOptions,
    ) -> Result<DraftOutcome, PromptError> {
        let user_prompt = build_rfp_prompt(rfp_text);
        let prompt_chars = user_prompt.chars().count();
        debug!(prompt_chars, "Built RFP prompt.");

        let raw = self
            .ai_provider
            .generate(RFP_SYSTEM_PROMPT, &user_prompt, options)
            .await?;

        let response = DraftResponse::parse(raw);
        info!(
            structured = response.structured().is_some(),
            "Model returned results."
        );

        Ok(DraftOutcome {
            prompt_chars,
            response,
        })
    }
}
