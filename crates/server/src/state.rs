//! # Application State
//!
//! The shared state handed to every request handler: the resolved
//! configuration and the assistant wired to the completion provider. The API
//! credential flows from the configuration into the provider here and is not
//! stored anywhere else.

use crate::config::AppConfig;
use rfpdraft::{
    providers::ai::{AiProvider, OpenAiProvider},
    PromptError, RfpAssistant,
};
use std::sync::Arc;
use tracing::info;

/// The shared application state, accessible from all request handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub assistant: Arc<RfpAssistant>,
}

/// Builds the shared application state from the configuration.
///
/// Fails with [`PromptError::MissingApiKey`] when no credential is configured.
pub fn build_app_state(config: AppConfig) -> anyhow::Result<AppState> {
    let api_key = config
        .ai
        .api_key
        .clone()
        .ok_or(PromptError::MissingApiKey)?;
    let provider = OpenAiProvider::new(config.ai.api_url.clone(), api_key)?;
    info!(api_url = %provider.api_url(), "Initialized completion provider.");

    Ok(AppState::with_provider(config, Box::new(provider)))
}

impl AppState {
    /// Builds state around an already constructed provider.
    pub fn with_provider(config: AppConfig, provider: Box<dyn AiProvider>) -> Self {
        Self {
            config: Arc::new(config),
            assistant: Arc::new(RfpAssistant::new(provider)),
        }
    }
}
