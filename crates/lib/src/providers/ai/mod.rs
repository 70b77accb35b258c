pub mod openai;

use crate::{errors::PromptError, types::GenerationOptions};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

pub use openai::OpenAiProvider;

/// A trait for interacting with a chat-completion provider.
///
/// Implementations issue exactly one request per call and never retry.
#[async_trait]
pub trait AiProvider: Send + Sync + Debug + DynClone {
    /// Generates a response from a system and user prompt using the given
    /// sampling options.
    async fn generate(
        &self,
        system_prompt: &str,
        user_prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, PromptError>;
}

dyn_clone::clone_trait_object!(AiProvider);
