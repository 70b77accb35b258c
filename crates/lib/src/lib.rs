//! # rfpdraft
//!
//! Drafts answers to a Request for Proposal with a chat-completion model.
//!
//! The pipeline is a single linear round trip: acquire the RFP text (pasted,
//! or extracted from an uploaded PDF or text file), embed it into a fixed
//! instruction template, call the completion endpoint once, and parse the
//! reply into either a structured draft or the raw text.

pub mod client;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod prompts;
pub mod providers;
pub mod response;
pub mod types;

pub use client::{DraftOutcome, RfpAssistant};
pub use errors::PromptError;
pub use ingest::{acquire_text, AcquiredText, InputError, RfpInput, Upload};
pub use response::{DraftResponse, DraftView, RfpDraft};
pub use types::{GenerationOptions, ModelChoice};
