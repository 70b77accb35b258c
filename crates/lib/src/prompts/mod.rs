//! # Prompt Templates
//!
//! The fixed RFP instruction template and the helpers that fill it in.

pub mod core;
pub mod rfp;

pub use self::core::{build_rfp_prompt, shorten};
