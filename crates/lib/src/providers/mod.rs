//! # Providers
//!
//! External services the assistant talks to.

pub mod ai;
