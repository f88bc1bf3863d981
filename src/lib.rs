//! Minimal client for OpenAI-compatible chat-completions endpoints.
//!
//! [`chat`] sends an ordered list of [`ChatMessage`]s with a bearer key and
//! returns the first choice's content. A rejected request (non-success
//! status) is logged and surfaces as `Ok(None)`; transport failures and
//! malformed responses are returned as [`Error`]s.

pub mod config;
pub mod constants;
pub mod errors;
pub mod llm;
pub mod utils;

pub use errors::{Error, Result};
pub use llm::{chat, ChatClient, ChatMessage, Role};
