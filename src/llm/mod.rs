//! # LLM Module
//!
//! The narrator capability the game is a client of: prompt in, generated
//! text out.
//!
//! The game never manages inference itself. The production implementation
//! talks to a local Ollama-compatible model server over HTTP; a deterministic
//! scripted implementation covers tests and offline play. Either way the call
//! is synchronous and blocks the game loop until text comes back — retry and
//! timeout policy belongs to the model server integration, not here.

pub mod ollama;
pub mod scripted;
pub mod traits;

pub use ollama::*;
pub use scripted::*;
pub use traits::*;

use crate::config;
use serde::{Deserialize, Serialize};

/// Narrator settings, fixed at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NarratorConfig {
    /// Base URL of the model server
    pub endpoint: String,
    /// Model to request from the server
    pub model: String,
    /// Maximum tokens per generated description
    pub max_tokens: u32,
    /// Prompt batch size passed through to the server
    pub batch_size: u32,
    /// Whether to log prompts and replies at debug level
    pub verbose: bool,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
            max_tokens: config::DEFAULT_MAX_TOKENS,
            batch_size: config::DEFAULT_BATCH_SIZE,
            verbose: false,
        }
    }
}
