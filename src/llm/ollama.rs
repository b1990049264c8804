//! # Ollama Narrator
//!
//! Blocking HTTP client for a local Ollama-compatible model server.

use crate::llm::{Narrator, NarratorConfig};
use crate::{LabyrinthError, LabyrinthResult};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Debug, Serialize)]
struct GenerateOptions {
    num_predict: u32,
    num_batch: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Narrator backed by a local model server speaking the Ollama generate API.
pub struct OllamaNarrator {
    http: reqwest::blocking::Client,
    config: NarratorConfig,
}

impl OllamaNarrator {
    /// Creates a narrator for the given configuration.
    pub fn new(config: NarratorConfig) -> Self {
        Self {
            http: reqwest::blocking::Client::new(),
            config,
        }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.endpoint.trim_end_matches('/'))
    }
}

impl Narrator for OllamaNarrator {
    fn generate(&self, prompt: &str) -> LabyrinthResult<String> {
        if self.config.verbose {
            debug!("narrator prompt: {}", preview(prompt));
        }

        let request = GenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: GenerateOptions {
                num_predict: self.config.max_tokens,
                num_batch: self.config.batch_size,
            },
        };

        let response = self.http.post(self.generate_url()).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<serde_json::Value>()
                .ok()
                .and_then(|value| {
                    value
                        .get("error")
                        .and_then(|error| error.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(LabyrinthError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response.json()?;
        let text = body.response.trim().to_string();
        if self.config.verbose {
            debug!("narrator reply: {}", preview(&text));
        }
        Ok(text)
    }
}

/// Flattens generated text to a short single-line preview for logging.
fn preview(text: &str) -> String {
    const MAX_PREVIEW: usize = 120;
    let mut out = String::with_capacity(text.len().min(MAX_PREVIEW) + 1);
    for (count, ch) in text.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\n' | '\r' | '\t' => out.push(' '),
            c => out.push(c),
        }
    }
    out
}
