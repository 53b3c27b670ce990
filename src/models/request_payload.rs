use crate::api::config;
use serde::Serialize;

/// Body of a single `/api/generate` request.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RequestPayload {
    pub model: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl RequestPayload {
    /// Builds a payload for the fixed model with default sampling settings.
    /// The prompt is the instructions and code joined by a single space.
    pub fn new(instructions: &str, code: &str) -> Self {
        Self {
            model: config::MODEL.to_string(),
            prompt: format!("{} {}", instructions, code),
            max_tokens: config::DEFAULT_MAX_TOKENS,
            temperature: config::DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_sampling(self, max_tokens: u32, temperature: f32) -> Self {
        Self {
            max_tokens,
            temperature,
            ..self
        }
    }
}
