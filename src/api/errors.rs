// src/api/errors.rs

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OllamaError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Failed to get a response from the LLM. Status code: {}", .0.as_u16())]
    HttpFailure(StatusCode),
}
