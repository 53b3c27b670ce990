// src/stream/errors.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReassemblyError {
    #[error("JSON decode error on line {line}: {source}")]
    MalformedFragment {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("unexpected fragment on line {line}: {reason}")]
    UnexpectedFragment { line: usize, reason: String },
}

impl ReassemblyError {
    /// 1-based line of the response body that failed.
    pub fn line(&self) -> usize {
        match self {
            ReassemblyError::MalformedFragment { line, .. } => *line,
            ReassemblyError::UnexpectedFragment { line, .. } => *line,
        }
    }
}
