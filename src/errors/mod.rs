use crate::api::errors::OllamaError;
use crate::stream::errors::ReassemblyError;
use std::fmt;
use toml;

#[derive(Debug)]
pub enum AppError {
    IoError(std::io::Error),
    OllamaError(OllamaError),
    ReassemblyError(ReassemblyError),
    TomlError(toml::de::Error),
    TomlSerializeError(toml::ser::Error),
    InvalidInput(String),
    LoggerError(log::SetLoggerError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::IoError(e) => write!(f, "IO error: {}", e),
            AppError::OllamaError(e) => write!(f, "Ollama API error: {}", e),
            AppError::ReassemblyError(e) => write!(f, "Reassembly error: {}", e),
            AppError::TomlError(e) => write!(f, "TOML parsing error: {}", e),
            AppError::TomlSerializeError(e) => write!(f, "TOML serialization error: {}", e),
            AppError::InvalidInput(e) => write!(f, "Invalid input: {}", e),
            AppError::LoggerError(e) => write!(f, "Logger setup error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::TomlError(err)
    }
}

impl From<toml::ser::Error> for AppError {
    fn from(err: toml::ser::Error) -> Self {
        AppError::TomlSerializeError(err)
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::LoggerError(err)
    }
}

impl From<OllamaError> for AppError {
    fn from(err: OllamaError) -> Self {
        AppError::OllamaError(err)
    }
}

impl From<ReassemblyError> for AppError {
    fn from(err: ReassemblyError) -> Self {
        AppError::ReassemblyError(err)
    }
}
