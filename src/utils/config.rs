// src/utils/config.rs

use crate::api::config::{DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use crate::errors::AppError;
use crate::stream::reassembler::MalformedLinePolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: String,
    pub output_file: String,
    pub temperature: f32,
    pub max_tokens: u32,
    #[serde(default)]
    pub on_malformed_line: MalformedLinePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            output_file: "output.md".to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            on_malformed_line: MalformedLinePolicy::FailFast,
        }
    }
}

pub fn get_config_path() -> Result<PathBuf, AppError> {
    let mut path = get_executable_dir()?;
    path.push("config.toml");
    Ok(path)
}

/// Validate config to prevent obviously wrong or missing values.
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if !(0.0..=2.0).contains(&config.temperature) {
        return Err(AppError::InvalidInput(
            "Temperature must be between 0.0 and 2.0".to_string(),
        ));
    }
    if config.max_tokens == 0 {
        return Err(AppError::InvalidInput(
            "Max tokens cannot be zero".to_string(),
        ));
    }
    if config.output_file.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Output file cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Read config from the file next to the executable.
pub fn read_config() -> Result<Config, AppError> {
    read_config_from(&get_config_path()?)
}

/// Read config from `path`, and create a default config there if none exists.
pub fn read_config_from(path: &Path) -> Result<Config, AppError> {
    if !path.exists() {
        write_config_to(path, &Config::default())?;
    }
    let config_str = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&config_str)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn write_config_to(path: &Path, config: &Config) -> Result<(), AppError> {
    let config_str = toml::to_string(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

fn get_executable_dir() -> Result<PathBuf, AppError> {
    let exe = env::current_exe()?;
    exe.parent().map(Path::to_path_buf).ok_or_else(|| {
        AppError::InvalidInput(format!(
            "Executable has no parent directory: {}",
            exe.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_config_is_created_with_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let config = read_config_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists());

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("output_file = \"output.md\""));
        assert!(written.contains("on_malformed_line = \"fail\""));
    }

    #[test]
    fn write_then_read_keeps_changes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");

        let config = Config {
            log_level: "debug".to_string(),
            output_file: "review.md".to_string(),
            temperature: 0.2,
            max_tokens: 512,
            on_malformed_line: MalformedLinePolicy::Skip,
        };
        write_config_to(&path, &config).unwrap();

        assert_eq!(read_config_from(&path).unwrap(), config);
    }

    #[test]
    fn policy_defaults_to_fail_when_absent() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            "log_level = \"warn\"\noutput_file = \"output.md\"\ntemperature = 0.7\nmax_tokens = 100\n",
        )
        .unwrap();

        let config = read_config_from(&path).unwrap();
        assert_eq!(config.on_malformed_line, MalformedLinePolicy::FailFast);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn rejects_out_of_range_values() {
        let hot = Config {
            temperature: 2.5,
            ..Config::default()
        };
        assert!(matches!(validate_config(&hot), Err(AppError::InvalidInput(_))));

        let no_tokens = Config {
            max_tokens: 0,
            ..Config::default()
        };
        assert!(matches!(validate_config(&no_tokens), Err(AppError::InvalidInput(_))));

        let no_output = Config {
            output_file: "  ".to_string(),
            ..Config::default()
        };
        assert!(matches!(validate_config(&no_output), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn unparsable_config_is_a_toml_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "temperature = \"warm\"").unwrap();

        assert!(matches!(read_config_from(&path), Err(AppError::TomlError(_))));
    }
}
