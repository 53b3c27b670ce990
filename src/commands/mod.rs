use crate::api::client::OllamaApi;
use crate::api::errors::OllamaError;
use crate::errors::AppError;
use crate::file_processing::writer;
use crate::models::request_payload::RequestPayload;
use crate::stream::errors::ReassemblyError;
use crate::stream::reassembler::{MalformedLinePolicy, StreamReassembler};
use crate::utils::config::{get_config_path, read_config_from, validate_config, write_config_to};
use std::path::Path;

/// What a successful review run produced.
#[derive(Debug, PartialEq)]
pub struct ReviewReport {
    pub fragments: usize,
    pub skipped_lines: usize,
    pub written_bytes: usize,
}

/// Sends one review request, reassembles the streamed answer and writes it
/// to `output_path`. Nothing is written unless every step before the write
/// succeeds.
pub async fn run_review(
    api: &OllamaApi,
    payload: &RequestPayload,
    output_path: &Path,
    policy: MalformedLinePolicy,
) -> Result<ReviewReport, AppError> {
    let body = api.generate(payload).await?;

    let reassembly = StreamReassembler::new(policy).reassemble(&body)?;
    if !reassembly.done {
        log::warn!("Response stream ended without a final 'done' fragment");
    }

    let written_bytes = writer::write_output(output_path, &reassembly.text).await?;

    Ok(ReviewReport {
        fragments: reassembly.fragments,
        skipped_lines: reassembly.skipped_lines,
        written_bytes,
    })
}

/// Logs the failures a review run recovers from and passes on the rest.
///
/// A non-200 status or a reassembly error ends the run normally with
/// `Ok(None)`; transport, IO and config errors are returned to the caller.
pub fn settle_review(
    result: Result<ReviewReport, AppError>,
) -> Result<Option<ReviewReport>, AppError> {
    match result {
        Ok(report) => Ok(Some(report)),
        Err(AppError::OllamaError(OllamaError::HttpFailure(status))) => {
            log::error!(
                "Failed to get a response from the LLM. Status code: {}",
                status.as_u16()
            );
            Ok(None)
        }
        Err(AppError::ReassemblyError(e)) => {
            match &e {
                ReassemblyError::MalformedFragment { .. } => {
                    log::error!("JSON Decode Error: {}", e)
                }
                ReassemblyError::UnexpectedFragment { .. } => {
                    log::error!("An error occurred: {}", e)
                }
            }
            log::debug!("Discarded partial review at line {}", e.line());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Handles the config subcommand
pub fn handle_config_subcommand(
    set_log_level: Option<String>,
    set_output_file: Option<String>,
    set_temperature: Option<f32>,
    set_max_tokens: Option<u32>,
    set_on_malformed_line: Option<MalformedLinePolicy>,
) -> Result<(), AppError> {
    handle_config_subcommand_at(
        &get_config_path()?,
        set_log_level,
        set_output_file,
        set_temperature,
        set_max_tokens,
        set_on_malformed_line,
    )
}

/// Applies config changes to the file at `config_path`. Nothing is written
/// when the changed config fails validation.
pub fn handle_config_subcommand_at(
    config_path: &Path,
    set_log_level: Option<String>,
    set_output_file: Option<String>,
    set_temperature: Option<f32>,
    set_max_tokens: Option<u32>,
    set_on_malformed_line: Option<MalformedLinePolicy>,
) -> Result<(), AppError> {
    let mut config = read_config_from(config_path)?;

    if let Some(log_level) = set_log_level {
        config.log_level = log_level.clone();
        println!("Log level set to {}", log_level);
    }

    if let Some(output_file) = set_output_file {
        config.output_file = output_file.clone();
        println!("Output file set to {}", output_file);
    }

    if let Some(temperature) = set_temperature {
        config.temperature = temperature;
        println!("Temperature set to {}", temperature);
    }

    if let Some(max_tokens) = set_max_tokens {
        config.max_tokens = max_tokens;
        println!("Max tokens set to {}", max_tokens);
    }

    if let Some(policy) = set_on_malformed_line {
        config.on_malformed_line = policy;
        println!("Malformed line policy set to {:?}", policy);
    }

    validate_config(&config)?;
    write_config_to(config_path, &config)?;
    Ok(())
}
