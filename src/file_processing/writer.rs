use crate::errors::AppError;
use std::path::Path;
use tokio::fs;

/// Writes the review text to `output_path`, replacing any previous file.
///
/// The text is written exactly as given; no trailing newline is added.
pub async fn write_output(output_path: &Path, text: &str) -> Result<usize, AppError> {
    fs::write(output_path, text).await?;
    log::info!("Generated text has been written to {}", output_path.display());
    Ok(text.len())
}
