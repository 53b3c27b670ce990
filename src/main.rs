mod api;
mod cli;
mod commands;
mod errors;
mod file_processing;
mod models;
mod stream;
#[cfg(test)]
mod test_helpers;
mod utils;

use api::client::OllamaApi;
use api::config::SAMPLE_CODE;
use clap::Parser;
use cli::args::{Args, Commands};
use errors::AppError;
use indicatif::MultiProgress;
use models::request_payload::RequestPayload;
use std::{path::Path, time::Instant};
use utils::config::read_config;
use utils::logger;

/// The main entry point of the application
#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();
    let start_time = Instant::now();

    if let Some(command) = args.command {
        return handle_subcommand(command);
    }

    let config = read_config()?;
    let progress = MultiProgress::new();
    logger::setup_logger(logger::parse_log_level(&config.log_level), progress.clone())?;

    let code = match &args.code {
        Some(path) => tokio::fs::read_to_string(path).await?,
        None => SAMPLE_CODE.to_string(),
    };

    let payload = RequestPayload::new(args.preset.instructions(), &code)
        .with_sampling(config.max_tokens, config.temperature);

    let mut display_manager = cli::display::CliDisplayManager::new(progress);
    display_manager.print_header();
    display_manager.print_query_start(&payload.model, payload.prompt.len());
    display_manager.start_spinner();

    let api = OllamaApi::new();
    let result = commands::run_review(
        &api,
        &payload,
        Path::new(&config.output_file),
        config.on_malformed_line,
    )
    .await;

    display_manager.stop_spinner();

    match commands::settle_review(result)? {
        Some(report) => {
            display_manager.print_response_success(report.fragments, report.skipped_lines);
            display_manager.print_saving_results_start();
            display_manager.print_saving_results_success(&config.output_file);
            display_manager.print_footer(report.written_bytes, start_time.elapsed());
        }
        None => display_manager.print_failure("No review was written; see the log for details"),
    }

    Ok(())
}

fn handle_subcommand(command: Commands) -> Result<(), AppError> {
    match command {
        Commands::Config {
            set_log_level,
            set_output_file,
            set_temperature,
            set_max_tokens,
            set_on_malformed_line,
        } => commands::handle_config_subcommand(
            set_log_level,
            set_output_file,
            set_temperature,
            set_max_tokens,
            set_on_malformed_line,
        ),
    }
}
