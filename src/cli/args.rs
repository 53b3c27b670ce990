use crate::api::config;
use crate::stream::reassembler::MalformedLinePolicy;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the review tool.
#[derive(Parser, Debug, PartialEq, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Review instructions sent ahead of the code.
    #[arg(long, value_enum, default_value_t = ReviewPreset::Structured)]
    pub preset: ReviewPreset,

    /// File containing the code to review. Defaults to the built-in sample.
    #[arg(short, long)]
    pub code: Option<PathBuf>,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Built-in review instruction texts.
#[derive(ValueEnum, Debug, PartialEq, Eq, Clone, Copy)]
pub enum ReviewPreset {
    /// Full markdown review in a fixed section layout.
    Structured,
    /// Markdown review of at most 20 lines.
    Brief,
    /// Short markdown review listing every problem.
    Concise,
    /// Short review written in German.
    German,
}

impl ReviewPreset {
    pub fn instructions(self) -> &'static str {
        match self {
            ReviewPreset::Structured => config::STRUCTURED_REVIEW_INSTRUCTIONS,
            ReviewPreset::Brief => config::BRIEF_REVIEW_INSTRUCTIONS,
            ReviewPreset::Concise => config::CONCISE_REVIEW_INSTRUCTIONS,
            ReviewPreset::German => config::GERMAN_REVIEW_INSTRUCTIONS,
        }
    }
}

/// Subcommands for the review tool.
#[derive(Subcommand, Debug, PartialEq, Clone)]
pub enum Commands {
    /// Manage configuration options.
    Config {
        /// Set the log level (debug, info, warn, error, off).
        #[arg(long)]
        set_log_level: Option<String>,

        /// Set the file the review is written to.
        #[arg(long)]
        set_output_file: Option<String>,

        /// Set the sampling temperature.
        #[arg(long)]
        set_temperature: Option<f32>,

        /// Set the maximum number of tokens to generate.
        #[arg(long)]
        set_max_tokens: Option<u32>,

        /// Set how lines that are not valid fragments are handled.
        #[arg(long, value_enum)]
        set_on_malformed_line: Option<MalformedLinePolicy>,
    },
}
