use colored::*;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::time::Duration;

/// Manages CLI display and output formatting.
pub struct CliDisplayManager {
    progress: MultiProgress,
    spinner: Option<ProgressBar>,
}

impl CliDisplayManager {
    /// Creates a new `CliDisplayManager` drawing its spinner on `progress`,
    /// the same target the logger suspends while writing.
    pub fn new(progress: MultiProgress) -> Self {
        CliDisplayManager {
            progress,
            spinner: None,
        }
    }

    /// Prints the application header.
    pub fn print_header(&self) {
        println!("\n{}", "╭──────────────────────╮".bright_magenta());
        println!(
            "{}",
            format!("│  🔎 Review v{:<9}│", env!("CARGO_PKG_VERSION"))
                .bright_magenta()
                .bold()
        );
        println!("{}\n", "╰──────────────────────╯".bright_magenta());
    }

    /// Prints the start of the Ollama query.
    pub fn print_query_start(&self, model: &str, prompt_bytes: usize) {
        self.print_section(
            "⚓",
            "[1/2] Querying Ollama",
            &format!("Sending {} prompt bytes to '{}'", prompt_bytes, model),
        );
    }

    /// Prints a success message for the reassembled response.
    pub fn print_response_success(&self, fragments: usize, skipped_lines: usize) {
        self.print_info(&format!("Reassembled {} response fragment(s)", fragments));
        if skipped_lines > 0 {
            self.print_info(&format!("Skipped {} unreadable line(s)", skipped_lines));
        }
    }

    /// Prints the start of saving results.
    pub fn print_saving_results_start(&self) {
        self.print_section("💾", "[2/2] Saving Results", "");
    }

    /// Prints a success message for saving results.
    pub fn print_saving_results_success(&self, output_file: &str) {
        self.print_info(&format!("Successfully saved review to '{}'", output_file));
    }

    /// Prints a failure message; nothing was saved.
    pub fn print_failure(&self, message: &str) {
        println!(
            "   {} {}",
            "✗".bright_red(),
            message.italic().bright_red()
        );
    }

    /// Prints the application footer.
    pub fn print_footer(&self, written_bytes: usize, duration: Duration) {
        println!();
        println!(
            "{}",
            format!("⚡ Wrote {} byte(s)", written_bytes)
                .bright_white()
                .dimmed(),
        );
        println!(
            "{}",
            format!("⚡ Completed in {:.2?}", duration)
                .bright_white()
                .dimmed(),
        );
        println!();
    }

    /// Starts a spinner while waiting on the service.
    pub fn start_spinner(&mut self) {
        let spinner = self.progress.add(ProgressBar::new_spinner());
        let style = ProgressStyle::with_template(&format!(
            "   {} {{spinner}} {}",
            "→".bright_white(),
            "Waiting for 'Ollama' response".italic().bright_white()
        ))
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style.tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]));
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    /// Stops the spinner.
    pub fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Helper function to print a section header.
    fn print_section(&self, icon: &str, title: &str, description: &str) {
        println!("{} {}", icon.bright_yellow(), title.bright_cyan().bold());
        if !description.is_empty() {
            println!(
                "   {} {}",
                "→".bright_white(),
                description.italic().bright_white()
            );
        }
    }

    /// Helper function to print an informational message.
    fn print_info(&self, message: &str) {
        println!(
            "   {} {}",
            "→".bright_white(),
            message.italic().bright_white()
        );
    }
}
