use indicatif::MultiProgress;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Maps a config log level name to a filter; unknown names turn logging off.
pub fn parse_log_level(level: &str) -> LevelFilter {
    match level {
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Off,
    }
}

/// `env_logger` output that hides the progress bars while a line is written,
/// so log lines and the spinner do not overwrite each other on stderr.
pub struct ProgressAwareLogger {
    inner: env_logger::Logger,
    progress: MultiProgress,
}

impl ProgressAwareLogger {
    pub fn new(level: LevelFilter, progress: MultiProgress) -> Self {
        let inner = env_logger::Builder::from_default_env()
            .filter_level(level)
            .build();
        Self { inner, progress }
    }

    pub fn filter(&self) -> LevelFilter {
        self.inner.filter()
    }
}

impl Log for ProgressAwareLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.inner.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if self.inner.matches(record) {
            self.progress.suspend(|| self.inner.log(record));
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

pub fn setup_logger(level: LevelFilter, progress: MultiProgress) -> Result<(), SetLoggerError> {
    let logger = ProgressAwareLogger::new(level, progress);
    let max_level = logger.filter();
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indicatif::{ProgressBar, ProgressDrawTarget};
    use log::Level;

    fn hidden_progress() -> MultiProgress {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    }

    #[test]
    fn known_levels_map_to_filters() {
        assert_eq!(parse_log_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_log_level("info"), LevelFilter::Info);
        assert_eq!(parse_log_level("warn"), LevelFilter::Warn);
        assert_eq!(parse_log_level("error"), LevelFilter::Error);
    }

    #[test]
    fn unknown_level_is_off() {
        assert_eq!(parse_log_level("off"), LevelFilter::Off);
        assert_eq!(parse_log_level("verbose"), LevelFilter::Off);
    }

    #[test]
    fn logger_keeps_the_configured_level() {
        let logger = ProgressAwareLogger::new(LevelFilter::Info, hidden_progress());
        assert_eq!(logger.filter(), LevelFilter::Info);

        let info = Metadata::builder().level(Level::Info).target("review").build();
        let debug = Metadata::builder().level(Level::Debug).target("review").build();
        assert!(logger.enabled(&info));
        assert!(!logger.enabled(&debug));
    }

    #[test]
    fn logging_while_a_spinner_runs_suspends_it() {
        let progress = hidden_progress();
        let spinner = progress.add(ProgressBar::new_spinner());
        spinner.tick();
        let logger = ProgressAwareLogger::new(LevelFilter::Info, progress.clone());

        logger.log(
            &Record::builder()
                .level(Level::Info)
                .target("review")
                .args(format_args!("Waiting for response..."))
                .build(),
        );
        logger.flush();

        spinner.finish_and_clear();
        assert!(spinner.is_finished());
    }
}
