/// Sink for the per-directory and per-file messages of a run.
///
/// The Toucher only calls it in verbose mode.
pub trait Reporter {
    fn report(&self, message: &str);
}

/// Forwards every message to the `log` facade at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&self, message: &str) {
        log::info!("{message}");
    }
}
