//! Error-sink collaborator trait.

use std::error::Error;

/// Single reporting function the core hands recoverable and structural
/// failures to. Implementations decide whether to log, crash, or surface the
/// report to the user.
pub trait ErrorSink {
    fn report(&self, message: &str, cause: &(dyn Error + 'static));
}

/// Default sink that forwards every report to `tracing::error!`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl ErrorSink for LogSink {
    fn report(&self, message: &str, cause: &(dyn Error + 'static)) {
        tracing::error!(%cause, "{message}");
    }
}
