//! Logger service registered in the container under id `"logger"`

use tracing::{debug, error, info, warn};

/// Logging abstraction handed out by the container.
///
/// Services and legacy call sites resolve this instead of talking to a
/// logging backend directly, so tests can swap in a capturing impl.
pub trait Logger: std::fmt::Debug + Send + Sync {
    fn debug(&self, message: &str);
    fn info(&self, message: &str);
    fn warn(&self, message: &str);
    fn error(&self, message: &str);
}

/// Logger forwarding to the `tracing` macros.
#[derive(Debug, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        debug!("{message}");
    }

    fn info(&self, message: &str) {
        info!("{message}");
    }

    fn warn(&self, message: &str) {
        warn!("{message}");
    }

    fn error(&self, message: &str) {
        error!("{message}");
    }
}
