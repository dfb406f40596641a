use tracing::{error, info};

/// Toast surface. Calls are fire-and-forget; no return value is consumed.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn info(&self, message: &str);
}

/// Default notifier that routes toasts to the log.
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        info!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn info(&self, message: &str) {
        info!("{}", message);
    }
}
