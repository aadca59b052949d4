//! User-facing notifications (the toast channel of this client).

/// Sink for transient user-facing notices.
///
/// The adapter reports classified request failures here; stores report
/// local validation failures and mutation successes. UI shells decide how
/// to surface them.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Notifier that forwards notices to the tracing pipeline.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "shopfront::notify", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::warn!(target: "shopfront::notify", "{message}");
    }
}

/// Notifier that drops everything.
#[derive(Debug, Default)]
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn success(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
