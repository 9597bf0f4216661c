//! Fire-and-forget user notifications (the "toast" boundary).

/// Transient success/error notifications surfaced to the user. Save paths
/// report through this; nothing ever propagates to the rendering layer as
/// an uncaught fault.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Default notifier: routes to the log stream.
#[derive(Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn success(&self, message: &str) {
        tracing::info!(target: "pageforge::toast", "{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "pageforge::toast", "{message}");
    }
}
