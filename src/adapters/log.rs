use crate::domain::ports::RegistrationLog;

/// Forwards client messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLog;

impl RegistrationLog for TracingLog {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "doi_mds::client", "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "doi_mds::client", "❌ {}", message);
    }
}

/// Discards everything; used when no log was supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl RegistrationLog for NullLog {
    fn debug(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
