//! Diagnostic sinks
//!
//! Components receive a sink at construction time instead of reaching for a
//! global logger. A sink only ever observes messages; it never changes what a
//! component computes.

use std::sync::Arc;

/// Receiver for debug-level diagnostic messages
pub trait DiagnosticSink: Send + Sync {
    /// Record a debug message emitted by `component`
    fn debug(&self, component: &str, message: &str);
}

/// Forwards diagnostics to `tracing` at DEBUG level.
///
/// Without an installed subscriber nothing is emitted.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn debug(&self, component: &str, message: &str) {
        tracing::debug!(component = component, "{}", message);
    }
}

/// Discards every message
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn debug(&self, _component: &str, _message: &str) {}
}

/// Shared handle used by components
pub type SharedSink = Arc<dyn DiagnosticSink>;

pub(crate) fn default_sink() -> SharedSink {
    Arc::new(TracingSink)
}

#[cfg(test)]
pub(crate) mod testing {
    use super::DiagnosticSink;
    use std::sync::Mutex;

    /// Collects messages for assertions
    #[derive(Default)]
    pub struct RecordingSink {
        pub messages: Mutex<Vec<(String, String)>>,
    }

    impl RecordingSink {
        pub fn lines(&self) -> Vec<String> {
            self.messages
                .lock()
                .map(|m| m.iter().map(|(_, msg)| msg.clone()).collect())
                .unwrap_or_default()
        }
    }

    impl DiagnosticSink for RecordingSink {
        fn debug(&self, component: &str, message: &str) {
            if let Ok(mut messages) = self.messages.lock() {
                messages.push((component.to_string(), message.to_string()));
            }
        }
    }
}
