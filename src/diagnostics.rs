//! Pluggable error diagnostics.
//!
//! Every failure is reported once at the boundary where it is caught, before
//! it is wrapped and returned. Reports go to a [`DiagnosticsObserver`]; the
//! default [`TracingObserver`] forwards them to `tracing`, leaving subscriber
//! setup to the application.
//!
//! # Example
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use chainstarters::DiagnosticsObserver;
//!
//! #[derive(Debug, Default)]
//! struct Collect(Mutex<Vec<String>>);
//!
//! impl DiagnosticsObserver for Collect {
//!     fn on_error(&self, context: &str, error: &(dyn std::error::Error + 'static)) {
//!         self.0.lock().unwrap().push(format!("{context}: {error}"));
//!     }
//! }
//!
//! let observer: Arc<dyn DiagnosticsObserver> = Arc::new(Collect::default());
//! ```

use std::fmt;

/// Receives a report for every error the SDK catches.
///
/// `context` is a short description of the boundary (for example
/// `"Error fetching data"`), and `error` is the fault that was caught there.
pub trait DiagnosticsObserver: fmt::Debug + Send + Sync {
    /// Called once per caught error, before it is wrapped and returned.
    fn on_error(&self, context: &str, error: &(dyn std::error::Error + 'static));
}

/// Default observer that emits `tracing::error!` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl DiagnosticsObserver for TracingObserver {
    fn on_error(&self, context: &str, error: &(dyn std::error::Error + 'static)) {
        tracing::error!("{}: {}", context, error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_tracing_observer_accepts_any_error() {
        let error = HttpResponseError {
            code: 500,
            message: "internal error".to_string(),
        };
        // No subscriber is installed, so this only checks the call is sound.
        TracingObserver.on_error("Error fetching data", &error);
    }

    #[test]
    fn test_observer_is_object_safe_and_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn DiagnosticsObserver>();
    }
}
