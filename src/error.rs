//! Error types reported by handler execution.
//!
//! The bus itself has a permissive contract: subscribing, unsubscribing,
//! publishing to an unknown event, and `off` on an absent name all degrade
//! to no-ops instead of failing. The only failures in the system come from
//! handlers, and those are isolated per handler by the dispatcher.
//!
//! [`HandlerError`] provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Errors produced by handler execution.
///
/// A failing handler never aborts dispatch of its siblings and never
/// propagates to the publisher; the dispatcher reports the error with the
/// handler's name and moves on.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum HandlerError {
    /// Handler returned an error for this event.
    #[error("handler failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Handler panicked; the panic was caught by the dispatcher.
    #[error("handler panicked: {error}")]
    Panicked {
        /// The panic payload, rendered as text.
        error: String,
    },
}

impl HandlerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use herald::HandlerError;
    ///
    /// let err = HandlerError::Fail { error: "boom".into() };
    /// assert_eq!(err.as_label(), "handler_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            HandlerError::Fail { .. } => "handler_failed",
            HandlerError::Panicked { .. } => "handler_panicked",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            HandlerError::Fail { error } => format!("error: {error}"),
            HandlerError::Panicked { error } => format!("panic: {error}"),
        }
    }
}
