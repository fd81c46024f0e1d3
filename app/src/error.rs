//! Error types for tab alert operations

use thiserror::Error;

/// Errors raised while wiring alerts to the page or driving its APIs
#[derive(Debug, Error)]
pub enum AlertError {
    #[error("no global window available")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("{context} failed: {message}")]
    Js {
        context: &'static str,
        message: String,
    },

    #[error("invalid alert settings: {0}")]
    Settings(String),
}

impl AlertError {
    /// Wrap a failure reported by a browser API.
    pub fn js(context: &'static str, message: impl Into<String>) -> Self {
        Self::Js {
            context,
            message: message.into(),
        }
    }
}
