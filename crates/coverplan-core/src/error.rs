//! Error type shared by every coverplan crate

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    /// The config file exists but could not be read or written
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The config file parsed but describes something unusable
    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

    /// Transport or client failure while delivering a lead
    #[error("Lead delivery failed: {message}")]
    Sink { message: String },

    #[error("Lead endpoint rejected the submission with HTTP {status}")]
    SinkRejected { status: u16 },

    #[error("Lead endpoint did not respond within {timeout_ms}ms")]
    SinkTimeout { timeout_ms: u64 },
}

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn sink(message: impl Into<String>) -> Self {
        Self::Sink {
            message: message.into(),
        }
    }

    /// Whether the app keeps running normally after this error.
    ///
    /// Delivery failures leave the quote form intact for a retry; an invalid
    /// config falls back to defaults.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::Sink { .. }
                | Error::SinkRejected { .. }
                | Error::SinkTimeout { .. }
                | Error::ConfigInvalid { .. }
        )
    }

    /// Short reason shown to the person filling in the quote form
    pub fn user_message(&self) -> String {
        match self {
            Error::Sink { message } => message.clone(),
            Error::SinkRejected { status } => format!("the server answered HTTP {}", status),
            Error::SinkTimeout { timeout_ms } => format!(
                "no answer from the server after {:.1}s",
                *timeout_ms as f64 / 1000.0
            ),
            other => other.to_string(),
        }
    }
}

/// Attach a log line to an error on its way up, keeping the variant
pub trait ResultExt<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.with_context(|| context.into())
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::sink("connection refused");
        assert_eq!(err.to_string(), "Lead delivery failed: connection refused");

        let err = Error::SinkRejected { status: 502 };
        assert!(err.to_string().contains("HTTP 502"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_sink_errors_are_recoverable() {
        assert!(Error::sink("boom").is_recoverable());
        assert!(Error::SinkRejected { status: 500 }.is_recoverable());
        assert!(Error::SinkTimeout { timeout_ms: 100 }.is_recoverable());
    }

    #[test]
    fn test_terminal_and_io_errors_are_not_recoverable() {
        assert!(!Error::terminal("no tty").is_recoverable());
        assert!(!Error::config("bad").is_recoverable());
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        assert!(!Error::from(io_err).is_recoverable());
    }

    #[test]
    fn test_user_message_for_delivery_failures() {
        assert_eq!(
            Error::SinkRejected { status: 503 }.user_message(),
            "the server answered HTTP 503"
        );
        assert_eq!(
            Error::SinkTimeout { timeout_ms: 2500 }.user_message(),
            "no answer from the server after 2.5s"
        );
        assert_eq!(Error::sink("connection refused").user_message(), "connection refused");
        assert_eq!(Error::terminal("x").user_message(), "Terminal error: x");
    }

    #[test]
    fn test_context_preserves_error_variant() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.context("reading config").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
