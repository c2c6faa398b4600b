//! Error types for the trading monitor.

use thiserror::Error;

/// Top-level trading monitor error.
#[derive(Error, Debug)]
pub enum TraderError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Backtest error: {0}")]
    Backtest(#[from] BacktestError),

    #[error("Runtime error: {0}")]
    Runtime(String),

    #[error("Model error: {0}")]
    Model(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for TraderError {
    fn from(err: serde_json::Error) -> Self {
        TraderError::Serialization(err.to_string())
    }
}

/// Failures talking to a remote service.
///
/// Any of these is fatal to the running trading cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("service unreachable: {0}")]
    Connection(String),

    #[error("request timed out")]
    Timeout,

    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl TransportError {
    /// HTTP status code, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Backtest flow errors. Never affect the trading cycle.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BacktestError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("invalid ticker: {0:?}")]
    InvalidTicker(String),

    #[error("a backtest is already running")]
    InProgress,
}

/// Result type alias for trading monitor operations.
pub type TraderResult<T> = Result<T, TraderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_status() {
        let err = TransportError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.to_string(), "service returned status 500: boom");
        assert_eq!(TransportError::Timeout.status(), None);
    }

    #[test]
    fn test_backtest_error_wraps_transport() {
        let err: BacktestError = TransportError::Connection("refused".into()).into();
        assert_eq!(err.to_string(), "service unreachable: refused");

        let top: TraderError = err.into();
        assert!(matches!(top, TraderError::Backtest(_)));
    }
}
