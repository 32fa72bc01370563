//! Dashboard error types
//!
//! Errors raised by the core when external input cannot be interpreted.
//! The routing layer never propagates these to the page: unknown tabs are
//! ignored and missing profile fields are defaulted.

use thiserror::Error;

/// Errors that can occur in the dashboard core
#[derive(Error, Debug)]
pub enum DashboardError {
    /// A tab id outside the closed set
    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    /// Persisted session could not be decoded or encoded
    #[error("Invalid session: {0}")]
    InvalidSession(String),
}

impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::InvalidSession(err.to_string())
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashboardError::UnknownTab("xyz".to_string());
        assert_eq!(err.to_string(), "Unknown tab: xyz");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: DashboardError = json_err.into();
        assert!(matches!(err, DashboardError::InvalidSession(_)));
    }
}
