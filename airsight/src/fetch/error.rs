//! Error types for air quality data fetching.

use thiserror::Error;

/// Errors that can occur when fetching a reading from the data service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// The server answered with a non-success status.
    #[error("Server returned status {0}")]
    Status(u16),

    /// JSON deserialization failed.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The payload carried an index value outside the valid range.
    #[error("Invalid air quality index {0}")]
    InvalidReading(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FetchError::Http("connection refused".to_string()).to_string(),
            "HTTP request failed: connection refused"
        );
        assert_eq!(
            FetchError::Status(502).to_string(),
            "Server returned status 502"
        );
        assert_eq!(
            FetchError::InvalidReading(-5.0).to_string(),
            "Invalid air quality index -5"
        );
    }
}
