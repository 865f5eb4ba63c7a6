//! Error types for the Genius API.

use thiserror::Error;

/// Main error type for all Genius operations.
#[derive(Debug, Error)]
pub enum GeniusError {
    /// HTTP request failed before a response was read.
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// A custom transport failed before a response was read.
    #[error("Transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),

    /// Server answered with a non-200 status.
    ///
    /// Displays the raw response body verbatim, whatever its shape.
    #[error("{body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Raw response body.
        body: String,
    },

    /// Envelope's `meta.status` was not 200.
    #[error("{0}")]
    Api(String),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A structured text field held something other than a string.
    #[error("Text format error: {0}")]
    TextFormat(String),
}

impl GeniusError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            GeniusError::Http { status, .. } => Some(*status),
            GeniusError::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Result type alias for Genius operations.
pub type Result<T> = std::result::Result<T, GeniusError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_displays_raw_body() {
        let err = GeniusError::Http {
            status: 500,
            body: "rate limited".to_string(),
        };
        assert_eq!(err.to_string(), "rate limited");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_transport_error_keeps_source_message() {
        let err = GeniusError::Transport("connection reset".into());
        assert_eq!(err.to_string(), "Transport error: connection reset");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_api_error_displays_message() {
        let err = GeniusError::Api("not found".to_string());
        assert_eq!(err.to_string(), "not found");
        assert_eq!(err.status(), None);
    }
}
