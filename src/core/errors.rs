//! Custom error types for client operations

use thiserror::Error;

/// Errors raised by the DeepL client
#[derive(Error, Debug)]
pub enum DeeplError {
    /// Invalid construction arguments or configuration values
    #[error("Configuration error: {message}")]
    ConfigError {
        /// What was wrong with the configuration
        message: String,
    },

    /// The request payload could not be serialized
    #[error("Encoding error: {0}")]
    EncodingError(#[source] serde_json::Error),

    /// Reading an input stream failed
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Glossary entries exceeded the configured size limit
    #[error("Glossary entries exceed {limit} bytes")]
    EntriesTooLarge {
        /// Configured limit in bytes
        limit: u64,
    },

    /// The HTTP exchange could not be completed
    #[error("Transport error: {0}")]
    TransportError(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("API error: {status} - {body}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// The response body did not match the expected shape
    #[error("Decoding error: {0}")]
    DecodingError(#[source] serde_json::Error),
}

impl DeeplError {
    /// Shorthand for a [`DeeplError::ConfigError`]
    pub fn config(message: impl Into<String>) -> Self {
        DeeplError::ConfigError {
            message: message.into(),
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, DeeplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let err = DeeplError::ApiError {
            status: 403,
            body: "Forbidden".to_string(),
        };
        assert_eq!(err.to_string(), "API error: 403 - Forbidden");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: DeeplError = io.into();
        assert!(matches!(err, DeeplError::IoError(_)));
    }
}
