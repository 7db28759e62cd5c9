//! Error types for Metrc operations.
//!
//! Every failure surfaced by the transport or the resource accessors is a value of
//! [`Error`]. Accessors wrap transport failures with the operation that produced them
//! via [`Error::Context`], so callers can both read a human-friendly chain and inspect
//! the underlying kind.

use thiserror::Error;

/// Main error type for Metrc operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The request URL could not be constructed from the endpoint path
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// HTTP request failed before a response was received
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Request exceeded its deadline
    #[error("Timeout waiting for Metrc: {0}")]
    Timeout(String),

    /// Metrc could not be reached (DNS, TCP or TLS failure)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Metrc answered with a status other than 200
    #[error("response failed with code {status} and body {body}")]
    Status {
        /// Numeric HTTP status code
        status: u16,
        /// Full response body text
        body: String,
    },

    /// Response body could not be read to completion
    #[error("Failed to read response body: {0}")]
    ReadError(String),

    /// Request payload could not be encoded
    #[error("Failed to serialize request: {0}")]
    SerializationError(String),

    /// Response body did not match the expected shape
    #[error("Failed to parse Metrc response: {0}")]
    DeserializationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Configuration values outside their allowed ranges
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// An error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        /// Operation description, e.g. `could not get items by id`
        context: String,
        /// Underlying error
        source: Box<Error>,
    },
}

/// Specialized result type for Metrc operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap this error with a description of the operation that failed.
    #[must_use]
    pub fn context(self, context: impl Into<String>) -> Self {
        Self::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping any context layers.
    #[must_use]
    pub fn root(&self) -> &Self {
        match self {
            Self::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns the HTTP status code when the root cause is a non-200 response.
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self.root() {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns the error code for this error type.
    ///
    /// Context layers report the code of the error they wrap.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self.root() {
            Self::InvalidEndpoint(_) => "INVALID_ENDPOINT",
            Self::HttpError(_) => "HTTP_ERROR",
            Self::Timeout(_) => "TIMEOUT",
            Self::ServiceUnavailable(_) => "SERVICE_UNAVAILABLE",
            Self::Status { .. } => "STATUS_ERROR",
            Self::ReadError(_) => "READ_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
            Self::DeserializationError(_) => "DESERIALIZATION_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::Context { .. } => "CONTEXT",
        }
    }

    /// Returns true when the failure happened before a response was received.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self.root(),
            Self::HttpError(_) | Self::Timeout(_) | Self::ServiceUnavailable(_)
        )
    }
}

// Conversions from external error types
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::ServiceUnavailable(err.to_string())
        } else if err.is_body() || err.is_decode() {
            Self::ReadError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

impl From<validator::ValidationErrors> for Error {
    fn from(err: validator::ValidationErrors) -> Self {
        Self::ValidationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            Error::InvalidEndpoint("test".to_string()).error_code(),
            "INVALID_ENDPOINT"
        );
        assert_eq!(
            Error::HttpError("test".to_string()).error_code(),
            "HTTP_ERROR"
        );
        assert_eq!(Error::Timeout("test".to_string()).error_code(), "TIMEOUT");
        assert_eq!(
            Error::ServiceUnavailable("test".to_string()).error_code(),
            "SERVICE_UNAVAILABLE"
        );
        assert_eq!(
            Error::Status {
                status: 500,
                body: String::new()
            }
            .error_code(),
            "STATUS_ERROR"
        );
        assert_eq!(
            Error::ReadError("test".to_string()).error_code(),
            "READ_ERROR"
        );
        assert_eq!(
            Error::SerializationError("test".to_string()).error_code(),
            "SERIALIZATION_ERROR"
        );
        assert_eq!(
            Error::DeserializationError("test".to_string()).error_code(),
            "DESERIALIZATION_ERROR"
        );
        assert_eq!(
            Error::ConfigError("test".to_string()).error_code(),
            "CONFIG_ERROR"
        );
        assert_eq!(
            Error::ValidationError("test".to_string()).error_code(),
            "VALIDATION_ERROR"
        );
    }

    #[test]
    fn test_status_display_embeds_code_and_body() {
        let err = Error::Status {
            status: 401,
            body: r#"{"Message":"unauthorized"}"#.to_string(),
        };
        assert_eq!(
            err.to_string(),
            r#"response failed with code 401 and body {"Message":"unauthorized"}"#
        );
    }

    #[test]
    fn test_context_wraps_and_unwraps() {
        let err = Error::Status {
            status: 404,
            body: "missing".to_string(),
        }
        .context("could not get items by id");

        assert_eq!(
            err.to_string(),
            "could not get items by id: response failed with code 404 and body missing"
        );
        assert_eq!(err.status_code(), Some(404));
        assert_eq!(err.error_code(), "STATUS_ERROR");
        assert!(matches!(err.root(), Error::Status { status: 404, .. }));
    }

    #[test]
    fn test_nested_context() {
        let err = Error::Timeout("slow".to_string())
            .context("inner")
            .context("outer");
        assert_eq!(err.to_string(), "outer: inner: Timeout waiting for Metrc: slow");
        assert!(err.is_transport());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_error_clone() {
        let err = Error::ValidationError("test".to_string()).context("op");
        let cloned = err.clone();
        assert_eq!(err, cloned);
    }
}
