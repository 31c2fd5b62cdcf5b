//! Error types for shai.
//!
//! This module defines the error type system for everything that can go
//! wrong between reading the config file and printing a rendered reply.

use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

/// The main error type for shai.
#[derive(Clone, Debug)]
pub enum Error {
    /// The configuration file is missing, unreadable, or invalid.
    ///
    /// Always fatal at startup; never produced after the session begins.
    Config {
        /// Human-readable error message.
        message: String,
        /// Path of the offending config file, if known.
        path: Option<PathBuf>,
    },

    /// Error while encoding the request body as JSON.
    Serialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// The response body was not the expected chat completion shape.
    Deserialization {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// Connection error (DNS failure, connection refused, reset).
    Connection {
        /// Human-readable error message.
        message: String,
        /// Underlying cause.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// The request exceeded the client timeout.
    Timeout {
        /// Human-readable error message.
        message: String,
        /// Duration of the timeout in seconds.
        duration: Option<f64>,
    },

    /// The API returned a non-200 status.
    ///
    /// Carries the raw response body verbatim so the operator sees exactly
    /// what the server said. There is no retry.
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Raw response body.
        body: String,
    },

    /// The API returned a well-formed response with an empty choice list.
    EmptyResponse,

    /// I/O error.
    Io {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Arc<io::Error>,
    },

    /// HTTP client error (construction or request building).
    HttpClient {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<Arc<dyn error::Error + Send + Sync>>,
    },

    /// A URL parsing or manipulation error.
    Url {
        /// Human-readable error message.
        message: String,
        /// The underlying error.
        source: Option<url::ParseError>,
    },
}

impl Error {
    /// Creates a new configuration error.
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Error::Config {
            message: message.into(),
            path,
        }
    }

    /// Creates a new serialization error.
    pub fn serialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Serialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new deserialization error.
    pub fn deserialization(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Deserialization {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new connection error.
    pub fn connection(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::Connection {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new timeout error.
    pub fn timeout(message: impl Into<String>, duration: Option<f64>) -> Self {
        Error::Timeout {
            message: message.into(),
            duration,
        }
    }

    /// Creates a new API error from a status code and raw response body.
    pub fn api(status_code: u16, body: impl Into<String>) -> Self {
        Error::Api {
            status_code,
            body: body.into(),
        }
    }

    /// Creates a new empty-response error.
    pub fn empty_response() -> Self {
        Error::EmptyResponse
    }

    /// Creates a new I/O error.
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source: Arc::new(source),
        }
    }

    /// Creates a new HTTP client error.
    pub fn http_client(
        message: impl Into<String>,
        source: Option<Box<dyn error::Error + Send + Sync>>,
    ) -> Self {
        Error::HttpClient {
            message: message.into(),
            source: source.map(Arc::from),
        }
    }

    /// Creates a new URL error.
    pub fn url(message: impl Into<String>, source: Option<url::ParseError>) -> Self {
        Error::Url {
            message: message.into(),
            source,
        }
    }

    /// Returns true if this error is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config { .. })
    }

    /// Returns true if this error is a serialization error.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialization { .. })
    }

    /// Returns true if this error is a deserialization error.
    pub fn is_deserialization(&self) -> bool {
        matches!(self, Error::Deserialization { .. })
    }

    /// Returns true if this error is a transport failure (connection or
    /// timeout).
    pub fn is_network(&self) -> bool {
        matches!(self, Error::Connection { .. } | Error::Timeout { .. })
    }

    /// Returns true if this error is an API status error.
    pub fn is_api(&self) -> bool {
        matches!(self, Error::Api { .. })
    }

    /// Returns true if this error is an empty-response error.
    pub fn is_empty_response(&self) -> bool {
        matches!(self, Error::EmptyResponse)
    }

    /// Returns true if the interactive loop can display this error and
    /// continue awaiting input.
    ///
    /// Only configuration errors are fatal; everything else is reported and
    /// the session keeps going.
    pub fn is_recoverable(&self) -> bool {
        !self.is_config()
    }

    /// Returns the HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Api { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// Returns the raw API response body associated with this error, if any.
    pub fn api_body(&self) -> Option<&str> {
        match self {
            Error::Api { body, .. } => Some(body),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config { message, path } => {
                if let Some(path) = path {
                    write!(f, "Configuration error: {message} ({})", path.display())
                } else {
                    write!(f, "Configuration error: {message}")
                }
            }
            Error::Serialization { message, .. } => {
                write!(f, "Serialization error: {message}")
            }
            Error::Deserialization { message, .. } => {
                write!(f, "Deserialization error: {message}")
            }
            Error::Connection { message, .. } => {
                write!(f, "Connection error: {message}")
            }
            Error::Timeout { message, duration } => {
                if let Some(duration) = duration {
                    write!(f, "Timeout error: {message} ({duration} seconds)")
                } else {
                    write!(f, "Timeout error: {message}")
                }
            }
            Error::Api { status_code, body } => {
                write!(f, "API error: {body} ({status_code})")
            }
            Error::EmptyResponse => {
                write!(f, "Empty response: the API returned no choices")
            }
            Error::Io { message, .. } => {
                write!(f, "I/O error: {message}")
            }
            Error::HttpClient { message, .. } => {
                write!(f, "HTTP client error: {message}")
            }
            Error::Url { message, .. } => {
                write!(f, "URL error: {message}")
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Serialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Deserialization { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Connection { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Io { source, .. } => Some(source),
            Error::HttpClient { source, .. } => source
                .as_ref()
                .map(|e| e.as_ref() as &(dyn error::Error + 'static)),
            Error::Url { source, .. } => {
                source.as_ref().map(|e| e as &(dyn error::Error + 'static))
            }
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::io(err.to_string(), err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::serialization(format!("JSON error: {err}"), Some(Box::new(err)))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::url(format!("URL parse error: {err}"), Some(err))
    }
}

/// A specialized Result type for shai operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = Error::api(500, "server error");
        assert!(err.is_api());
        assert_eq!(err.status_code(), Some(500));
        assert_eq!(err.api_body(), Some("server error"));
        assert_eq!(err.to_string(), "API error: server error (500)");
    }

    #[test]
    fn network_predicate_covers_connection_and_timeout() {
        assert!(Error::connection("refused", None).is_network());
        assert!(Error::timeout("deadline exceeded", Some(60.0)).is_network());
        assert!(!Error::api(404, "not found").is_network());
    }

    #[test]
    fn config_errors_are_fatal() {
        let err = Error::config("LLM_API_KEY is required", None);
        assert!(err.is_config());
        assert!(!err.is_recoverable());
    }

    #[test]
    fn everything_else_is_recoverable() {
        assert!(Error::serialization("bad encode", None).is_recoverable());
        assert!(Error::deserialization("bad decode", None).is_recoverable());
        assert!(Error::connection("refused", None).is_recoverable());
        assert!(Error::api(500, "boom").is_recoverable());
        assert!(Error::empty_response().is_recoverable());
    }

    #[test]
    fn display_includes_path_when_known() {
        let err = Error::config("missing key", Some(PathBuf::from("/tmp/config")));
        assert_eq!(
            err.to_string(),
            "Configuration error: missing key (/tmp/config)"
        );
    }

    #[test]
    fn from_serde_json_is_serialization() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = Error::from(json_err);
        assert!(err.is_serialization());
    }

    #[test]
    fn empty_response_display() {
        assert_eq!(
            Error::empty_response().to_string(),
            "Empty response: the API returned no choices"
        );
    }
}
