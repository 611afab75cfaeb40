//! Error types for inference operations.

use strum::{AsRefStr, Display, IntoStaticStr};
use thiserror::Error;

/// Type alias for boxed dynamic errors that can be sent across threads.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Type alias for Results with the inference [`Error`] type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Categories of errors that can occur while talking to an inference provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// Input validation failed before the request was sent.
    InvalidInput,
    /// The provider could not be reached.
    NetworkError,
    /// The provider rejected the credential.
    Authentication,
    /// The provider is throttling requests.
    RateLimited,
    /// The provider or the requested model is temporarily unavailable.
    ServiceUnavailable,
    /// The provider answered with an error status.
    ExternalError,
    /// Client configuration is invalid.
    Configuration,
    /// The request did not complete in time.
    Timeout,
    /// The provider response could not be (de)serialized.
    Serialization,
    /// Unknown error occurred.
    Unknown,
}

/// A structured error type for inference operations.
#[derive(Debug, Error)]
#[error("{kind}{}", message.as_ref().map(|m| format!(": {m}")).unwrap_or_default())]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional error message.
    pub message: Option<String>,
    /// Optional source error.
    #[source]
    pub source: Option<BoxedError>,
}

impl Error {
    /// Creates a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            source: None,
        }
    }

    /// Adds a message to this error.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a source error to this error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Creates a new invalid input error.
    pub fn invalid_input() -> Self {
        Self::new(ErrorKind::InvalidInput)
    }

    /// Creates a new network error.
    pub fn network_error() -> Self {
        Self::new(ErrorKind::NetworkError)
    }

    /// Creates a new authentication error.
    pub fn authentication() -> Self {
        Self::new(ErrorKind::Authentication)
    }

    /// Creates a new rate limited error.
    pub fn rate_limited() -> Self {
        Self::new(ErrorKind::RateLimited)
    }

    /// Creates a new service unavailable error.
    pub fn service_unavailable() -> Self {
        Self::new(ErrorKind::ServiceUnavailable)
    }

    /// Creates a new external error.
    pub fn external_error() -> Self {
        Self::new(ErrorKind::ExternalError)
    }

    /// Creates a new configuration error.
    pub fn configuration() -> Self {
        Self::new(ErrorKind::Configuration)
    }

    /// Creates a new timeout error.
    pub fn timeout() -> Self {
        Self::new(ErrorKind::Timeout)
    }

    /// Creates a new serialization error.
    pub fn serialization() -> Self {
        Self::new(ErrorKind::Serialization)
    }

    /// Creates a new unknown error.
    pub fn unknown() -> Self {
        Self::new(ErrorKind::Unknown)
    }

    /// Maps a non-success provider status code to an error.
    ///
    /// The status and the (possibly empty) response body are kept in the
    /// message so callers can surface them verbatim.
    pub fn from_status(status: u16, body: impl AsRef<str>) -> Self {
        let kind = match status {
            401 | 403 => ErrorKind::Authentication,
            429 => ErrorKind::RateLimited,
            503 => ErrorKind::ServiceUnavailable,
            504 => ErrorKind::Timeout,
            _ => ErrorKind::ExternalError,
        };

        let body = body.as_ref().trim();
        let message = if body.is_empty() {
            format!("provider returned HTTP {status}")
        } else {
            format!("provider returned HTTP {status}: {body}")
        };

        Self::new(kind).with_message(message)
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error kind as a string.
    pub fn kind_str(&self) -> &'static str {
        self.kind.into()
    }
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::timeout()
                .with_message(error.to_string())
                .with_source(error)
        } else if error.is_connect() {
            Self::network_error()
                .with_message(format!("connection failed: {error}"))
                .with_source(error)
        } else if error.is_decode() {
            Self::serialization()
                .with_message(format!("malformed provider response: {error}"))
                .with_source(error)
        } else if error.is_builder() {
            Self::configuration()
                .with_message(error.to_string())
                .with_source(error)
        } else {
            Self::network_error()
                .with_message(error.to_string())
                .with_source(error)
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization()
            .with_message(format!("malformed provider response: {error}"))
            .with_source(error)
    }
}
