//! Error types for the bestiary API client.
//!
//! # Design
//! Pre-flight validation failures get their own variant because they are
//! raised before any request exists, and callers may want to distinguish
//! "I passed something bad" from "the network or the service failed."
//! Transport errors carry the underlying `ureq::Error` unmodified — this
//! layer adds no interpretation and no retry. A body that does not even look
//! like JSON lands in `InvalidBody` without the offending payload.

use std::fmt;

/// Errors returned by `BestiaryClient` and `Transport`.
#[derive(Debug)]
pub enum ApiError {
    /// A caller-supplied parameter failed validation. Raised by `build_*`
    /// methods before any request is constructed, so no network call is made.
    InvalidParameter(String),

    /// The HTTP round-trip itself failed (DNS, refused connection, timeout,
    /// TLS). The underlying error is surfaced as-is.
    Transport(ureq::Error),

    /// The response body was empty or did not start with `{` or `[`, i.e. it
    /// was not even syntactically JSON. The service serves some errors as
    /// HTML pages; those land here.
    InvalidBody,

    /// The body looked like JSON but could not be decoded into the expected
    /// record shape.
    Deserialization(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            ApiError::Transport(e) => write!(f, "transport error: {e}"),
            ApiError::InvalidBody => write!(f, "invalid response body"),
            ApiError::Deserialization(msg) => write!(f, "deserialization failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ureq::Error> for ApiError {
    fn from(e: ureq::Error) -> Self {
        ApiError::Transport(e)
    }
}
