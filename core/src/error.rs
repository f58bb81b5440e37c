//! Error types for the feed pipeline.
//!
//! # Design
//! The loader reports exactly two kinds of failure. `Connectivity` covers
//! everything that went wrong before a response arrived, `InvalidData` covers
//! responses that arrived but could not be turned into a feed. Callers cannot
//! act differently on DNS failures versus timeouts, so `TransportError` stays
//! opaque and only carries a message for logs.

use thiserror::Error;

/// Failure delivered to a `load` completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The transport failed before a response was received.
    #[error("could not reach the feed service")]
    Connectivity,

    /// A response arrived with a non-200 status or an unexpected body.
    #[error("the feed service returned invalid data")]
    InvalidData,
}

/// Opaque transport-level failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("transport failed: {0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<ureq::Error> for TransportError {
    fn from(e: ureq::Error) -> Self {
        Self(e.to_string())
    }
}

impl From<url::ParseError> for TransportError {
    fn from(e: url::ParseError) -> Self {
        Self(format!("invalid url: {e}"))
    }
}
