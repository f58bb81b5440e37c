//! HTTP transport types shared by the endpoint descriptor and the transport.
//!
//! # Design
//! Requests and responses are described as plain data. `TmdbApi` builds an
//! `HttpRequest`, an `HttpClient` executes it and hands back an
//! `HttpResponse`, and the mapper reads the status and raw body bytes. Nothing
//! in this module touches the network.
//!
//! All fields use owned types (`String`, `Vec`) so values can move into the
//! transport's completion closure without lifetime concerns.

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already carries the encoded query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
///
/// Headers are informational only; the feed pipeline looks at `status` and
/// `body`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }
}

/// Outcome of one transport round-trip.
pub type HttpClientResult = Result<HttpResponse, TransportError>;
