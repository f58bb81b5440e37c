//! Movie feed loading core.
//!
//! # Overview
//! Fetches the discover feed from the movie API, validates the response and
//! decodes it into `FeedItem` values, delivering the outcome through a single
//! completion per `load` call.
//!
//! # Design
//! - `TmdbApi` describes the endpoint; it builds an `HttpRequest` but never
//!   performs I/O.
//! - `HttpClient` performs one request and reports raw bytes plus status, or
//!   an opaque `TransportError`. `UreqHttpClient` is the shipped transport.
//! - `mapper::map` is a pure function from status and body to items.
//! - `RemoteFeedLoader` wires the two together, collapses transport failures
//!   into `LoadError::Connectivity`, and drops completions for loaders that
//!   no longer exist.

pub mod client;
pub mod endpoint;
pub mod error;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod types;

pub use client::{HttpClient, HttpCompletion, TransportConfig, UreqHttpClient};
pub use endpoint::{FeedQuery, TmdbApi};
pub use error::{LoadError, TransportError};
pub use http::{HttpClientResult, HttpMethod, HttpRequest, HttpResponse};
pub use loader::{FeedCompletion, FeedLoader, LoadTask, RemoteFeedLoader};
pub use types::{FeedItem, FeedLoadResult};
