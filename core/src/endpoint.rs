//! Endpoint descriptor for the movie API.
//!
//! # Design
//! `TmdbApi` names a remote resource and knows how to describe it as an
//! `HttpRequest`: path, method, query parameters and headers. It holds no
//! connection state and is cheap to clone, so the loader keeps one and hands
//! a reference to the transport on every call.

use url::Url;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest};

/// Host of the public movie API.
pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org";

/// Query parameters for the discover feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedQuery {
    pub language: String,
    pub page: u32,
    pub sort_by: String,
    pub api_key: String,
}

impl FeedQuery {
    /// First page of the most popular movies, localized for Taiwan.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            language: "zh-TW".to_string(),
            page: 1,
            sort_by: "popularity.desc".to_string(),
            api_key: api_key.into(),
        }
    }
}

/// Resources this crate can request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TmdbApi {
    Feed(FeedQuery),
}

impl TmdbApi {
    pub fn feed(api_key: impl Into<String>) -> Self {
        TmdbApi::Feed(FeedQuery::new(api_key))
    }

    pub fn path(&self) -> &'static str {
        match self {
            TmdbApi::Feed(_) => "/3/discover/movie",
        }
    }

    pub fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    /// Query parameters in the order they are appended to the URL.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            TmdbApi::Feed(q) => vec![
                ("language", q.language.clone()),
                ("page", q.page.to_string()),
                ("sort_by", q.sort_by.clone()),
                ("api_key", q.api_key.clone()),
            ],
        }
    }

    pub fn headers(&self) -> Vec<(String, String)> {
        vec![("content-type".to_string(), "application/json".to_string())]
    }

    /// Describe this resource as a request against `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn build_request(&self, base_url: &str) -> Result<HttpRequest, TransportError> {
        let base = base_url.trim_end_matches('/');
        let url = Url::parse_with_params(&format!("{base}{}", self.path()), self.query())?;
        Ok(HttpRequest {
            method: self.method(),
            url: url.into(),
            headers: self.headers(),
        })
    }
}
