//! Turns a raw feed response into domain items.
//!
//! # Design
//! `map` is a pure function over the status code and body bytes. Any status
//! other than 200 and any body that does not decode into the `results`
//! envelope yields `LoadError::InvalidData`; decoder errors never escape.
//! The wire structs stay private so the payload shape can change without
//! touching `FeedItem`.

use serde::Deserialize;
use tracing::warn;

use crate::error::LoadError;
use crate::types::FeedItem;

const OK_200: u16 = 200;

/// Image CDN host and path prefix.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Rendition size segment. The CDN also serves w92, w154, w185, w342, w780
/// and original.
pub const IMAGE_SIZE: &str = "w500";

#[derive(Deserialize)]
struct Root {
    results: Vec<Item>,
}

#[derive(Deserialize)]
struct Item {
    id: i64,
    title: String,
    vote_average: f64,
    backdrop_path: String,
}

impl Item {
    fn into_feed_item(self) -> FeedItem {
        FeedItem {
            id: self.id,
            title: self.title,
            average: self.vote_average,
            image_url: image_url(&self.backdrop_path),
        }
    }
}

/// Append `path` to the image base as a single path component.
pub fn image_url(path: &str) -> String {
    format!(
        "{IMAGE_BASE_URL}/{IMAGE_SIZE}/{}",
        path.trim_start_matches('/')
    )
}

/// Map a feed response to its items, preserving payload order.
pub fn map(body: &[u8], status: u16) -> Result<Vec<FeedItem>, LoadError> {
    if status != OK_200 {
        warn!(status, "unexpected feed status");
        return Err(LoadError::InvalidData);
    }
    let root: Root = serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, "feed body did not decode");
        LoadError::InvalidData
    })?;
    Ok(root.results.into_iter().map(Item::into_feed_item).collect())
}
