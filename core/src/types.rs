//! Domain types for the movie feed.

/// One movie in the feed.
///
/// `average` is the API's `vote_average`. `image_url` is the absolute URL of
/// the backdrop rendition.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedItem {
    pub id: i64,
    pub title: String,
    pub average: f64,
    pub image_url: String,
}

/// Outcome of one `load` call.
pub type FeedLoadResult = Result<Vec<FeedItem>, crate::error::LoadError>;
