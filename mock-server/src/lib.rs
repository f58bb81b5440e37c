use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub vote_average: f64,
    pub popularity: f64,
    pub backdrop_path: String,
}

#[derive(Debug, Deserialize)]
pub struct DiscoverQuery {
    pub api_key: Option<String>,
    pub language: Option<String>,
    pub page: Option<u32>,
    pub sort_by: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DiscoverPage {
    pub page: u32,
    pub results: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: usize,
}

/// Error envelope the real service returns for rejected requests.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub status_code: u32,
    pub status_message: String,
    pub success: bool,
}

impl StatusMessage {
    fn invalid_api_key() -> Self {
        Self {
            status_code: 7,
            status_message: "Invalid API key: You must be granted a valid key.".to_string(),
            success: false,
        }
    }
}

pub type Catalogue = Arc<Vec<Movie>>;

pub fn sample_movies() -> Vec<Movie> {
    vec![
        Movie {
            id: 550,
            title: "Fight Club".to_string(),
            vote_average: 8.4,
            popularity: 61.4,
            backdrop_path: "/hZkgoQYus5vegHoetLkCJzb17zJ.jpg".to_string(),
        },
        Movie {
            id: 13,
            title: "Forrest Gump".to_string(),
            vote_average: 8.5,
            popularity: 73.9,
            backdrop_path: "/qdIMHd4sEfJSckfVJfKQvisL02a.jpg".to_string(),
        },
    ]
}

pub fn app() -> Router {
    app_with(sample_movies())
}

/// Serve `movies` as a single page of the discover feed.
pub fn app_with(movies: Vec<Movie>) -> Router {
    let catalogue: Catalogue = Arc::new(movies);
    Router::new()
        .route("/3/discover/movie", get(discover))
        .with_state(catalogue)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn discover(
    State(catalogue): State<Catalogue>,
    Query(query): Query<DiscoverQuery>,
) -> Response {
    if query.api_key.as_deref().unwrap_or_default().is_empty() {
        let body = Json(StatusMessage::invalid_api_key());
        return (StatusCode::UNAUTHORIZED, body).into_response();
    }
    debug!(language = ?query.language, sort_by = ?query.sort_by, page = ?query.page, "discover");

    let page = query.page.unwrap_or(1);
    let mut results = if page == 1 {
        catalogue.to_vec()
    } else {
        Vec::new()
    };
    match query.sort_by.as_deref() {
        Some("popularity.desc") => {
            results.sort_by(|a, b| b.popularity.total_cmp(&a.popularity))
        }
        Some("vote_average.desc") => {
            results.sort_by(|a, b| b.vote_average.total_cmp(&a.vote_average))
        }
        _ => {}
    }

    Json(DiscoverPage {
        page,
        total_results: catalogue.len(),
        total_pages: 1,
        results,
    })
    .into_response()
}
