use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, sample_movies, DiscoverPage, Movie, StatusMessage};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

fn movie(id: i64, vote_average: f64, popularity: f64) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        vote_average,
        popularity,
        backdrop_path: format!("/{id}.jpg"),
    }
}

// --- discover ---

#[tokio::test]
async fn discover_returns_catalogue() {
    let resp = app()
        .oneshot(get("/3/discover/movie?api_key=k&language=zh-TW&page=1"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: DiscoverPage = body_json(resp).await;
    assert_eq!(page.page, 1);
    assert_eq!(page.total_results, 2);
    assert_eq!(page.results, sample_movies());
}

#[tokio::test]
async fn discover_body_has_results_key() {
    let resp = app()
        .oneshot(get("/3/discover/movie?api_key=k"))
        .await
        .unwrap();

    let json: serde_json::Value = body_json(resp).await;
    assert!(json["results"].is_array());
}

#[tokio::test]
async fn discover_sorts_by_popularity() {
    let app = app_with(vec![movie(1, 9.0, 10.0), movie(2, 5.0, 99.0), movie(3, 7.0, 50.0)]);
    let resp = app
        .oneshot(get("/3/discover/movie?api_key=k&sort_by=popularity.desc"))
        .await
        .unwrap();

    let page: DiscoverPage = body_json(resp).await;
    let ids: Vec<i64> = page.results.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[tokio::test]
async fn discover_sorts_by_vote_average() {
    let app = app_with(vec![movie(1, 6.0, 10.0), movie(2, 9.0, 99.0), movie(3, 7.0, 50.0)]);
    let resp = app
        .oneshot(get("/3/discover/movie?api_key=k&sort_by=vote_average.desc"))
        .await
        .unwrap();

    let page: DiscoverPage = body_json(resp).await;
    let ids: Vec<i64> = page.results.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![2, 3, 1]);
}

#[tokio::test]
async fn discover_keeps_order_without_sort() {
    let app = app_with(vec![movie(1, 6.0, 10.0), movie(2, 9.0, 99.0)]);
    let resp = app.oneshot(get("/3/discover/movie?api_key=k")).await.unwrap();

    let page: DiscoverPage = body_json(resp).await;
    let ids: Vec<i64> = page.results.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

#[tokio::test]
async fn discover_past_last_page_is_empty() {
    let resp = app()
        .oneshot(get("/3/discover/movie?api_key=k&page=2"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let page: DiscoverPage = body_json(resp).await;
    assert_eq!(page.page, 2);
    assert!(page.results.is_empty());
}

#[tokio::test]
async fn discover_empty_catalogue() {
    let resp = app_with(Vec::new())
        .oneshot(get("/3/discover/movie?api_key=k"))
        .await
        .unwrap();

    let page: DiscoverPage = body_json(resp).await;
    assert!(page.results.is_empty());
    assert_eq!(page.total_results, 0);
}

// --- rejections ---

#[tokio::test]
async fn missing_api_key_returns_401() {
    let resp = app().oneshot(get("/3/discover/movie")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let message: StatusMessage = body_json(resp).await;
    assert_eq!(message.status_code, 7);
    assert!(!message.success);
}

#[tokio::test]
async fn empty_api_key_returns_401() {
    let resp = app()
        .oneshot(get("/3/discover/movie?api_key="))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn malformed_page_returns_400() {
    let resp = app()
        .oneshot(get("/3/discover/movie?api_key=k&page=first"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_path_returns_404() {
    let resp = app().oneshot(get("/3/movie/popular")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_bytes(resp).await;
    assert!(body.is_empty());
}
