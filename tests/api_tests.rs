//! Request-level tests of the comparison API, driven through the router
//! without a network listener. Validation failures are exercised here;
//! anything past validation would need the upstream music service.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use playlist_overlap::web::server::create_router;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}

fn compare_request(body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/compare")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_router().expect("router");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_compare_rejects_single_url() {
    let app = create_router().expect("router");

    let body = serde_json::json!({
        "playlist_urls": ["https://music.yandex.ru/users/a/playlists/1"]
    });
    let response = app.oneshot(compare_request(&body)).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error_type"], "invalid_request");
}

#[tokio::test]
async fn test_compare_rejects_too_many_urls() {
    let app = create_router().expect("router");

    let urls: Vec<String> = (0..21)
        .map(|kind| format!("https://music.yandex.ru/users/a/playlists/{kind}"))
        .collect();
    let body = serde_json::json!({ "playlist_urls": urls });
    let response = app.oneshot(compare_request(&body)).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_compare_reports_position_of_invalid_url() {
    let app = create_router().expect("router");

    let body = serde_json::json!({
        "playlist_urls": [
            "https://music.yandex.ru/users/a/playlists/1",
            "https://example.com/users/b/playlists/2"
        ]
    });
    let response = app.oneshot(compare_request(&body)).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error_type"], "invalid_playlist_url");
    let message = json["error"].as_str().expect("error message");
    assert!(message.starts_with("Playlist #2:"), "got: {message}");
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_router().expect("router");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/nope")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
