use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    routing::any,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use taggate_api::{favicon, landing, resolve_tag, AppState};
use tower::ServiceExt;

const LANDING_URL: &str = "https://github.com/smebberson/docker-alpine-bot";

fn app() -> Router {
    let state = AppState::new(vec!["alpine-nodejs".to_string()], LANDING_URL.to_string());

    Router::new()
        .route("/", any(landing))
        .route("/favicon.ico", any(favicon))
        .fallback(resolve_tag)
        .with_state(state)
}

async fn request(method: Method, path: &str) -> (StatusCode, Vec<u8>) {
    let response = app()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(path)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

async fn get(path: &str) -> (StatusCode, Vec<u8>) {
    request(Method::GET, path).await
}

fn as_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn valid_tag_echoes_image_and_version() {
    let (status, body) = get("/alpine-nodejs/1.2.3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_json(&body),
        json!({"image": "alpine-nodejs", "version": "1.2.3"})
    );
}

#[tokio::test]
async fn image_casing_is_echoed_and_version_cleaned() {
    let (status, body) = get("/Alpine-NodeJS/v2.0.0-rc.1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_json(&body),
        json!({"image": "Alpine-NodeJS", "version": "2.0.0-rc.1"})
    );
}

#[tokio::test]
async fn unsupported_image_is_rejected() {
    let (status, body) = get("/ubuntu/1.0.0").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body = as_json(&body);
    assert_eq!(body["error"]["code"], "UNSUPPORTED_IMAGE");
    assert!(body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("'ubuntu'"));
    assert_eq!(body["error"]["supported_images"], json!(["alpine-nodejs"]));
}

#[tokio::test]
async fn image_is_checked_before_version() {
    // Both segments are bad; the image failure must win.
    let (status, body) = get("/ubuntu/notaversion").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(as_json(&body)["error"]["code"], "UNSUPPORTED_IMAGE");
}

#[tokio::test]
async fn invalid_version_is_rejected() {
    for bad in ["notaversion", "abc", "1.2", "1.2.3.4"] {
        let (status, body) = get(&format!("/alpine-nodejs/{}", bad)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "version {:?}", bad);
        let body = as_json(&body);
        assert_eq!(body["error"]["code"], "INVALID_VERSION");
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains(&format!("'{}'", bad)));
    }
}

#[tokio::test]
async fn wrong_segment_count_is_not_found() {
    for path in [
        "/alpine-nodejs",
        "/alpine-nodejs/1.2.3/extra",
        "/alpine-nodejs/1.2.3/",
        "/alpine-nodejs/",
    ] {
        let (status, body) = get(path).await;

        assert_eq!(status, StatusCode::NOT_FOUND, "path {:?}", path);
        assert_eq!(as_json(&body)["error"]["code"], "ROUTE_NOT_FOUND");
    }
}

#[tokio::test]
async fn favicon_is_empty_not_found() {
    let (status, body) = get("/favicon.ico").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.is_empty());
}

#[tokio::test]
async fn root_serves_landing_payload() {
    let (status, body) = get("/").await;

    assert_eq!(status, StatusCode::OK);
    let body = String::from_utf8(body).unwrap();
    assert!(body.contains(LANDING_URL));
}

#[tokio::test]
async fn any_method_is_accepted() {
    let (status, body) = request(Method::POST, "/alpine-nodejs/1.2.3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_json(&body),
        json!({"image": "alpine-nodejs", "version": "1.2.3"})
    );

    let (status, _) = request(Method::DELETE, "/favicon.ico").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn repeated_requests_are_identical() {
    let first = get("/alpine-nodejs/1.2.3").await;
    let second = get("/alpine-nodejs/1.2.3").await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn query_string_is_ignored() {
    let (status, body) = get("/alpine-nodejs/1.2.3?foo=bar").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        as_json(&body),
        json!({"image": "alpine-nodejs", "version": "1.2.3"})
    );
}
