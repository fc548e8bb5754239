#![allow(dead_code)]

use axum::body::Body;
use axum::extract::RawQuery;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get as get_route;
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use plinth_cms::{CmsApi, CmsConfig};
use plinth_web::config::ServerConfig;
use plinth_web::router::build_app_router;
use plinth_web::state::AppState;
use plinth_web::views::Views;

/// Bearer token the stub CMS expects.
pub const TEST_TOKEN: &str = "test-token";

/// Build a test `ServerConfig` pointing at `cms_url`.
pub fn test_config(cms_url: &str) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        body_limit_bytes: 1024 * 1024,
        cms: CmsConfig {
            api_url: cms_url.to_string(),
            api_token: Some(TEST_TOKEN.to_string()),
            timeout_secs: 5,
        },
    }
}

/// Build the full application router with all middleware layers, reading
/// content from the CMS at `cms_url`.
///
/// This goes through the same [`build_app_router`] as `main.rs` so
/// integration tests exercise the production middleware stack.
pub fn build_test_app(cms_url: &str) -> Router {
    let config = test_config(cms_url);
    let cms = CmsApi::from_config(&config.cms).unwrap();
    let views = Views::new().unwrap();
    let state = AppState::new(config.clone(), cms, views);
    build_app_router(state, &config)
}

/// Start the stub CMS and build an app reading from it.
pub async fn app_with_stub_cms() -> Router {
    let cms_url = spawn_stub_cms().await;
    build_test_app(&cms_url)
}

// ---------------------------------------------------------------------------
// Stub CMS
// ---------------------------------------------------------------------------

fn photos(prefix: &str, n: usize) -> Value {
    (0..n)
        .map(|i| json!({ "id": i, "url": format!("/uploads/{prefix}-{i}.jpg"), "name": format!("{prefix}-{i}.jpg") }))
        .collect()
}

/// The single fixture project.
pub fn casa_lago() -> Value {
    json!({
        "id": 1,
        "documentId": "casa1",
        "title": "Casa Lago",
        "slug": "casa-lago",
        "authorName": "Studio Norte",
        "heroVideo": { "id": 100, "url": "/uploads/hero.mp4" },
        "inspiration": {
            "text": [{ "type": "paragraph", "children": [{ "text": "Lake light." }] }],
            "gallery": photos("insp", 2)
        },
        "colors": {
            "description": "Earth tones",
            "palette": [
                { "name": "Bone", "hex": "#f5f0e6" },
                { "name": "Ink", "hex": "#1a1a1a" }
            ]
        },
        "materials": { "gallery": photos("mat", 1) },
        "areas": {
            "list": [
                { "id": 10, "name": "Main Hall", "photos": photos("hall", 3) },
                { "id": 11, "name": "Lobby", "photos": photos("lobby", 1) }
            ]
        },
        "plans": {
            "cover": { "id": 200, "url": "/uploads/plans-cover.jpg" },
            "list": [
                { "id": 20, "picture": { "id": 21, "url": "/uploads/ground.png" }, "description": "Ground floor" },
                { "id": 22, "picture": { "id": 23, "url": "/uploads/upper.png" } }
            ]
        }
    })
}

/// Slug whose lookup makes the stub CMS fail with a 500.
pub const BROKEN_SLUG: &str = "broken";

fn slug_filter(query: &str) -> Option<String> {
    let start = query.find("filters[slug][$eq]=")? + "filters[slug][$eq]=".len();
    let raw = query[start..].split('&').next().unwrap_or_default();
    urlencoding::decode(raw).ok().map(|s| s.into_owned())
}

async fn stub_projects(headers: HeaderMap, RawQuery(query): RawQuery) -> Response {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TEST_TOKEN}"));
    if !authorized {
        return (StatusCode::UNAUTHORIZED, "missing token").into_response();
    }

    let query = query.unwrap_or_default();
    match slug_filter(&query).as_deref() {
        None => Json(json!({ "data": [casa_lago()] })).into_response(),
        Some("casa-lago") => Json(json!({ "data": [casa_lago()] })).into_response(),
        Some(BROKEN_SLUG) => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        Some(_) => Json(json!({ "data": [] })).into_response(),
    }
}

/// Serve the stub CMS on an ephemeral port and return its base URL.
pub async fn spawn_stub_cms() -> String {
    let router = Router::new().route("/api/projects", get_route(stub_projects));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body as UTF-8 text.
pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
