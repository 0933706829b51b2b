//! Integration tests for the directory-listing API and embedded frontend.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use tempfile::TempDir;
use tower::ServiceExt;

use dirscope_web::config::{FilesystemConfig, ServerConfig, TlsConfig};
use dirscope_web::state::AppState;

fn test_app(root: &Path) -> Router {
    let state = AppState {
        config: Arc::new(ServerConfig {
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            filesystem: FilesystemConfig {
                root: root.canonicalize().unwrap(),
            },
            tls: TlsConfig::default(),
        }),
    };
    dirscope_web::app(state, false)
}

async fn get(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

fn names(listing: &serde_json::Value) -> Vec<String> {
    listing["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn lists_root_with_directories_first() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("beta.txt"), "b").unwrap();
    fs::write(tmp.path().join("alpha.txt"), "a").unwrap();
    fs::create_dir(tmp.path().join("zdir")).unwrap();

    let (status, listing) = get(test_app(tmp.path()), "/api/files").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&listing), vec!["zdir", "alpha.txt", "beta.txt"]);
    assert!(listing["parent"].is_null());
}

#[tokio::test]
async fn listing_a_subdirectory_reports_its_parent() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    let sub = root.join("docs");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("readme.md"), "hi").unwrap();

    let uri = format!("/api/files?path={}", sub.display());
    let (status, listing) = get(test_app(tmp.path()), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(listing["current_path"], sub.to_string_lossy().to_string());
    assert_eq!(listing["parent"], root.to_string_lossy().to_string());
    assert_eq!(names(&listing), vec!["readme.md"]);
}

#[tokio::test]
async fn hidden_entries_are_omitted_by_default() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".secret"), "s").unwrap();
    fs::write(tmp.path().join("visible.txt"), "v").unwrap();

    let (_, listing) = get(test_app(tmp.path()), "/api/files").await;
    assert_eq!(names(&listing), vec!["visible.txt"]);
}

#[tokio::test]
async fn hidden_query_includes_dot_entries() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".secret"), "s").unwrap();
    fs::write(tmp.path().join("visible.txt"), "v").unwrap();

    let (_, listing) = get(test_app(tmp.path()), "/api/files?hidden=true").await;
    assert_eq!(names(&listing), vec![".secret", "visible.txt"]);
}

#[tokio::test]
async fn sort_and_order_params_are_honoured() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("small.bin"), [0u8; 5]).unwrap();
    fs::write(tmp.path().join("large.bin"), [0u8; 500]).unwrap();

    let (_, listing) = get(test_app(tmp.path()), "/api/files?sort=size&order=desc").await;
    assert_eq!(names(&listing), vec!["large.bin", "small.bin"]);
}

#[tokio::test]
async fn entry_metadata_is_reported() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("data.bin"), [0u8; 64]).unwrap();
    fs::create_dir(tmp.path().join("sub")).unwrap();

    let (_, listing) = get(test_app(tmp.path()), "/api/files").await;
    let entries = listing["entries"].as_array().unwrap();

    let dir = &entries[0];
    assert_eq!(dir["name"], "sub");
    assert_eq!(dir["is_dir"], true);
    assert!(dir["size"].is_null());

    let file = &entries[1];
    assert_eq!(file["name"], "data.bin");
    assert_eq!(file["is_dir"], false);
    assert_eq!(file["size"], 64);
    assert!(file["modified"].as_u64().is_some());
}

#[tokio::test]
async fn path_outside_root_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let (status, body) = get(test_app(tmp.path()), "/api/files?path=/").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn dotdot_escape_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    let uri = format!("/api/files?path={}/..", root.display());
    let (status, _) = get(test_app(tmp.path()), &uri).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_path_is_not_found() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();

    let uri = format!("/api/files?path={}/ghost", root.display());
    let (status, body) = get(test_app(tmp.path()), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn file_path_is_not_a_directory() {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().canonicalize().unwrap();
    fs::write(root.join("plain.txt"), "x").unwrap();

    let uri = format!("/api/files?path={}/plain.txt", root.display());
    let (status, body) = get(test_app(tmp.path()), &uri).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("not a directory"));
}

#[tokio::test]
async fn frontend_is_served_at_root() {
    let tmp = TempDir::new().unwrap();
    let response = test_app(tmp.path())
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));

    // security headers apply to static responses too
    assert_eq!(
        response.headers().get("x-content-type-options").unwrap(),
        "nosniff"
    );
}

#[tokio::test]
async fn stylesheet_has_css_content_type() {
    let tmp = TempDir::new().unwrap();
    let response = test_app(tmp.path())
        .oneshot(
            Request::builder()
                .uri("/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/css"));
}
