use super::*;

use std::net::SocketAddr;
use std::path::PathBuf;

fn assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

async fn spawn_site() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = site_routes(&assets_dir());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn healthz_returns_ok() {
    let addr = spawn_site().await;
    let resp = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn gallery_assets_are_served_from_fallback() {
    let addr = spawn_site().await;
    let resp = reqwest::get(format!("http://{addr}/gallery/qris.svg")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("<svg"));
}

#[tokio::test]
async fn missing_asset_is_not_found() {
    let addr = spawn_site().await;
    let resp = reqwest::get(format!("http://{addr}/gallery/does-not-exist.svg")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_page_gets_not_found_page() {
    let addr = spawn_site().await;
    let resp = reqwest::get(format!("http://{addr}/no-such-page")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body = resp.text().await.unwrap();
    assert!(body.contains("Halaman tidak ditemukan."));
}
