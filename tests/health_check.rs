use axum::http::StatusCode;

mod common;
use common::spawn_app;

#[tokio::test]
async fn health_check_works() {
    let app = spawn_app();

    let (status, body) = app.get("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn index_page_serves_logo() {
    let app = spawn_app();

    let (status, body) = app.get_text("/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("logo-container"));
    assert!(body.contains(r#"src="/assets/logo.svg""#));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let app = spawn_app();

    let (status, _) = app.get("/api/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
