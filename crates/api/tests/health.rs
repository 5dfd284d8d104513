//! Liveness endpoint tests.

mod common;

use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app, get};
use gcrental_db::DbPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_root_liveness_text(pool: DbPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let text = body_text(response).await;
    assert!(text.contains("running"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_db(pool: DbPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert!(json["version"].as_str().is_some());
}
