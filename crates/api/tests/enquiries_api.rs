//! HTTP-level integration tests for the `/api/enquiries` endpoints.

mod common;

use axum::http::StatusCode;
use common::{admin_token, body_json, build_test_app, get, get_auth, post_json};
use gcrental_db::repositories::EnquiryRepo;
use gcrental_db::DbPool;
use serde_json::json;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_enquiry(pool: DbPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        &app,
        "/api/enquiries",
        json!({
            "name": "Sam Carter",
            "phone": "555-0199",
            "rental_duration": "2 weeks",
            "vehicle_interest": "Toyota Yaris",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["message"], "Enquiry received successfully");

    assert_eq!(EnquiryRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_missing_name_or_phone_is_400(pool: DbPool) {
    let app = build_test_app(pool.clone());

    let response = post_json(&app, "/api/enquiries", json!({"phone": "555-0199"})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["issues"]
        .as_array()
        .unwrap()
        .iter()
        .any(|i| i["field"] == "name"));

    let response = post_json(&app, "/api/enquiries", json!({"name": "Sam", "phone": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    assert_eq!(EnquiryRepo::count(&pool).await.unwrap(), 0, "nothing persisted");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_listing_is_admin_only(pool: DbPool) {
    let app = build_test_app(pool.clone());
    post_json(
        &app,
        "/api/enquiries",
        json!({"name": "Sam Carter", "phone": "555-0199"}),
    )
    .await;

    let response = get(&app, "/api/enquiries").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let token = admin_token(&pool).await;
    let response = get_auth(&app, "/api/enquiries", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let rows = json.as_array().expect("listing should be a bare array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Sam Carter");
    assert_eq!(rows[0]["rental_duration"], serde_json::Value::Null);
}
