//! HTTP-level integration tests for the student directory endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn create_student_returns_201_with_generated_id(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(
        app,
        "/api/students",
        serde_json::json!({"name": "Alice", "roll_no": "A1"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["roll_no"], "A1");
    assert!(json["created_at"].is_string());
}

#[sqlx::test]
async fn create_student_without_roll_no(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = post_json(app, "/api/students", serde_json::json!({"name": "Bob"})).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["roll_no"], serde_json::Value::Null);
}

#[sqlx::test]
async fn create_student_without_name_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    // The field is absent entirely, not just empty. Still a validation
    // failure, not an unprocessable-entity rejection.
    let response = post_json(app, "/api/students", serde_json::json!({})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test]
async fn create_student_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let response = post_json(app, "/api/students", serde_json::json!({"name": "   "})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing was written.
    let app = common::build_test_app(pool).await;
    let json = body_json(get(app, "/api/students").await).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn list_students_orders_newest_first(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    post_json(app, "/api/students", serde_json::json!({"name": "Earlier"})).await;

    let app = common::build_test_app(pool.clone()).await;
    post_json(app, "/api/students", serde_json::json!({"name": "Later"})).await;

    let app = common::build_test_app(pool).await;
    let response = get(app, "/api/students").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["name"], "Later");
    assert_eq!(arr[1]["name"], "Earlier");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn update_student_replaces_name_and_roll_no(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(
        post_json(
            app,
            "/api/students",
            serde_json::json!({"name": "Original", "roll_no": "R1"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let response = put_json(
        app,
        &format!("/api/students/{id}"),
        serde_json::json!({"name": "Renamed"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Renamed");
    // Full replacement: omitting roll_no clears it.
    assert_eq!(json["roll_no"], serde_json::Value::Null);
}

#[sqlx::test]
async fn update_unknown_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = put_json(
        app,
        "/api/students/999999",
        serde_json::json!({"name": "Ghost"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test]
async fn update_with_empty_name_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(
        post_json(app, "/api/students", serde_json::json!({"name": "Keep Me"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool).await;
    let response = put_json(
        app,
        &format!("/api/students/{id}"),
        serde_json::json!({"name": ""}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[sqlx::test]
async fn update_without_name_field_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(
        post_json(app, "/api/students", serde_json::json!({"name": "Stays"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let response = put_json(
        app,
        &format!("/api/students/{id}"),
        serde_json::json!({"roll_no": "Z9"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // The student is untouched.
    let app = common::build_test_app(pool).await;
    let students = body_json(get(app, "/api/students").await).await;
    assert_eq!(students[0]["name"], "Stays");
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn delete_student_returns_200(pool: PgPool) {
    let app = common::build_test_app(pool.clone()).await;
    let created = body_json(
        post_json(app, "/api/students", serde_json::json!({"name": "Delete Me"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone()).await;
    let response = delete(app, &format!("/api/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["deleted"], true);

    // Deleting again is a 404.
    let app = common::build_test_app(pool).await;
    let response = delete(app, &format!("/api/students/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test]
async fn delete_unknown_student_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool).await;
    let response = delete(app, "/api/students/424242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
