mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_user, generate_unique_email};
use http_body_util::BodyExt;
use planed::config::cors::CorsConfig;
use planed::config::external::ExternalApiConfig;
use planed::config::invitation::InvitationConfig;
use planed::config::jwt::JwtConfig;
use planed::router::init_router;
use planed::state::AppState;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

async fn setup_test_app(pool: PgPool) -> axum::Router {
    dotenvy::dotenv().ok();
    let state = AppState {
        db: pool,
        jwt_config: JwtConfig::from_env(),
        invitation_config: InvitationConfig::from_env(),
        cors_config: CorsConfig::from_env(),
        external_config: ExternalApiConfig::from_env(),
    };
    init_router(state)
}

async fn get_auth_token(app: &axum::Router, email: &str, password: &str) -> String {
    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": password
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    body["access_token"].as_str().unwrap().to_string()
}

async fn post_json(
    app: &axum::Router,
    uri: &str,
    token: &str,
    payload: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(serde_json::to_string(&payload).unwrap()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, body)
}

async fn create_school_year(app: &axum::Router, token: &str) -> serde_json::Value {
    let (status, body) = post_json(
        app,
        "/api/school-years",
        token,
        json!({
            "name": "2025/2026",
            "semester": "1. Halbjahr",
            "start_date": "2025-08-18",
            "end_date": "2026-01-30"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

#[sqlx::test(migrations = "./migrations")]
async fn test_classes_require_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/classes")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_and_list_classes(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "sicher123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(&app, &email, "sicher123").await;
    let year = create_school_year(&app, &token).await;

    let (status, class) = post_json(
        &app,
        "/api/classes",
        &token,
        json!({
            "name": "8a",
            "subject": "Mathematik",
            "school_year_id": year["id"],
            "hours_per_week": 4,
            "schedule": {"monday": [1, 2], "thursday": [3, 4]}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(class["name"], "8a");
    assert_eq!(class["subject"], "Mathematik");
    assert_eq!(class["hours_per_week"], 4);

    let request = Request::builder()
        .method("GET")
        .uri(format!("/api/classes?school_year_id={}", year["id"].as_str().unwrap()).as_str())
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let classes = body.as_array().unwrap();
    assert_eq!(classes.len(), 1);
    assert_eq!(classes[0]["schedule"]["monday"], json!([1, 2]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_classes_are_owner_scoped(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email_a = generate_unique_email();
    let email_b = generate_unique_email();
    create_test_user(&mut tx, &email_a, "sicher123").await;
    create_test_user(&mut tx, &email_b, "sicher123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let token_a = get_auth_token(&app, &email_a, "sicher123").await;
    let token_b = get_auth_token(&app, &email_b, "sicher123").await;

    let year = create_school_year(&app, &token_a).await;
    let (status, _) = post_json(
        &app,
        "/api/classes",
        &token_a,
        json!({
            "name": "7b",
            "subject": "Deutsch",
            "school_year_id": year["id"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let request = Request::builder()
        .method("GET")
        .uri("/api/classes")
        .header("authorization", format!("Bearer {token_b}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body.as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_class(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "sicher123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;
    let token = get_auth_token(&app, &email, "sicher123").await;
    let year = create_school_year(&app, &token).await;

    let (status, class) = post_json(
        &app,
        "/api/classes",
        &token,
        json!({
            "name": "9c",
            "subject": "Mathematik",
            "school_year_id": year["id"]
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/classes/{}", class["id"].as_str().unwrap()).as_str())
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("GET")
        .uri("/api/classes")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body.as_array().unwrap().is_empty());
}
