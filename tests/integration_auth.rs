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

#[sqlx::test(migrations = "./migrations")]
async fn test_register_success(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;
    let email = generate_unique_email();

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": "sicher123",
                "name": "Anna Beispiel",
                "invitation_code": InvitationConfig::from_env().code
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(body.get("access_token").is_some());
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["email"], email);
    assert_eq!(body["user"]["name"], "Anna Beispiel");
    assert_eq!(body["user"]["bundesland"], "rheinland-pfalz");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_wrong_invitation_code(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": generate_unique_email(),
                "password": "sicher123",
                "name": "Anna Beispiel",
                "invitation_code": "DEFINITIV-FALSCH"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_register_duplicate_email(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "sicher123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/register")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": "sicher123",
                "name": "Anna Beispiel",
                "invitation_code": InvitationConfig::from_env().code
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_success(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    let password = "sicher123";
    create_test_user(&mut tx, &email, password).await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

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

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert!(body.get("access_token").is_some());
    assert_eq!(body["user"]["email"], email);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_invalid_credentials(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": "unbekannt@planed.test",
                "password": "falsch"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_login_invalid_email_format(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": "keine-email",
                "password": "sicher123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_requires_token(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_me_with_token(pool: PgPool) {
    let mut tx = pool.begin().await.unwrap();
    let email = generate_unique_email();
    create_test_user(&mut tx, &email, "sicher123").await;
    tx.commit().await.unwrap();

    let app = setup_test_app(pool.clone()).await;

    let login = Request::builder()
        .method("POST")
        .uri("/api/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": email,
                "password": "sicher123"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.clone().oneshot(login).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    let token = body["access_token"].as_str().unwrap().to_string();

    let request = Request::builder()
        .method("GET")
        .uri("/api/auth/me")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["email"], email);
    assert!(body.get("password").is_none());
}
