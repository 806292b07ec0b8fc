use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use planed::config::cors::CorsConfig;
use planed::config::external::ExternalApiConfig;
use planed::config::invitation::InvitationConfig;
use planed::config::jwt::JwtConfig;
use planed::router::init_router;
use planed::state::AppState;
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

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, body)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_mathe_struktur_is_public(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let (status, body) = get_json(&app, "/api/mathe/struktur").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fach"], "Mathematik");
    assert_eq!(body["bundesland"], "Rheinland-Pfalz");
    assert!(body["klassenstufen"].is_object());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_deutsch_struktur_is_public(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let (status, body) = get_json(&app, "/api/deutsch/struktur").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["fach"], "Deutsch");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_unknown_thema_returns_404(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let (status, _) = get_json(&app, "/api/mathe/thema?thema_id=gibt-es-nicht").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_bundeslaender_are_public(pool: PgPool) {
    let app = setup_test_app(pool.clone()).await;

    let (status, body) = get_json(&app, "/api/holidays/bundeslaender").await;

    assert_eq!(status, StatusCode::OK);
    let laender = body.as_array().unwrap();
    assert!(laender.iter().any(|b| b["id"] == "rheinland-pfalz"));
}
