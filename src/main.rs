use dotenvy::dotenv;

use planed::logging::init_tracing;
use planed::router::init_router;
use planed::state::init_app_state;

#[tokio::main]
async fn main() {
    dotenv().ok();
    init_tracing();

    let state = init_app_state().await;
    let app = init_router(state);

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("PlanEd API listening on http://{bind_addr}");
    tracing::info!("Swagger UI available at http://{bind_addr}/swagger-ui");

    axum::serve(listener, app).await.expect("server error");
}
