use axum::{
    extract::{MatchedPath, Request},
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // axum logs rejections from built-in extractors with the
            // `axum::rejection` target at TRACE level.
            format!(
                "{}=debug,tower_http=debug,axum::rejection=trace",
                env!("CARGO_CRATE_NAME")
            )
            .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let matched_path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let request_id = uuid::Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        method = %method,
        path = %matched_path,
        "Incoming request"
    );

    let response = next.run(req).await;
    let latency = start.elapsed();
    let status = response.status();

    match status.as_u16() {
        400..=499 => {
            warn!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Client error"
            );
        }
        500..=599 => {
            error!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Server error"
            );
        }
        _ => {
            info!(
                request_id = %request_id,
                method = %method,
                path = %matched_path,
                status = %status.as_u16(),
                latency_ms = %latency.as_millis(),
                "Request completed"
            );
        }
    }

    response
}
