use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::ai::router::init_ai_router;
use crate::modules::auth::router::init_auth_router;
use crate::modules::classes::router::init_classes_router;
use crate::modules::comments::router::init_comments_router;
use crate::modules::curriculum::router::{init_deutsch_router, init_mathe_router};
use crate::modules::documents::router::init_documents_router;
use crate::modules::export::router::init_export_router;
use crate::modules::history::router::init_history_router;
use crate::modules::holidays::router::init_holidays_router;
use crate::modules::lessons::router::init_lessons_router;
use crate::modules::notifications::router::init_notifications_router;
use crate::modules::research::router::init_research_router;
use crate::modules::school_years::router::init_school_years_router;
use crate::modules::search::router::init_search_router;
use crate::modules::shares::router::init_shares_router;
use crate::modules::statistics::router::init_statistics_router;
use crate::modules::templates::router::init_templates_router;
use crate::modules::todos::router::init_todos_router;
use crate::modules::workplan::router::init_workplan_router;
use crate::state::AppState;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/auth", init_auth_router())
                .nest("/school-years", init_school_years_router())
                .nest("/classes", init_classes_router())
                .nest("/lessons", init_lessons_router())
                .nest("/workplan", init_workplan_router())
                .nest("/holidays", init_holidays_router())
                .nest("/todos", init_todos_router())
                .nest("/templates", init_templates_router())
                .nest("/comments", init_comments_router())
                .nest("/shares", init_shares_router())
                .nest("/notifications", init_notifications_router())
                .nest("/history", init_history_router())
                .nest("/documents", init_documents_router())
                .nest("/search", init_search_router())
                .nest("/statistics", init_statistics_router())
                .nest("/export", init_export_router())
                .nest("/mathe", init_mathe_router())
                .nest("/deutsch", init_deutsch_router())
                .nest("/research", init_research_router())
                .nest("/ai", init_ai_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
                .allow_credentials(true)
        })
        .layer(middleware::from_fn(logging_middleware))
}
