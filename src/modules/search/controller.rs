use axum::Json;
use axum::extract::{Query, State};
use tracing::instrument;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

use super::model::{SearchQueryParams, SearchResponse};
use super::service::SearchService;

/// Search my lessons, classes, templates and todos
#[utoipa::path(
    get,
    path = "/api/search",
    params(SearchQueryParams),
    responses(
        (status = 200, description = "Grouped search results", body = SearchResponse),
        (status = 400, description = "Query too short", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Search",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<SearchResponse>, AppError> {
    let response = SearchService::search(&state.db, auth_user.user_id()?, &params.q).await?;
    Ok(Json(response))
}
