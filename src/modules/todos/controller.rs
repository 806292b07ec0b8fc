use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::auth::AuthUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{CreateTodoDto, Todo, TodoQueryParams, UpdateTodoDto};
use super::service::TodoService;

/// Create a todo
#[utoipa::path(
    post,
    path = "/api/todos",
    request_body = CreateTodoDto,
    responses(
        (status = 201, description = "Todo created", body = Todo),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn create_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CreateTodoDto>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    let todo = TodoService::create(&state.db, auth_user.user_id()?, dto).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// List my todos, filtered by completion and class
#[utoipa::path(
    get,
    path = "/api/todos",
    params(TodoQueryParams),
    responses(
        (status = 200, description = "Todos ordered by due date", body = [Todo]),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_todos(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Query(params): Query<TodoQueryParams>,
) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = TodoService::list(&state.db, auth_user.user_id()?, params).await?;
    Ok(Json(todos))
}

/// Partially update a todo
#[utoipa::path(
    put,
    path = "/api/todos/{todo_id}",
    params(("todo_id" = Uuid, Path, description = "Todo id")),
    request_body = UpdateTodoDto,
    responses(
        (status = 200, description = "Updated todo", body = Todo),
        (status = 404, description = "Aufgabe nicht gefunden", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state, dto))]
pub async fn update_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(todo_id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTodoDto>,
) -> Result<Json<Todo>, AppError> {
    let todo = TodoService::update(&state.db, auth_user.user_id()?, todo_id, dto).await?;
    Ok(Json(todo))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/api/todos/{todo_id}",
    params(("todo_id" = Uuid, Path, description = "Todo id")),
    responses(
        (status = 204, description = "Todo deleted"),
        (status = 404, description = "Aufgabe nicht gefunden", body = ErrorResponse)
    ),
    tag = "Todos",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_todo(
    State(state): State<AppState>,
    auth_user: AuthUser,
    Path(todo_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    TodoService::delete(&state.db, auth_user.user_id()?, todo_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
