use axum::{
    Router,
    routing::{post, put},
};

use crate::state::AppState;

use super::controller::{create_todo, delete_todo, get_todos, update_todo};

pub fn init_todos_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_todo).get(get_todos))
        .route("/{todo_id}", put(update_todo).delete(delete_todo))
}
