use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateTodoDto, Todo, TodoQueryParams, UpdateTodoDto};

pub(crate) const TODO_COLUMNS: &str = "id, user_id, title, description, due_date, class_subject_id, \
     lesson_id, priority, is_completed, created_at";

pub struct TodoService;

impl TodoService {
    #[instrument(skip(dto))]
    pub async fn create(db: &PgPool, user_id: Uuid, dto: CreateTodoDto) -> Result<Todo, AppError> {
        let todo = sqlx::query_as::<_, Todo>(&format!(
            "INSERT INTO todos
                 (user_id, title, description, due_date, class_subject_id, lesson_id, priority)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {TODO_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(dto.due_date)
        .bind(dto.class_subject_id)
        .bind(dto.lesson_id)
        .bind(&dto.priority)
        .fetch_one(db)
        .await?;

        Ok(todo)
    }

    #[instrument]
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        params: TodoQueryParams,
    ) -> Result<Vec<Todo>, AppError> {
        let todos = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos
             WHERE user_id = $1
               AND ($2::BOOLEAN IS NULL OR is_completed = $2)
               AND ($3::UUID IS NULL OR class_subject_id = $3)
             ORDER BY due_date NULLS LAST
             LIMIT 100"
        ))
        .bind(user_id)
        .bind(params.completed)
        .bind(params.class_subject_id)
        .fetch_all(db)
        .await?;

        Ok(todos)
    }

    #[instrument(skip(dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        todo_id: Uuid,
        dto: UpdateTodoDto,
    ) -> Result<Todo, AppError> {
        let existing = sqlx::query_as::<_, Todo>(&format!(
            "SELECT {TODO_COLUMNS} FROM todos WHERE id = $1 AND user_id = $2"
        ))
        .bind(todo_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Aufgabe nicht gefunden")))?;

        let todo = sqlx::query_as::<_, Todo>(&format!(
            "UPDATE todos
             SET title = $1, description = $2, due_date = $3, priority = $4, is_completed = $5
             WHERE id = $6
             RETURNING {TODO_COLUMNS}"
        ))
        .bind(dto.title.unwrap_or(existing.title))
        .bind(dto.description.unwrap_or(existing.description))
        .bind(dto.due_date.or(existing.due_date))
        .bind(dto.priority.unwrap_or(existing.priority))
        .bind(dto.is_completed.unwrap_or(existing.is_completed))
        .bind(todo_id)
        .fetch_one(db)
        .await?;

        Ok(todo)
    }

    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, todo_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1 AND user_id = $2")
            .bind(todo_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Aufgabe nicht gefunden"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn create_user(pool: &PgPool, email: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (email, password, name) VALUES ($1, 'hash', 'Maria Muster')
             RETURNING id",
        )
        .bind(email)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn dto(title: &str) -> CreateTodoDto {
        CreateTodoDto {
            title: title.to_string(),
            description: String::new(),
            due_date: None,
            class_subject_id: None,
            lesson_id: None,
            priority: "medium".to_string(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_filters_by_completion(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;

        let open = TodoService::create(&pool, user, dto("Klassenarbeit korrigieren"))
            .await
            .unwrap();
        TodoService::create(&pool, user, dto("Elternbrief schreiben"))
            .await
            .unwrap();

        TodoService::update(
            &pool,
            user,
            open.id,
            UpdateTodoDto {
                title: None,
                description: None,
                due_date: None,
                priority: None,
                is_completed: Some(true),
            },
        )
        .await
        .unwrap();

        let done = TodoService::list(
            &pool,
            user,
            TodoQueryParams {
                completed: Some(true),
                class_subject_id: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(done.len(), 1);
        assert_eq!(done[0].title, "Klassenarbeit korrigieren");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_keeps_omitted_fields(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let todo = TodoService::create(&pool, user, dto("Kopien machen")).await.unwrap();

        let updated = TodoService::update(
            &pool,
            user,
            todo.id,
            UpdateTodoDto {
                title: None,
                description: None,
                due_date: None,
                priority: Some("high".to_string()),
                is_completed: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.title, "Kopien machen");
        assert_eq!(updated.priority, "high");
        assert!(!updated.is_completed);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_foreign_todo_is_not_found(pool: PgPool) {
        let maria = create_user(&pool, "maria@schule.de").await;
        let tom = create_user(&pool, "tom@schule.de").await;
        let todo = TodoService::create(&pool, maria, dto("Kopien machen")).await.unwrap();

        let err = TodoService::update(
            &pool,
            tom,
            todo.id,
            UpdateTodoDto {
                title: Some("Gekapert".to_string()),
                description: None,
                due_date: None,
                priority: None,
                is_completed: None,
            },
        )
        .await
        .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
    }
}
