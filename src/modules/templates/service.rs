use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::utils::errors::AppError;

use super::model::{CreateTemplateDto, Template};

pub(crate) const TEMPLATE_COLUMNS: &str = "id, user_id, name, subject, topic, objective, \
     curriculum_reference, educational_standards, key_terms, notes, teaching_units, \
     use_count, created_at";

pub struct TemplateService;

impl TemplateService {
    #[instrument(skip(dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateTemplateDto,
    ) -> Result<Template, AppError> {
        let template = sqlx::query_as::<_, Template>(&format!(
            "INSERT INTO templates
                 (user_id, name, subject, topic, objective, curriculum_reference,
                  educational_standards, key_terms, notes, teaching_units)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {TEMPLATE_COLUMNS}"
        ))
        .bind(user_id)
        .bind(&dto.name)
        .bind(&dto.subject)
        .bind(&dto.topic)
        .bind(&dto.objective)
        .bind(&dto.curriculum_reference)
        .bind(&dto.educational_standards)
        .bind(&dto.key_terms)
        .bind(&dto.notes)
        .bind(dto.teaching_units)
        .fetch_one(db)
        .await?;

        Ok(template)
    }

    #[instrument]
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        subject: Option<String>,
    ) -> Result<Vec<Template>, AppError> {
        let templates = sqlx::query_as::<_, Template>(&format!(
            "SELECT {TEMPLATE_COLUMNS} FROM templates
             WHERE user_id = $1 AND ($2::TEXT IS NULL OR subject = $2)
             ORDER BY use_count DESC
             LIMIT 100"
        ))
        .bind(user_id)
        .bind(subject)
        .fetch_all(db)
        .await?;

        Ok(templates)
    }

    /// Bumps the use counter and returns the template for application.
    #[instrument]
    pub async fn use_template(
        db: &PgPool,
        user_id: Uuid,
        template_id: Uuid,
    ) -> Result<Template, AppError> {
        sqlx::query_as::<_, Template>(&format!(
            "UPDATE templates SET use_count = use_count + 1
             WHERE id = $1 AND user_id = $2
             RETURNING {TEMPLATE_COLUMNS}"
        ))
        .bind(template_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Vorlage nicht gefunden")))
    }

    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, template_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM templates WHERE id = $1 AND user_id = $2")
            .bind(template_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Vorlage nicht gefunden"
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

    fn dto(name: &str, subject: &str) -> CreateTemplateDto {
        CreateTemplateDto {
            name: name.to_string(),
            subject: subject.to_string(),
            topic: "Bruchrechnung".to_string(),
            objective: String::new(),
            curriculum_reference: String::new(),
            educational_standards: String::new(),
            key_terms: String::new(),
            notes: String::new(),
            teaching_units: 1,
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_use_template_increments_counter(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let template = TemplateService::create(&pool, user, dto("Einstieg", "Mathematik"))
            .await
            .unwrap();

        assert_eq!(template.use_count, 0);

        let used = TemplateService::use_template(&pool, user, template.id)
            .await
            .unwrap();
        let used_again = TemplateService::use_template(&pool, user, template.id)
            .await
            .unwrap();

        assert_eq!(used.use_count, 1);
        assert_eq!(used_again.use_count, 2);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_orders_by_use_count(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        TemplateService::create(&pool, user, dto("Selten", "Mathematik"))
            .await
            .unwrap();
        let favorite = TemplateService::create(&pool, user, dto("Oft", "Mathematik"))
            .await
            .unwrap();

        TemplateService::use_template(&pool, user, favorite.id)
            .await
            .unwrap();

        let templates = TemplateService::list(&pool, user, Some("Mathematik".to_string()))
            .await
            .unwrap();

        assert_eq!(templates[0].name, "Oft");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_use_unknown_template_is_not_found(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;

        let err = TemplateService::use_template(&pool, user, Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "Vorlage nicht gefunden");
    }
}
