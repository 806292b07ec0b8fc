use chrono::NaiveDate;
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::history::service::HistoryService;
use crate::modules::notifications::service::NotificationService;
use crate::utils::errors::AppError;

use super::model::{
    BatchCreateLessonDto, CreateLessonDto, Lesson, LessonQueryParams, UpdateLessonDto,
};

pub(crate) const LESSON_COLUMNS: &str = "id, user_id, class_subject_id, date, period, topic, objective, \
     curriculum_reference, educational_standards, key_terms, notes, teaching_units, \
     is_cancelled, cancellation_reason, created_at, updated_at";

pub struct LessonService;

impl LessonService {
    #[instrument(skip(dto))]
    pub async fn create(
        db: &PgPool,
        user_id: Uuid,
        dto: CreateLessonDto,
    ) -> Result<Lesson, AppError> {
        let lesson = sqlx::query_as::<_, Lesson>(&format!(
            "INSERT INTO lessons
                 (user_id, class_subject_id, date, period, topic, objective,
                  curriculum_reference, educational_standards, key_terms, notes,
                  teaching_units, is_cancelled, cancellation_reason)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
             RETURNING {LESSON_COLUMNS}"
        ))
        .bind(user_id)
        .bind(dto.class_subject_id)
        .bind(dto.date)
        .bind(dto.period)
        .bind(&dto.topic)
        .bind(&dto.objective)
        .bind(&dto.curriculum_reference)
        .bind(&dto.educational_standards)
        .bind(&dto.key_terms)
        .bind(&dto.notes)
        .bind(dto.teaching_units)
        .bind(dto.is_cancelled)
        .bind(&dto.cancellation_reason)
        .fetch_one(db)
        .await?;

        let class_name = sqlx::query_scalar::<_, String>(
            "SELECT name FROM class_subjects WHERE id = $1",
        )
        .bind(dto.class_subject_id)
        .fetch_optional(db)
        .await?;

        if let Some(class_name) = class_name {
            let period_str = lesson
                .period
                .map(|p| format!(" ({p}. Std.)"))
                .unwrap_or_default();
            HistoryService::log(
                db,
                user_id,
                "create",
                "lesson",
                lesson.id,
                &format!(
                    "Stunde am {}{} für {} erstellt",
                    lesson.date, period_str, class_name
                ),
            )
            .await?;
        }

        Ok(lesson)
    }

    #[instrument(skip(dto))]
    pub async fn create_batch(
        db: &PgPool,
        user_id: Uuid,
        dto: BatchCreateLessonDto,
    ) -> Result<Vec<Lesson>, AppError> {
        let mut lessons = Vec::with_capacity(dto.dates.len());

        for date in &dto.dates {
            let lesson = sqlx::query_as::<_, Lesson>(&format!(
                "INSERT INTO lessons
                     (user_id, class_subject_id, date, topic, objective,
                      curriculum_reference, teaching_units)
                 VALUES ($1, $2, $3, $4, $5, $6, $7)
                 RETURNING {LESSON_COLUMNS}"
            ))
            .bind(user_id)
            .bind(dto.class_subject_id)
            .bind(date)
            .bind(&dto.topic)
            .bind(&dto.objective)
            .bind(&dto.curriculum_reference)
            .bind(dto.teaching_units)
            .fetch_one(db)
            .await?;

            lessons.push(lesson);
        }

        Ok(lessons)
    }

    #[instrument]
    pub async fn list(
        db: &PgPool,
        user_id: Uuid,
        params: LessonQueryParams,
    ) -> Result<Vec<Lesson>, AppError> {
        let lessons = sqlx::query_as::<_, Lesson>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons
             WHERE user_id = $1
               AND ($2::UUID IS NULL OR class_subject_id = $2)
               AND ($3::DATE IS NULL OR date >= $3)
               AND ($4::DATE IS NULL OR date <= $4)
             ORDER BY date
             LIMIT 1000"
        ))
        .bind(user_id)
        .bind(params.class_subject_id)
        .bind(params.start_date)
        .bind(params.end_date)
        .fetch_all(db)
        .await?;

        Ok(lessons)
    }

    /// Duplicates a lesson onto a new date, content included.
    #[instrument]
    pub async fn copy(
        db: &PgPool,
        user_id: Uuid,
        lesson_id: Uuid,
        new_date: NaiveDate,
    ) -> Result<Lesson, AppError> {
        let copied = sqlx::query_as::<_, Lesson>(&format!(
            "INSERT INTO lessons
                 (user_id, class_subject_id, date, period, topic, objective,
                  curriculum_reference, educational_standards, key_terms, notes,
                  teaching_units, is_cancelled, cancellation_reason)
             SELECT user_id, class_subject_id, $1, period, topic, objective,
                    curriculum_reference, educational_standards, key_terms, notes,
                    teaching_units, is_cancelled, cancellation_reason
             FROM lessons WHERE id = $2 AND user_id = $3
             RETURNING {LESSON_COLUMNS}"
        ))
        .bind(new_date)
        .bind(lesson_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Stunde nicht gefunden")))?;

        Ok(copied)
    }

    /// Partial update. Fans out one notification per share on the lesson's
    /// class and records a history row.
    #[instrument(skip(dto))]
    pub async fn update(
        db: &PgPool,
        user_id: Uuid,
        lesson_id: Uuid,
        dto: UpdateLessonDto,
    ) -> Result<Lesson, AppError> {
        let existing = sqlx::query_as::<_, Lesson>(&format!(
            "SELECT {LESSON_COLUMNS} FROM lessons WHERE id = $1 AND user_id = $2"
        ))
        .bind(lesson_id)
        .bind(user_id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Stunde nicht gefunden")))?;

        let updated = sqlx::query_as::<_, Lesson>(&format!(
            "UPDATE lessons
             SET topic = $1, objective = $2, curriculum_reference = $3,
                 educational_standards = $4, key_terms = $5, notes = $6,
                 teaching_units = $7, is_cancelled = $8, cancellation_reason = $9,
                 date = $10, period = $11, updated_at = NOW()
             WHERE id = $12
             RETURNING {LESSON_COLUMNS}"
        ))
        .bind(dto.topic.unwrap_or(existing.topic))
        .bind(dto.objective.unwrap_or(existing.objective))
        .bind(dto.curriculum_reference.unwrap_or(existing.curriculum_reference))
        .bind(dto.educational_standards.unwrap_or(existing.educational_standards))
        .bind(dto.key_terms.unwrap_or(existing.key_terms))
        .bind(dto.notes.unwrap_or(existing.notes))
        .bind(dto.teaching_units.unwrap_or(existing.teaching_units))
        .bind(dto.is_cancelled.unwrap_or(existing.is_cancelled))
        .bind(dto.cancellation_reason.unwrap_or(existing.cancellation_reason))
        .bind(dto.date.unwrap_or(existing.date))
        .bind(dto.period.or(existing.period))
        .bind(lesson_id)
        .fetch_one(db)
        .await?;

        Self::notify_shared_users(db, user_id, &updated).await?;

        HistoryService::log(
            db,
            user_id,
            "update",
            "lesson",
            lesson_id,
            &format!("Stunde am {} bearbeitet", updated.date),
        )
        .await?;

        Ok(updated)
    }

    async fn notify_shared_users(
        db: &PgPool,
        user_id: Uuid,
        lesson: &Lesson,
    ) -> Result<(), AppError> {
        #[derive(sqlx::FromRow)]
        struct ClassInfo {
            name: String,
            subject: String,
        }

        let Some(class_info) = sqlx::query_as::<_, ClassInfo>(
            "SELECT name, subject FROM class_subjects WHERE id = $1",
        )
        .bind(lesson.class_subject_id)
        .fetch_optional(db)
        .await?
        else {
            return Ok(());
        };

        let recipients = sqlx::query_scalar::<_, Uuid>(
            "SELECT shared_with_id FROM shares WHERE class_subject_id = $1",
        )
        .bind(lesson.class_subject_id)
        .fetch_all(db)
        .await?;

        if recipients.is_empty() {
            return Ok(());
        }

        let editor_name = sqlx::query_scalar::<_, String>("SELECT name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .unwrap_or_else(|| "Unbekannt".to_string());

        let class_display = format!("{} - {}", class_info.name, class_info.subject);

        for recipient in recipients {
            NotificationService::create(
                db,
                recipient,
                "share_edit",
                "Arbeitsplan aktualisiert",
                &format!(
                    "{} hat eine Stunde im Arbeitsplan '{}' geändert",
                    editor_name, class_display
                ),
                &class_display,
                &editor_name,
            )
            .await?;
        }

        Ok(())
    }

    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, lesson_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lessons WHERE id = $1 AND user_id = $2")
            .bind(lesson_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Stunde nicht gefunden")));
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

    async fn create_class(pool: &PgPool, user_id: Uuid) -> Uuid {
        let year = sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO school_years (user_id, name, semester, start_date, end_date)
             VALUES ($1, '2025/2026', '1. Halbjahr', '2025-08-18', '2026-01-30')
             RETURNING id",
        )
        .bind(user_id)
        .fetch_one(pool)
        .await
        .unwrap();

        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO class_subjects (user_id, school_year_id, name, subject)
             VALUES ($1, $2, '8a', 'Mathematik')
             RETURNING id",
        )
        .bind(user_id)
        .bind(year)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    fn dto(class_subject_id: Uuid, date: &str) -> CreateLessonDto {
        CreateLessonDto {
            class_subject_id,
            date: date.parse().unwrap(),
            period: Some(3),
            topic: "Bruchrechnung".to_string(),
            objective: "Brüche addieren".to_string(),
            curriculum_reference: String::new(),
            educational_standards: String::new(),
            key_terms: String::new(),
            notes: String::new(),
            teaching_units: 1,
            is_cancelled: false,
            cancellation_reason: String::new(),
        }
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_writes_history(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        let lesson = LessonService::create(&pool, user, dto(class, "2025-09-01"))
            .await
            .unwrap();

        assert_eq!(lesson.topic, "Bruchrechnung");

        let details = sqlx::query_scalar::<_, String>(
            "SELECT details FROM history WHERE entity_type = 'lesson' AND entity_id = $1",
        )
        .bind(lesson.id)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert!(details.contains("8a"));
        assert!(details.contains("(3. Std.)"));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_batch_create(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        let lessons = LessonService::create_batch(
            &pool,
            user,
            BatchCreateLessonDto {
                class_subject_id: class,
                dates: vec![
                    "2025-09-01".parse().unwrap(),
                    "2025-09-08".parse().unwrap(),
                    "2025-09-15".parse().unwrap(),
                ],
                topic: "Dezimalzahlen".to_string(),
                objective: String::new(),
                curriculum_reference: String::new(),
                teaching_units: 2,
            },
        )
        .await
        .unwrap();

        assert_eq!(lessons.len(), 3);
        assert!(lessons.iter().all(|l| l.teaching_units == 2));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_list_filters_by_date_range(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;

        for date in ["2025-09-01", "2025-10-01", "2025-11-01"] {
            LessonService::create(&pool, user, dto(class, date)).await.unwrap();
        }

        let lessons = LessonService::list(
            &pool,
            user,
            LessonQueryParams {
                class_subject_id: Some(class),
                start_date: Some("2025-09-15".parse().unwrap()),
                end_date: Some("2025-10-15".parse().unwrap()),
            },
        )
        .await
        .unwrap();

        assert_eq!(lessons.len(), 1);
        assert_eq!(lessons[0].date.to_string(), "2025-10-01");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_copy_to_new_date(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;
        let lesson = LessonService::create(&pool, user, dto(class, "2025-09-01"))
            .await
            .unwrap();

        let copied = LessonService::copy(&pool, user, lesson.id, "2025-09-08".parse().unwrap())
            .await
            .unwrap();

        assert_ne!(copied.id, lesson.id);
        assert_eq!(copied.topic, lesson.topic);
        assert_eq!(copied.date.to_string(), "2025-09-08");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_is_partial(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;
        let class = create_class(&pool, user).await;
        let lesson = LessonService::create(&pool, user, dto(class, "2025-09-01"))
            .await
            .unwrap();

        let updated = LessonService::update(
            &pool,
            user,
            lesson.id,
            UpdateLessonDto {
                topic: None,
                objective: None,
                curriculum_reference: None,
                educational_standards: None,
                key_terms: None,
                notes: Some("Arbeitsblatt mitbringen".to_string()),
                teaching_units: None,
                is_cancelled: Some(true),
                cancellation_reason: Some("Wandertag".to_string()),
                date: None,
                period: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(updated.topic, "Bruchrechnung");
        assert!(updated.is_cancelled);
        assert_eq!(updated.cancellation_reason, "Wandertag");
        assert_eq!(updated.notes, "Arbeitsblatt mitbringen");
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_notifies_shared_users(pool: PgPool) {
        let maria = create_user(&pool, "maria@schule.de").await;
        let tom = create_user(&pool, "tom@schule.de").await;
        let class = create_class(&pool, maria).await;
        let lesson = LessonService::create(&pool, maria, dto(class, "2025-09-01"))
            .await
            .unwrap();

        sqlx::query(
            "INSERT INTO shares
                 (class_subject_id, owner_id, owner_name, shared_with_id, shared_with_email)
             VALUES ($1, $2, 'Maria Muster', $3, 'tom@schule.de')",
        )
        .bind(class)
        .bind(maria)
        .bind(tom)
        .execute(&pool)
        .await
        .unwrap();

        LessonService::update(
            &pool,
            maria,
            lesson.id,
            UpdateLessonDto {
                topic: Some("Prozentrechnung".to_string()),
                objective: None,
                curriculum_reference: None,
                educational_standards: None,
                key_terms: None,
                notes: None,
                teaching_units: None,
                is_cancelled: None,
                cancellation_reason: None,
                date: None,
                period: None,
            },
        )
        .await
        .unwrap();

        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM notifications WHERE user_id = $1 AND type = 'share_edit'",
        )
        .bind(tom)
        .fetch_one(&pool)
        .await
        .unwrap();

        assert_eq!(count, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_unknown_lesson_is_not_found(pool: PgPool) {
        let user = create_user(&pool, "maria@schule.de").await;

        let err = LessonService::delete(&pool, user, Uuid::new_v4())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "Stunde nicht gefunden");
    }
}
