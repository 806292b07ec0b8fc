use sqlx::PgPool;
use sqlx::prelude::FromRow;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classes::service::ClassService;
use crate::modules::notifications::service::NotificationService;
use crate::utils::errors::AppError;

use super::model::{CreateShareDto, Share, SharedClassResponse};

const SHARE_COLUMNS: &str = "id, class_subject_id, owner_id, owner_name, shared_with_id, \
     shared_with_email, can_edit, created_at";

#[derive(FromRow)]
struct Recipient {
    id: Uuid,
    email: String,
}

pub struct ShareService;

impl ShareService {
    #[instrument(skip(dto))]
    pub async fn create(db: &PgPool, user_id: Uuid, dto: CreateShareDto) -> Result<Share, AppError> {
        let class = ClassService::get_owned(db, user_id, dto.class_subject_id).await?;

        let recipient =
            sqlx::query_as::<_, Recipient>("SELECT id, email FROM users WHERE email = $1")
                .bind(&dto.email)
                .fetch_optional(db)
                .await?
                .ok_or_else(|| {
                    AppError::not_found(anyhow::anyhow!(
                        "Benutzer mit dieser E-Mail nicht gefunden"
                    ))
                })?;

        if recipient.id == user_id {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "Sie können nicht mit sich selbst teilen"
            )));
        }

        let owner_name = sqlx::query_scalar::<_, String>("SELECT name FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .unwrap_or_else(|| "Unbekannt".to_string());

        let share = sqlx::query_as::<_, Share>(&format!(
            "INSERT INTO shares
                 (class_subject_id, owner_id, owner_name, shared_with_id, shared_with_email, can_edit)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {SHARE_COLUMNS}"
        ))
        .bind(dto.class_subject_id)
        .bind(user_id)
        .bind(&owner_name)
        .bind(recipient.id)
        .bind(&recipient.email)
        .bind(dto.can_edit)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                AppError::bad_request(anyhow::anyhow!("Bereits mit diesem Benutzer geteilt"))
            } else {
                AppError::internal(e)
            }
        })?;

        let class_display = format!("{} - {}", class.name, class.subject);
        let mode = if dto.can_edit { "Bearbeitung" } else { "Nur Ansicht" };
        NotificationService::create(
            db,
            recipient.id,
            "share_new",
            "Neuer Arbeitsplan geteilt",
            &format!(
                "{owner_name} hat den Arbeitsplan '{class_display}' mit Ihnen geteilt ({mode})"
            ),
            &class_display,
            &owner_name,
        )
        .await?;

        Ok(share)
    }

    /// Shares I have granted to others.
    #[instrument]
    pub async fn list_my_shares(db: &PgPool, user_id: Uuid) -> Result<Vec<Share>, AppError> {
        let shares = sqlx::query_as::<_, Share>(&format!(
            "SELECT {SHARE_COLUMNS} FROM shares WHERE owner_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(shares)
    }

    /// Classes other teachers have shared with me.
    #[instrument]
    pub async fn list_shared_with_me(
        db: &PgPool,
        user_id: Uuid,
    ) -> Result<Vec<SharedClassResponse>, AppError> {
        let classes = sqlx::query_as::<_, SharedClassResponse>(
            "SELECT cs.id, s.id AS share_id, cs.name, cs.subject, cs.color,
                    cs.hours_per_week, cs.school_year_id, cs.schedule,
                    s.owner_name, u.email AS owner_email, s.can_edit
             FROM shares s
             JOIN class_subjects cs ON cs.id = s.class_subject_id
             JOIN users u ON u.id = s.owner_id
             WHERE s.shared_with_id = $1
             ORDER BY s.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument]
    pub async fn list_for_class(
        db: &PgPool,
        user_id: Uuid,
        class_subject_id: Uuid,
    ) -> Result<Vec<Share>, AppError> {
        ClassService::get_owned(db, user_id, class_subject_id).await?;

        let shares = sqlx::query_as::<_, Share>(&format!(
            "SELECT {SHARE_COLUMNS} FROM shares
             WHERE class_subject_id = $1
             ORDER BY created_at DESC"
        ))
        .bind(class_subject_id)
        .fetch_all(db)
        .await?;

        Ok(shares)
    }

    /// Renders a PNG QR code pointing at the shared plan in the frontend.
    /// Visible to both sides of the share.
    #[instrument(skip(frontend_url))]
    pub async fn qrcode_png(
        db: &PgPool,
        user_id: Uuid,
        share_id: Uuid,
        frontend_url: &str,
    ) -> Result<Vec<u8>, AppError> {
        let exists = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM shares
             WHERE id = $1 AND (owner_id = $2 OR shared_with_id = $2)",
        )
        .bind(share_id)
        .bind(user_id)
        .fetch_one(db)
        .await?;

        if exists == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Freigabe nicht gefunden"
            )));
        }

        let link = format!("{}/shared/{share_id}", frontend_url.trim_end_matches('/'));
        let code = qrcode::QrCode::new(link.as_bytes())
            .map_err(|e| AppError::internal(anyhow::anyhow!("QR-Code Fehler: {e}")))?;
        let pixels = code
            .render::<image::Luma<u8>>()
            .min_dimensions(300, 300)
            .build();

        let mut png = Vec::new();
        image::DynamicImage::ImageLuma8(pixels)
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .map_err(|e| AppError::internal(anyhow::anyhow!("PNG-Fehler: {e}")))?;

        Ok(png)
    }

    #[instrument]
    pub async fn delete(db: &PgPool, user_id: Uuid, share_id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM shares WHERE id = $1 AND owner_id = $2")
            .bind(share_id)
            .bind(user_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Freigabe nicht gefunden"
            )));
        }

        Ok(())
    }
}
