use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Append-only audit row. The actor's name is denormalized at write time so
/// entries survive account renames.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub action: String,
    pub entity_type: String,
    pub entity_id: Uuid,
    pub details: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct HistoryQueryParams {
    pub entity_type: Option<String>,
    pub entity_id: Option<Uuid>,
    pub limit: Option<i64>,
}
