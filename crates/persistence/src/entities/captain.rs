//! Captain entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{Captain, RecordStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the tournament_captain table.
#[derive(Debug, Clone, FromRow)]
pub struct CaptainEntity {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub mobile: String,
    pub photo_url: Option<String>,
    pub votes: i32,
    pub is_active: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CaptainEntity> for Captain {
    fn from(entity: CaptainEntity) -> Self {
        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            name: entity.name,
            mobile: entity.mobile,
            photo_url: entity.photo_url,
            votes: entity.votes,
            status: RecordStatus::from_is_active(entity.is_active),
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
