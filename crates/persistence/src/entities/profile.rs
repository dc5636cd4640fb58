//! Profile entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Profile;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the profiles table.
#[derive(Debug, Clone, FromRow)]
pub struct ProfileEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub full_name: String,
    pub mobile: Option<String>,
    pub is_player_registered: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileEntity> for Profile {
    fn from(entity: ProfileEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            full_name: entity.full_name,
            mobile: entity.mobile,
            is_player_registered: entity.is_player_registered,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
