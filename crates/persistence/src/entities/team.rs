//! Team entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Team;
use sqlx::FromRow;
use uuid::Uuid;

/// Team row joined with its captain's profile name.
#[derive(Debug, Clone, FromRow)]
pub struct TeamEntity {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub captain_id: Option<Uuid>,
    pub captain_name: Option<String>,
    pub budget_remaining: i64,
    pub logo_url: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TeamEntity> for Team {
    fn from(entity: TeamEntity) -> Self {
        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            name: entity.name,
            captain_id: entity.captain_id,
            captain_name: entity.captain_name,
            budget_remaining: entity.budget_remaining,
            logo_url: entity.logo_url,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
