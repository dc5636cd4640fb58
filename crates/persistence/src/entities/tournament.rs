//! Tournament entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::Tournament;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the tournaments table.
#[derive(Debug, Clone, FromRow)]
pub struct TournamentEntity {
    pub id: Uuid,
    pub name: String,
    pub organizer_id: Uuid,
    pub number_of_teams: i32,
    pub team_budget: i64,
    pub captain_voting_enabled: bool,
    pub is_voting_live: bool,
    pub is_auction_live: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<TournamentEntity> for Tournament {
    fn from(entity: TournamentEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            organizer_id: entity.organizer_id,
            number_of_teams: entity.number_of_teams,
            team_budget: entity.team_budget,
            captain_voting_enabled: entity.captain_voting_enabled,
            is_voting_live: entity.is_voting_live,
            is_auction_live: entity.is_auction_live,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
