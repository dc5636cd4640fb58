//! Auction timer entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::AuctionTimer;
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the auction_timer table.
#[derive(Debug, Clone, FromRow)]
pub struct AuctionTimerEntity {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub bid_time: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Result of an upsert; `inserted` is false when an existing row was updated.
#[derive(Debug, Clone, FromRow)]
pub struct AuctionTimerUpsertEntity {
    #[sqlx(flatten)]
    pub timer: AuctionTimerEntity,
    pub inserted: bool,
}

impl From<AuctionTimerEntity> for AuctionTimer {
    fn from(entity: AuctionTimerEntity) -> Self {
        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            bid_time: entity.bid_time,
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
