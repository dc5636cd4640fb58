//! Auction configuration entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{AuctionCategory, AuctionConfig, RecordStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for auction_category that maps to PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "auction_category")]
pub enum AuctionCategoryDb {
    #[sqlx(rename = "Diamond A")]
    DiamondA,
    #[sqlx(rename = "Diamond B")]
    DiamondB,
    #[sqlx(rename = "Platinum A")]
    PlatinumA,
    Platinum,
    Gold,
    Silver,
}

impl From<AuctionCategoryDb> for AuctionCategory {
    fn from(db: AuctionCategoryDb) -> Self {
        match db {
            AuctionCategoryDb::DiamondA => AuctionCategory::DiamondA,
            AuctionCategoryDb::DiamondB => AuctionCategory::DiamondB,
            AuctionCategoryDb::PlatinumA => AuctionCategory::PlatinumA,
            AuctionCategoryDb::Platinum => AuctionCategory::Platinum,
            AuctionCategoryDb::Gold => AuctionCategory::Gold,
            AuctionCategoryDb::Silver => AuctionCategory::Silver,
        }
    }
}

impl From<AuctionCategory> for AuctionCategoryDb {
    fn from(category: AuctionCategory) -> Self {
        match category {
            AuctionCategory::DiamondA => AuctionCategoryDb::DiamondA,
            AuctionCategory::DiamondB => AuctionCategoryDb::DiamondB,
            AuctionCategory::PlatinumA => AuctionCategoryDb::PlatinumA,
            AuctionCategory::Platinum => AuctionCategoryDb::Platinum,
            AuctionCategory::Gold => AuctionCategoryDb::Gold,
            AuctionCategory::Silver => AuctionCategoryDb::Silver,
        }
    }
}

/// Database row mapping for the auction_config table.
#[derive(Debug, Clone, FromRow)]
pub struct AuctionConfigEntity {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub category: AuctionCategoryDb,
    pub max_players: i32,
    pub base_price: i64,
    pub is_active: bool,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AuctionConfigEntity> for AuctionConfig {
    fn from(entity: AuctionConfigEntity) -> Self {
        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            category: entity.category.into(),
            max_players: entity.max_players,
            base_price: entity.base_price,
            status: RecordStatus::from_is_active(entity.is_active),
            created_by: entity.created_by,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}
