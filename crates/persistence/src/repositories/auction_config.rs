//! Auction configuration repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{AuctionCategoryDb, AuctionConfigEntity};
use crate::metrics::QueryTimer;

/// Repository for auction category configuration rows.
#[derive(Clone)]
pub struct AuctionConfigRepository {
    pool: PgPool,
}

impl AuctionConfigRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new category configuration.
    pub async fn create(
        &self,
        tournament_id: Uuid,
        category: AuctionCategoryDb,
        max_players: i32,
        base_price: i64,
        created_by: Uuid,
    ) -> Result<AuctionConfigEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_auction_config");
        let result = sqlx::query_as::<_, AuctionConfigEntity>(
            r#"
            INSERT INTO auction_config (tournament_id, category, max_players, base_price, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(tournament_id)
        .bind(category)
        .bind(max_players)
        .bind(base_price)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a configuration by ID, whether active or retired.
    pub async fn find_by_id(
        &self,
        tournament_id: Uuid,
        config_id: Uuid,
    ) -> Result<Option<AuctionConfigEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_auction_config_by_id");
        let result = sqlx::query_as::<_, AuctionConfigEntity>(
            r#"
            SELECT * FROM auction_config WHERE id = $1 AND tournament_id = $2
            "#,
        )
        .bind(config_id)
        .bind(tournament_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List active configurations in creation order.
    pub async fn list_active(
        &self,
        tournament_id: Uuid,
    ) -> Result<Vec<AuctionConfigEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_auction_configs");
        let result = sqlx::query_as::<_, AuctionConfigEntity>(
            r#"
            SELECT * FROM auction_config
            WHERE tournament_id = $1 AND is_active = true
            ORDER BY created_at ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a configuration (partial update). Last write wins.
    pub async fn update(
        &self,
        tournament_id: Uuid,
        config_id: Uuid,
        category: Option<AuctionCategoryDb>,
        max_players: Option<i32>,
        base_price: Option<i64>,
    ) -> Result<Option<AuctionConfigEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_auction_config");
        let result = sqlx::query_as::<_, AuctionConfigEntity>(
            r#"
            UPDATE auction_config SET
                category = COALESCE($3, category),
                max_players = COALESCE($4, max_players),
                base_price = COALESCE($5, base_price)
            WHERE id = $1 AND tournament_id = $2
            RETURNING *
            "#,
        )
        .bind(config_id)
        .bind(tournament_id)
        .bind(category)
        .bind(max_players)
        .bind(base_price)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Retire a configuration. The row is kept and stays readable by ID.
    pub async fn retire(
        &self,
        tournament_id: Uuid,
        config_id: Uuid,
    ) -> Result<Option<AuctionConfigEntity>, sqlx::Error> {
        let timer = QueryTimer::new("retire_auction_config");
        let result = sqlx::query_as::<_, AuctionConfigEntity>(
            r#"
            UPDATE auction_config SET is_active = false
            WHERE id = $1 AND tournament_id = $2
            RETURNING *
            "#,
        )
        .bind(config_id)
        .bind(tournament_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
