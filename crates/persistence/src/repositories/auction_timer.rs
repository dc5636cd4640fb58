//! Bid timer repository.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{AuctionTimerEntity, AuctionTimerUpsertEntity};
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct AuctionTimerRepository {
    pool: PgPool,
}

impl AuctionTimerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets the timer of a tournament.
    pub async fn find_by_tournament(
        &self,
        tournament_id: Uuid,
    ) -> Result<Option<AuctionTimerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_auction_timer");
        let result = sqlx::query_as::<_, AuctionTimerEntity>(
            r#"
            SELECT id, tournament_id, bid_time, created_by, created_at, updated_at
            FROM auction_timer
            WHERE tournament_id = $1
            "#,
        )
        .bind(tournament_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Sets the bid time, creating the row on first use.
    ///
    /// `inserted` on the result tells a fresh row from an update.
    pub async fn upsert(
        &self,
        tournament_id: Uuid,
        bid_time: i32,
        created_by: Uuid,
    ) -> Result<AuctionTimerUpsertEntity, sqlx::Error> {
        let timer = QueryTimer::new("upsert_auction_timer");
        let result = sqlx::query_as::<_, AuctionTimerUpsertEntity>(
            r#"
            INSERT INTO auction_timer (tournament_id, bid_time, created_by)
            VALUES ($1, $2, $3)
            ON CONFLICT (tournament_id) DO UPDATE SET
                bid_time = EXCLUDED.bid_time
            RETURNING id, tournament_id, bid_time, created_by, created_at, updated_at,
                      (xmax = 0) AS inserted
            "#,
        )
        .bind(tournament_id)
        .bind(bid_time)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
