//! Captain repository for database operations.

use domain::models::Tournament;
use domain::services::ensure_voting_open;
use domain::RuleViolation;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{CaptainEntity, TournamentEntity};
use crate::metrics::QueryTimer;

/// Outcome of casting a vote.
#[derive(Debug)]
pub enum VoteOutcome {
    /// Vote stored; carries the captain with the new count.
    Recorded(CaptainEntity),
    TournamentNotFound,
    /// The captain is retired or belongs to another tournament.
    CaptainUnavailable,
    Rejected(RuleViolation),
}

/// Repository for captain candidates and their votes.
#[derive(Clone)]
pub struct CaptainRepository {
    pool: PgPool,
}

impl CaptainRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a captain candidate with zero votes.
    pub async fn create(
        &self,
        tournament_id: Uuid,
        name: &str,
        mobile: &str,
        photo_url: Option<&str>,
        created_by: Uuid,
    ) -> Result<CaptainEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_captain");
        let result = sqlx::query_as::<_, CaptainEntity>(
            r#"
            INSERT INTO tournament_captain (tournament_id, name, mobile, photo_url, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(tournament_id)
        .bind(name)
        .bind(mobile)
        .bind(photo_url)
        .bind(created_by)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active captains, newest first.
    pub async fn list_active(&self, tournament_id: Uuid) -> Result<Vec<CaptainEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_active_captains");
        let result = sqlx::query_as::<_, CaptainEntity>(
            r#"
            SELECT * FROM tournament_captain
            WHERE tournament_id = $1 AND is_active = true
            ORDER BY created_at DESC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Active captains, most votes first.
    pub async fn list_active_by_votes(
        &self,
        tournament_id: Uuid,
    ) -> Result<Vec<CaptainEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_captains_by_votes");
        let result = sqlx::query_as::<_, CaptainEntity>(
            r#"
            SELECT * FROM tournament_captain
            WHERE tournament_id = $1 AND is_active = true
            ORDER BY votes DESC, created_at ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Soft delete a captain.
    pub async fn retire(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
    ) -> Result<Option<CaptainEntity>, sqlx::Error> {
        let timer = QueryTimer::new("retire_captain");
        let result = sqlx::query_as::<_, CaptainEntity>(
            r#"
            UPDATE tournament_captain SET is_active = false
            WHERE id = $1 AND tournament_id = $2
            RETURNING *
            "#,
        )
        .bind(captain_id)
        .bind(tournament_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Record a vote and bump the captain's counter in one transaction.
    ///
    /// A second vote by the same voter in the tournament fails with a unique
    /// violation on `captain_votes`.
    pub async fn cast_vote(
        &self,
        tournament_id: Uuid,
        captain_id: Uuid,
        voter_id: Uuid,
    ) -> Result<VoteOutcome, sqlx::Error> {
        let timer = QueryTimer::new("cast_captain_vote");
        timer
            .observe(async {
                let mut tx = self.pool.begin().await?;

                let tournament = sqlx::query_as::<_, TournamentEntity>(
                    r#"
                    SELECT id, name, organizer_id, number_of_teams, team_budget,
                           captain_voting_enabled, is_voting_live, is_auction_live, created_at, updated_at
                    FROM tournaments WHERE id = $1
                    FOR SHARE
                    "#,
                )
                .bind(tournament_id)
                .fetch_optional(&mut *tx)
                .await?;
                let Some(tournament) = tournament else {
                    return Ok(VoteOutcome::TournamentNotFound);
                };
                if let Err(violation) = ensure_voting_open(&Tournament::from(tournament)) {
                    return Ok(VoteOutcome::Rejected(violation));
                }

                let captain = sqlx::query_as::<_, CaptainEntity>(
                    r#"
                    UPDATE tournament_captain SET votes = votes + 1
                    WHERE id = $1 AND tournament_id = $2 AND is_active = true
                    RETURNING *
                    "#,
                )
                .bind(captain_id)
                .bind(tournament_id)
                .fetch_optional(&mut *tx)
                .await?;
                let Some(captain) = captain else {
                    return Ok(VoteOutcome::CaptainUnavailable);
                };

                sqlx::query(
                    r#"
                    INSERT INTO captain_votes (tournament_id, captain_id, voter_id)
                    VALUES ($1, $2, $3)
                    "#,
                )
                .bind(tournament_id)
                .bind(captain_id)
                .bind(voter_id)
                .execute(&mut *tx)
                .await?;

                tx.commit().await?;
                Ok::<_, sqlx::Error>(VoteOutcome::Recorded(captain))
            })
            .await
    }
}
