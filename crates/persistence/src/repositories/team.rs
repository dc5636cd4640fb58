//! Team repository for database operations.

use domain::services::TeamCapacity;
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TeamEntity;
use crate::metrics::QueryTimer;

/// Outcome of a capacity-checked team insert.
#[derive(Debug)]
pub enum TeamCreation {
    Created(TeamEntity),
    TournamentNotFound,
    /// Every slot is taken; carries `number_of_teams`.
    CapacityReached(i32),
}

/// Repository for team-related database operations.
#[derive(Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a team if the tournament still has room.
    ///
    /// The tournament row is locked for the count and insert, so concurrent
    /// creates can't overshoot `number_of_teams`.
    pub async fn create(
        &self,
        tournament_id: Uuid,
        name: &str,
        captain_id: Option<Uuid>,
        budget: i64,
        logo_url: Option<&str>,
        created_by: Uuid,
    ) -> Result<TeamCreation, sqlx::Error> {
        let timer = QueryTimer::new("create_team");
        timer
            .observe(async {
                let mut tx = self.pool.begin().await?;

                let limit: Option<(i32,)> =
                    sqlx::query_as("SELECT number_of_teams FROM tournaments WHERE id = $1 FOR UPDATE")
                        .bind(tournament_id)
                        .fetch_optional(&mut *tx)
                        .await?;
                let Some((max,)) = limit else {
                    return Ok(TeamCreation::TournamentNotFound);
                };

                let (created,): (i64,) =
                    sqlx::query_as("SELECT COUNT(*) FROM teams WHERE tournament_id = $1")
                        .bind(tournament_id)
                        .fetch_one(&mut *tx)
                        .await?;
                if TeamCapacity::new(max, created).ensure_room().is_err() {
                    return Ok(TeamCreation::CapacityReached(max));
                }

                let team = sqlx::query_as::<_, TeamEntity>(
                    r#"
                    WITH inserted AS (
                        INSERT INTO teams (tournament_id, name, captain_id, budget_remaining, logo_url, created_by)
                        VALUES ($1, $2, $3, $4, $5, $6)
                        RETURNING *
                    )
                    SELECT i.id, i.tournament_id, i.name, i.captain_id, p.full_name AS captain_name,
                           i.budget_remaining, i.logo_url, i.created_by, i.created_at, i.updated_at
                    FROM inserted i
                    LEFT JOIN profiles p ON p.id = i.captain_id
                    "#,
                )
                .bind(tournament_id)
                .bind(name)
                .bind(captain_id)
                .bind(budget)
                .bind(logo_url)
                .bind(created_by)
                .fetch_one(&mut *tx)
                .await?;

                tx.commit().await?;
                Ok::<_, sqlx::Error>(TeamCreation::Created(team))
            })
            .await
    }

    /// List teams of a tournament in creation order.
    pub async fn list_by_tournament(
        &self,
        tournament_id: Uuid,
    ) -> Result<Vec<TeamEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_teams_by_tournament");
        let result = sqlx::query_as::<_, TeamEntity>(
            r#"
            SELECT t.id, t.tournament_id, t.name, t.captain_id, p.full_name AS captain_name,
                   t.budget_remaining, t.logo_url, t.created_by, t.created_at, t.updated_at
            FROM teams t
            LEFT JOIN profiles p ON p.id = t.captain_id
            WHERE t.tournament_id = $1
            ORDER BY t.created_at ASC
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}
