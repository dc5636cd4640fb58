//! Tournament repository for database operations.

use domain::services::{ensure_limit_fits, LifecycleFlag, TeamCapacity};
use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::TournamentEntity;
use crate::metrics::QueryTimer;

const TOURNAMENT_COLUMNS: &str = "id, name, organizer_id, number_of_teams, team_budget, \
     captain_voting_enabled, is_voting_live, is_auction_live, created_at, updated_at";

/// Outcome of a tournament update that may lower the team limit.
#[derive(Debug)]
pub enum TournamentUpdate {
    Updated(TournamentEntity),
    NotFound,
    /// The new limit is below the number of existing teams.
    BelowTeamCount(i64),
}

/// Repository for tournament-related database operations.
#[derive(Clone)]
pub struct TournamentRepository {
    pool: PgPool,
}

impl TournamentRepository {
    /// Creates a new TournamentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new tournament with every lifecycle flag off.
    pub async fn create(
        &self,
        name: &str,
        organizer_id: Uuid,
        number_of_teams: i32,
        team_budget: i64,
    ) -> Result<TournamentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_tournament");
        let result = sqlx::query_as::<_, TournamentEntity>(&format!(
            r#"
            INSERT INTO tournaments (name, organizer_id, number_of_teams, team_budget)
            VALUES ($1, $2, $3, $4)
            RETURNING {TOURNAMENT_COLUMNS}
            "#
        ))
        .bind(name)
        .bind(organizer_id)
        .bind(number_of_teams)
        .bind(team_budget)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find a tournament by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TournamentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_tournament_by_id");
        let result = sqlx::query_as::<_, TournamentEntity>(&format!(
            "SELECT {TOURNAMENT_COLUMNS} FROM tournaments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List tournaments organized by a user, newest first.
    pub async fn list_by_organizer(
        &self,
        organizer_id: Uuid,
    ) -> Result<Vec<TournamentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_tournaments_by_organizer");
        let result = sqlx::query_as::<_, TournamentEntity>(&format!(
            r#"
            SELECT {TOURNAMENT_COLUMNS} FROM tournaments
            WHERE organizer_id = $1
            ORDER BY created_at DESC
            "#
        ))
        .bind(organizer_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update a tournament (partial update).
    ///
    /// The row is locked while teams are counted, so the team limit can't
    /// drop below a team created concurrently.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        number_of_teams: Option<i32>,
        team_budget: Option<i64>,
    ) -> Result<TournamentUpdate, sqlx::Error> {
        let timer = QueryTimer::new("update_tournament");
        timer
            .observe(async {
                let mut tx = self.pool.begin().await?;

                let locked: Option<(Uuid,)> =
                    sqlx::query_as("SELECT id FROM tournaments WHERE id = $1 FOR UPDATE")
                        .bind(id)
                        .fetch_optional(&mut *tx)
                        .await?;
                if locked.is_none() {
                    return Ok(TournamentUpdate::NotFound);
                }

                if let Some(new_max) = number_of_teams {
                    let (created,): (i64,) =
                        sqlx::query_as("SELECT COUNT(*) FROM teams WHERE tournament_id = $1")
                            .bind(id)
                            .fetch_one(&mut *tx)
                            .await?;
                    if ensure_limit_fits(new_max, created).is_err() {
                        return Ok(TournamentUpdate::BelowTeamCount(created));
                    }
                }

                let updated = sqlx::query_as::<_, TournamentEntity>(&format!(
                    r#"
                    UPDATE tournaments SET
                        name = COALESCE($2, name),
                        number_of_teams = COALESCE($3, number_of_teams),
                        team_budget = COALESCE($4, team_budget)
                    WHERE id = $1
                    RETURNING {TOURNAMENT_COLUMNS}
                    "#
                ))
                .bind(id)
                .bind(name)
                .bind(number_of_teams)
                .bind(team_budget)
                .fetch_one(&mut *tx)
                .await?;

                tx.commit().await?;
                Ok::<_, sqlx::Error>(TournamentUpdate::Updated(updated))
            })
            .await
    }

    /// Delete a tournament and, through cascades, everything it owns.
    /// Returns the number of rows deleted (0 or 1).
    pub async fn delete(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_tournament");
        let result = sqlx::query("DELETE FROM tournaments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await;
        timer.record();
        Ok(result?.rows_affected())
    }

    /// Flip a lifecycle flag in a single conditional update.
    ///
    /// Returns `None` when the tournament does not exist, is not organized by
    /// `organizer_id`, or voting would go live while captain voting is off.
    pub async fn toggle_flag(
        &self,
        id: Uuid,
        organizer_id: Uuid,
        flag: LifecycleFlag,
    ) -> Result<Option<TournamentEntity>, sqlx::Error> {
        let timer = QueryTimer::new(format!("toggle_tournament_{}", flag));
        let column = flag.column();
        let guard = match flag {
            LifecycleFlag::VotingLive => " AND (is_voting_live OR captain_voting_enabled)",
            LifecycleFlag::CaptainVoting | LifecycleFlag::AuctionLive => "",
        };
        let result = sqlx::query_as::<_, TournamentEntity>(&format!(
            r#"
            UPDATE tournaments SET {column} = NOT {column}
            WHERE id = $1 AND organizer_id = $2{guard}
            RETURNING {TOURNAMENT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(organizer_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Current team capacity of a tournament.
    pub async fn team_capacity(&self, id: Uuid) -> Result<Option<TeamCapacity>, sqlx::Error> {
        let timer = QueryTimer::new("tournament_team_capacity");
        let row: Result<Option<(i32, i64)>, sqlx::Error> = sqlx::query_as(
            r#"
            SELECT t.number_of_teams,
                   (SELECT COUNT(*) FROM teams WHERE tournament_id = t.id)
            FROM tournaments t
            WHERE t.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        Ok(row?.map(|(max, created)| TeamCapacity::new(max, created)))
    }
}
