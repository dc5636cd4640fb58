//! HTTP route handlers.

pub mod applications;
pub mod auction_configs;
pub mod auction_timer;
pub mod captains;
pub mod health;
pub mod profiles;
pub mod teams;
pub mod tournaments;

use domain::models::Tournament;
use persistence::repositories::TournamentRepository;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

/// Loads a tournament for public routes, 404 when it does not exist.
pub(crate) async fn find_tournament(
    state: &AppState,
    tournament_id: Uuid,
) -> Result<Tournament, ApiError> {
    TournamentRepository::new(state.pool.clone())
        .find_by_id(tournament_id)
        .await?
        .map(Tournament::from)
        .ok_or_else(|| ApiError::NotFound("Tournament not found".to_string()))
}

/// Whether the error is a unique constraint violation (SQLSTATE 23505).
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some("23505"))
}
