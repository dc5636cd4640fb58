//! Organizer authorization for tournament-scoped routes.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::models::Tournament;
use persistence::repositories::TournamentRepository;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::user_auth::UserAuth;

/// The tournament of the current path, already checked to belong to the
/// caller. Handlers read it from the extensions instead of loading it again.
#[derive(Debug, Clone)]
pub struct OrganizedTournament(pub Tournament);

/// Requires the caller to organize the tournament in the path.
///
/// Runs after `require_user_auth`. Missing tournament is 404, someone
/// else's tournament is 403.
pub async fn require_organizer(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    match authorize(&state, req).await {
        Ok(req) => next.run(req).await,
        Err(e) => e.into_response(),
    }
}

async fn authorize(state: &AppState, mut req: Request<Body>) -> Result<Request<Body>, ApiError> {
    let user_id = req
        .extensions()
        .get::<UserAuth>()
        .map(|auth| auth.user_id)
        .ok_or_else(|| {
            tracing::warn!("Organizer check ran without an authenticated caller");
            ApiError::Unauthorized("Authentication required".to_string())
        })?;

    let tournament_id = extract_tournament_id_from_path(req.uri().path())
        .ok_or_else(|| ApiError::NotFound("Tournament not found".to_string()))?;

    let repo = TournamentRepository::new(state.pool.clone());
    let tournament: Tournament = repo
        .find_by_id(tournament_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tournament not found".to_string()))?
        .into();

    if !tournament.is_organized_by(user_id) {
        tracing::info!(
            tournament_id = %tournament_id,
            user_id = %user_id,
            "Rejected non-organizer"
        );
        return Err(ApiError::Forbidden(
            "Only the tournament organizer can do this".to_string(),
        ));
    }

    req.extensions_mut().insert(OrganizedTournament(tournament));
    Ok(req)
}

/// Expects paths like /api/v1/tournaments/:tournament_id/...
fn extract_tournament_id_from_path(path: &str) -> Option<Uuid> {
    let mut segments = path.split('/');
    segments.find(|s| *s == "tournaments")?;
    segments.next().and_then(|id| Uuid::parse_str(id).ok())
}
