//! Captain directory, voting results and vote casting.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use domain::models::captain::{
    CaptainResponse, CastVoteResponse, CreateCaptainRequest, ListCaptainsResponse,
};
use domain::models::Captain;
use domain::services::{ensure_captain_registration_open, tally, VotingResults};
use persistence::repositories::{CaptainRepository, VoteOutcome};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{UserAuth, ValidJson};
use crate::middleware::metrics::record_vote_cast;
use crate::middleware::OrganizedTournament;
use crate::routes::{find_tournament, is_unique_violation};

/// Active captains, newest first.
///
/// GET /api/v1/tournaments/:tournament_id/captains
pub async fn list_captains(
    State(state): State<AppState>,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
) -> Result<Json<ListCaptainsResponse>, ApiError> {
    let repo = CaptainRepository::new(state.pool.clone());
    let captains: Vec<CaptainResponse> = repo
        .list_active(tournament.id)
        .await?
        .into_iter()
        .map(|e| Captain::from(e).into())
        .collect();

    Ok(Json(ListCaptainsResponse {
        total: captains.len(),
        captains,
    }))
}

/// Register a captain candidate. Captain voting must be enabled.
///
/// POST /api/v1/tournaments/:tournament_id/captains
pub async fn create_captain(
    State(state): State<AppState>,
    user: UserAuth,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
    ValidJson(request): ValidJson<CreateCaptainRequest>,
) -> Result<(StatusCode, Json<CaptainResponse>), ApiError> {
    ensure_captain_registration_open(&tournament)?;

    let repo = CaptainRepository::new(state.pool.clone());
    let captain: Captain = repo
        .create(
            tournament.id,
            request.name.trim(),
            request.mobile.trim(),
            request.photo_url.as_deref(),
            user.user_id,
        )
        .await?
        .into();

    info!(
        tournament_id = %tournament.id,
        captain_id = %captain.id,
        "Captain registered"
    );

    Ok((StatusCode::CREATED, Json(captain.into())))
}

/// Soft delete a captain.
///
/// DELETE /api/v1/tournaments/:tournament_id/captains/:captain_id
pub async fn retire_captain(
    State(state): State<AppState>,
    Path((tournament_id, captain_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let repo = CaptainRepository::new(state.pool.clone());
    repo.retire(tournament_id, captain_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Captain not found".to_string()))?;

    info!(tournament_id = %tournament_id, captain_id = %captain_id, "Captain retired");
    Ok(StatusCode::NO_CONTENT)
}

/// Public standings, most votes first.
///
/// GET /api/v1/tournaments/:tournament_id/captains/results
pub async fn voting_results(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<VotingResults>, ApiError> {
    find_tournament(&state, tournament_id).await?;

    let repo = CaptainRepository::new(state.pool.clone());
    let captains: Vec<Captain> = repo
        .list_active_by_votes(tournament_id)
        .await?
        .into_iter()
        .map(Captain::from)
        .collect();

    Ok(Json(tally(captains)))
}

/// One vote per caller and tournament, while voting is live.
///
/// POST /api/v1/tournaments/:tournament_id/captains/:captain_id/votes
pub async fn cast_vote(
    State(state): State<AppState>,
    user: UserAuth,
    Path((tournament_id, captain_id)): Path<(Uuid, Uuid)>,
) -> Result<(StatusCode, Json<CastVoteResponse>), ApiError> {
    let repo = CaptainRepository::new(state.pool.clone());
    let outcome = repo
        .cast_vote(tournament_id, captain_id, user.user_id)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict("You have already voted in this tournament".to_string())
            } else {
                e.into()
            }
        })?;

    let captain: Captain = match outcome {
        VoteOutcome::Recorded(entity) => entity.into(),
        VoteOutcome::TournamentNotFound => {
            return Err(ApiError::NotFound("Tournament not found".to_string()))
        }
        VoteOutcome::CaptainUnavailable => {
            return Err(ApiError::NotFound("Captain not found".to_string()))
        }
        VoteOutcome::Rejected(violation) => return Err(violation.into()),
    };

    record_vote_cast();
    info!(
        tournament_id = %tournament_id,
        captain_id = %captain_id,
        votes = captain.votes,
        "Captain vote recorded"
    );

    Ok((
        StatusCode::CREATED,
        Json(CastVoteResponse {
            tournament_id,
            captain_id,
            votes: captain.votes,
        }),
    ))
}
