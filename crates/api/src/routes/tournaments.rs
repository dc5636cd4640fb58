//! Tournament endpoint handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use domain::errors::RuleViolation;
use domain::models::tournament::{
    CreateTournamentRequest, ListTournamentsResponse, ToggleFlagResponse, TournamentResponse,
    UpdateTournamentRequest,
};
use domain::models::Tournament;
use domain::services::LifecycleFlag;
use persistence::repositories::{TournamentRepository, TournamentUpdate};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{UserAuth, ValidJson};
use crate::middleware::metrics::record_tournament_created;
use crate::middleware::OrganizedTournament;

/// Create a tournament organized by the caller.
///
/// POST /api/v1/tournaments
pub async fn create_tournament(
    State(state): State<AppState>,
    user: UserAuth,
    ValidJson(request): ValidJson<CreateTournamentRequest>,
) -> Result<(StatusCode, Json<TournamentResponse>), ApiError> {
    ensure_team_limit(&state, request.number_of_teams)?;

    let repo = TournamentRepository::new(state.pool.clone());
    let tournament: Tournament = repo
        .create(
            request.name.trim(),
            user.user_id,
            request.number_of_teams,
            request.team_budget,
        )
        .await?
        .into();

    record_tournament_created();
    info!(
        tournament_id = %tournament.id,
        organizer_id = %user.user_id,
        number_of_teams = tournament.number_of_teams,
        "Tournament created"
    );

    Ok((StatusCode::CREATED, Json(tournament.into())))
}

/// GET /api/v1/tournaments/:tournament_id
pub async fn get_tournament(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<TournamentResponse>, ApiError> {
    let repo = TournamentRepository::new(state.pool.clone());
    let tournament: Tournament = repo
        .find_by_id(tournament_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tournament not found".to_string()))?
        .into();

    Ok(Json(tournament.into()))
}

/// Tournaments organized by the caller, newest first.
///
/// GET /api/v1/me/tournaments
pub async fn list_my_tournaments(
    State(state): State<AppState>,
    user: UserAuth,
) -> Result<Json<ListTournamentsResponse>, ApiError> {
    let repo = TournamentRepository::new(state.pool.clone());
    let tournaments: Vec<TournamentResponse> = repo
        .list_by_organizer(user.user_id)
        .await?
        .into_iter()
        .map(|e| Tournament::from(e).into())
        .collect();

    Ok(Json(ListTournamentsResponse {
        total: tournaments.len(),
        tournaments,
    }))
}

/// Partially update a tournament.
///
/// PATCH /api/v1/tournaments/:tournament_id
pub async fn update_tournament(
    State(state): State<AppState>,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
    ValidJson(request): ValidJson<UpdateTournamentRequest>,
) -> Result<Json<TournamentResponse>, ApiError> {
    if let Some(number_of_teams) = request.number_of_teams {
        ensure_team_limit(&state, number_of_teams)?;
    }

    let repo = TournamentRepository::new(state.pool.clone());
    let updated = repo
        .update(
            tournament.id,
            request.name.as_deref().map(str::trim),
            request.number_of_teams,
            request.team_budget,
        )
        .await?;

    match updated {
        TournamentUpdate::Updated(entity) => {
            info!(tournament_id = %tournament.id, "Tournament updated");
            Ok(Json(Tournament::from(entity).into()))
        }
        TournamentUpdate::NotFound => Err(ApiError::NotFound("Tournament not found".to_string())),
        TournamentUpdate::BelowTeamCount(created) => {
            Err(RuleViolation::CapacityBelowTeamCount(created).into())
        }
    }
}

/// Delete a tournament together with everything it owns.
///
/// DELETE /api/v1/tournaments/:tournament_id
pub async fn delete_tournament(
    State(state): State<AppState>,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
) -> Result<StatusCode, ApiError> {
    let repo = TournamentRepository::new(state.pool.clone());
    let deleted = repo.delete(tournament.id).await?;

    if deleted == 0 {
        return Err(ApiError::NotFound("Tournament not found".to_string()));
    }

    info!(tournament_id = %tournament.id, "Tournament deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/tournaments/:tournament_id/voting/toggle
pub async fn toggle_voting_live(
    state: State<AppState>,
    user: UserAuth,
    organized: Extension<OrganizedTournament>,
) -> Result<Json<ToggleFlagResponse>, ApiError> {
    toggle_flag(state, user, organized, LifecycleFlag::VotingLive).await
}

/// POST /api/v1/tournaments/:tournament_id/auction/toggle
pub async fn toggle_auction_live(
    state: State<AppState>,
    user: UserAuth,
    organized: Extension<OrganizedTournament>,
) -> Result<Json<ToggleFlagResponse>, ApiError> {
    toggle_flag(state, user, organized, LifecycleFlag::AuctionLive).await
}

/// POST /api/v1/tournaments/:tournament_id/captain-voting/toggle
pub async fn toggle_captain_voting(
    state: State<AppState>,
    user: UserAuth,
    organized: Extension<OrganizedTournament>,
) -> Result<Json<ToggleFlagResponse>, ApiError> {
    toggle_flag(state, user, organized, LifecycleFlag::CaptainVoting).await
}

async fn toggle_flag(
    State(state): State<AppState>,
    user: UserAuth,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
    flag: LifecycleFlag,
) -> Result<Json<ToggleFlagResponse>, ApiError> {
    let repo = TournamentRepository::new(state.pool.clone());

    let Some(entity) = repo.toggle_flag(tournament.id, user.user_id, flag).await? else {
        // The conditional update matched nothing; find out why from the
        // current row.
        let current: Tournament = repo
            .find_by_id(tournament.id)
            .await?
            .ok_or_else(|| ApiError::NotFound("Tournament not found".to_string()))?
            .into();
        if !current.is_organized_by(user.user_id) {
            return Err(ApiError::Forbidden(
                "Only the tournament organizer can do this".to_string(),
            ));
        }
        flag.check_toggle(&current)?;
        return Err(ApiError::Conflict(
            "Tournament changed while toggling, please retry".to_string(),
        ));
    };

    let updated = Tournament::from(entity);
    let enabled = flag.value_of(&updated);
    let message = flag.notification(enabled).to_string();

    info!(
        tournament_id = %updated.id,
        flag = %flag,
        enabled,
        "Tournament flag toggled"
    );

    Ok(Json(ToggleFlagResponse {
        flag,
        enabled,
        message,
        tournament: updated.into(),
    }))
}

fn ensure_team_limit(state: &AppState, number_of_teams: i32) -> Result<(), ApiError> {
    let max = state.config.limits.max_teams_per_tournament;
    if number_of_teams > max {
        return Err(ApiError::Validation(format!(
            "Number of teams cannot exceed {}",
            max
        )));
    }
    Ok(())
}
