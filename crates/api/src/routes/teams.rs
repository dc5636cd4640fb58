//! Team formation handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use domain::errors::RuleViolation;
use domain::models::team::{CreateTeamRequest, ListTeamsResponse, TeamResponse};
use domain::models::Team;
use persistence::repositories::{ProfileRepository, TeamCreation, TeamRepository, TournamentRepository};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{UserAuth, ValidJson};
use crate::middleware::metrics::record_team_created;
use crate::middleware::OrganizedTournament;

/// Teams in creation order with the remaining capacity.
///
/// GET /api/v1/tournaments/:tournament_id/teams
pub async fn list_teams(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<ListTeamsResponse>, ApiError> {
    let capacity = TournamentRepository::new(state.pool.clone())
        .team_capacity(tournament_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Tournament not found".to_string()))?;

    let teams: Vec<TeamResponse> = TeamRepository::new(state.pool.clone())
        .list_by_tournament(tournament_id)
        .await?
        .into_iter()
        .map(|e| Team::from(e).into())
        .collect();

    Ok(Json(ListTeamsResponse {
        total: teams.len(),
        teams,
        capacity: capacity.into(),
    }))
}

/// Create a team while the tournament has room.
///
/// POST /api/v1/tournaments/:tournament_id/teams
pub async fn create_team(
    State(state): State<AppState>,
    user: UserAuth,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
    ValidJson(request): ValidJson<CreateTeamRequest>,
) -> Result<(StatusCode, Json<TeamResponse>), ApiError> {
    let captain_id = match request.captain_mobile.as_deref() {
        Some(mobile) => {
            let profile = ProfileRepository::new(state.pool.clone())
                .find_registered_by_mobile(mobile)
                .await?
                .ok_or_else(|| {
                    ApiError::Validation(
                        "No registered player found with this mobile number".to_string(),
                    )
                })?;
            Some(profile.id)
        }
        None => None,
    };

    let repo = TeamRepository::new(state.pool.clone());
    let created = repo
        .create(
            tournament.id,
            request.trimmed_name(),
            captain_id,
            request.budget,
            request.logo_url.as_deref(),
            user.user_id,
        )
        .await?;

    let team: Team = match created {
        TeamCreation::Created(entity) => entity.into(),
        TeamCreation::TournamentNotFound => {
            return Err(ApiError::NotFound("Tournament not found".to_string()))
        }
        TeamCreation::CapacityReached(max) => {
            return Err(RuleViolation::TeamCapacityReached(max).into())
        }
    };

    record_team_created();
    info!(
        tournament_id = %tournament.id,
        team_id = %team.id,
        has_captain = team.captain_id.is_some(),
        "Team created"
    );

    Ok((StatusCode::CREATED, Json(team.into())))
}
