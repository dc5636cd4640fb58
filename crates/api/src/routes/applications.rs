//! Player application handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use domain::models::application::{
    ApplicationResponse, ApplyRequest, DecideApplicationRequest, ListApplicationsQuery,
    ListApplicationsResponse,
};
use domain::models::{Profile, TournamentApplication};
use persistence::repositories::{ApplicationRepository, ProfileRepository};
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{UserAuth, ValidJson};
use crate::middleware::OrganizedTournament;
use crate::routes::{find_tournament, is_unique_violation};

/// Apply to play in a tournament. Requires a registered player profile.
///
/// POST /api/v1/tournaments/:tournament_id/applications
pub async fn apply(
    State(state): State<AppState>,
    user: UserAuth,
    Path(tournament_id): Path<Uuid>,
    ValidJson(request): ValidJson<ApplyRequest>,
) -> Result<(StatusCode, Json<ApplicationResponse>), ApiError> {
    find_tournament(&state, tournament_id).await?;

    let profile: Profile = ProfileRepository::new(state.pool.clone())
        .find_by_user_id(user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?
        .into();

    if !profile.is_player_registered {
        return Err(ApiError::Forbidden(
            "Only registered players can apply".to_string(),
        ));
    }

    let message = request
        .message
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty());

    let repo = ApplicationRepository::new(state.pool.clone());
    let application: TournamentApplication = repo
        .create(tournament_id, profile.id, user.user_id, message)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::Conflict("You have already applied to this tournament".to_string())
            } else {
                e.into()
            }
        })?
        .into();

    info!(
        tournament_id = %tournament_id,
        application_id = %application.id,
        "Application submitted"
    );

    Ok((StatusCode::CREATED, Json(application.into())))
}

/// Applications of a tournament, newest first, optionally by status.
///
/// GET /api/v1/tournaments/:tournament_id/applications?status=pending
pub async fn list_applications(
    State(state): State<AppState>,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
    Query(query): Query<ListApplicationsQuery>,
) -> Result<Json<ListApplicationsResponse>, ApiError> {
    let repo = ApplicationRepository::new(state.pool.clone());
    let applications: Vec<ApplicationResponse> = repo
        .list_by_tournament(tournament.id, query.status.map(Into::into))
        .await?
        .into_iter()
        .map(|e| TournamentApplication::from(e).into())
        .collect();

    Ok(Json(ListApplicationsResponse {
        total: applications.len(),
        applications,
    }))
}

/// Approve or reject an application.
///
/// PATCH /api/v1/tournaments/:tournament_id/applications/:application_id
pub async fn decide_application(
    State(state): State<AppState>,
    Path((tournament_id, application_id)): Path<(Uuid, Uuid)>,
    ValidJson(request): ValidJson<DecideApplicationRequest>,
) -> Result<Json<ApplicationResponse>, ApiError> {
    let status = request.decision()?;

    let repo = ApplicationRepository::new(state.pool.clone());
    let application: TournamentApplication = repo
        .decide(tournament_id, application_id, status.into())
        .await?
        .ok_or_else(|| ApiError::NotFound("Application not found".to_string()))?
        .into();

    info!(
        tournament_id = %tournament_id,
        application_id = %application_id,
        status = status.as_str(),
        "Application decided"
    );

    Ok(Json(application.into()))
}
