//! Bid timer handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use domain::models::auction_timer::{AuctionTimerResponse, SetBidTimerRequest};
use domain::models::AuctionTimer;
use persistence::repositories::AuctionTimerRepository;
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{UserAuth, ValidJson};
use crate::middleware::OrganizedTournament;

/// GET /api/v1/tournaments/:tournament_id/auction-timer
pub async fn get_auction_timer(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<AuctionTimerResponse>, ApiError> {
    let repo = AuctionTimerRepository::new(state.pool.clone());
    let timer: AuctionTimer = repo
        .find_by_tournament(tournament_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Bid timer not set".to_string()))?
        .into();

    Ok(Json(timer.into()))
}

/// Set the bid time. 201 when the timer is created, 200 when updated.
///
/// PUT /api/v1/tournaments/:tournament_id/auction-timer
pub async fn set_auction_timer(
    State(state): State<AppState>,
    user: UserAuth,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
    ValidJson(request): ValidJson<SetBidTimerRequest>,
) -> Result<(StatusCode, Json<AuctionTimerResponse>), ApiError> {
    let repo = AuctionTimerRepository::new(state.pool.clone());
    let upserted = repo
        .upsert(tournament.id, request.bid_time, user.user_id)
        .await?;

    let status = if upserted.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    let timer: AuctionTimer = upserted.timer.into();

    info!(
        tournament_id = %tournament.id,
        bid_time = timer.bid_time,
        created = upserted.inserted,
        "Bid timer set"
    );

    Ok((status, Json(timer.into())))
}
