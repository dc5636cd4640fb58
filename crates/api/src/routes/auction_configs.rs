//! Auction category configuration handlers.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use domain::models::auction_config::{
    AuctionConfigResponse, CreateAuctionConfigRequest, ListAuctionConfigsResponse,
    UpdateAuctionConfigRequest,
};
use domain::models::AuctionConfig;
use persistence::repositories::AuctionConfigRepository;
use tracing::info;
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{UserAuth, ValidJson};
use crate::middleware::OrganizedTournament;
use crate::routes::find_tournament;

/// Active configurations, oldest first.
///
/// GET /api/v1/tournaments/:tournament_id/auction-configs
pub async fn list_auction_configs(
    State(state): State<AppState>,
    Path(tournament_id): Path<Uuid>,
) -> Result<Json<ListAuctionConfigsResponse>, ApiError> {
    find_tournament(&state, tournament_id).await?;

    let repo = AuctionConfigRepository::new(state.pool.clone());
    let configs: Vec<AuctionConfigResponse> = repo
        .list_active(tournament_id)
        .await?
        .into_iter()
        .map(|e| AuctionConfig::from(e).into())
        .collect();

    Ok(Json(ListAuctionConfigsResponse {
        total: configs.len(),
        configs,
    }))
}

/// A single configuration, retired or not.
///
/// GET /api/v1/tournaments/:tournament_id/auction-configs/:config_id
pub async fn get_auction_config(
    State(state): State<AppState>,
    Path((tournament_id, config_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AuctionConfigResponse>, ApiError> {
    let repo = AuctionConfigRepository::new(state.pool.clone());
    let config: AuctionConfig = repo
        .find_by_id(tournament_id, config_id)
        .await?
        .ok_or_else(config_not_found)?
        .into();

    Ok(Json(config.into()))
}

/// POST /api/v1/tournaments/:tournament_id/auction-configs
pub async fn create_auction_config(
    State(state): State<AppState>,
    user: UserAuth,
    Extension(OrganizedTournament(tournament)): Extension<OrganizedTournament>,
    ValidJson(request): ValidJson<CreateAuctionConfigRequest>,
) -> Result<(StatusCode, Json<AuctionConfigResponse>), ApiError> {
    let repo = AuctionConfigRepository::new(state.pool.clone());
    let config: AuctionConfig = repo
        .create(
            tournament.id,
            request.category.into(),
            request.max_players,
            request.base_price,
            user.user_id,
        )
        .await?
        .into();

    info!(
        tournament_id = %tournament.id,
        config_id = %config.id,
        category = %config.category,
        "Auction config created"
    );

    Ok((StatusCode::CREATED, Json(config.into())))
}

/// PATCH /api/v1/tournaments/:tournament_id/auction-configs/:config_id
pub async fn update_auction_config(
    State(state): State<AppState>,
    Path((tournament_id, config_id)): Path<(Uuid, Uuid)>,
    ValidJson(request): ValidJson<UpdateAuctionConfigRequest>,
) -> Result<Json<AuctionConfigResponse>, ApiError> {
    let repo = AuctionConfigRepository::new(state.pool.clone());
    let config: AuctionConfig = repo
        .update(
            tournament_id,
            config_id,
            request.category.map(Into::into),
            request.max_players,
            request.base_price,
        )
        .await?
        .ok_or_else(config_not_found)?
        .into();

    info!(tournament_id = %tournament_id, config_id = %config_id, "Auction config updated");

    Ok(Json(config.into()))
}

/// Soft delete. Retiring an already retired config succeeds.
///
/// DELETE /api/v1/tournaments/:tournament_id/auction-configs/:config_id
pub async fn retire_auction_config(
    State(state): State<AppState>,
    Path((tournament_id, config_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<AuctionConfigResponse>, ApiError> {
    let repo = AuctionConfigRepository::new(state.pool.clone());
    let config: AuctionConfig = repo
        .retire(tournament_id, config_id)
        .await?
        .ok_or_else(config_not_found)?
        .into();

    info!(tournament_id = %tournament_id, config_id = %config_id, "Auction config retired");

    Ok(Json(config.into()))
}

fn config_not_found() -> ApiError {
    ApiError::NotFound("Auction config not found".to_string())
}
