//! Caller profile handler.

use axum::{extract::State, Json};
use domain::models::profile::ProfileResponse;
use domain::models::Profile;
use persistence::repositories::ProfileRepository;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::UserAuth;

/// GET /api/v1/me/profile
pub async fn get_my_profile(
    State(state): State<AppState>,
    user: UserAuth,
) -> Result<Json<ProfileResponse>, ApiError> {
    let repo = ProfileRepository::new(state.pool.clone());
    let profile: Profile = repo
        .find_by_user_id(user.user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Profile not found".to_string()))?
        .into();

    Ok(Json(profile.into()))
}
