//! Captain candidates and votes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::status::RecordStatus;

/// A captain candidate in a tournament's captain vote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Captain {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub mobile: String,
    /// Usually an inline data URL captured by the organizer.
    pub photo_url: Option<String>,
    pub votes: i32,
    pub status: RecordStatus,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for adding a captain candidate.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCaptainRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[validate(custom(function = "shared::validation::validate_mobile"))]
    pub mobile: String,

    #[serde(default, deserialize_with = "super::blank_as_none")]
    #[validate(custom(function = "shared::validation::validate_image_url"))]
    pub photo_url: Option<String>,
}

/// Response payload for captain operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptainResponse {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub mobile: String,
    pub photo_url: Option<String>,
    pub votes: i32,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Captain> for CaptainResponse {
    fn from(c: Captain) -> Self {
        Self {
            id: c.id,
            tournament_id: c.tournament_id,
            name: c.name,
            mobile: c.mobile,
            photo_url: c.photo_url,
            votes: c.votes,
            status: c.status,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCaptainsResponse {
    pub captains: Vec<CaptainResponse>,
    pub total: usize,
}

/// Response after a vote was recorded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CastVoteResponse {
    pub tournament_id: Uuid,
    pub captain_id: Uuid,
    /// Vote count of the captain including this vote.
    pub votes: i32,
}
