//! Team domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::services::capacity::TeamCapacity;

/// A team registered in a tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    /// Profile of the captain, when one was assigned at creation.
    pub captain_id: Option<Uuid>,
    pub captain_name: Option<String>,
    pub budget_remaining: i64,
    pub logo_url: Option<String>,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating a team.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100, message = "Team name must be 1-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[serde(deserialize_with = "shared::numeric::number_from_text")]
    #[validate(range(min = 1, message = "Budget must be greater than 0"))]
    pub budget: i64,

    /// Mobile of a registered player who captains the team.
    #[serde(default, deserialize_with = "super::blank_as_none")]
    #[validate(custom(function = "shared::validation::validate_mobile"))]
    pub captain_mobile: Option<String>,

    #[serde(default, deserialize_with = "super::blank_as_none")]
    #[validate(custom(function = "shared::validation::validate_image_url"))]
    pub logo_url: Option<String>,
}

impl CreateTeamRequest {
    pub fn trimmed_name(&self) -> &str {
        self.name.trim()
    }
}

/// Response payload for team operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamResponse {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub name: String,
    pub captain_id: Option<Uuid>,
    pub captain_name: Option<String>,
    pub budget_remaining: i64,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Team> for TeamResponse {
    fn from(t: Team) -> Self {
        Self {
            id: t.id,
            tournament_id: t.tournament_id,
            name: t.name,
            captain_id: t.captain_id,
            captain_name: t.captain_name,
            budget_remaining: t.budget_remaining,
            logo_url: t.logo_url,
            created_at: t.created_at,
        }
    }
}

/// How many teams exist against the tournament's limit.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamCapacityResponse {
    pub created: i64,
    pub max: i32,
    pub remaining: i64,
    pub is_full: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<TeamCapacity> for TeamCapacityResponse {
    fn from(c: TeamCapacity) -> Self {
        Self {
            created: c.created(),
            max: c.max(),
            remaining: c.remaining(),
            is_full: c.is_full(),
            message: c.completion_message(),
        }
    }
}

/// Response for listing the teams of a tournament.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTeamsResponse {
    pub teams: Vec<TeamResponse>,
    pub total: usize,
    pub capacity: TeamCapacityResponse,
}
