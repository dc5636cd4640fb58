//! Tournament domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::services::lifecycle::LifecycleFlag;

/// A tournament and its lifecycle flags.
///
/// The flags are independent; no combination is forbidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    pub id: Uuid,
    pub name: String,
    pub organizer_id: Uuid,
    pub number_of_teams: i32,
    pub team_budget: i64,
    pub captain_voting_enabled: bool,
    pub is_voting_live: bool,
    pub is_auction_live: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Tournament {
    /// Whether the given user owns this tournament.
    pub fn is_organized_by(&self, user_id: Uuid) -> bool {
        self.organizer_id == user_id
    }
}

/// Request payload for creating a tournament.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTournamentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: String,

    #[serde(deserialize_with = "shared::numeric::number_from_text")]
    #[validate(range(min = 1, message = "Number of teams must be greater than 0"))]
    pub number_of_teams: i32,

    #[serde(deserialize_with = "shared::numeric::number_from_text")]
    #[validate(range(min = 1, message = "Team budget must be greater than 0"))]
    pub team_budget: i64,
}

/// Request payload for updating a tournament (partial update).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTournamentRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "shared::numeric::optional_number_from_text")]
    #[validate(range(min = 1, message = "Number of teams must be greater than 0"))]
    pub number_of_teams: Option<i32>,

    #[serde(default, deserialize_with = "shared::numeric::optional_number_from_text")]
    #[validate(range(min = 1, message = "Team budget must be greater than 0"))]
    pub team_budget: Option<i64>,
}

/// Response payload for tournament operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentResponse {
    pub id: Uuid,
    pub name: String,
    pub organizer_id: Uuid,
    pub number_of_teams: i32,
    pub team_budget: i64,
    pub captain_voting_enabled: bool,
    pub is_voting_live: bool,
    pub is_auction_live: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Tournament> for TournamentResponse {
    fn from(t: Tournament) -> Self {
        Self {
            id: t.id,
            name: t.name,
            organizer_id: t.organizer_id,
            number_of_teams: t.number_of_teams,
            team_budget: t.team_budget,
            captain_voting_enabled: t.captain_voting_enabled,
            is_voting_live: t.is_voting_live,
            is_auction_live: t.is_auction_live,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Response for listing tournaments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTournamentsResponse {
    pub tournaments: Vec<TournamentResponse>,
    pub total: usize,
}

/// Response for a lifecycle flag toggle.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleFlagResponse {
    pub flag: LifecycleFlag,
    pub enabled: bool,
    /// Notification text shown to the organizer, e.g. "Voting Started".
    pub message: String,
    pub tournament: TournamentResponse,
}
