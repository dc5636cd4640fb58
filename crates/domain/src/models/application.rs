//! Player applications to tournaments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::errors::RuleViolation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

/// A player's request to take part in a tournament.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TournamentApplication {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub profile_id: Uuid,
    pub applicant_id: Uuid,
    pub player_name: String,
    pub player_mobile: Option<String>,
    pub status: ApplicationStatus,
    pub message: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub message: Option<String>,
}

/// Organizer decision on a pending or previously decided application.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DecideApplicationRequest {
    pub status: ApplicationStatus,
}

impl DecideApplicationRequest {
    /// Returns the decided status; moving back to pending is not a decision.
    pub fn decision(&self) -> Result<ApplicationStatus, RuleViolation> {
        match self.status {
            ApplicationStatus::Approved | ApplicationStatus::Rejected => Ok(self.status),
            ApplicationStatus::Pending => Err(RuleViolation::InvalidApplicationDecision),
        }
    }
}

/// Query parameters for listing applications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListApplicationsQuery {
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub profile_id: Uuid,
    pub player_name: String,
    pub player_mobile: Option<String>,
    pub status: ApplicationStatus,
    pub message: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<TournamentApplication> for ApplicationResponse {
    fn from(a: TournamentApplication) -> Self {
        Self {
            id: a.id,
            tournament_id: a.tournament_id,
            profile_id: a.profile_id,
            player_name: a.player_name,
            player_mobile: a.player_mobile,
            status: a.status,
            message: a.message,
            decided_at: a.decided_at,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListApplicationsResponse {
    pub applications: Vec<ApplicationResponse>,
    pub total: usize,
}
