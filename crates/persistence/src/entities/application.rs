//! Tournament application entity (database row mapping).

use chrono::{DateTime, Utc};
use domain::models::{ApplicationStatus, TournamentApplication};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for application_status that maps to PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "application_status", rename_all = "lowercase")]
pub enum ApplicationStatusDb {
    Pending,
    Approved,
    Rejected,
}

impl From<ApplicationStatusDb> for ApplicationStatus {
    fn from(db: ApplicationStatusDb) -> Self {
        match db {
            ApplicationStatusDb::Pending => ApplicationStatus::Pending,
            ApplicationStatusDb::Approved => ApplicationStatus::Approved,
            ApplicationStatusDb::Rejected => ApplicationStatus::Rejected,
        }
    }
}

impl From<ApplicationStatus> for ApplicationStatusDb {
    fn from(status: ApplicationStatus) -> Self {
        match status {
            ApplicationStatus::Pending => ApplicationStatusDb::Pending,
            ApplicationStatus::Approved => ApplicationStatusDb::Approved,
            ApplicationStatus::Rejected => ApplicationStatusDb::Rejected,
        }
    }
}

/// Application row joined with the applicant's profile.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationEntity {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub profile_id: Uuid,
    pub applicant_id: Uuid,
    pub player_name: String,
    pub player_mobile: Option<String>,
    pub status: ApplicationStatusDb,
    pub message: Option<String>,
    pub decided_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ApplicationEntity> for TournamentApplication {
    fn from(entity: ApplicationEntity) -> Self {
        Self {
            id: entity.id,
            tournament_id: entity.tournament_id,
            profile_id: entity.profile_id,
            applicant_id: entity.applicant_id,
            player_name: entity.player_name,
            player_mobile: entity.player_mobile,
            status: entity.status.into(),
            message: entity.message,
            decided_at: entity.decided_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_both_ways() {
        for status in [
            ApplicationStatus::Pending,
            ApplicationStatus::Approved,
            ApplicationStatus::Rejected,
        ] {
            let db: ApplicationStatusDb = status.into();
            assert_eq!(ApplicationStatus::from(db), status);
        }
    }
}
