//! Tournament application repository.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{ApplicationEntity, ApplicationStatusDb};
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct ApplicationRepository {
    pool: PgPool,
}

impl ApplicationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a pending application.
    ///
    /// Fails with a unique violation if the profile already applied.
    pub async fn create(
        &self,
        tournament_id: Uuid,
        profile_id: Uuid,
        applicant_id: Uuid,
        message: Option<&str>,
    ) -> Result<ApplicationEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_application");
        let result = sqlx::query_as::<_, ApplicationEntity>(
            r#"
            WITH inserted AS (
                INSERT INTO tournament_applications (tournament_id, profile_id, applicant_id, message)
                VALUES ($1, $2, $3, $4)
                RETURNING *
            )
            SELECT i.id, i.tournament_id, i.profile_id, i.applicant_id,
                   p.full_name AS player_name, p.mobile AS player_mobile,
                   i.status, i.message, i.decided_at, i.created_at, i.updated_at
            FROM inserted i
            JOIN profiles p ON p.id = i.profile_id
            "#,
        )
        .bind(tournament_id)
        .bind(profile_id)
        .bind(applicant_id)
        .bind(message)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List applications, newest first, optionally filtered by status.
    pub async fn list_by_tournament(
        &self,
        tournament_id: Uuid,
        status: Option<ApplicationStatusDb>,
    ) -> Result<Vec<ApplicationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_applications");
        let result = sqlx::query_as::<_, ApplicationEntity>(
            r#"
            SELECT a.id, a.tournament_id, a.profile_id, a.applicant_id,
                   p.full_name AS player_name, p.mobile AS player_mobile,
                   a.status, a.message, a.decided_at, a.created_at, a.updated_at
            FROM tournament_applications a
            JOIN profiles p ON p.id = a.profile_id
            WHERE a.tournament_id = $1
              AND ($2::application_status IS NULL OR a.status = $2)
            ORDER BY a.created_at DESC
            "#,
        )
        .bind(tournament_id)
        .bind(status)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Set the organizer's decision.
    pub async fn decide(
        &self,
        tournament_id: Uuid,
        application_id: Uuid,
        status: ApplicationStatusDb,
    ) -> Result<Option<ApplicationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("decide_application");
        let result = sqlx::query_as::<_, ApplicationEntity>(
            r#"
            WITH updated AS (
                UPDATE tournament_applications
                SET status = $3, decided_at = NOW()
                WHERE id = $1 AND tournament_id = $2
                RETURNING *
            )
            SELECT u.id, u.tournament_id, u.profile_id, u.applicant_id,
                   p.full_name AS player_name, p.mobile AS player_mobile,
                   u.status, u.message, u.decided_at, u.created_at, u.updated_at
            FROM updated u
            JOIN profiles p ON p.id = u.profile_id
            "#,
        )
        .bind(application_id)
        .bind(tournament_id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
