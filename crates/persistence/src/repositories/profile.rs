//! Profile repository (read-only).

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ProfileEntity;
use crate::metrics::QueryTimer;

#[derive(Clone)]
pub struct ProfileRepository {
    pool: PgPool,
}

impl ProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Profile owned by an authenticated user.
    pub async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<ProfileEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_profile_by_user");
        let result = sqlx::query_as::<_, ProfileEntity>(
            r#"
            SELECT * FROM profiles WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Registered player whose mobile matches exactly.
    ///
    /// Mobiles are not unique; the oldest registration wins.
    pub async fn find_registered_by_mobile(
        &self,
        mobile: &str,
    ) -> Result<Option<ProfileEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_registered_profile_by_mobile");
        let result = sqlx::query_as::<_, ProfileEntity>(
            r#"
            SELECT * FROM profiles
            WHERE mobile = $1 AND is_player_registered = true
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(mobile)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}
