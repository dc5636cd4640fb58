//! Query latency and pool metrics for the tournament store.
//!
//! Every repository call reports `database_query_duration_seconds` labelled
//! with its operation name (`create_team`, `cast_captain_vote`, ...). Pool
//! gauges are refreshed each time `/metrics` is scraped.

use metrics::{gauge, histogram};
use sqlx::PgPool;
use std::future::Future;
use std::time::Instant;

/// Record one repository operation under its `query` label.
pub fn record_query_duration(query_name: &str, duration_secs: f64) {
    histogram!(
        "database_query_duration_seconds",
        "query" => query_name.to_string()
    )
    .record(duration_secs);
}

/// Record active, idle and total connections of the tournament pool.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times one repository query.
///
/// ```ignore
/// let timer = QueryTimer::new("find_tournament_by_id");
/// let result = sqlx::query_as::<_, TournamentEntity>(...).fetch_optional(&pool).await;
/// timer.record();
/// result
/// ```
pub struct QueryTimer {
    query_name: String,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: impl Into<String>) -> Self {
        Self {
            query_name: query_name.into(),
            start: Instant::now(),
        }
    }

    /// Record the time since `new` under this operation name.
    pub fn record(self) {
        let duration = self.start.elapsed().as_secs_f64();
        record_query_duration(&self.query_name, duration);
    }

    /// Awaits a multi-statement operation and records it however it ends,
    /// including early returns and errors.
    pub async fn observe<F: Future>(self, operation: F) -> F::Output {
        let output = operation.await;
        self.record();
        output
    }
}
