use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post, put},
    Router,
};
use shared::jwt::JwtVerifier;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, rate_limit_middleware, require_organizer,
    require_user_auth, security_headers_middleware, trace_id, RateLimiterState,
};
use crate::routes::{
    applications, auction_configs, auction_timer, captains, health, profiles, teams, tournaments,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    /// `None` when the configured public key could not be parsed; protected
    /// routes then answer 503.
    pub jwt: Option<Arc<JwtVerifier>>,
    pub rate_limiter: Option<Arc<RateLimiterState>>,
}

impl AppState {
    pub fn new(config: Config, pool: PgPool) -> Self {
        let jwt = match JwtVerifier::from_rsa_pem(&config.jwt.public_key, config.jwt.leeway_secs) {
            Ok(verifier) => Some(Arc::new(verifier)),
            Err(e) => {
                tracing::error!(error = %e, "Failed to initialize JWT verifier");
                None
            }
        };

        let rate_limiter =
            RateLimiterState::new(config.security.rate_limit_per_minute).map(Arc::new);

        Self {
            pool,
            config: Arc::new(config),
            jwt,
            rate_limiter,
        }
    }
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let state = AppState::new(config, pool);
    let config = state.config.clone();

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/live", get(health::live))
        .route("/api/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler))
        .route(
            "/api/v1/tournaments/:tournament_id",
            get(tournaments::get_tournament),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/auction-configs",
            get(auction_configs::list_auction_configs),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/auction-configs/:config_id",
            get(auction_configs::get_auction_config),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/auction-timer",
            get(auction_timer::get_auction_timer),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/teams",
            get(teams::list_teams),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/captains/results",
            get(captains::voting_results),
        );

    // Any authenticated caller.
    // Middleware order: auth runs first, then rate limiting (which needs the caller).
    let user_routes = Router::new()
        .route("/api/v1/tournaments", post(tournaments::create_tournament))
        .route("/api/v1/me/tournaments", get(tournaments::list_my_tournaments))
        .route("/api/v1/me/profile", get(profiles::get_my_profile))
        .route(
            "/api/v1/tournaments/:tournament_id/captains/:captain_id/votes",
            post(captains::cast_vote),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/applications",
            post(applications::apply),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    // Organizer of the tournament in the path.
    // Middleware order: auth, rate limiting, then the organizer check.
    let organizer_routes = Router::new()
        .route(
            "/api/v1/tournaments/:tournament_id",
            axum::routing::patch(tournaments::update_tournament)
                .delete(tournaments::delete_tournament),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/voting/toggle",
            post(tournaments::toggle_voting_live),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/auction/toggle",
            post(tournaments::toggle_auction_live),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/captain-voting/toggle",
            post(tournaments::toggle_captain_voting),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/auction-configs",
            post(auction_configs::create_auction_config),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/auction-configs/:config_id",
            axum::routing::patch(auction_configs::update_auction_config)
                .delete(auction_configs::retire_auction_config),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/auction-timer",
            put(auction_timer::set_auction_timer),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/teams",
            post(teams::create_team),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/captains",
            get(captains::list_captains).post(captains::create_captain),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/captains/:captain_id",
            axum::routing::delete(captains::retire_captain),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/applications",
            get(applications::list_applications),
        )
        .route(
            "/api/v1/tournaments/:tournament_id/applications/:application_id",
            axum::routing::patch(applications::decide_application),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_organizer,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit_middleware,
        ))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_user_auth,
        ));

    Router::new()
        .merge(public_routes)
        .merge(user_routes)
        .merge(organizer_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.server.max_body_size))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
