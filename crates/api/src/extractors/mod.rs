//! Custom Axum extractors.

pub mod json;
pub mod user_auth;

pub use json::ValidJson;
pub use user_auth::UserAuth;
