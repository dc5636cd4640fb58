//! Domain layer for the cricket tournament backend.
//!
//! This crate contains:
//! - Domain models (Tournament, AuctionConfig, AuctionTimer, Team, Captain)
//! - Business rules that do not need the database (vote tally, team capacity,
//!   lifecycle flag transitions)
//! - Domain error types

pub mod errors;
pub mod models;
pub mod services;

pub use errors::RuleViolation;
