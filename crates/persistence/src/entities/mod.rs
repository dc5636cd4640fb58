//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod application;
pub mod auction_config;
pub mod auction_timer;
pub mod captain;
pub mod profile;
pub mod team;
pub mod tournament;

pub use application::{ApplicationEntity, ApplicationStatusDb};
pub use auction_config::{AuctionCategoryDb, AuctionConfigEntity};
pub use auction_timer::{AuctionTimerEntity, AuctionTimerUpsertEntity};
pub use captain::CaptainEntity;
pub use profile::ProfileEntity;
pub use team::TeamEntity;
pub use tournament::TournamentEntity;
