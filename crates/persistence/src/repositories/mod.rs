//! Repository implementations for database operations.

pub mod application;
pub mod auction_config;
pub mod auction_timer;
pub mod captain;
pub mod profile;
pub mod team;
pub mod tournament;

pub use application::ApplicationRepository;
pub use auction_config::AuctionConfigRepository;
pub use auction_timer::AuctionTimerRepository;
pub use captain::{CaptainRepository, VoteOutcome};
pub use profile::ProfileRepository;
pub use team::{TeamCreation, TeamRepository};
pub use tournament::{TournamentRepository, TournamentUpdate};
