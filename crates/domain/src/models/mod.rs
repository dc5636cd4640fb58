//! Domain models for cricket tournaments.

pub mod application;
pub mod auction_config;
pub mod auction_timer;
pub mod captain;
pub mod profile;
pub mod status;
pub mod team;
pub mod tournament;

use serde::{Deserialize, Deserializer};

pub use application::{ApplicationStatus, TournamentApplication};
pub use auction_config::{AuctionCategory, AuctionConfig};
pub use auction_timer::AuctionTimer;
pub use captain::Captain;
pub use profile::Profile;
pub use status::RecordStatus;
pub use team::Team;
pub use tournament::Tournament;

/// Treats a blank string as an absent value.
pub(crate) fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}
