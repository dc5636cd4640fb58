//! Tournament lifecycle flags.
//!
//! The three flags are independent booleans. The only coupling is that
//! voting cannot go live, and captains cannot be added or voted for, while
//! captain voting is disabled.

use serde::{Deserialize, Serialize};

use crate::errors::RuleViolation;
use crate::models::Tournament;

/// A toggleable tournament flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleFlag {
    CaptainVoting,
    VotingLive,
    AuctionLive,
}

impl LifecycleFlag {
    /// Column holding the flag in the `tournaments` table.
    pub fn column(&self) -> &'static str {
        match self {
            LifecycleFlag::CaptainVoting => "captain_voting_enabled",
            LifecycleFlag::VotingLive => "is_voting_live",
            LifecycleFlag::AuctionLive => "is_auction_live",
        }
    }

    /// Current value of the flag on a tournament.
    pub fn value_of(&self, tournament: &Tournament) -> bool {
        match self {
            LifecycleFlag::CaptainVoting => tournament.captain_voting_enabled,
            LifecycleFlag::VotingLive => tournament.is_voting_live,
            LifecycleFlag::AuctionLive => tournament.is_auction_live,
        }
    }

    /// Notification shown to the organizer after the flag changed to `enabled`.
    pub fn notification(&self, enabled: bool) -> &'static str {
        match (self, enabled) {
            (LifecycleFlag::CaptainVoting, true) => "Captain Voting Enabled",
            (LifecycleFlag::CaptainVoting, false) => "Captain Voting Disabled",
            (LifecycleFlag::VotingLive, true) => "Voting Started",
            (LifecycleFlag::VotingLive, false) => "Voting Stopped",
            (LifecycleFlag::AuctionLive, true) => "Auction Started",
            (LifecycleFlag::AuctionLive, false) => "Auction Stopped",
        }
    }

    /// Checks whether the flag may be flipped from its current value.
    ///
    /// Turning a flag off is always allowed.
    pub fn check_toggle(&self, tournament: &Tournament) -> Result<(), RuleViolation> {
        let turning_on = !self.value_of(tournament);
        if *self == LifecycleFlag::VotingLive && turning_on && !tournament.captain_voting_enabled {
            return Err(RuleViolation::CaptainVotingDisabled);
        }
        Ok(())
    }
}

impl std::fmt::Display for LifecycleFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CaptainVoting => write!(f, "captain_voting"),
            Self::VotingLive => write!(f, "voting_live"),
            Self::AuctionLive => write!(f, "auction_live"),
        }
    }
}

/// Captains can only be registered while captain voting is enabled.
pub fn ensure_captain_registration_open(tournament: &Tournament) -> Result<(), RuleViolation> {
    if tournament.captain_voting_enabled {
        Ok(())
    } else {
        Err(RuleViolation::CaptainVotingDisabled)
    }
}

/// Votes are accepted only while captain voting is enabled and voting is live.
pub fn ensure_voting_open(tournament: &Tournament) -> Result<(), RuleViolation> {
    ensure_captain_registration_open(tournament)?;
    if tournament.is_voting_live {
        Ok(())
    } else {
        Err(RuleViolation::VotingNotLive)
    }
}
