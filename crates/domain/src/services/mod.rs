//! Domain services for cricket tournaments.
//!
//! Pure rules over domain models; no I/O.

pub mod capacity;
pub mod lifecycle;
pub mod voting;

pub use capacity::{ensure_limit_fits, TeamCapacity};
pub use lifecycle::{ensure_captain_registration_open, ensure_voting_open, LifecycleFlag};
pub use voting::{tally, CaptainStanding, VotingResults};
