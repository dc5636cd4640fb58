//! Domain error types.

use thiserror::Error;

/// A request that is well-formed but not allowed in the tournament's current state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("Captain voting is not enabled for this tournament")]
    CaptainVotingDisabled,

    #[error("Voting is not live for this tournament")]
    VotingNotLive,

    #[error("All {0} teams have been created")]
    TeamCapacityReached(i32),

    #[error("Number of teams cannot be lower than the {0} teams already created")]
    CapacityBelowTeamCount(i64),

    #[error("Captain is no longer active")]
    CaptainRetired,

    #[error("Application status can only be changed to approved or rejected")]
    InvalidApplicationDecision,
}
