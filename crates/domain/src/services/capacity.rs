//! Team capacity of a tournament.

use crate::errors::RuleViolation;

/// Number of teams created against `number_of_teams`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamCapacity {
    max: i32,
    created: i64,
}

impl TeamCapacity {
    pub fn new(max: i32, created: i64) -> Self {
        Self { max, created }
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn created(&self) -> i64 {
        self.created
    }

    /// Teams that can still be created; never negative.
    pub fn remaining(&self) -> i64 {
        (i64::from(self.max) - self.created).max(0)
    }

    pub fn is_full(&self) -> bool {
        self.created >= i64::from(self.max)
    }

    /// Fails when one more team would exceed the limit.
    pub fn ensure_room(&self) -> Result<(), RuleViolation> {
        if self.is_full() {
            Err(RuleViolation::TeamCapacityReached(self.max))
        } else {
            Ok(())
        }
    }

    /// Banner text once every team exists.
    pub fn completion_message(&self) -> Option<String> {
        self.is_full()
            .then(|| format!("All {} teams have been created!", self.max))
    }
}

/// Checks that a new team limit still fits the teams already created.
pub fn ensure_limit_fits(new_max: i32, created: i64) -> Result<(), RuleViolation> {
    if i64::from(new_max) < created {
        Err(RuleViolation::CapacityBelowTeamCount(created))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tournament() {
        let capacity = TeamCapacity::new(8, 0);
        assert!(!capacity.is_full());
        assert_eq!(capacity.remaining(), 8);
        assert!(capacity.ensure_room().is_ok());
        assert_eq!(capacity.completion_message(), None);
    }

    #[test]
    fn test_last_slot() {
        let capacity = TeamCapacity::new(8, 7);
        assert!(!capacity.is_full());
        assert_eq!(capacity.remaining(), 1);
        assert!(capacity.ensure_room().is_ok());
    }

    #[test]
    fn test_full_tournament() {
        let capacity = TeamCapacity::new(8, 8);
        assert!(capacity.is_full());
        assert_eq!(capacity.remaining(), 0);
        assert_eq!(
            capacity.ensure_room(),
            Err(RuleViolation::TeamCapacityReached(8))
        );
        assert_eq!(
            capacity.completion_message().as_deref(),
            Some("All 8 teams have been created!")
        );
    }

    #[test]
    fn test_over_capacity_after_limit_lowered_elsewhere() {
        let capacity = TeamCapacity::new(4, 6);
        assert!(capacity.is_full());
        assert_eq!(capacity.remaining(), 0);
    }

    #[test]
    fn test_ensure_limit_fits() {
        assert!(ensure_limit_fits(8, 8).is_ok());
        assert!(ensure_limit_fits(10, 3).is_ok());
        assert_eq!(
            ensure_limit_fits(4, 5),
            Err(RuleViolation::CapacityBelowTeamCount(5))
        );
    }
}
