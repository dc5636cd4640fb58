//! Captain vote tally.

use serde::Serialize;
use uuid::Uuid;

use crate::models::Captain;

/// One captain's position in the results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptainStanding {
    pub captain_id: Uuid,
    pub name: String,
    pub photo_url: Option<String>,
    pub votes: i32,
    /// Share of the leading captain's votes, 0 to 100.
    pub progress: f64,
}

/// Public voting results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VotingResults {
    pub standings: Vec<CaptainStanding>,
    pub total_votes: i64,
    /// Highest vote count, floored at 1 so progress is always defined.
    pub max_votes: i32,
}

/// Builds results from active captains, most votes first.
///
/// Retired captains are skipped. Ties keep their input order.
pub fn tally(captains: Vec<Captain>) -> VotingResults {
    let mut active: Vec<Captain> = captains
        .into_iter()
        .filter(|c| c.status.is_active())
        .collect();
    active.sort_by(|a, b| b.votes.cmp(&a.votes));

    let total_votes = active.iter().map(|c| i64::from(c.votes)).sum();
    let max_votes = active.iter().map(|c| c.votes).max().unwrap_or(0).max(1);

    let standings = active
        .into_iter()
        .map(|c| CaptainStanding {
            progress: f64::from(c.votes) / f64::from(max_votes) * 100.0,
            captain_id: c.id,
            name: c.name,
            photo_url: c.photo_url,
            votes: c.votes,
        })
        .collect();

    VotingResults {
        standings,
        total_votes,
        max_votes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordStatus;
    use chrono::Utc;

    fn captain(name: &str, votes: i32, status: RecordStatus) -> Captain {
        Captain {
            id: Uuid::new_v4(),
            tournament_id: Uuid::nil(),
            name: name.to_string(),
            mobile: "9876543210".to_string(),
            photo_url: None,
            votes,
            status,
            created_by: Uuid::nil(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_results() {
        let results = tally(Vec::new());
        assert!(results.standings.is_empty());
        assert_eq!(results.total_votes, 0);
        assert_eq!(results.max_votes, 1);
    }

    #[test]
    fn test_all_zero_votes() {
        let results = tally(vec![
            captain("A", 0, RecordStatus::Active),
            captain("B", 0, RecordStatus::Active),
        ]);
        assert_eq!(results.max_votes, 1);
        assert!(results.standings.iter().all(|s| s.progress == 0.0));
    }

    #[test]
    fn test_ordered_by_votes_descending() {
        let results = tally(vec![
            captain("Low", 2, RecordStatus::Active),
            captain("High", 10, RecordStatus::Active),
            captain("Mid", 5, RecordStatus::Active),
        ]);
        let names: Vec<&str> = results.standings.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
        assert_eq!(results.total_votes, 17);
        assert_eq!(results.max_votes, 10);
        assert_eq!(results.standings[0].progress, 100.0);
        assert_eq!(results.standings[1].progress, 50.0);
        assert_eq!(results.standings[2].progress, 20.0);
    }

    #[test]
    fn test_retired_captains_excluded() {
        let results = tally(vec![
            captain("Active", 3, RecordStatus::Active),
            captain("Retired", 50, RecordStatus::Retired),
        ]);
        assert_eq!(results.standings.len(), 1);
        assert_eq!(results.total_votes, 3);
        assert_eq!(results.max_votes, 3);
    }

    #[test]
    fn test_serialization_shape() {
        let results = tally(vec![captain("Solo", 4, RecordStatus::Active)]);
        let json = serde_json::to_string(&results).unwrap();
        assert!(json.contains("\"totalVotes\":4"));
        assert!(json.contains("\"maxVotes\":4"));
        assert!(json.contains("\"progress\":100.0"));
    }
}
