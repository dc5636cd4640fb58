//! Bid timer configuration.
//!
//! The timer is a stored duration, not a running clock. A tournament has at
//! most one timer row.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Shortest allowed bid round, in seconds.
pub const MIN_BID_TIME_SECS: i32 = 5;

/// Longest allowed bid round, in seconds.
pub const MAX_BID_TIME_SECS: i32 = 120;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionTimer {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub bid_time: i32,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// PUT request for the bid timer. Creates the row on first use.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetBidTimerRequest {
    #[serde(deserialize_with = "shared::numeric::number_from_text")]
    #[validate(range(
        min = MIN_BID_TIME_SECS,
        max = MAX_BID_TIME_SECS,
        message = "Bid time must be between 5 and 120 seconds"
    ))]
    pub bid_time: i32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionTimerResponse {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub bid_time: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AuctionTimer> for AuctionTimerResponse {
    fn from(t: AuctionTimer) -> Self {
        Self {
            id: t.id,
            tournament_id: t.tournament_id,
            bid_time: t.bid_time,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(bid_time: i32) -> SetBidTimerRequest {
        SetBidTimerRequest { bid_time }
    }

    #[test]
    fn test_range_is_inclusive() {
        assert!(request(MIN_BID_TIME_SECS).validate().is_ok());
        assert!(request(30).validate().is_ok());
        assert!(request(MAX_BID_TIME_SECS).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        for seconds in [-30, 0, MIN_BID_TIME_SECS - 1, MAX_BID_TIME_SECS + 1, 600] {
            assert!(
                request(seconds).validate().is_err(),
                "bid time {} should be rejected",
                seconds
            );
        }
    }

    #[test]
    fn test_request_accepts_text() {
        let parsed: SetBidTimerRequest = serde_json::from_str(r#"{"bidTime": "45"}"#).unwrap();
        assert_eq!(parsed.bid_time, 45);
    }

    #[test]
    fn test_request_rejects_fractional_and_text() {
        assert!(serde_json::from_str::<SetBidTimerRequest>(r#"{"bidTime": "4.5"}"#).is_err());
        assert!(serde_json::from_str::<SetBidTimerRequest>(r#"{"bidTime": "soon"}"#).is_err());
    }

    #[test]
    fn test_validation_message() {
        let errors = request(200).validate().unwrap_err();
        let field = &errors.field_errors()["bid_time"];
        assert_eq!(
            field[0].message.as_deref(),
            Some("Bid time must be between 5 and 120 seconds")
        );
    }
}
