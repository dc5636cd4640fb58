//! Auction category configuration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::status::RecordStatus;

/// Auction tier used to group auctioned players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionCategory {
    #[serde(rename = "Diamond A")]
    DiamondA,
    #[serde(rename = "Diamond B")]
    DiamondB,
    #[serde(rename = "Platinum A")]
    PlatinumA,
    Platinum,
    Gold,
    Silver,
}

impl AuctionCategory {
    /// All categories, highest tier first.
    pub const ALL: [AuctionCategory; 6] = [
        AuctionCategory::DiamondA,
        AuctionCategory::DiamondB,
        AuctionCategory::PlatinumA,
        AuctionCategory::Platinum,
        AuctionCategory::Gold,
        AuctionCategory::Silver,
    ];

    /// Display label, identical to the stored value.
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionCategory::DiamondA => "Diamond A",
            AuctionCategory::DiamondB => "Diamond B",
            AuctionCategory::PlatinumA => "Platinum A",
            AuctionCategory::Platinum => "Platinum",
            AuctionCategory::Gold => "Gold",
            AuctionCategory::Silver => "Silver",
        }
    }

    /// Parses a display label.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == label)
    }
}

impl std::fmt::Display for AuctionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One configured auction category of a tournament.
///
/// Several rows may share a category; nothing enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionConfig {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub category: AuctionCategory,
    pub max_players: i32,
    pub base_price: i64,
    pub status: RecordStatus,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request payload for creating an auction category configuration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateAuctionConfigRequest {
    pub category: AuctionCategory,

    #[serde(deserialize_with = "shared::numeric::number_from_text")]
    #[validate(range(min = 1, message = "Max players must be at least 1"))]
    pub max_players: i32,

    #[serde(deserialize_with = "shared::numeric::number_from_text")]
    #[validate(range(min = 0, message = "Base price cannot be negative"))]
    pub base_price: i64,
}

/// Request payload for updating an auction category configuration.
/// Only provided fields are updated.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAuctionConfigRequest {
    pub category: Option<AuctionCategory>,

    #[serde(default, deserialize_with = "shared::numeric::optional_number_from_text")]
    #[validate(range(min = 1, message = "Max players must be at least 1"))]
    pub max_players: Option<i32>,

    #[serde(default, deserialize_with = "shared::numeric::optional_number_from_text")]
    #[validate(range(min = 0, message = "Base price cannot be negative"))]
    pub base_price: Option<i64>,
}

/// Response payload for auction configuration operations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionConfigResponse {
    pub id: Uuid,
    pub tournament_id: Uuid,
    pub category: AuctionCategory,
    pub max_players: i32,
    pub base_price: i64,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AuctionConfig> for AuctionConfigResponse {
    fn from(c: AuctionConfig) -> Self {
        Self {
            id: c.id,
            tournament_id: c.tournament_id,
            category: c.category,
            max_players: c.max_players,
            base_price: c.base_price,
            status: c.status,
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Response for listing auction configurations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAuctionConfigsResponse {
    pub configs: Vec<AuctionConfigResponse>,
    pub total: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels_round_trip() {
        for category in AuctionCategory::ALL {
            assert_eq!(AuctionCategory::from_label(category.as_str()), Some(category));
        }
        assert_eq!(AuctionCategory::from_label("Bronze"), None);
    }

    #[test]
    fn test_category_serialization_uses_labels() {
        assert_eq!(
            serde_json::to_string(&AuctionCategory::DiamondA).unwrap(),
            "\"Diamond A\""
        );
        assert_eq!(
            serde_json::to_string(&AuctionCategory::Gold).unwrap(),
            "\"Gold\""
        );
        let parsed: AuctionCategory = serde_json::from_str("\"Platinum A\"").unwrap();
        assert_eq!(parsed, AuctionCategory::PlatinumA);
    }

    #[test]
    fn test_create_request_from_form_text() {
        let json = r#"{"category": "Gold", "maxPlayers": "12", "basePrice": "5000"}"#;
        let request: CreateAuctionConfigRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.category, AuctionCategory::Gold);
        assert_eq!(request.max_players, 12);
        assert_eq!(request.base_price, 5000);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_allows_zero_base_price() {
        let json = r#"{"category": "Silver", "maxPlayers": 1, "basePrice": 0}"#;
        let request: CreateAuctionConfigRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_zero_players_and_negative_price() {
        let json = r#"{"category": "Silver", "maxPlayers": 0, "basePrice": -5}"#;
        let request: CreateAuctionConfigRequest = serde_json::from_str(json).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("max_players"));
        assert!(fields.contains_key("base_price"));
    }

    #[test]
    fn test_create_request_requires_all_fields() {
        assert!(serde_json::from_str::<CreateAuctionConfigRequest>(
            r#"{"category": "Gold", "maxPlayers": 5}"#
        )
        .is_err());
        assert!(serde_json::from_str::<CreateAuctionConfigRequest>(
            r#"{"maxPlayers": 5, "basePrice": 10}"#
        )
        .is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"category": "Bronze", "maxPlayers": 5, "basePrice": 10}"#;
        assert!(serde_json::from_str::<CreateAuctionConfigRequest>(json).is_err());
    }

    #[test]
    fn test_update_request_partial() {
        let request: UpdateAuctionConfigRequest =
            serde_json::from_str(r#"{"basePrice": "7500"}"#).unwrap();
        assert_eq!(request.base_price, Some(7500));
        assert!(request.category.is_none());
        assert!(request.max_players.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_response_serialization() {
        let config = AuctionConfig {
            id: Uuid::new_v4(),
            tournament_id: Uuid::new_v4(),
            category: AuctionCategory::DiamondB,
            max_players: 4,
            base_price: 20000,
            status: RecordStatus::Retired,
            created_by: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&AuctionConfigResponse::from(config)).unwrap();
        assert!(json.contains("\"category\":\"Diamond B\""));
        assert!(json.contains("\"maxPlayers\":4"));
        assert!(json.contains("\"status\":\"retired\""));
    }
}
