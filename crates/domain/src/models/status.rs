//! Soft-delete lifecycle shared by configuration rows and captains.

use serde::{Deserialize, Serialize};

/// Lifecycle of a soft-deletable row.
///
/// Stored as the `is_active` column; retired rows stay retrievable by id but
/// drop out of active listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Retired,
}

impl RecordStatus {
    /// Maps the stored `is_active` flag.
    pub fn from_is_active(is_active: bool) -> Self {
        if is_active {
            RecordStatus::Active
        } else {
            RecordStatus::Retired
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, RecordStatus::Active)
    }
}
