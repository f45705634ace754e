//! Unit domain models.

use serde::{Deserialize, Serialize};

use crate::records::{NewRecord, Record};
use crate::{errors::ValidationError, Error, Result};

/// Domain model representing a rentable lodging unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: i64,
    pub name: String,
    /// Maximum occupants, at least 1
    pub capacity: u32,
    pub nightly_rate: u64,
    /// Short labels in display order
    pub features: Vec<String>,
    /// Whether the unit is offered for new reservations
    pub available: bool,
}

/// Input model for creating or replacing a unit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewUnit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub capacity: u32,
    pub nightly_rate: u64,
    #[serde(default)]
    pub features: Vec<String>,
    pub available: bool,
}

impl NewUnit {
    /// Validates the unit data.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Unit name cannot be empty".to_string(),
            )));
        }
        if self.capacity < 1 {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Unit capacity must be at least 1".to_string(),
            )));
        }
        Ok(())
    }
}

impl Record for Unit {
    fn id(&self) -> i64 {
        self.id
    }
}

impl NewRecord for NewUnit {
    type Record = Unit;

    fn requested_id(&self) -> Option<i64> {
        self.id
    }

    fn into_record(self, id: i64) -> Unit {
        Unit {
            id,
            name: self.name,
            capacity: self.capacity,
            nightly_rate: self.nightly_rate,
            features: self.features,
            available: self.available,
        }
    }
}

impl From<Unit> for NewUnit {
    fn from(unit: Unit) -> Self {
        Self {
            id: Some(unit.id),
            name: unit.name,
            capacity: unit.capacity,
            nightly_rate: unit.nightly_rate,
            features: unit.features,
            available: unit.available,
        }
    }
}

/// Splits operator text into feature labels, one per non-blank line.
pub fn parse_features(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Inverse of [`parse_features`] for editing.
pub fn features_to_text(features: &[String]) -> String {
    features.join("\n")
}
