//! Asset records mirrored from persistent storage.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::error::DomainError;

/// A cataloged data resource as persisted in the `assets` table.
///
/// `id` is store-assigned, immutable, and never reused. `updated_at` equals
/// `created_at` for every record: no update endpoint exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: i64,
    pub asset_name: String,
    pub asset_type: String,
    pub owner: Option<String>,
    pub sensitivity_level: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Sensitivity value treated as elevated by the metrics rollup.
///
/// Sensitivity is free-form; `HIGH`/`MEDIUM`/`LOW` are conventions, and only
/// this exact value is counted.
pub const SENSITIVITY_HIGH: &str = "HIGH";

/// An asset draft as submitted by a caller, before validation.
#[derive(Debug, Clone, Default)]
pub struct NewAsset {
    pub asset_name: String,
    pub asset_type: String,
    pub owner: Option<String>,
    pub sensitivity_level: Option<String>,
}

impl NewAsset {
    /// Check required fields, returning the draft untouched when valid.
    ///
    /// Runs before any dependency is contacted: an invalid draft must have
    /// no side effects.
    pub fn validate(self) -> Result<Self, DomainError> {
        if self.asset_name.trim().is_empty() {
            return Err(DomainError::validation("asset_name must not be empty"));
        }
        if self.asset_type.trim().is_empty() {
            return Err(DomainError::validation("asset_type must not be empty"));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_with_name_and_type_is_valid() {
        let draft = NewAsset {
            asset_name: "Customer Database".to_string(),
            asset_type: "Database".to_string(),
            owner: Some("Data Team".to_string()),
            sensitivity_level: Some("HIGH".to_string()),
        };
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn empty_name_is_rejected() {
        let draft = NewAsset {
            asset_name: "  ".to_string(),
            asset_type: "Database".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn empty_type_is_rejected() {
        let draft = NewAsset {
            asset_name: "Customer Database".to_string(),
            asset_type: String::new(),
            ..Default::default()
        };
        assert!(matches!(
            draft.validate(),
            Err(DomainError::Validation { .. })
        ));
    }
}
