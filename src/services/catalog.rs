// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward catalog loading and lookup service.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::models::{Reward, Vendor};

/// Service for loading the reward catalog and looking up entries.
///
/// The catalog is read-only reference data. Ledger operations snapshot
/// entries out of it but never write back.
#[derive(Debug, Clone)]
pub struct CatalogService {
    rewards: Vec<Reward>,
}

impl Default for CatalogService {
    /// The built-in catalog.
    fn default() -> Self {
        Self {
            rewards: builtin_rewards(),
        }
    }
}

impl CatalogService {
    /// Load a catalog from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let json_data =
            fs::read_to_string(path.as_ref()).map_err(|e| CatalogError::IoError(e.to_string()))?;
        Self::load_from_json(&json_data)
    }

    /// Load a catalog from a JSON array of rewards.
    pub fn load_from_json(json_data: &str) -> Result<Self, CatalogError> {
        let rewards: Vec<Reward> =
            serde_json::from_str(json_data).map_err(|e| CatalogError::ParseError(e.to_string()))?;
        Self::from_rewards(rewards)
    }

    fn from_rewards(rewards: Vec<Reward>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for reward in &rewards {
            if reward.id.trim().is_empty() {
                return Err(CatalogError::Invalid("reward with empty ID".to_string()));
            }
            if !seen.insert(reward.id.as_str()) {
                return Err(CatalogError::Invalid(format!(
                    "duplicate reward ID {}",
                    reward.id
                )));
            }
            if reward.points_required == 0 {
                return Err(CatalogError::Invalid(format!(
                    "reward {} costs zero points",
                    reward.id
                )));
            }
        }

        tracing::info!(count = rewards.len(), "Loaded reward catalog");
        Ok(Self { rewards })
    }

    /// Every catalog entry, in catalog order.
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Look up a reward by catalog ID.
    pub fn get(&self, reward_id: &str) -> Option<&Reward> {
        self.rewards.iter().find(|r| r.id == reward_id)
    }
}

/// The rewards shipped with the application.
fn builtin_rewards() -> Vec<Reward> {
    vec![
        Reward {
            id: "r1".to_string(),
            name: "Amazon Gift Card".to_string(),
            vendor: Vendor::Amazon,
            points_required: 500,
            value_display: "$5.00".to_string(),
            image_url: "https://picsum.photos/seed/amazon/400/250".to_string(),
        },
        Reward {
            id: "r2".to_string(),
            name: "Swiggy Food Voucher".to_string(),
            vendor: Vendor::Swiggy,
            points_required: 300,
            value_display: "₹200".to_string(),
            image_url: "https://picsum.photos/seed/food/400/250".to_string(),
        },
        Reward {
            id: "r3".to_string(),
            name: "Uber Ride Pass".to_string(),
            vendor: Vendor::Uber,
            points_required: 450,
            value_display: "$5.00".to_string(),
            image_url: "https://picsum.photos/seed/car/400/250".to_string(),
        },
        Reward {
            id: "r4".to_string(),
            name: "Nike Store Credit".to_string(),
            vendor: Vendor::Nike,
            points_required: 2000,
            value_display: "$25.00".to_string(),
            image_url: "https://picsum.photos/seed/shoe/400/250".to_string(),
        },
        Reward {
            id: "r5".to_string(),
            name: "Flipkart Voucher".to_string(),
            vendor: Vendor::Flipkart,
            points_required: 1000,
            value_display: "₹500".to_string(),
            image_url: "https://picsum.photos/seed/shop/400/250".to_string(),
        },
        Reward {
            id: "r6".to_string(),
            name: "Zomato Gold".to_string(),
            vendor: Vendor::Zomato,
            points_required: 800,
            value_display: "3 Months".to_string(),
            image_url: "https://picsum.photos/seed/eat/400/250".to_string(),
        },
    ]
}

/// Errors from catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to read file: {0}")]
    IoError(String),

    #[error("Failed to parse catalog JSON: {0}")]
    ParseError(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog() {
        let catalog = CatalogService::default();
        assert_eq!(catalog.rewards().len(), 6);
        assert_eq!(catalog.get("r1").map(|r| r.points_required), Some(500));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_load_from_json() {
        let json = r#"[{
            "id": "custom",
            "name": "Coffee Voucher",
            "vendor": "Amazon",
            "points_required": 50,
            "value_display": "$2.00",
            "image_url": "https://example.com/coffee.png"
        }]"#;
        let catalog = CatalogService::load_from_json(json).unwrap();
        assert_eq!(catalog.rewards().len(), 1);
        assert_eq!(catalog.get("custom").map(|r| r.vendor), Some(Vendor::Amazon));
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"[
            {"id": "x", "name": "A", "vendor": "Uber", "points_required": 10,
             "value_display": "$1", "image_url": ""},
            {"id": "x", "name": "B", "vendor": "Nike", "points_required": 20,
             "value_display": "$2", "image_url": ""}
        ]"#;
        let err = CatalogService::load_from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }

    #[test]
    fn test_rejects_zero_cost_reward() {
        let json = r#"[{"id": "free", "name": "Freebie", "vendor": "Zomato",
                        "points_required": 0, "value_display": "", "image_url": ""}]"#;
        let err = CatalogService::load_from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::Invalid(_)));
    }
}
