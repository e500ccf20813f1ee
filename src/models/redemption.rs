// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Redemption records: a user's point-for-reward exchanges.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::reward::Reward;

/// A completed exchange of points for a catalog reward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Redemption {
    /// Record ID (opaque)
    pub id: Uuid,
    /// User who redeemed
    pub user_id: Uuid,
    /// Catalog ID of the redeemed reward
    pub reward_id: String,
    /// Full copy of the reward as it was at redemption time
    pub reward_snapshot: Reward,
    /// When the redemption happened
    pub redeemed_at: DateTime<Utc>,
}

impl Redemption {
    /// Build a redemption for `user_id`, snapshotting the reward in full.
    pub fn new(user_id: Uuid, reward: &Reward) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            reward_id: reward.id.clone(),
            reward_snapshot: reward.clone(),
            redeemed_at: Utc::now(),
        }
    }
}
