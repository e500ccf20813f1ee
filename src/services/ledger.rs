// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ledger service: activity logging, deletion, and reward redemption.
//!
//! Every operation that moves points delegates to a single storage
//! transaction, so a crash can never leave a balance out of step with the
//! records it reflects.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::SledDb;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityKind, Redemption, Reward};

/// Service for the point-moving operations.
#[derive(Clone)]
pub struct LedgerService {
    db: SledDb,
}

impl LedgerService {
    pub fn new(db: SledDb) -> Self {
        Self { db }
    }

    /// Log an activity for `user_id` and credit the points it earns.
    ///
    /// The raw value must be at least 1. Points are computed at the
    /// kind's fixed rate and never recomputed afterwards.
    pub async fn add_activity(
        &self,
        user_id: Uuid,
        kind: ActivityKind,
        value: u32,
        date: NaiveDate,
    ) -> Result<Activity> {
        if value == 0 {
            return Err(AppError::Validation(
                "activity value must be at least 1".to_string(),
            ));
        }

        let activity = Activity::new(user_id, kind, value, date);
        self.db.record_activity(&activity).await?;
        Ok(activity)
    }

    /// Delete an activity and take back the points it earned.
    ///
    /// Returns the removed record. The owner's balance clamps at zero if
    /// those points were already spent.
    pub async fn delete_activity(&self, activity_id: Uuid) -> Result<Activity> {
        self.db.delete_activity(activity_id).await
    }

    /// Redeem `reward` for `user_id`, deducting its cost from the balance.
    ///
    /// The stored redemption carries a full snapshot of the reward, so
    /// later catalog changes never rewrite history.
    pub async fn redeem(&self, user_id: Uuid, reward: &Reward) -> Result<Redemption> {
        let redemption = Redemption::new(user_id, reward);
        self.db.record_redemption(&redemption).await?;
        Ok(redemption)
    }

    /// The user's activities, most recent date first.
    pub async fn activities(&self, user_id: Uuid) -> Result<Vec<Activity>> {
        self.db.activities_for_user(user_id).await
    }

    /// The user's redemptions, most recent first.
    pub async fn redemptions(&self, user_id: Uuid) -> Result<Vec<Redemption>> {
        self.db.redemptions_for_user(user_id).await
    }
}
