// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard statistics service.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::db::SledDb;
use crate::error::{AppError, Result};
use crate::models::DashboardSummary;

/// Service producing per-user dashboard summaries on demand.
#[derive(Clone)]
pub struct StatsService {
    db: SledDb,
}

impl StatsService {
    pub fn new(db: SledDb) -> Self {
        Self { db }
    }

    /// Build the dashboard summary for `user_id` as of `today`.
    pub async fn dashboard(&self, user_id: Uuid, today: NaiveDate) -> Result<DashboardSummary> {
        let user = match self.db.get_user(user_id).await? {
            Some(user) => user,
            None => return Err(AppError::NotFound(format!("user {}", user_id))),
        };
        let activities = self.db.activities_for_user(user_id).await?;
        let redemptions = self.db.redemptions_for_user(user_id).await?;

        Ok(DashboardSummary::project(
            &user,
            &activities,
            redemptions.len() as u32,
            today,
        ))
    }
}
