//! Dashboard summary projection computed from a user's history.
//!
//! Summaries are derived on demand from stored records and never persisted,
//! so the ledger stays the single source of truth.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::{Activity, Unit, User};

/// How many trailing calendar days the daily chart covers (today included).
pub const DAILY_WINDOW_DAYS: i64 = 7;

/// Maximum number of activities listed in the recent feed.
pub const RECENT_ACTIVITY_LIMIT: usize = 5;

/// Points earned on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyPoints {
    /// Calendar day
    pub date: NaiveDate,
    /// Sum of points earned by activities dated that day
    pub points: u32,
}

/// Per-user dashboard aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Current redeemable balance
    pub total_points: u32,
    /// Number of activities ever logged
    pub total_activities: u32,
    /// Minutes across duration-based activities (step entries excluded)
    pub active_minutes: u32,
    /// Number of rewards redeemed
    pub rewards_redeemed: u32,
    /// Daily point totals for the trailing week, oldest day first
    pub daily_points: Vec<DailyPoints>,
    /// Most recent activities, newest first, at most five
    pub recent_activities: Vec<Activity>,
}

impl DashboardSummary {
    /// Project a summary from a user's stored records.
    ///
    /// `activities` must already be in the newest-first order the store
    /// returns; the recent feed is taken straight from the front of it.
    /// Days with no activity appear in `daily_points` with zero points.
    pub fn project(
        user: &User,
        activities: &[Activity],
        redemptions_count: u32,
        today: NaiveDate,
    ) -> Self {
        let active_minutes = activities
            .iter()
            .filter(|a| a.kind.unit() == Unit::Minutes)
            .fold(0u32, |acc, a| acc.saturating_add(a.value));

        let daily_points = (0..DAILY_WINDOW_DAYS)
            .rev()
            .map(|offset| {
                let date = today - Duration::days(offset);
                let points = activities
                    .iter()
                    .filter(|a| a.date == date)
                    .fold(0u32, |acc, a| acc.saturating_add(a.points_earned));
                DailyPoints { date, points }
            })
            .collect();

        let recent_activities = activities
            .iter()
            .take(RECENT_ACTIVITY_LIMIT)
            .cloned()
            .collect();

        Self {
            total_points: user.total_points,
            total_activities: activities.len() as u32,
            active_minutes,
            rewards_redeemed: redemptions_count,
            daily_points,
            recent_activities,
        }
    }
}
