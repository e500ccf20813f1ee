// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity model: the fixed kinds a user can log and the records we store.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Measurement unit for an activity's raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Steps,
    Minutes,
}

/// The closed set of loggable activity kinds.
///
/// Each kind carries a fixed conversion rate from raw value to points; the
/// rate table is part of the ledger contract and never configurable at
/// runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityKind {
    Steps,
    Running,
    Cycling,
    Gym,
    Meditation,
    Swimming,
}

impl ActivityKind {
    /// Every kind, in display order.
    pub const ALL: [ActivityKind; 6] = [
        ActivityKind::Steps,
        ActivityKind::Running,
        ActivityKind::Cycling,
        ActivityKind::Gym,
        ActivityKind::Meditation,
        ActivityKind::Swimming,
    ];

    /// Points granted per unit of raw value.
    pub fn rate(&self) -> f64 {
        match self {
            ActivityKind::Steps => 0.01, // 1000 steps = 10 points
            ActivityKind::Running => 1.0, // 1 min = 1 point
            ActivityKind::Cycling => 0.8,
            ActivityKind::Gym => 1.2,
            ActivityKind::Meditation => 0.5,
            ActivityKind::Swimming => 1.5,
        }
    }

    /// What the raw value measures for this kind.
    pub fn unit(&self) -> Unit {
        match self {
            ActivityKind::Steps => Unit::Steps,
            _ => Unit::Minutes,
        }
    }

    /// Human-readable name for display.
    pub fn label(&self) -> &'static str {
        match self {
            ActivityKind::Steps => "Walking",
            ActivityKind::Running => "Running",
            ActivityKind::Cycling => "Cycling",
            ActivityKind::Gym => "Workout / Gym",
            ActivityKind::Meditation => "Meditation",
            ActivityKind::Swimming => "Swimming",
        }
    }

    /// Points earned for a raw value, rounded half away from zero.
    pub fn points_for(&self, value: u32) -> u32 {
        (value as f64 * self.rate()).round() as u32
    }
}

/// A logged activity as stored in the activities tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Record ID (opaque)
    pub id: Uuid,
    /// Owning user ID
    pub user_id: Uuid,
    /// Which kind of activity this was
    pub kind: ActivityKind,
    /// Raw value: step count or duration in minutes, depending on the kind
    pub value: u32,
    /// Points credited for this record, fixed at creation time
    pub points_earned: u32,
    /// Calendar date the activity took place
    pub date: NaiveDate,
    /// When this record was created
    pub created_at: DateTime<Utc>,
}

impl Activity {
    /// Build a new record, converting the raw value to points at the kind's
    /// fixed rate. The earned points are captured here and never recomputed.
    pub fn new(user_id: Uuid, kind: ActivityKind, value: u32, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            kind,
            value,
            points_earned: kind.points_for(value),
            date,
            created_at: Utc::now(),
        }
    }
}
