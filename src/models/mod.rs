// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod activity;
pub mod redemption;
pub mod reward;
pub mod stats;
pub mod user;

pub use activity::{Activity, ActivityKind, Unit};
pub use redemption::Redemption;
pub use reward::{Reward, Vendor};
pub use stats::{DailyPoints, DashboardSummary};
pub use user::User;
