// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Reward catalog entries.

use serde::{Deserialize, Serialize};

/// Partner vendors whose rewards appear in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vendor {
    Amazon,
    Flipkart,
    Swiggy,
    Zomato,
    Uber,
    Nike,
}

/// A catalog entry users can spend points on.
///
/// Catalog entries are reference data, never mutated by ledger operations.
/// Redemptions copy the whole entry into their snapshot, so editing the
/// catalog later cannot rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reward {
    /// Catalog ID, stable across catalog reloads
    pub id: String,
    /// Display name
    pub name: String,
    /// Which vendor backs this reward
    pub vendor: Vendor,
    /// Cost in points
    pub points_required: u32,
    /// Human-readable face value, e.g. "$5.00" or "₹500"
    pub value_display: String,
    /// Illustration shown on the catalog card
    pub image_url: String,
}
