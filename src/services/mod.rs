// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod catalog;
pub mod ledger;
pub mod session;
pub mod stats;

pub use catalog::{CatalogError, CatalogService};
pub use ledger::LedgerService;
pub use session::SessionService;
pub use stats::StatsService;
