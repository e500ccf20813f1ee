// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! FitPulse: a fitness rewards ledger.
//!
//! Users log activities, earn points at fixed per-kind rates, and spend
//! them on catalog rewards. Records live in an embedded sled store and
//! every point movement is applied transactionally, so balances always
//! agree with the activity and redemption history behind them.

pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

use anyhow::Context;

use config::Config;
use db::SledDb;
use services::{CatalogService, LedgerService, SessionService, StatsService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: SledDb,
    pub catalog_service: CatalogService,
    pub session_service: SessionService,
    pub ledger_service: LedgerService,
    pub stats_service: StatsService,
}

impl AppState {
    /// Open the store at `config.data_dir` and wire up every service.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let db = SledDb::open(&config.data_dir)
            .with_context(|| format!("opening database at {}", config.data_dir.display()))?;
        Self::with_db(config, db)
    }

    /// Wire up services over an already-open store.
    ///
    /// Tests use this with a temporary database. The catalog comes from
    /// `config.catalog_path` when set, otherwise the built-in one.
    pub fn with_db(config: Config, db: SledDb) -> anyhow::Result<Self> {
        let catalog_service = match &config.catalog_path {
            Some(path) => CatalogService::load_from_file(path)
                .with_context(|| format!("loading reward catalog from {}", path.display()))?,
            None => CatalogService::default(),
        };

        Ok(Self {
            session_service: SessionService::new(db.clone(), &config),
            ledger_service: LedgerService::new(db.clone()),
            stats_service: StatsService::new(db.clone()),
            catalog_service,
            db,
            config,
        })
    }
}
