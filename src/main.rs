// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! FitPulse status binary.
//!
//! Opens the store, wires up the services, and reports what it finds.
//! Useful as a smoke check that a data directory is healthy.

use fitpulse::{config::Config, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fitpulse::logging::init();

    let config = Config::from_env()?;
    tracing::info!(data_dir = %config.data_dir.display(), "Starting FitPulse");

    let state = AppState::new(config)?;
    tracing::info!(
        rewards = state.catalog_service.rewards().len(),
        "Reward catalog ready"
    );

    match state.session_service.current_user().await? {
        Some(user) => {
            let today = chrono::Utc::now().date_naive();
            let summary = state.stats_service.dashboard(user.id, today).await?;
            tracing::info!(
                user_id = %user.id,
                name = %user.name,
                total_points = summary.total_points,
                total_activities = summary.total_activities,
                "Signed-in user"
            );
        }
        None => tracing::info!("No user signed in"),
    }

    Ok(())
}
