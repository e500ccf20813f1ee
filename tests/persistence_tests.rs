// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Durability across process restarts, exercised by reopening the store.

mod common;

use fitpulse::config::Config;
use fitpulse::db::SledDb;
use fitpulse::models::ActivityKind;
use fitpulse::AppState;

fn state_at(path: &std::path::Path) -> AppState {
    let db = SledDb::open(path).expect("Failed to open database");
    AppState::with_db(Config::default(), db).expect("Failed to build state")
}

#[tokio::test]
async fn test_records_and_session_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitpulse-db");

    let user_id = {
        let state = state_at(&path);
        let user = common::signup_user(&state, "Maya", "maya@example.com").await;
        state
            .ledger_service
            .add_activity(user.id, ActivityKind::Running, 30, common::date(2026, 3, 14))
            .await
            .unwrap();
        user.id
        // Dropping the state releases the store lock.
    };

    let state = state_at(&path);
    let current = state
        .session_service
        .current_user()
        .await
        .unwrap()
        .expect("session should survive a restart");
    assert_eq!(current.id, user_id);
    assert_eq!(current.total_points, 30);

    let activities = state.ledger_service.activities(user_id).await.unwrap();
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].value, 30);
}

#[tokio::test]
async fn test_same_date_ordering_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fitpulse-db");
    let day = common::date(2026, 3, 14);

    let (user_id, before) = {
        let state = state_at(&path);
        let user = common::signup_user(&state, "Maya", "maya@example.com").await;
        let a = state
            .ledger_service
            .add_activity(user.id, ActivityKind::Running, 10, day)
            .await
            .unwrap();
        let b = state
            .ledger_service
            .add_activity(user.id, ActivityKind::Gym, 20, day)
            .await
            .unwrap();
        (user.id, vec![a.id, b.id])
    };

    let state = state_at(&path);
    let c = state
        .ledger_service
        .add_activity(user_id, ActivityKind::Swimming, 30, day)
        .await
        .unwrap();

    // All three share a date, so the listing falls back to logging order,
    // which must carry across the reopen.
    let activities = state.ledger_service.activities(user_id).await.unwrap();
    let ids: Vec<_> = activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![before[0], before[1], c.id]);
}

#[tokio::test]
async fn test_catalog_file_override() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("rewards.json");
    std::fs::write(
        &catalog_path,
        r#"[{"id": "local-1", "name": "Gym Day Pass", "vendor": "Nike",
             "points_required": 150, "value_display": "1 Day", "image_url": ""}]"#,
    )
    .unwrap();

    let config = Config {
        catalog_path: Some(catalog_path),
        ..Config::default()
    };
    let state = AppState::with_db(config, SledDb::temporary().unwrap()).unwrap();

    assert_eq!(state.catalog_service.rewards().len(), 1);
    assert_eq!(
        state.catalog_service.get("local-1").map(|r| r.points_required),
        Some(150)
    );
    assert!(state.catalog_service.get("r1").is_none());
}

#[tokio::test]
async fn test_unreadable_catalog_fails_startup() {
    let config = Config {
        catalog_path: Some(std::path::PathBuf::from("/nonexistent/rewards.json")),
        ..Config::default()
    };
    let result = AppState::with_db(config, SledDb::temporary().unwrap());
    assert!(result.is_err());
}
