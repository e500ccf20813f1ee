// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Reward redemption and snapshot behavior.

mod common;

use fitpulse::error::AppError;
use fitpulse::models::ActivityKind;
use fitpulse::services::CatalogService;
use uuid::Uuid;

#[tokio::test]
async fn test_redeem_deducts_cost_and_records_snapshot() {
    let state = common::test_state();
    let user = common::signup_user(&state, "Maya", "maya@example.com").await;

    // 500 gym minutes at 1.2 is 600 points.
    state
        .ledger_service
        .add_activity(user.id, ActivityKind::Gym, 500, common::date(2026, 3, 14))
        .await
        .unwrap();

    let reward = state.catalog_service.get("r1").unwrap().clone();
    let redemption = state.ledger_service.redeem(user.id, &reward).await.unwrap();

    assert_eq!(redemption.reward_id, "r1");
    assert_eq!(redemption.reward_snapshot, reward);

    let fresh = state.db.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fresh.total_points, 100); // 600 - 500

    let redemptions = state.ledger_service.redemptions(user.id).await.unwrap();
    assert_eq!(redemptions.len(), 1);
    assert_eq!(redemptions[0].id, redemption.id);
}

#[tokio::test]
async fn test_redeem_with_insufficient_points_changes_nothing() {
    let state = common::test_state();
    let user = common::signup_user(&state, "Maya", "maya@example.com").await;

    // 400 running minutes is 400 points, not enough for the 500-point r1.
    state
        .ledger_service
        .add_activity(user.id, ActivityKind::Running, 400, common::date(2026, 3, 14))
        .await
        .unwrap();

    let reward = state.catalog_service.get("r1").unwrap().clone();
    let err = state.ledger_service.redeem(user.id, &reward).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::InsufficientPoints {
            required: 500,
            available: 400
        }
    ));

    let fresh = state.db.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fresh.total_points, 400);
    assert!(state.ledger_service.redemptions(user.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_redeem_with_exact_balance_succeeds() {
    let state = common::test_state();
    let user = common::signup_user(&state, "Maya", "maya@example.com").await;

    state
        .ledger_service
        .add_activity(user.id, ActivityKind::Running, 300, common::date(2026, 3, 14))
        .await
        .unwrap();

    let reward = state.catalog_service.get("r2").unwrap().clone();
    state.ledger_service.redeem(user.id, &reward).await.unwrap();

    let fresh = state.db.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fresh.total_points, 0);
}

#[tokio::test]
async fn test_redeem_for_unknown_user_is_not_found() {
    let state = common::test_state();

    let reward = state.catalog_service.get("r2").unwrap().clone();
    let err = state
        .ledger_service
        .redeem(Uuid::new_v4(), &reward)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_snapshot_survives_catalog_changes() {
    let state = common::test_state();
    let user = common::signup_user(&state, "Maya", "maya@example.com").await;

    state
        .ledger_service
        .add_activity(user.id, ActivityKind::Running, 100, common::date(2026, 3, 14))
        .await
        .unwrap();

    let old_catalog = CatalogService::load_from_json(
        r#"[{"id": "seasonal", "name": "Spring Voucher", "vendor": "Flipkart",
             "points_required": 80, "value_display": "₹100", "image_url": ""}]"#,
    )
    .unwrap();
    let reward = old_catalog.get("seasonal").unwrap().clone();
    state.ledger_service.redeem(user.id, &reward).await.unwrap();

    // A later catalog revision changes the price. The stored record keeps
    // the terms the user actually redeemed at.
    let new_catalog = CatalogService::load_from_json(
        r#"[{"id": "seasonal", "name": "Spring Voucher", "vendor": "Flipkart",
             "points_required": 999, "value_display": "₹100", "image_url": ""}]"#,
    )
    .unwrap();
    assert_eq!(new_catalog.get("seasonal").unwrap().points_required, 999);

    let redemptions = state.ledger_service.redemptions(user.id).await.unwrap();
    assert_eq!(redemptions[0].reward_snapshot.points_required, 80);
}

#[tokio::test]
async fn test_redemptions_list_newest_first() {
    let state = common::test_state();
    let user = common::signup_user(&state, "Maya", "maya@example.com").await;

    state
        .ledger_service
        .add_activity(user.id, ActivityKind::Swimming, 700, common::date(2026, 3, 14))
        .await
        .unwrap(); // 1050 points

    let r2 = state.catalog_service.get("r2").unwrap().clone(); // 300
    let r3 = state.catalog_service.get("r3").unwrap().clone(); // 450
    let first = state.ledger_service.redeem(user.id, &r2).await.unwrap();
    let second = state.ledger_service.redeem(user.id, &r3).await.unwrap();

    let redemptions = state.ledger_service.redemptions(user.id).await.unwrap();
    let ids: Vec<_> = redemptions.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}
