// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;

use fitpulse::config::Config;
use fitpulse::db::SledDb;
use fitpulse::models::User;
use fitpulse::AppState;

/// Create app state over a throwaway database.
#[allow(dead_code)]
pub fn test_state() -> AppState {
    let db = SledDb::temporary().expect("Failed to open temporary database");
    AppState::with_db(Config::default(), db).expect("Failed to build test state")
}

/// Sign up a fresh user, which also signs the session in.
#[allow(dead_code)]
pub async fn signup_user(state: &AppState, name: &str, email: &str) -> User {
    state
        .session_service
        .signup(name, email)
        .await
        .expect("Signup should succeed")
}

/// Shorthand for building calendar dates in tests.
#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}
