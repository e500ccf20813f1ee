// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session service: signup, login, logout, and current-user resolution.
//!
//! Identity is session-by-email: logging in means claiming an email that
//! has an account, with no credential check. The session is a durable
//! pointer in the store, so it survives restarts.

use std::time::Duration;

use crate::config::Config;
use crate::db::SledDb;
use crate::error::{AppError, Result};
use crate::models::User;

/// Service for account creation and session management.
#[derive(Clone)]
pub struct SessionService {
    db: SledDb,
    latency: Duration,
}

impl SessionService {
    pub fn new(db: SledDb, config: &Config) -> Self {
        Self {
            db,
            latency: Duration::from_millis(config.simulated_latency_ms),
        }
    }

    /// Create an account and sign it in.
    ///
    /// Name and email are trimmed before validation. The email must
    /// contain an '@' and must not belong to an existing account.
    pub async fn signup(&self, name: &str, email: &str) -> Result<User> {
        self.simulate_latency().await;

        let name = name.trim();
        let email = email.trim();
        if name.is_empty() {
            return Err(AppError::Validation("name must not be empty".to_string()));
        }
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::Validation(format!(
                "malformed email address: {:?}",
                email
            )));
        }

        let user = User::new(name, email);
        self.db.create_user(&user).await?;
        self.db.set_session(user.id).await?;

        tracing::info!(user_id = %user.id, "User signed up");
        Ok(user)
    }

    /// Sign in the account registered under `email`.
    ///
    /// The address is trimmed but otherwise matched byte for byte. Fails
    /// with `Unauthenticated` when no account matches.
    pub async fn login(&self, email: &str) -> Result<User> {
        self.simulate_latency().await;

        let email = email.trim();
        let user = match self.db.get_user_by_email(email).await? {
            Some(user) => user,
            None => {
                return Err(AppError::Unauthenticated(format!(
                    "no account for {}",
                    email
                )))
            }
        };
        self.db.set_session(user.id).await?;

        tracing::info!(user_id = %user.id, "User logged in");
        Ok(user)
    }

    /// Sign out. A no-op when nobody is signed in.
    pub async fn logout(&self) -> Result<()> {
        self.simulate_latency().await;
        self.db.clear_session().await?;
        tracing::debug!("Session cleared");
        Ok(())
    }

    /// The signed-in user, if any.
    ///
    /// Returns `Ok(None)` both when no session pointer exists and when
    /// the pointer refers to a user that is gone.
    pub async fn current_user(&self) -> Result<Option<User>> {
        match self.db.session_user_id().await? {
            Some(user_id) => self.db.get_user(user_id).await,
            None => Ok(None),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}
