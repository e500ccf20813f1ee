// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Sled database wrapper with typed operations.
//!
//! Provides high-level operations for:
//! - Users (profile storage plus an email uniqueness index)
//! - Sessions (a single durable pointer to the signed-in user)
//! - Activities (append-ordered log entries)
//! - Redemptions (append-ordered exchange records)
//!
//! Every write that touches a point balance runs as a multi-tree
//! transaction, so the balance and the record it reflects commit together
//! or not at all.

use std::path::Path;

use sled::transaction::{abort, ConflictableTransactionError, Transactional};
use sled::{Db, IVec, Tree};
use uuid::Uuid;

use crate::db::trees;
use crate::error::AppError;
use crate::models::{Activity, Redemption, User};

/// Meta tree key for the signed-in user pointer.
const SESSION_KEY: &[u8] = b"current_user";

/// Sled database client.
///
/// Cheap to clone; all clones share the same underlying trees.
#[derive(Clone)]
pub struct SledDb {
    db: Db,
    users: Tree,
    emails: Tree,
    activities: Tree,
    redemptions: Tree,
    meta: Tree,
}

impl SledDb {
    /// Open (creating if needed) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let db = sled::Config::new().path(&path).open()?;
        tracing::info!(path = %path.as_ref().display(), "Opened sled database");
        Self::with_db(db)
    }

    /// Open a throwaway database for tests. Nothing touches the filesystem
    /// and the data is gone when the handle drops.
    pub fn temporary() -> Result<Self, AppError> {
        let db = sled::Config::new().temporary(true).open()?;
        Self::with_db(db)
    }

    fn with_db(db: Db) -> Result<Self, AppError> {
        Ok(Self {
            users: db.open_tree(trees::USERS)?,
            emails: db.open_tree(trees::USER_EMAILS)?,
            activities: db.open_tree(trees::ACTIVITIES)?,
            redemptions: db.open_tree(trees::REDEMPTIONS)?,
            meta: db.open_tree(trees::META)?,
            db,
        })
    }

    // ─── User Operations ─────────────────────────────────────────

    /// Get a user by ID.
    pub async fn get_user(&self, user_id: Uuid) -> Result<Option<User>, AppError> {
        match self.users.get(user_id.as_bytes())? {
            Some(raw) => Ok(Some(serde_json::from_slice(&raw)?)),
            None => Ok(None),
        }
    }

    /// Look up a user by email.
    ///
    /// The match is byte for byte, so addresses differing only in case are
    /// different users.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        match self.emails.get(email.as_bytes())? {
            Some(raw) => self.get_user(decode_user_id(&raw)?).await,
            None => Ok(None),
        }
    }

    /// Insert a new user, claiming their email in the same transaction.
    ///
    /// Fails with `AlreadyExists` if the email is already claimed, leaving
    /// no partial state behind.
    pub async fn create_user(&self, user: &User) -> Result<(), AppError> {
        let user_bytes = serde_json::to_vec(user)?;

        (&self.users, &self.emails).transaction(|(users, emails)| {
            if emails.get(user.email.as_bytes())?.is_some() {
                return abort(AppError::AlreadyExists(format!(
                    "user with email {}",
                    user.email
                )));
            }
            emails.insert(user.email.as_bytes().to_vec(), user.id.as_bytes().to_vec())?;
            users.insert(user.id.as_bytes().to_vec(), user_bytes.clone())?;
            Ok(())
        })?;
        self.db.flush_async().await?;

        tracing::debug!(user_id = %user.id, "Created user");
        Ok(())
    }

    // ─── Session Operations ──────────────────────────────────────

    /// Point the session at `user_id`. The pointer survives restarts.
    pub async fn set_session(&self, user_id: Uuid) -> Result<(), AppError> {
        self.meta.insert(SESSION_KEY, user_id.as_bytes().to_vec())?;
        self.db.flush_async().await?;
        Ok(())
    }

    /// Drop the session pointer. A no-op when nobody is signed in.
    pub async fn clear_session(&self) -> Result<(), AppError> {
        self.meta.remove(SESSION_KEY)?;
        self.db.flush_async().await?;
        Ok(())
    }

    /// ID of the signed-in user, if any.
    pub async fn session_user_id(&self) -> Result<Option<Uuid>, AppError> {
        match self.meta.get(SESSION_KEY)? {
            Some(raw) => Ok(Some(decode_user_id(&raw)?)),
            None => Ok(None),
        }
    }

    // ─── Activity Operations ─────────────────────────────────────

    /// Append an activity and credit its points to the owner, atomically.
    ///
    /// The activity row and the updated balance commit together. If the
    /// owner does not exist the transaction aborts with `NotFound` and
    /// nothing is written.
    pub async fn record_activity(&self, activity: &Activity) -> Result<(), AppError> {
        let seq = self.db.generate_id()?;
        let activity_bytes = serde_json::to_vec(activity)?;
        let user_key = activity.user_id.as_bytes().to_vec();

        (&self.users, &self.activities).transaction(|(users, activities)| {
            let raw = match users.get(&user_key)? {
                Some(raw) => raw,
                None => {
                    return abort(AppError::NotFound(format!("user {}", activity.user_id)))
                }
            };
            let mut user: User = serde_json::from_slice(&raw).map_err(abort_serde)?;
            user.total_points = user.total_points.saturating_add(activity.points_earned);
            let user_bytes = serde_json::to_vec(&user).map_err(abort_serde)?;

            users.insert(user_key.clone(), user_bytes)?;
            activities.insert(seq.to_be_bytes().to_vec(), activity_bytes.clone())?;
            Ok(())
        })?;
        self.db.flush_async().await?;

        tracing::info!(
            user_id = %activity.user_id,
            activity_id = %activity.id,
            points = activity.points_earned,
            "Recorded activity"
        );
        Ok(())
    }

    /// All of a user's activities, most recent date first.
    ///
    /// Same-date activities keep their insertion order: the tree is
    /// append-ordered and the sort is stable.
    pub async fn activities_for_user(&self, user_id: Uuid) -> Result<Vec<Activity>, AppError> {
        let mut activities = Vec::new();
        for entry in self.activities.iter() {
            let (_, value) = entry?;
            let activity: Activity = serde_json::from_slice(&value)?;
            if activity.user_id == user_id {
                activities.push(activity);
            }
        }
        activities.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(activities)
    }

    /// Remove an activity and take its points back from the owner,
    /// atomically. Returns the removed record.
    ///
    /// The balance clamps at zero rather than going negative, which can
    /// happen when the points were already spent on a redemption.
    pub async fn delete_activity(&self, activity_id: Uuid) -> Result<Activity, AppError> {
        let key = match self.find_activity_key(activity_id)? {
            Some(key) => key,
            None => return Err(AppError::NotFound(format!("activity {}", activity_id))),
        };

        let removed = (&self.users, &self.activities).transaction(|(users, activities)| {
            let raw = match activities.remove(key.clone())? {
                Some(raw) => raw,
                None => return abort(AppError::NotFound(format!("activity {}", activity_id))),
            };
            let activity: Activity = serde_json::from_slice(&raw).map_err(abort_serde)?;

            let user_raw = match users.get(activity.user_id.as_bytes())? {
                Some(raw) => raw,
                None => {
                    return abort(AppError::NotFound(format!("user {}", activity.user_id)))
                }
            };
            let mut user: User = serde_json::from_slice(&user_raw).map_err(abort_serde)?;
            user.total_points = user.total_points.saturating_sub(activity.points_earned);
            let user_bytes = serde_json::to_vec(&user).map_err(abort_serde)?;
            users.insert(activity.user_id.as_bytes().to_vec(), user_bytes)?;

            Ok(activity)
        })?;
        self.db.flush_async().await?;

        tracing::info!(
            activity_id = %activity_id,
            user_id = %removed.user_id,
            points = removed.points_earned,
            "Deleted activity"
        );
        Ok(removed)
    }

    /// Scan for the tree key of an activity record.
    fn find_activity_key(&self, activity_id: Uuid) -> Result<Option<IVec>, AppError> {
        for entry in self.activities.iter() {
            let (key, value) = entry?;
            let activity: Activity = serde_json::from_slice(&value)?;
            if activity.id == activity_id {
                return Ok(Some(key));
            }
        }
        Ok(None)
    }

    // ─── Redemption Operations ───────────────────────────────────

    /// Record a redemption and deduct its cost from the user, atomically.
    ///
    /// Aborts with `InsufficientPoints`, leaving the balance untouched,
    /// when the user cannot cover the snapshot's cost.
    pub async fn record_redemption(&self, redemption: &Redemption) -> Result<(), AppError> {
        let seq = self.db.generate_id()?;
        let redemption_bytes = serde_json::to_vec(redemption)?;
        let user_key = redemption.user_id.as_bytes().to_vec();
        let cost = redemption.reward_snapshot.points_required;

        (&self.users, &self.redemptions).transaction(|(users, redemptions)| {
            let raw = match users.get(&user_key)? {
                Some(raw) => raw,
                None => {
                    return abort(AppError::NotFound(format!("user {}", redemption.user_id)))
                }
            };
            let mut user: User = serde_json::from_slice(&raw).map_err(abort_serde)?;
            if user.total_points < cost {
                return abort(AppError::InsufficientPoints {
                    required: cost,
                    available: user.total_points,
                });
            }
            user.total_points -= cost;
            let user_bytes = serde_json::to_vec(&user).map_err(abort_serde)?;

            users.insert(user_key.clone(), user_bytes)?;
            redemptions.insert(seq.to_be_bytes().to_vec(), redemption_bytes.clone())?;
            Ok(())
        })?;
        self.db.flush_async().await?;

        tracing::info!(
            user_id = %redemption.user_id,
            reward_id = %redemption.reward_id,
            cost,
            "Recorded redemption"
        );
        Ok(())
    }

    /// All of a user's redemptions, most recent first.
    pub async fn redemptions_for_user(&self, user_id: Uuid) -> Result<Vec<Redemption>, AppError> {
        let mut redemptions = Vec::new();
        for entry in self.redemptions.iter() {
            let (_, value) = entry?;
            let redemption: Redemption = serde_json::from_slice(&value)?;
            if redemption.user_id == user_id {
                redemptions.push(redemption);
            }
        }
        redemptions.sort_by(|a, b| b.redeemed_at.cmp(&a.redeemed_at));
        Ok(redemptions)
    }
}

/// Map a serialization failure inside a transaction closure to an abort.
fn abort_serde(err: serde_json::Error) -> ConflictableTransactionError<AppError> {
    ConflictableTransactionError::Abort(err.into())
}

/// Decode the 16-byte user ID stored by the email index and session pointer.
fn decode_user_id(raw: &IVec) -> Result<Uuid, AppError> {
    let bytes: [u8; 16] = raw
        .as_ref()
        .try_into()
        .map_err(|_| AppError::Database("malformed user ID entry".to_string()))?;
    Ok(Uuid::from_bytes(bytes))
}
