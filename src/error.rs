// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types shared by every boundary operation.

use sled::transaction::TransactionError;

/// Application error type surfaced to the embedding presentation layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Unauthenticated(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Insufficient points: need {required}, have {available}")]
    InsufficientPoints { required: u32, available: u32 },

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sled::Error> for AppError {
    fn from(err: sled::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Database(format!("record serialization: {}", err))
    }
}

/// Ledger writes run inside sled transactions. An abort carries the domain
/// error that caused it; storage failures collapse to `Database`.
impl From<TransactionError<AppError>> for AppError {
    fn from(err: TransactionError<AppError>) -> Self {
        match err {
            TransactionError::Abort(e) => e,
            TransactionError::Storage(e) => AppError::Database(e.to_string()),
        }
    }
}

/// Result type alias for all fitpulse operations.
pub type Result<T> = std::result::Result<T, AppError>;
