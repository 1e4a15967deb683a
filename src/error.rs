//! Error types for roster store operations

use thiserror::Error;

/// Errors that can occur during roster store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single-row read matched no rows.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A single-row read matched more than one row. This is fatal and never
    /// silently truncated to the first row.
    #[error("Ambiguous result: {0}")]
    Ambiguous(String),

    #[error("SQL error: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("Connection error: {0}")]
    Connection(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn ambiguous(msg: impl Into<String>) -> Self {
        Self::Ambiguous(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
