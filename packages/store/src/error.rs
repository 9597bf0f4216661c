//! Error types for the persistence boundary.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A save was attempted with no authenticated identity available.
    /// Raised before any upsert is issued.
    #[error("no authenticated user found")]
    NoAuthenticatedUser,

    /// The store client could not be constructed from its settings.
    #[error("invalid store configuration: {0}")]
    Config(String),

    /// The backing store rejected the write.
    #[error("upsert rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
