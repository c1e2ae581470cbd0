//! Error types for the storage layer.

use booky_core::{AuthorId, Isbn, PublicationId};
use thiserror::Error;

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur during catalog operations.
///
/// The display strings double as the `error` message returned by the HTTP
/// API, so they are phrased for API consumers.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Book not found.
    #[error("No book found for the ISBN of {0}")]
    BookNotFound(Isbn),

    /// Author not found.
    #[error("No author found for the id of {0}")]
    AuthorNotFound(AuthorId),

    /// Publication not found.
    #[error("No publication found for the id of {0}")]
    PublicationNotFound(PublicationId),

    /// A filter matched nothing.
    #[error("No {what} found for the {field} of {value}")]
    NoMatches {
        what: &'static str,
        field: &'static str,
        value: String,
    },

    /// A record with this key already exists.
    #[error("{kind} {key} already exists")]
    Conflict { kind: &'static str, key: String },

    /// A new record references a key that does not exist.
    #[error("invalid reference: {kind} {key} does not exist")]
    InvalidReference { kind: &'static str, key: String },

    /// A record is malformed (e.g. uses a reserved key).
    #[error("invalid record: {0}")]
    InvalidRecord(String),

    /// Snapshot file could not be read or written.
    #[error("snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot file could not be encoded or decoded.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Returns true for every "record not found for given key" variant.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BookNotFound(_)
                | Self::AuthorNotFound(_)
                | Self::PublicationNotFound(_)
                | Self::NoMatches { .. }
        )
    }

    pub(crate) fn no_matches(what: &'static str, field: &'static str, value: &str) -> Self {
        Self::NoMatches {
            what,
            field,
            value: value.to_string(),
        }
    }
}
