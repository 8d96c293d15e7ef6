//! Catalog error model.

use thiserror::Error;

use crate::entity::EntityKind;

/// Result type used across the catalog layers.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level error.
///
/// The first three variants are deterministic, caller-facing failures. `Internal`
/// wraps anything the persistence layer reports and keeps the original cause so the
/// boundary can log it before answering.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// No entity of `kind` exists with `id`.
    #[error("{kind} with id {id} not found")]
    NotFound { kind: EntityKind, id: i64 },

    /// A uniqueness constraint would be violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// A payload or parameter failed a presence/shape check.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Store or otherwise unexpected failure.
    #[error("internal error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl CatalogError {
    pub fn not_found(kind: EntityKind, id: impl Into<i64>) -> Self {
        Self::NotFound { kind, id: id.into() }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(err: impl Into<anyhow::Error>) -> Self {
        Self::Internal(err.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = CatalogError::not_found(EntityKind::Console, 7);
        assert_eq!(err.to_string(), "console with id 7 not found");
        assert!(err.is_not_found());
    }

    #[test]
    fn internal_keeps_source_chain() {
        let cause = anyhow::anyhow!("connection reset").context("loading games");
        let err = CatalogError::internal(cause);
        let source = std::error::Error::source(&err).expect("source");
        assert_eq!(source.to_string(), "loading games");
    }
}
