//! Catalog persistence abstractions.
//!
//! One [`CatalogStore`] per entity kind. The in-memory store backs dev/test runs;
//! the Postgres store backs persistent deployments.

use std::sync::Arc;

use thiserror::Error;

use gamestore_catalog::{CatalogEntity, ItemFields};
use gamestore_core::CatalogError;

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryCatalogStore;
pub use postgres::{connect_pool, ensure_schema, PgTable, PostgresCatalogStore};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint (e.g. game title) rejected the write.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Unique violations surface as conflicts; everything else is internal.
impl From<StoreError> for CatalogError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation(msg) => CatalogError::Conflict(msg),
            StoreError::Backend(e) => CatalogError::Internal(e),
        }
    }
}

/// Lookup-by-id, lookup-by-predicate and CRUD for one entity kind.
///
/// Listings are ordered by id, which is insertion order.
#[async_trait::async_trait]
pub trait CatalogStore<E: CatalogEntity>: Send + Sync {
    async fn get(&self, id: E::Id) -> StoreResult<Option<E>>;

    async fn list(&self) -> StoreResult<Vec<E>>;

    /// Entities whose special-offer flag is set.
    async fn find_on_special(&self) -> StoreResult<Vec<E>>;

    /// Persist a new entity and assign its id.
    async fn insert(&self, fields: ItemFields) -> StoreResult<E>;

    /// Overwrite all mutable fields. `None` when `id` does not exist.
    async fn update(&self, id: E::Id, fields: ItemFields) -> StoreResult<Option<E>>;

    /// Returns whether a row was removed.
    async fn delete(&self, id: E::Id) -> StoreResult<bool>;
}

#[async_trait::async_trait]
impl<E, S> CatalogStore<E> for Arc<S>
where
    E: CatalogEntity,
    S: CatalogStore<E> + ?Sized,
{
    async fn get(&self, id: E::Id) -> StoreResult<Option<E>> {
        (**self).get(id).await
    }

    async fn list(&self) -> StoreResult<Vec<E>> {
        (**self).list().await
    }

    async fn find_on_special(&self) -> StoreResult<Vec<E>> {
        (**self).find_on_special().await
    }

    async fn insert(&self, fields: ItemFields) -> StoreResult<E> {
        (**self).insert(fields).await
    }

    async fn update(&self, id: E::Id, fields: ItemFields) -> StoreResult<Option<E>> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: E::Id) -> StoreResult<bool> {
        (**self).delete(id).await
    }
}
