use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;

use gamestore_catalog::{CatalogEntity, ItemFields};

use super::{CatalogStore, StoreError, StoreResult};

/// In-memory store for tests/dev.
///
/// Ids start at 1 and are never reused, mirroring a database sequence.
#[derive(Debug)]
pub struct InMemoryCatalogStore<E> {
    inner: RwLock<Table<E>>,
}

#[derive(Debug)]
struct Table<E> {
    rows: BTreeMap<i64, E>,
    next_id: i64,
}

impl<E> InMemoryCatalogStore<E> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Table<E>>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Backend(anyhow!("in-memory catalog store lock poisoned")))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Table<E>>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Backend(anyhow!("in-memory catalog store lock poisoned")))
    }
}

impl<E> Default for InMemoryCatalogStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CatalogEntity> Table<E> {
    /// Emulates a unique index on the label column for kinds that have one.
    fn check_unique(&self, fields: &ItemFields, except: Option<i64>) -> StoreResult<()> {
        if !E::UNIQUE_LABEL {
            return Ok(());
        }
        let clash = self
            .rows
            .iter()
            .any(|(id, e)| Some(*id) != except && e.label() == fields.label);
        if clash {
            return Err(StoreError::UniqueViolation(format!(
                "{} {} '{}' already exists",
                E::KIND,
                E::LABEL_FIELD,
                fields.label
            )));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<E: CatalogEntity> CatalogStore<E> for InMemoryCatalogStore<E> {
    async fn get(&self, id: E::Id) -> StoreResult<Option<E>> {
        let key: i64 = id.into();
        Ok(self.read()?.rows.get(&key).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<E>> {
        Ok(self.read()?.rows.values().cloned().collect())
    }

    async fn find_on_special(&self) -> StoreResult<Vec<E>> {
        Ok(self
            .read()?
            .rows
            .values()
            .filter(|e| e.is_on_special())
            .cloned()
            .collect())
    }

    async fn insert(&self, fields: ItemFields) -> StoreResult<E> {
        let mut table = self.write()?;
        table.check_unique(&fields, None)?;

        let id = table.next_id;
        table.next_id += 1;
        let entity = E::from_fields(E::Id::from(id), fields);
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, id: E::Id, fields: ItemFields) -> StoreResult<Option<E>> {
        let key: i64 = id.into();
        let mut table = self.write()?;
        if !table.rows.contains_key(&key) {
            return Ok(None);
        }
        table.check_unique(&fields, Some(key))?;

        let entity = E::from_fields(id, fields);
        table.rows.insert(key, entity.clone());
        Ok(Some(entity))
    }

    async fn delete(&self, id: E::Id) -> StoreResult<bool> {
        let key: i64 = id.into();
        Ok(self.write()?.rows.remove(&key).is_some())
    }
}
