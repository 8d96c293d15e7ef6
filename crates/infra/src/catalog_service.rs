//! Catalog service: CRUD per entity kind plus category and bundle views.

use std::sync::Arc;

use gamestore_catalog::{
    items, Accessory, Catalog, CatalogEntity, CatalogItem, Category, Console, Game,
};
use gamestore_core::{CatalogError, CatalogResult};

use crate::store::CatalogStore;

/// CRUD over a single entity kind.
pub struct EntityService<E: CatalogEntity> {
    store: Arc<dyn CatalogStore<E>>,
}

impl<E: CatalogEntity> Clone for EntityService<E> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<E: CatalogEntity> EntityService<E> {
    pub fn new(store: Arc<dyn CatalogStore<E>>) -> Self {
        Self { store }
    }

    pub async fn find_by_id(&self, id: E::Id) -> CatalogResult<E> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| CatalogError::not_found(E::KIND, id))
    }

    pub async fn list_all(&self) -> CatalogResult<Vec<E>> {
        Ok(self.store.list().await?)
    }

    pub async fn list_on_special(&self) -> CatalogResult<Vec<E>> {
        Ok(self.store.find_on_special().await?)
    }

    pub async fn add(&self, input: E::Input) -> CatalogResult<E> {
        let fields = E::input_fields(input);
        fields.validate(E::KIND, E::LABEL_FIELD)?;

        let created = self.store.insert(fields).await?;
        tracing::info!(kind = %E::KIND, id = %created.id(), "catalog entity created");
        Ok(created)
    }

    pub async fn update(&self, id: E::Id, input: E::Input) -> CatalogResult<E> {
        let fields = E::input_fields(input);
        fields.validate(E::KIND, E::LABEL_FIELD)?;

        let updated = self
            .store
            .update(id, fields)
            .await?
            .ok_or_else(|| CatalogError::not_found(E::KIND, id))?;
        tracing::info!(kind = %E::KIND, id = %id, "catalog entity updated");
        Ok(updated)
    }

    pub async fn delete(&self, id: E::Id) -> CatalogResult<()> {
        if !self.store.delete(id).await? {
            return Err(CatalogError::not_found(E::KIND, id));
        }
        tracing::info!(kind = %E::KIND, id = %id, "catalog entity deleted");
        Ok(())
    }
}

/// The catalog as a whole: one [`EntityService`] per kind.
#[derive(Clone)]
pub struct CatalogService {
    games: EntityService<Game>,
    consoles: EntityService<Console>,
    accessories: EntityService<Accessory>,
}

impl CatalogService {
    pub fn new(
        games: Arc<dyn CatalogStore<Game>>,
        consoles: Arc<dyn CatalogStore<Console>>,
        accessories: Arc<dyn CatalogStore<Accessory>>,
    ) -> Self {
        Self {
            games: EntityService::new(games),
            consoles: EntityService::new(consoles),
            accessories: EntityService::new(accessories),
        }
    }

    pub fn games(&self) -> &EntityService<Game> {
        &self.games
    }

    pub fn consoles(&self) -> &EntityService<Console> {
        &self.consoles
    }

    pub fn accessories(&self) -> &EntityService<Accessory> {
        &self.accessories
    }

    async fn on_special(&self, category: Category) -> CatalogResult<Vec<CatalogItem>> {
        Ok(match category {
            Category::Games => items(self.games.list_on_special().await?),
            Category::Consoles => items(self.consoles.list_on_special().await?),
            Category::Accessories => items(self.accessories.list_on_special().await?),
        })
    }

    async fn all_of(&self, category: Category) -> CatalogResult<Vec<CatalogItem>> {
        Ok(match category {
            Category::Games => items(self.games.list_all().await?),
            Category::Consoles => items(self.consoles.list_all().await?),
            Category::Accessories => items(self.accessories.list_all().await?),
        })
    }

    /// On-special items of one category.
    pub async fn catalog_by_category(&self, category: Category) -> CatalogResult<Catalog> {
        let catalog = Catalog::offers(category, self.on_special(category).await?);
        tracing::debug!(%category, items = catalog.items.len(), "built offers catalog");
        Ok(catalog)
    }

    /// Same-maker bundles anchored on one category's on-special items.
    ///
    /// Only the anchor kind's on-special rows and the two other kinds are loaded.
    pub async fn bundle_offers(&self, category: Category) -> CatalogResult<Catalog> {
        let anchors = self.on_special(category).await?;
        let mut others = Vec::new();
        for other in Category::ALL.into_iter().filter(|c| *c != category) {
            others.extend(self.all_of(other).await?);
        }

        let catalog = Catalog::bundle_offers(category, anchors, others);
        tracing::debug!(%category, bundles = catalog.bundles.len(), "built bundle catalog");
        Ok(catalog)
    }
}
