use std::sync::Arc;

use gamestore_catalog::{Accessory, Console, Game};
use gamestore_infra::{
    store::{self, CatalogStore, InMemoryCatalogStore, PostgresCatalogStore},
    CatalogService, SpecialOfferService, StoreConfig,
};

/// Services shared by every handler.
pub struct AppServices {
    pub catalog: CatalogService,
    pub offers: SpecialOfferService,
    backend: &'static str,
}

impl AppServices {
    /// Wire both services over one set of per-kind stores.
    pub fn from_stores(
        games: Arc<dyn CatalogStore<Game>>,
        consoles: Arc<dyn CatalogStore<Console>>,
        accessories: Arc<dyn CatalogStore<Accessory>>,
        backend: &'static str,
    ) -> Self {
        Self {
            offers: SpecialOfferService::new(games.clone(), consoles.clone()),
            catalog: CatalogService::new(games, consoles, accessories),
            backend,
        }
    }

    /// `"in-memory"` or `"postgres"`.
    pub fn backend(&self) -> &'static str {
        self.backend
    }
}

pub async fn build_services(config: &StoreConfig) -> anyhow::Result<AppServices> {
    match config {
        StoreConfig::InMemory => Ok(build_in_memory_services()),
        StoreConfig::Postgres {
            database_url,
            max_connections,
        } => build_persistent_services(database_url, *max_connections).await,
    }
}

/// In-memory wiring (dev/test). State lives for the life of the process.
pub fn build_in_memory_services() -> AppServices {
    tracing::info!("using in-memory catalog stores");
    AppServices::from_stores(
        Arc::new(InMemoryCatalogStore::<Game>::new()),
        Arc::new(InMemoryCatalogStore::<Console>::new()),
        Arc::new(InMemoryCatalogStore::<Accessory>::new()),
        "in-memory",
    )
}

async fn build_persistent_services(
    database_url: &str,
    max_connections: u32,
) -> anyhow::Result<AppServices> {
    let pool = store::connect_pool(database_url, max_connections).await?;
    store::ensure_schema(&pool).await?;
    tracing::info!(max_connections, "using postgres catalog stores");

    Ok(AppServices::from_stores(
        Arc::new(PostgresCatalogStore::<Game>::new(pool.clone())),
        Arc::new(PostgresCatalogStore::<Console>::new(pool.clone())),
        Arc::new(PostgresCatalogStore::<Accessory>::new(pool)),
        "postgres",
    ))
}
