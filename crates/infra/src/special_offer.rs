//! Special offers: the first on-special game and console at 10% off, plus the
//! remembered total from the last trigger.
//!
//! The remembered snapshot is process-wide state. A trigger computes the new
//! snapshot without holding the lock and swaps it in whole, so readers see
//! either the previous snapshot or the new one. Concurrent triggers are
//! last-writer-wins.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use gamestore_catalog::{discounted_price, CatalogEntity, Console, Game};
use gamestore_core::{CatalogResult, Price};

use crate::store::CatalogStore;

/// An entity paired with the price it sells for on special.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Discounted<E> {
    pub entity: E,
    pub discounted_price: Price,
}

impl<E: CatalogEntity> Discounted<E> {
    fn of(entity: E) -> Self {
        let discounted_price = discounted_price(E::KIND, entity.price());
        Self {
            entity,
            discounted_price,
        }
    }
}

/// Result of a trigger.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialOfferSnapshot {
    pub game: Option<Discounted<Game>>,
    pub console: Option<Discounted<Console>>,
    pub total_discounted_price: Price,
    pub generated_at: DateTime<Utc>,
}

/// What the special-offers endpoint serves: live picks plus the remembered total.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentOffers {
    pub game: Option<Discounted<Game>>,
    pub console: Option<Discounted<Console>>,
    pub total_discounted_price: Price,
}

pub struct SpecialOfferService {
    games: Arc<dyn CatalogStore<Game>>,
    consoles: Arc<dyn CatalogStore<Console>>,
    last: RwLock<Option<Arc<SpecialOfferSnapshot>>>,
}

impl SpecialOfferService {
    pub fn new(games: Arc<dyn CatalogStore<Game>>, consoles: Arc<dyn CatalogStore<Console>>) -> Self {
        Self {
            games,
            consoles,
            last: RwLock::new(None),
        }
    }

    /// First (lowest id) on-special game and console, discounted.
    ///
    /// Only the first match of each kind is sampled; further on-special items
    /// are ignored.
    async fn pick(&self) -> CatalogResult<(Option<Discounted<Game>>, Option<Discounted<Console>>)> {
        let game = self.games.find_on_special().await?.into_iter().next();
        let console = self.consoles.find_on_special().await?.into_iter().next();
        Ok((game.map(Discounted::of), console.map(Discounted::of)))
    }

    /// Recompute the offer and replace the remembered snapshot.
    ///
    /// Flags on the entities are left untouched.
    pub async fn create_special_offer_now(&self) -> CatalogResult<Arc<SpecialOfferSnapshot>> {
        let (game, console) = self.pick().await?;
        let total_discounted_price = game.iter().map(|g| g.discounted_price).sum::<Price>()
            + console.iter().map(|c| c.discounted_price).sum::<Price>();

        let snapshot = Arc::new(SpecialOfferSnapshot {
            game,
            console,
            total_discounted_price,
            generated_at: Utc::now(),
        });

        *self.last.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&snapshot));

        tracing::info!(
            total = %snapshot.total_discounted_price,
            game_id = ?snapshot.game.as_ref().map(|g| g.entity.id),
            console_id = ?snapshot.console.as_ref().map(|c| c.entity.id),
            "special offer generated"
        );
        Ok(snapshot)
    }

    /// Last computed snapshot, if any trigger has run since startup.
    pub fn last_snapshot(&self) -> Option<Arc<SpecialOfferSnapshot>> {
        self.last.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Remembered total; zero before the first trigger.
    pub fn last_total_discounted_price(&self) -> Price {
        self.last_snapshot()
            .map(|s| s.total_discounted_price)
            .unwrap_or(Price::ZERO)
    }

    pub async fn current_offers(&self) -> CatalogResult<CurrentOffers> {
        let (game, console) = self.pick().await?;
        Ok(CurrentOffers {
            game,
            console,
            total_discounted_price: self.last_total_discounted_price(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamestore_catalog::ItemFields;

    use crate::store::InMemoryCatalogStore;

    struct Fixture {
        games: Arc<InMemoryCatalogStore<Game>>,
        consoles: Arc<InMemoryCatalogStore<Console>>,
        svc: SpecialOfferService,
    }

    fn fixture() -> Fixture {
        let games = Arc::new(InMemoryCatalogStore::<Game>::new());
        let consoles = Arc::new(InMemoryCatalogStore::<Console>::new());
        let svc = SpecialOfferService::new(games.clone(), consoles.clone());
        Fixture { games, consoles, svc }
    }

    fn fields(label: &str, price: f64, special: bool) -> ItemFields {
        ItemFields {
            label: label.to_string(),
            price: Price::new(price),
            maker: String::new(),
            image: None,
            is_on_special: special,
        }
    }

    #[tokio::test]
    async fn total_defaults_to_zero_before_any_trigger() {
        let f = fixture();
        assert_eq!(f.svc.last_total_discounted_price(), Price::ZERO);
        assert!(f.svc.last_snapshot().is_none());
    }

    #[tokio::test]
    async fn trigger_sums_first_game_and_console_at_ninety_percent() {
        let f = fixture();
        f.games.insert(fields("Chrono", 100.0, true)).await.unwrap();
        f.games.insert(fields("Later", 500.0, true)).await.unwrap();
        f.consoles.insert(fields("X1", 200.0, true)).await.unwrap();

        let snap = f.svc.create_special_offer_now().await.unwrap();
        assert_eq!(snap.game.as_ref().unwrap().entity.title, "Chrono");
        assert_eq!(snap.total_discounted_price.to_fixed(), "270.00");
        assert_eq!(f.svc.last_total_discounted_price().to_fixed(), "270.00");
    }

    #[tokio::test]
    async fn trigger_with_nothing_on_special_stores_zero() {
        let f = fixture();
        f.games.insert(fields("Chrono", 100.0, false)).await.unwrap();

        let snap = f.svc.create_special_offer_now().await.unwrap();
        assert!(snap.game.is_none());
        assert!(snap.console.is_none());
        assert_eq!(f.svc.last_total_discounted_price(), Price::ZERO);
    }

    #[tokio::test]
    async fn current_offers_are_live_but_total_is_remembered() {
        let f = fixture();
        f.games.insert(fields("Chrono", 100.0, true)).await.unwrap();
        f.svc.create_special_offer_now().await.unwrap();

        f.consoles.insert(fields("X1", 200.0, true)).await.unwrap();
        let current = f.svc.current_offers().await.unwrap();
        assert_eq!(current.console.unwrap().discounted_price.to_fixed(), "180.00");
        assert_eq!(current.total_discounted_price.to_fixed(), "90.00");
    }

    #[tokio::test]
    async fn trigger_does_not_touch_flags() {
        let f = fixture();
        let g = f.games.insert(fields("Chrono", 100.0, true)).await.unwrap();
        f.svc.create_special_offer_now().await.unwrap();
        assert!(f.games.get(g.id).await.unwrap().unwrap().is_on_special);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_triggers_and_reads_see_whole_snapshots() {
        let f = fixture();
        f.games.insert(fields("Chrono", 100.0, true)).await.unwrap();
        f.consoles.insert(fields("X1", 200.0, true)).await.unwrap();
        let svc = Arc::new(f.svc);

        let mut handles = Vec::new();
        for _ in 0..16 {
            let svc = Arc::clone(&svc);
            handles.push(tokio::spawn(async move {
                svc.create_special_offer_now().await.unwrap();
                let total = svc.last_total_discounted_price();
                assert_eq!(total.to_fixed(), "270.00");
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
    }
}
