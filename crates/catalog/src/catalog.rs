//! On-demand catalog views: per-category offers and maker bundles.
//!
//! Nothing here is persisted. Callers load the entities a view needs, tag
//! them with [`items`] and derive a [`Catalog`] from them.

use serde::Serialize;

use gamestore_core::Price;

use crate::{CatalogEntity, CatalogItem, Category};

/// Tag entities of one kind, keeping their order.
pub fn items<E: CatalogEntity>(entities: Vec<E>) -> Vec<CatalogItem> {
    entities.into_iter().map(CatalogEntity::into_item).collect()
}

/// One on-special item with the price it currently sells for.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferLine {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub discounted_price: Price,
}

/// An on-special anchor item plus same-maker items of the other kinds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Bundle {
    pub anchor: CatalogItem,
    pub companions: Vec<CatalogItem>,
    pub list_price: Price,
    pub bundle_price: Price,
}

/// Transient aggregate view keyed by category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub category: Category,
    pub items: Vec<OfferLine>,
    pub bundles: Vec<Bundle>,
}

impl Catalog {
    /// Items of `category` currently on special.
    ///
    /// `candidates` are items of `category`; any not on special are dropped.
    pub fn offers(category: Category, candidates: Vec<CatalogItem>) -> Self {
        let items = candidates
            .into_iter()
            .filter(|item| Category::from(item.kind()) == category)
            .filter(CatalogItem::is_on_special)
            .map(|item| OfferLine {
                discounted_price: item.discounted_price(),
                item,
            })
            .collect();

        Self {
            category,
            items,
            bundles: Vec::new(),
        }
    }

    /// Bundles anchored on each on-special item of `category`.
    ///
    /// Companions are the items of the two other kinds sharing the anchor's
    /// maker (developer or manufacturer, compared case-insensitively). Anchors
    /// with no companions produce no bundle.
    ///
    /// `anchors` are items of `category`; `others` may hold any kind, and
    /// items of `category` among them are ignored.
    pub fn bundle_offers(
        category: Category,
        anchors: Vec<CatalogItem>,
        others: Vec<CatalogItem>,
    ) -> Self {
        let others: Vec<CatalogItem> = others
            .into_iter()
            .filter(|o| Category::from(o.kind()) != category)
            .collect();

        let bundles = anchors
            .into_iter()
            .filter(|a| Category::from(a.kind()) == category)
            .filter(CatalogItem::is_on_special)
            .filter_map(|anchor| {
                let maker = normalize_maker(anchor.maker())?;
                let companions: Vec<CatalogItem> = others
                    .iter()
                    .filter(|o| normalize_maker(o.maker()).as_deref() == Some(maker.as_str()))
                    .cloned()
                    .collect();
                if companions.is_empty() {
                    return None;
                }
                Some(Bundle::new(anchor, companions))
            })
            .collect();

        Self {
            category,
            items: Vec::new(),
            bundles,
        }
    }
}

impl Bundle {
    fn new(anchor: CatalogItem, companions: Vec<CatalogItem>) -> Self {
        let members = || core::iter::once(&anchor).chain(companions.iter());
        let list_price = members().map(CatalogItem::price).sum();
        let bundle_price = members().map(CatalogItem::discounted_price).sum();
        Self {
            anchor,
            companions,
            list_price,
            bundle_price,
        }
    }
}

fn normalize_maker(maker: &str) -> Option<String> {
    let m = maker.trim();
    if m.is_empty() {
        None
    } else {
        Some(m.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Accessory, Console, Game};
    use gamestore_core::{AccessoryId, ConsoleId, GameId};

    fn game(id: i64, title: &str, price: f64, developer: &str, special: bool) -> Game {
        Game {
            id: GameId::new(id),
            title: title.to_string(),
            price: Price::new(price),
            developer: developer.to_string(),
            image: None,
            is_on_special: special,
        }
    }

    fn console(id: i64, model: &str, price: f64, manufacturer: &str, special: bool) -> Console {
        Console {
            id: ConsoleId::new(id),
            model: model.to_string(),
            price: Price::new(price),
            manufacturer: manufacturer.to_string(),
            image: None,
            is_on_special: special,
        }
    }

    fn accessory(id: i64, name: &str, price: f64, manufacturer: &str, special: bool) -> Accessory {
        Accessory {
            id: AccessoryId::new(id),
            name: name.to_string(),
            price: Price::new(price),
            manufacturer: manufacturer.to_string(),
            image: None,
            is_on_special: special,
        }
    }

    fn games() -> Vec<CatalogItem> {
        items(vec![
            game(1, "Chrono", 100.0, "Nintendo", true),
            game(2, "Halo", 60.0, "Microsoft", false),
        ])
    }

    fn consoles() -> Vec<CatalogItem> {
        items(vec![
            console(1, "Switch", 300.0, "nintendo", false),
            console(2, "X1", 200.0, "Microsoft", true),
        ])
    }

    fn accessories() -> Vec<CatalogItem> {
        items(vec![
            accessory(1, "Pro Controller", 70.0, "Nintendo ", true),
            accessory(2, "Headset", 50.0, "", true),
        ])
    }

    #[test]
    fn offers_lists_only_on_special_items_of_category() {
        let catalog = Catalog::offers(Category::Games, games());
        assert_eq!(catalog.category, Category::Games);
        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.items[0].item.id(), 1);
        assert_eq!(catalog.items[0].discounted_price.to_fixed(), "90.00");
        assert!(catalog.bundles.is_empty());
    }

    #[test]
    fn accessory_offers_are_not_discounted() {
        let catalog = Catalog::offers(Category::Accessories, accessories());
        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.items[0].discounted_price, Price::new(70.0));
    }

    #[test]
    fn bundles_match_maker_case_insensitively() {
        let catalog = Catalog::bundle_offers(Category::Games, games(), [consoles(), accessories()].concat());
        assert_eq!(catalog.bundles.len(), 1);

        let bundle = &catalog.bundles[0];
        assert_eq!(bundle.anchor.id(), 1);
        let kinds: Vec<_> = bundle.companions.iter().map(|c| (c.kind(), c.id())).collect();
        assert_eq!(
            kinds,
            vec![
                (gamestore_core::EntityKind::Console, 1),
                (gamestore_core::EntityKind::Accessory, 1)
            ]
        );
        // 100 + 300 + 70 listed; 90 + 270 + 70 bundled.
        assert_eq!(bundle.list_price.to_fixed(), "470.00");
        assert_eq!(bundle.bundle_price.to_fixed(), "430.00");
    }

    #[test]
    fn anchors_without_companions_or_maker_are_skipped() {
        let catalog = Catalog::bundle_offers(Category::Accessories, accessories(), [games(), consoles()].concat());
        // Headset has no maker; Pro Controller matches Chrono + Switch.
        assert_eq!(catalog.bundles.len(), 1);
        assert_eq!(catalog.bundles[0].anchor.id(), 1);
    }

    #[test]
    fn items_of_other_categories_are_ignored() {
        let mixed = [games(), consoles()].concat();
        let catalog = Catalog::offers(Category::Consoles, mixed.clone());
        assert_eq!(catalog.items.len(), 1);
        assert_eq!(catalog.items[0].item.kind(), gamestore_core::EntityKind::Console);

        // Other games are never companions of a game anchor.
        let catalog = Catalog::bundle_offers(Category::Games, games(), mixed);
        assert!(catalog.bundles[0]
            .companions
            .iter()
            .all(|c| c.kind() != gamestore_core::EntityKind::Game));
    }

    #[test]
    fn catalog_serializes_flat_offer_lines() {
        let catalog = Catalog::offers(Category::Consoles, consoles());
        let json = serde_json::to_value(&catalog).unwrap();
        assert_eq!(json["category"], "consoles");
        assert_eq!(json["items"][0]["kind"], "console");
        assert_eq!(json["items"][0]["model"], "X1");
        assert_eq!(json["items"][0]["discountedPrice"], 180.0);
    }
}
