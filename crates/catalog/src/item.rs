//! Shared shape of the three catalog entity kinds.

use serde::de::DeserializeOwned;
use serde::Serialize;

use gamestore_core::{CatalogError, CatalogResult, Entity, EntityKind, Price};

use crate::{Accessory, Console, Game};
use crate::pricing::discounted_price;

/// Kind-agnostic view of an entity's mutable fields.
///
/// `label` is the title/model/name and `maker` the developer/manufacturer,
/// depending on the kind.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFields {
    pub label: String,
    pub price: Price,
    pub maker: String,
    pub image: Option<String>,
    pub is_on_special: bool,
}

impl ItemFields {
    /// Presence checks only: a non-blank label and a usable price.
    pub fn validate(&self, kind: EntityKind, label_field: &str) -> CatalogResult<()> {
        if self.label.trim().is_empty() {
            return Err(CatalogError::validation(format!(
                "{kind} {label_field} cannot be empty"
            )));
        }
        if !self.price.is_valid() {
            return Err(CatalogError::validation(format!(
                "{kind} price must be a non-negative amount"
            )));
        }
        Ok(())
    }
}

/// A persisted catalog entity with a request-body counterpart.
pub trait CatalogEntity:
    Entity + Clone + Serialize + Send + Sync + core::fmt::Debug + 'static
{
    /// Request body used for create/update (everything but the id).
    type Input: DeserializeOwned + Clone + Send + Sync + core::fmt::Debug + 'static;

    /// JSON/column name of the label field (`title`, `model`, `name`).
    const LABEL_FIELD: &'static str;

    /// Whether the label must be unique across the kind.
    const UNIQUE_LABEL: bool = false;

    fn input_fields(input: Self::Input) -> ItemFields;

    fn from_fields(id: Self::Id, fields: ItemFields) -> Self;

    fn label(&self) -> &str;

    fn price(&self) -> Price;

    fn is_on_special(&self) -> bool;

    /// Wrap into the kind-tagged [`CatalogItem`].
    fn into_item(self) -> CatalogItem;
}

/// Any catalog entity, tagged with its kind on the wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CatalogItem {
    Game(Game),
    Console(Console),
    Accessory(Accessory),
}

impl CatalogItem {
    pub fn kind(&self) -> EntityKind {
        match self {
            CatalogItem::Game(_) => EntityKind::Game,
            CatalogItem::Console(_) => EntityKind::Console,
            CatalogItem::Accessory(_) => EntityKind::Accessory,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            CatalogItem::Game(g) => g.id().get(),
            CatalogItem::Console(c) => c.id().get(),
            CatalogItem::Accessory(a) => a.id().get(),
        }
    }

    pub fn price(&self) -> Price {
        match self {
            CatalogItem::Game(g) => g.price,
            CatalogItem::Console(c) => c.price,
            CatalogItem::Accessory(a) => a.price,
        }
    }

    pub fn maker(&self) -> &str {
        match self {
            CatalogItem::Game(g) => &g.developer,
            CatalogItem::Console(c) => &c.manufacturer,
            CatalogItem::Accessory(a) => &a.manufacturer,
        }
    }

    pub fn is_on_special(&self) -> bool {
        match self {
            CatalogItem::Game(g) => g.is_on_special,
            CatalogItem::Console(c) => c.is_on_special,
            CatalogItem::Accessory(a) => a.is_on_special,
        }
    }

    pub fn discounted_price(&self) -> Price {
        discounted_price(self.kind(), self.price())
    }
}
