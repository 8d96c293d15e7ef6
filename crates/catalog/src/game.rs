use serde::{Deserialize, Serialize};

use gamestore_core::{Entity, EntityKind, GameId, Price};

use crate::item::{CatalogEntity, CatalogItem, ItemFields};

/// A game in the catalog. Titles are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: GameId,
    pub title: String,
    pub price: Price,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_on_special: bool,
}

/// Request body for creating/updating a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    pub title: String,
    pub price: Price,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_on_special: bool,
}

impl Entity for Game {
    type Id = GameId;

    const KIND: EntityKind = EntityKind::Game;

    fn id(&self) -> GameId {
        self.id
    }
}

impl CatalogEntity for Game {
    type Input = GameInput;

    const LABEL_FIELD: &'static str = "title";
    const UNIQUE_LABEL: bool = true;

    fn input_fields(input: GameInput) -> ItemFields {
        ItemFields {
            label: input.title,
            price: input.price,
            maker: input.developer,
            image: input.image,
            is_on_special: input.is_on_special,
        }
    }

    fn from_fields(id: GameId, fields: ItemFields) -> Self {
        Self {
            id,
            title: fields.label,
            price: fields.price,
            developer: fields.maker,
            image: fields.image,
            is_on_special: fields.is_on_special,
        }
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn price(&self) -> Price {
        self.price
    }

    fn is_on_special(&self) -> bool {
        self.is_on_special
    }

    fn into_item(self) -> CatalogItem {
        CatalogItem::Game(self)
    }
}
