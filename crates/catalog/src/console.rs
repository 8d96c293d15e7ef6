use serde::{Deserialize, Serialize};

use gamestore_core::{ConsoleId, Entity, EntityKind, Price};

use crate::item::{CatalogEntity, CatalogItem, ItemFields};

/// A console in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Console {
    pub id: ConsoleId,
    pub model: String,
    pub price: Price,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_on_special: bool,
}

/// Request body for creating/updating a console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsoleInput {
    pub model: String,
    pub price: Price,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_on_special: bool,
}

impl Entity for Console {
    type Id = ConsoleId;

    const KIND: EntityKind = EntityKind::Console;

    fn id(&self) -> ConsoleId {
        self.id
    }
}

impl CatalogEntity for Console {
    type Input = ConsoleInput;

    const LABEL_FIELD: &'static str = "model";

    fn input_fields(input: ConsoleInput) -> ItemFields {
        ItemFields {
            label: input.model,
            price: input.price,
            maker: input.manufacturer,
            image: input.image,
            is_on_special: input.is_on_special,
        }
    }

    fn from_fields(id: ConsoleId, fields: ItemFields) -> Self {
        Self {
            id,
            model: fields.label,
            price: fields.price,
            manufacturer: fields.maker,
            image: fields.image,
            is_on_special: fields.is_on_special,
        }
    }

    fn label(&self) -> &str {
        &self.model
    }

    fn price(&self) -> Price {
        self.price
    }

    fn is_on_special(&self) -> bool {
        self.is_on_special
    }

    fn into_item(self) -> CatalogItem {
        CatalogItem::Console(self)
    }
}
