use serde::{Deserialize, Serialize};

use gamestore_core::{AccessoryId, Entity, EntityKind, Price};

use crate::item::{CatalogEntity, CatalogItem, ItemFields};

/// An accessory (controller, headset, cable...).
///
/// Accessories can be flagged on special but are never discounted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessory {
    pub id: AccessoryId,
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_on_special: bool,
}

/// Request body for creating/updating an accessory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessoryInput {
    pub name: String,
    pub price: Price,
    #[serde(default)]
    pub manufacturer: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub is_on_special: bool,
}

impl Entity for Accessory {
    type Id = AccessoryId;

    const KIND: EntityKind = EntityKind::Accessory;

    fn id(&self) -> AccessoryId {
        self.id
    }
}

impl CatalogEntity for Accessory {
    type Input = AccessoryInput;

    const LABEL_FIELD: &'static str = "name";

    fn input_fields(input: AccessoryInput) -> ItemFields {
        ItemFields {
            label: input.name,
            price: input.price,
            maker: input.manufacturer,
            image: input.image,
            is_on_special: input.is_on_special,
        }
    }

    fn from_fields(id: AccessoryId, fields: ItemFields) -> Self {
        Self {
            id,
            name: fields.label,
            price: fields.price,
            manufacturer: fields.maker,
            image: fields.image,
            is_on_special: fields.is_on_special,
        }
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn price(&self) -> Price {
        self.price
    }

    fn is_on_special(&self) -> bool {
        self.is_on_special
    }

    fn into_item(self) -> CatalogItem {
        CatalogItem::Accessory(self)
    }
}
