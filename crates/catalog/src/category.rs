use core::str::FromStr;

use serde::{Deserialize, Serialize};

use gamestore_core::{CatalogError, EntityKind};

/// Closed set of catalog categories accepted by the offer endpoints.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Games,
    Consoles,
    Accessories,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Games, Category::Consoles, Category::Accessories];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Games => "games",
            Category::Consoles => "consoles",
            Category::Accessories => "accessories",
        }
    }

    /// Entity kind the category lists.
    pub fn kind(&self) -> EntityKind {
        match self {
            Category::Games => EntityKind::Game,
            Category::Consoles => EntityKind::Console,
            Category::Accessories => EntityKind::Accessory,
        }
    }
}

impl From<EntityKind> for Category {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Game => Category::Games,
            EntityKind::Console => Category::Consoles,
            EntityKind::Accessory => Category::Accessories,
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "games" | "game" => Ok(Category::Games),
            "consoles" | "console" => Ok(Category::Consoles),
            "accessories" | "accessory" => Ok(Category::Accessories),
            _ => Err(CatalogError::validation(
                "category must be one of: games, consoles, accessories",
            )),
        }
    }
}
