//! Entity trait: identity + continuity across state changes.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// The three persisted item kinds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Game,
    Console,
    Accessory,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Game => "game",
            EntityKind::Console => "console",
            EntityKind::Accessory => "accessory",
        }
    }

    /// Capitalized label used in human-facing confirmations.
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Game => "Game",
            EntityKind::Console => "Console",
            EntityKind::Accessory => "Accessory",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy
        + Eq
        + Ord
        + core::hash::Hash
        + core::fmt::Debug
        + core::fmt::Display
        + Into<i64>
        + From<i64>
        + core::str::FromStr<Err = CatalogError>
        + Send
        + Sync
        + 'static;

    /// Which catalog kind this entity belongs to.
    const KIND: EntityKind;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;
}
