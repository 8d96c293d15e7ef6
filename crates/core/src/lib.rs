//! `gamestore-core`: shared building blocks for the catalog service.
//!
//! This crate contains **pure** primitives (no infrastructure concerns): typed
//! identifiers, the price value object and the error model every layer speaks.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, EntityKind};
pub use error::{CatalogError, CatalogResult};
pub use id::{AccessoryId, ConsoleId, GameId};
pub use value_object::{Price, ValueObject};
