//! Catalog domain module.
//!
//! This crate contains the catalog's business rules (entities, categories,
//! bundle matching and the special-offer discount policy) as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod accessory;
pub mod catalog;
pub mod category;
pub mod console;
pub mod game;
pub mod item;
pub mod pricing;

pub use accessory::{Accessory, AccessoryInput};
pub use catalog::{items, Bundle, Catalog, OfferLine};
pub use category::Category;
pub use console::{Console, ConsoleInput};
pub use game::{Game, GameInput};
pub use item::{CatalogEntity, CatalogItem, ItemFields};
pub use pricing::{discounted_price, SPECIAL_OFFER_DISCOUNT};
