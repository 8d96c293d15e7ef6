//! Infrastructure layer: catalog stores, services and configuration.

pub mod catalog_service;
pub mod config;
pub mod special_offer;
pub mod store;

pub use catalog_service::{CatalogService, EntityService};
pub use config::{ApiConfig, ConfigError, StoreConfig};
pub use special_offer::{CurrentOffers, Discounted, SpecialOfferService, SpecialOfferSnapshot};
