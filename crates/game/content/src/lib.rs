//! Static creature content and loaders.
//!
//! This crate houses the creature catalog and provides loaders for data files:
//! - Creature catalogs (data-driven via RON)
//! - Engine configuration (data-driven via TOML)
//!
//! Content is read-only reference data; it is consumed by the runtime and
//! never appears in a battle outcome except by name.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{CatalogError, CreatureCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader};
