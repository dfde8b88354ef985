//! Creature catalog loader.
//!
//! Loads creatures from RON files and validates them once, at load time.

use std::path::Path;

use battle_core::Creature;

use crate::catalog::CreatureCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for creature catalogs from RON files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a creature catalog from a RON file.
    ///
    /// RON format: `Vec<Creature>`, e.g.
    ///
    /// ```text
    /// [
    ///     (name: "Pikachu", hp: 35, attack: 55, defense: 40, speed: 90),
    /// ]
    /// ```
    ///
    /// Negative stats fail to parse; empty lists, blank names and duplicate
    /// names are rejected by [`CreatureCatalog::new`].
    pub fn load(path: &Path) -> LoadResult<CreatureCatalog> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse a creature catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<CreatureCatalog> {
        let creatures: Vec<Creature> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse creature catalog RON: {}", e))?;

        CreatureCatalog::new(creatures)
            .map_err(|e| anyhow::anyhow!("Invalid creature catalog: {}", e))
    }
}
