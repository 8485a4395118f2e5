//! Battle pack loader.
//!
//! Loads card lists from RON files and assembles them into battle packs.

use std::path::Path;

use anyhow::Context;
use battle_core::{BattlePack, Modifier};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Pack catalog structure for RON files.
///
/// Omitted attributes default to 0; the source tag is always rewritten to
/// `BattleCard` when the pack is assembled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PackCatalog {
    pub cards: Vec<Modifier>,
}

/// Loader for battle packs from RON files.
pub struct PackLoader;

impl PackLoader {
    /// Loads the predefined pack embedded in the crate.
    pub fn load_default() -> LoadResult<BattlePack> {
        let default_ron = include_str!("../../data/packs/default.ron");
        Self::parse("default.ron", default_ron)
    }

    /// Load a battle pack from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing a PackCatalog
    ///
    /// # Returns
    ///
    /// Returns the assembled BattlePack, or an error if the file cannot be
    /// read, fails to parse, or lists more distinct cards than a pack holds.
    pub fn load(path: &Path) -> LoadResult<BattlePack> {
        let content = read_file(path)?;
        Self::parse(&path.display().to_string(), &content)
    }

    /// Parses RON pack data; `name` only labels errors and logs.
    pub fn parse(name: &str, content: &str) -> LoadResult<BattlePack> {
        let catalog: PackCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", name, e))?;

        let listed = catalog.cards.len();
        let pack = BattlePack::from_cards(catalog.cards)
            .with_context(|| format!("Invalid battle pack in {}", name))?;

        if pack.len() < listed {
            tracing::warn!(
                "Dropped {} duplicate card(s) from {}",
                listed - pack.len(),
                name
            );
        }
        tracing::debug!("Loaded battle pack {} with {} card(s)", name, pack.len());

        Ok(pack)
    }
}
