//! Data-driven card content and loaders.
//!
//! Battle packs are described in RON files and turned into
//! [`battle_core::BattlePack`] values. The predefined pack ships embedded in
//! the crate under `data/packs/default.ron`.
//!
//! Content is consumed by callers assembling sides for a battle and never
//! takes part in resolution itself.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, PackCatalog, PackLoader};
