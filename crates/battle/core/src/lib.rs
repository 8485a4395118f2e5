//! Deterministic combat resolution for the card battle game.
//!
//! `battle-core` defines the additive [`Modifier`] triple contributed by cards
//! and units, aggregates the modifiers of each side, and compares the totals
//! to decide a winner and the losses on both sides. Every function here is
//! pure: no I/O, no randomness, no shared state.
pub mod battle;
pub mod config;
pub mod error;
pub mod modifier;
pub mod pack;

pub use battle::{Battle, BattleOutcome, resolve};
pub use config::BattleConfig;
pub use error::PackError;
pub use modifier::{Modifier, ModifierSource, Side, aggregate};
pub use pack::BattlePack;
