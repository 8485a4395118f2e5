//! Error types for battle-core.
//!
//! Combining modifiers and resolving battles are total operations and never
//! fail. The only fallible constructor is building a [`BattlePack`] from
//! caller-supplied cards.
//!
//! [`BattlePack`]: crate::pack::BattlePack

/// Errors raised while assembling a battle pack.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackError {
    /// More distinct cards were supplied than the pack can hold.
    #[error("battle pack holds at most {capacity} distinct cards")]
    CapacityExceeded { capacity: usize },
}

impl PackError {
    /// Returns a static string identifier for this error variant.
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::CapacityExceeded { .. } => "PACK_CAPACITY_EXCEEDED",
        }
    }
}
