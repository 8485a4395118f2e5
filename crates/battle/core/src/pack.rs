//! The battle pack: a fixed set of distinct predefined battle cards.

use core::fmt;

use arrayvec::ArrayVec;

use crate::config::BattleConfig;
use crate::error::PackError;
use crate::modifier::{Modifier, ModifierSource};

/// Distinct battle cards, deduplicated by attribute equality.
///
/// Cards keep the order in which they were first supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BattlePack {
    cards: ArrayVec<Modifier, { BattleConfig::PACK_SIZE }>,
}

impl BattlePack {
    /// `(strength, damage, protection)` of the predefined cards.
    pub const DEFAULT_CARDS: [(i64, i64, i64); BattleConfig::PACK_SIZE] = [
        (2, 0, 2),
        (3, 0, 1),
        (1, 3, 0),
        (2, 2, 1),
        (3, 2, 0),
        (4, 1, 0),
    ];

    /// Builds the predefined pack.
    pub fn new() -> Self {
        let cards = Self::DEFAULT_CARDS
            .into_iter()
            .map(|(strength, damage, protection)| {
                Modifier::battle_card(strength, damage, protection)
            })
            .collect();

        Self { cards }
    }

    /// Builds a pack from arbitrary cards.
    ///
    /// Every card is tagged as [`ModifierSource::BattleCard`]. Cards equal to
    /// one already in the pack are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PackError::CapacityExceeded`] as soon as a distinct card
    /// arrives past [`BattleConfig::PACK_SIZE`]; the rest of the input is
    /// not consumed.
    pub fn from_cards(cards: impl IntoIterator<Item = Modifier>) -> Result<Self, PackError> {
        let mut pack = Self {
            cards: ArrayVec::new(),
        };

        for card in cards {
            if pack.contains(&card) {
                continue;
            }

            pack.cards
                .try_push(card.with_source(ModifierSource::BattleCard))
                .map_err(|_| PackError::CapacityExceeded {
                    capacity: BattleConfig::PACK_SIZE,
                })?;
        }

        Ok(pack)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Modifier> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns true if a card with the same attributes is in the pack.
    pub fn contains(&self, card: &Modifier) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Modifier] {
        &self.cards
    }
}

impl Default for BattlePack {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a BattlePack {
    type Item = &'a Modifier;
    type IntoIter = core::slice::Iter<'a, Modifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for BattlePack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, card) in self.cards.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        f.write_str("}")
    }
}
