//! Additive combat modifiers.
//!
//! A [`Modifier`] is the `(strength, damage, protection)` contribution of a
//! card or unit to one side of a battle. Modifiers combine by attribute-wise
//! addition; the all-zero [`Modifier::IDENTITY`] is the neutral element, so
//! any sequence of modifiers folds into a single total.
//!
//! The [`ModifierSource`] tag only records where a modifier came from. It is
//! shown in the textual form but never takes part in equality, hashing, or
//! arithmetic.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::Sum;
use core::ops::{Add, AddAssign};

/// Classification of the card or unit a modifier was taken from.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierSource {
    /// Untagged modifier, also the tag of aggregated totals.
    #[default]
    Modifier,
    /// Card drawn from a battle pack.
    BattleCard,
    /// One-off card played by a deity.
    DivineInterventionCard,
    /// Unit present on the battlefield.
    Troop,
}

/// Additive `(strength, damage, protection)` triple.
///
/// Values are not validated; negative attributes are accepted as given.
/// Attributes are `i64`, so totals of `i32`-sized cards are exact. Arithmetic
/// wraps only past the `i64` range, keeping combination total, associative
/// and commutative.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Modifier {
    pub strength: i64,
    pub damage: i64,
    pub protection: i64,
    pub source: ModifierSource,
}

impl Modifier {
    /// The all-zero modifier, neutral under [`Modifier::combine`].
    pub const IDENTITY: Self = Self::new(0, 0, 0);

    /// Creates an untagged modifier.
    pub const fn new(strength: i64, damage: i64, protection: i64) -> Self {
        Self {
            strength,
            damage,
            protection,
            source: ModifierSource::Modifier,
        }
    }

    /// Creates a modifier tagged as a battle pack card.
    pub const fn battle_card(strength: i64, damage: i64, protection: i64) -> Self {
        Self::new(strength, damage, protection).with_source(ModifierSource::BattleCard)
    }

    /// Creates a modifier tagged as a divine intervention card.
    pub const fn divine_intervention(strength: i64, damage: i64, protection: i64) -> Self {
        Self::new(strength, damage, protection).with_source(ModifierSource::DivineInterventionCard)
    }

    /// Creates a modifier tagged as a troop.
    pub const fn troop(strength: i64, damage: i64, protection: i64) -> Self {
        Self::new(strength, damage, protection).with_source(ModifierSource::Troop)
    }

    /// Retags this modifier (builder pattern).
    #[must_use]
    pub const fn with_source(mut self, source: ModifierSource) -> Self {
        self.source = source;
        self
    }

    /// Returns the attributes as a `(strength, damage, protection)` tuple.
    pub const fn attributes(&self) -> (i64, i64, i64) {
        (self.strength, self.damage, self.protection)
    }

    /// Attribute-wise sum of `self` and `other`.
    ///
    /// The result keeps the source tag of `self`.
    #[must_use]
    pub const fn combine(self, other: Self) -> Self {
        Self {
            strength: self.strength.wrapping_add(other.strength),
            damage: self.damage.wrapping_add(other.damage),
            protection: self.protection.wrapping_add(other.protection),
            source: self.source,
        }
    }
}

impl From<(i64, i64, i64)> for Modifier {
    fn from((strength, damage, protection): (i64, i64, i64)) -> Self {
        Self::new(strength, damage, protection)
    }
}

impl PartialEq for Modifier {
    fn eq(&self, other: &Self) -> bool {
        self.attributes() == other.attributes()
    }
}

impl Eq for Modifier {}

impl Hash for Modifier {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.attributes().hash(state);
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(strength={}, damage={}, protection={})",
            self.source, self.strength, self.damage, self.protection
        )
    }
}

impl Add for Modifier {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.combine(rhs)
    }
}

impl AddAssign for Modifier {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.combine(rhs);
    }
}

impl Sum for Modifier {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        aggregate(iter)
    }
}

impl<'a> Sum<&'a Modifier> for Modifier {
    fn sum<I: Iterator<Item = &'a Modifier>>(iter: I) -> Self {
        aggregate(iter)
    }
}

/// Folds a sequence of modifiers into their total.
///
/// Starts from [`Modifier::IDENTITY`], so an empty sequence yields the
/// all-zero untagged modifier and every total is untagged.
pub fn aggregate<I>(entries: I) -> Modifier
where
    I: IntoIterator,
    I::Item: Borrow<Modifier>,
{
    entries
        .into_iter()
        .fold(Modifier::IDENTITY, |total, entry| total.combine(*entry.borrow()))
}

/// Modifiers fielded by one combatant for a single battle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Side {
    entries: Vec<Modifier>,
}

impl Side {
    /// Creates an empty side.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a modifier (builder pattern).
    #[must_use]
    pub fn with(mut self, modifier: Modifier) -> Self {
        self.push(modifier);
        self
    }

    /// Appends a modifier.
    pub fn push(&mut self, modifier: Modifier) {
        self.entries.push(modifier);
    }

    /// Aggregated total of every entry.
    pub fn total(&self) -> Modifier {
        aggregate(&self.entries)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Modifier> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Modifier> for Side {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Modifier> for Side {
    fn extend<I: IntoIterator<Item = Modifier>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl IntoIterator for Side {
    type Item = Modifier;
    type IntoIter = std::vec::IntoIter<Modifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Side {
    type Item = &'a Modifier;
    type IntoIter = core::slice::Iter<'a, Modifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
