//! Battle resolution.
//!
//! Each side is folded into a single total [`Modifier`], then the totals are
//! compared:
//!
//! ```text
//! attacker_wins   = attacker.strength > defender.strength
//! defender_losses = max(defender.damage - attacker.protection, 0)
//! attacker_losses = max(attacker.damage - defender.protection, 0)
//! ```
//!
//! Ties on strength go to the defender.

use core::borrow::Borrow;

use crate::modifier::{Modifier, aggregate};

/// Result of a single battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    /// Whether the attacker's total strength strictly exceeds the defender's.
    pub attacker_wins: bool,
    /// `defender.damage - attacker.protection`, clamped at zero.
    pub defender_losses: u32,
    /// `attacker.damage - defender.protection`, clamped at zero.
    pub attacker_losses: u32,
}

impl BattleOutcome {
    /// Returns `(attacker_wins, defender_losses, attacker_losses)`.
    pub const fn as_tuple(&self) -> (bool, u32, u32) {
        (self.attacker_wins, self.defender_losses, self.attacker_losses)
    }
}

impl From<BattleOutcome> for (bool, u32, u32) {
    fn from(outcome: BattleOutcome) -> Self {
        outcome.as_tuple()
    }
}

/// Aggregated totals of both sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Battle {
    pub attacker: Modifier,
    pub defender: Modifier,
}

impl Battle {
    /// Aggregates both sides.
    pub fn between<A, D>(attacker: A, defender: D) -> Self
    where
        A: IntoIterator,
        A::Item: Borrow<Modifier>,
        D: IntoIterator,
        D::Item: Borrow<Modifier>,
    {
        Self {
            attacker: aggregate(attacker),
            defender: aggregate(defender),
        }
    }

    /// Applies the comparison rule to the aggregated totals.
    pub fn outcome(&self) -> BattleOutcome {
        BattleOutcome {
            attacker_wins: self.attacker.strength > self.defender.strength,
            defender_losses: losses(self.defender.damage, self.attacker.protection),
            attacker_losses: losses(self.attacker.damage, self.defender.protection),
        }
    }
}

/// Resolves a battle between two sides.
///
/// Either side may be empty; an empty side totals to [`Modifier::IDENTITY`].
pub fn resolve<A, D>(attacker: A, defender: D) -> BattleOutcome
where
    A: IntoIterator,
    A::Item: Borrow<Modifier>,
    D: IntoIterator,
    D::Item: Borrow<Modifier>,
{
    Battle::between(attacker, defender).outcome()
}

/// Damage left over after protection, clamped into `0..=u32::MAX`.
fn losses(damage: i64, protection: i64) -> u32 {
    u32::try_from(damage.saturating_sub(protection).max(0)).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::Side;

    #[test]
    fn test_fight() {
        let attacker = [Modifier::battle_card(3, 2, 1), Modifier::troop(5, 0, 0)];
        let defender = [
            Modifier::battle_card(2, 0, 1),
            Modifier::troop(5, 0, 0),
            Modifier::divine_intervention(1, 0, 0),
        ];

        let battle = Battle::between(&attacker, &defender);
        assert_eq!(battle.attacker, Modifier::new(8, 2, 1));
        assert_eq!(battle.defender, Modifier::new(8, 0, 1));
        assert_eq!(battle.outcome().as_tuple(), (false, 0, 1));
    }

    #[test]
    fn test_empty_sides() {
        let outcome = resolve(Side::new(), Side::new());
        assert_eq!(outcome, BattleOutcome::default());
        assert_eq!(<(bool, u32, u32)>::from(outcome), (false, 0, 0));
    }

    #[test]
    fn test_attacker_wins_without_losses() {
        let outcome = resolve([Modifier::new(5, 0, 3)], [Modifier::new(3, 0, 3)]);
        assert_eq!(outcome.as_tuple(), (true, 0, 0));
    }

    #[test]
    fn test_tie_goes_to_defender() {
        let outcome = resolve([Modifier::new(4, 0, 0)], [Modifier::new(4, 0, 0)]);
        assert_eq!(outcome.as_tuple(), (false, 0, 0));
    }

    #[test]
    fn test_losses_on_both_sides() {
        let outcome = resolve([Modifier::new(1, 4, 1)], [Modifier::new(0, 3, 2)]);
        assert_eq!(outcome.as_tuple(), (true, 2, 2));
    }

    #[test]
    fn test_losses_clamped_at_zero() {
        assert_eq!(losses(1, 5), 0);
        assert_eq!(losses(i64::MIN, i64::MAX), 0);
        assert_eq!(losses(i64::from(u32::MAX) + 7, 7), u32::MAX);
        assert_eq!(losses(i64::MAX, i64::MIN), u32::MAX);
    }

    #[test]
    fn test_strength_past_i32_still_wins() {
        let outcome = resolve(
            [
                Modifier::new(i64::from(i32::MAX), 0, 0),
                Modifier::new(1, 0, 0),
            ],
            [Modifier::IDENTITY],
        );
        assert!(outcome.attacker_wins);
    }

    #[test]
    fn test_damage_past_i32_is_not_negative() {
        let attacker = [
            Modifier::new(0, i64::from(i32::MAX), 0),
            Modifier::new(0, i64::from(i32::MAX), 0),
        ];
        let outcome = resolve(attacker, [Modifier::new(0, 0, 1)]);
        assert_eq!(outcome.attacker_losses, u32::MAX - 2);
    }

    #[test]
    fn test_order_does_not_matter() {
        let forward = [
            Modifier::battle_card(3, 2, 1),
            Modifier::troop(5, 0, 0),
            Modifier::new(-1, 1, 0),
        ];
        let mut reversed = forward;
        reversed.reverse();
        let defender = [Modifier::new(6, 2, 1)];

        assert_eq!(resolve(&forward, &defender), resolve(&reversed, &defender));
    }
}
