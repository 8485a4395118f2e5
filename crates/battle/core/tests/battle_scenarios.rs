use battle_core::{Battle, BattlePack, Modifier, Side, resolve};

/// Equal strength leaves the defender standing; one point of attacker damage
/// gets past the defender's protection.
#[test]
fn test_card_and_troop_battle() {
    let attacker = Side::new()
        .with(Modifier::battle_card(3, 2, 1))
        .with(Modifier::troop(5, 0, 0));
    let defender = Side::new()
        .with(Modifier::battle_card(2, 0, 1))
        .with(Modifier::troop(5, 0, 0))
        .with(Modifier::divine_intervention(1, 0, 0));

    let battle = Battle::between(&attacker, &defender);
    assert_eq!(battle.attacker.attributes(), (8, 2, 1));
    assert_eq!(battle.defender.attributes(), (8, 0, 1));

    let outcome = resolve(attacker, defender);
    assert!(!outcome.attacker_wins);
    assert_eq!(outcome.defender_losses, 0);
    assert_eq!(outcome.attacker_losses, 1);
}

#[test]
fn test_empty_battle() {
    let outcome = resolve(Vec::<Modifier>::new(), Vec::<Modifier>::new());
    assert_eq!(outcome.as_tuple(), (false, 0, 0));
}

#[test]
fn test_attacker_wins_cleanly() {
    let outcome = resolve([Modifier::new(5, 0, 3)], [Modifier::new(3, 0, 3)]);
    assert_eq!(outcome.as_tuple(), (true, 0, 0));
}

#[test]
fn test_equal_strength_does_not_win() {
    let outcome = resolve([Modifier::new(4, 0, 0)], [Modifier::new(4, 0, 0)]);
    assert_eq!(outcome.as_tuple(), (false, 0, 0));
}

#[test]
fn test_full_pack_against_troops() {
    let pack = BattlePack::new();
    let troops = [Modifier::troop(10, 3, 2), Modifier::troop(4, 2, 0)];

    // Pack totals (15, 8, 4).
    let outcome = resolve(&pack, &troops);
    assert_eq!(outcome.as_tuple(), (true, 1, 6));
}
