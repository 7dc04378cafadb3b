//! End-to-end exercise of the public casting API.

use arcanum::{Spell, Spellcaster};

#[test]
fn force_pulse_end_to_end() {
    let mut loren = Spellcaster::new("Loren", 300, 125);
    let mut morty = Spellcaster::new("Morty", 300, 125);
    let force_pulse = Spell::damage(
        "Force Pulse",
        62,
        12,
        "Strikes a foe with a powerful blast, knocking them to the ground.",
    );

    assert!(loren.cast(&force_pulse, Some(&mut morty)));

    assert_eq!(loren.mana, 63);
    assert_eq!(loren.health, 300);
    assert_eq!(morty.health, 288);
    assert_eq!(morty.mana, 125);
}

#[test]
fn casting_tiers_stay_distinct() {
    // Game-logic refusals are plain false returns, never panics or errors.
    let mut broke = Spellcaster::new("Pauper", 300, 0);
    let mut bystander = Spellcaster::new("Bystander", 300, 125);
    let gust = Spell::utility("Gust", 10, "Creates a gentle breeze.");
    let pulse = Spell::damage("Force Pulse", 62, 12, "Strikes a foe with a powerful blast.");

    assert!(!broke.cast(&gust, None));
    assert!(!broke.cast(&pulse, Some(&mut bystander)));
    assert!(!bystander.cast(&pulse, None));

    assert_eq!(broke.mana, 0);
    assert_eq!(bystander.health, 300);
    assert_eq!(bystander.mana, 125);
}

#[cfg(feature = "serialization")]
#[test]
fn spellbook_backed_duel() {
    use arcanum::Grimoire;

    let grimoire = Grimoire::with_builtin_spells();
    let mut loren = Spellcaster::new("Loren", 300, 125);
    let mut morty = Spellcaster::new("Morty", 300, 125);

    let pulse = grimoire.get("Force Pulse").expect("builtin spell");
    assert!(loren.cast(pulse, Some(&mut morty)));
    assert_eq!(loren.mana, 63);
    assert_eq!(morty.health, 288);
}
