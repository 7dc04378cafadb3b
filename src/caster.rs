use crate::spell::{Spell, SpellKind};

/// A combat entity that can cast spells and be targeted by them.
///
/// Health and mana are mutated only through [`take_damage`](Self::take_damage)
/// and [`spend_mana`](Self::spend_mana); [`cast`](Self::cast) composes the
/// two into the one operation where their invariants interact.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Spellcaster {
    pub name: String,
    /// Remaining health. Never negative; lethal damage clamps it to 0.
    pub health: u32,
    /// Remaining mana, spent by casting spells.
    pub mana: u32,
    /// False once health has reached 0. Dead casters stay dead.
    pub alive: bool,
}

impl Spellcaster {
    /// Creates a caster with the given starting health and mana.
    pub fn new(name: impl Into<String>, health: u32, mana: u32) -> Self {
        Self {
            name: name.into(),
            health,
            mana,
            alive: health > 0,
        }
    }

    /// Inflicts `amount` damage on this caster.
    ///
    /// Health stops at zero no matter how far the damage overshoots, and
    /// reaching zero marks the caster dead. Damaging an already dead caster
    /// is allowed and leaves it at zero health. Mana is untouched.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
        if self.health == 0 {
            self.alive = false;
        }
    }

    /// Spends `cost` mana if the caster can afford it.
    ///
    /// Returns true and deducts the cost on success. Insufficient mana is a
    /// normal refusal, not an error: the balance is left untouched and the
    /// call returns false.
    pub fn spend_mana(&mut self, cost: u32) -> bool {
        if self.mana >= cost {
            self.mana -= cost;
            true
        } else {
            false
        }
    }

    /// Attempts to cast `spell`, paying its cost from this caster's mana.
    ///
    /// Utility spells need no target and ignore one if passed. Damage spells
    /// require a target and either fully succeed (cost paid, damage dealt)
    /// or fully fail with neither party touched. Payment always precedes
    /// damage; damage is never dealt on a refused payment.
    ///
    /// Returns true if the spell was cast.
    pub fn cast(&mut self, spell: &Spell, target: Option<&mut Spellcaster>) -> bool {
        match spell.kind {
            SpellKind::Utility => self.spend_mana(spell.cost),
            SpellKind::Damage { amount } => match target {
                Some(target) => {
                    if self.spend_mana(spell.cost) {
                        target.take_damage(amount);
                        true
                    } else {
                        false
                    }
                }
                // A damage spell with nothing to hit fizzles before any
                // mana is committed.
                None => false,
            },
        }
    }

    /// Returns true while the caster has health remaining.
    pub fn is_alive(&self) -> bool {
        self.alive
    }
}
