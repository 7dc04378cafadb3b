use std::fmt;

/// The effect class of a spell.
///
/// The variant set is closed: the casting protocol in
/// [`Spellcaster::cast`](crate::caster::Spellcaster::cast) matches on it
/// exhaustively, so adding a variant forces every call site to decide what
/// the new class does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub enum SpellKind {
    /// No combat effect beyond paying the cost.
    Utility,
    /// Inflicts `amount` damage on the target when the cast succeeds.
    Damage { amount: u32 },
}

/// Static, immutable spell definition.
///
/// Spells are templates, not owned pieces of any caster's state: the same
/// spell value can be cast by any number of casters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize))]
pub struct Spell {
    pub name: String,
    /// Mana required to cast this spell.
    pub cost: u32,
    pub description: String,
    pub kind: SpellKind,
}

impl Spell {
    /// Creates a utility spell: casting it spends mana and has no other
    /// effect.
    pub fn utility(name: impl Into<String>, cost: u32, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cost,
            description: description.into(),
            kind: SpellKind::Utility,
        }
    }

    /// Creates a damage spell that hits its target for `amount`.
    pub fn damage(
        name: impl Into<String>,
        cost: u32,
        amount: u32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            description: description.into(),
            kind: SpellKind::Damage { amount },
        }
    }

    /// Returns true for the damage variant.
    pub fn is_damage(&self) -> bool {
        matches!(self.kind, SpellKind::Damage { .. })
    }

    /// Returns the damage amount, or `None` for utility spells.
    pub fn damage_amount(&self) -> Option<u32> {
        match self.kind {
            SpellKind::Utility => None,
            SpellKind::Damage { amount } => Some(amount),
        }
    }

    /// Renders the spell's full details as a single line.
    ///
    /// Callers may rely on the name, cost, and description values appearing
    /// in the output, not on the exact layout. Damage spells also mention
    /// their damage amount.
    pub fn details(&self) -> String {
        match self.kind {
            SpellKind::Utility => format!(
                "Spell Name: {}, Spell Cost: {}, Spell Description: {}",
                self.name, self.cost, self.description
            ),
            SpellKind::Damage { amount } => format!(
                "Spell Name: {}, Spell Cost: {}, Spell Damage: {}, Spell Description: {}",
                self.name, self.cost, amount, self.description
            ),
        }
    }
}

impl fmt::Display for Spell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details())
    }
}
