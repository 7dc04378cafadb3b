pub mod caster;
#[cfg(feature = "serialization")]
pub mod grimoire;
pub mod spell;

#[cfg(test)]
mod tests;

pub use caster::Spellcaster;
#[cfg(feature = "serialization")]
pub use grimoire::{DefinitionError, Grimoire, caster_from_value, spell_from_value};
pub use spell::{Spell, SpellKind};
