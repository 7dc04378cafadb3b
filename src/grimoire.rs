//! Named spell registry and untyped definition loading.
//!
//! Spells and spellcasters are plain typed values; this module is the one
//! place untyped data (JSON spellbooks) crosses into the typed model. Each
//! definition is validated field by field in constructor argument order, and
//! the first invalid field decides the reported error.

use std::collections::HashMap;

use serde_json::Value;

use crate::caster::Spellcaster;
use crate::spell::Spell;

/// Errors raised while building spells or casters from untyped definitions.
///
/// These abort construction with no partial state. They are distinct from
/// game-logic refusals (insufficient mana, missing target), which are plain
/// `false` returns on the casting protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The named field is missing or not a string.
    ExpectedString { field: &'static str },
    /// The named field is missing, not a number, or outside the unsigned
    /// 32-bit domain.
    ExpectedNumber { field: &'static str },
    /// The definition is not a JSON object.
    NotAnObject,
    /// The document is not valid JSON, or not shaped like a spellbook.
    Parse(String),
}

impl std::fmt::Display for DefinitionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionError::ExpectedString { field } => {
                write!(f, "field '{}' must be a string", field)
            }
            DefinitionError::ExpectedNumber { field } => {
                write!(f, "field '{}' must be a non-negative number", field)
            }
            DefinitionError::NotAnObject => write!(f, "definition must be a JSON object"),
            DefinitionError::Parse(message) => write!(f, "malformed spellbook: {}", message),
        }
    }
}

impl std::error::Error for DefinitionError {}

/// Reads a required string field.
fn string_field(value: &Value, field: &'static str) -> Result<String, DefinitionError> {
    value
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(DefinitionError::ExpectedString { field })
}

/// Reads a required numeric field into the u32 domain.
///
/// Fractional, negative, and oversized numbers are rejected alongside
/// non-numbers.
fn number_field(value: &Value, field: &'static str) -> Result<u32, DefinitionError> {
    value
        .get(field)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
        .ok_or(DefinitionError::ExpectedNumber { field })
}

/// Builds a spell from an untyped definition.
///
/// Fields are validated in constructor order: `name`, `cost`, `description`,
/// then `damage`. A present `damage` field selects the damage variant and
/// must itself be numeric.
pub fn spell_from_value(value: &Value) -> Result<Spell, DefinitionError> {
    if !value.is_object() {
        return Err(DefinitionError::NotAnObject);
    }
    let name = string_field(value, "name")?;
    let cost = number_field(value, "cost")?;
    let description = string_field(value, "description")?;
    if value.get("damage").is_some() {
        let amount = number_field(value, "damage")?;
        Ok(Spell::damage(name, cost, amount, description))
    } else {
        Ok(Spell::utility(name, cost, description))
    }
}

/// Builds a spellcaster from an untyped definition.
///
/// Fields are validated in constructor order: `name`, `health`, `mana`.
pub fn caster_from_value(value: &Value) -> Result<Spellcaster, DefinitionError> {
    if !value.is_object() {
        return Err(DefinitionError::NotAnObject);
    }
    let name = string_field(value, "name")?;
    let health = number_field(value, "health")?;
    let mana = number_field(value, "mana")?;
    Ok(Spellcaster::new(name, health, mana))
}

/// A library of spells indexed by name.
#[derive(Debug, Clone, Default)]
pub struct Grimoire {
    /// Spells indexed by name.
    spells: HashMap<String, Spell>,
}

impl Grimoire {
    /// Creates a new empty grimoire.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a grimoire holding the built-in spellbook.
    pub fn with_builtin_spells() -> Self {
        let mut grimoire = Self::new();
        grimoire.register(Spell::utility("Gust", 10, "Creates a gentle breeze."));
        grimoire.register(Spell::utility(
            "Veil",
            25,
            "Wraps the caster in shimmering mist.",
        ));
        grimoire.register(Spell::damage(
            "Fireball",
            40,
            30,
            "Conjures a ball of fire.",
        ));
        grimoire.register(Spell::damage(
            "Force Pulse",
            62,
            12,
            "Strikes a foe with a powerful blast, knocking them to the ground.",
        ));
        grimoire.register(Spell::damage(
            "Electric Shock",
            15,
            30,
            "Sends a jolt of electricity, may paralyze the target.",
        ));
        grimoire.register(Spell::damage(
            "Ice Blast",
            15,
            20,
            "Creates a blast of ice, freezing any living thing where it stands.",
        ));
        grimoire
    }

    /// Registers a spell, replacing any previous spell with the same name.
    pub fn register(&mut self, spell: Spell) {
        self.spells.insert(spell.name.clone(), spell);
    }

    /// Looks up a spell by name.
    pub fn get(&self, name: &str) -> Option<&Spell> {
        self.spells.get(name)
    }

    /// Returns the number of registered spells.
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    /// Returns true if no spells are registered.
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Returns the registered spell names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.spells.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Loads a grimoire from a JSON array of spell definitions.
    pub fn from_json_str(text: &str) -> Result<Self, DefinitionError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| DefinitionError::Parse(err.to_string()))?;
        let Some(entries) = value.as_array() else {
            return Err(DefinitionError::Parse(
                "expected a JSON array of spell definitions".to_string(),
            ));
        };
        let mut grimoire = Self::new();
        for entry in entries {
            grimoire.register(spell_from_value(entry)?);
        }
        Ok(grimoire)
    }
}
