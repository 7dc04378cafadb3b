//! Arcanum - spell duel demo.
//!
//! Stages a single exchange between two spellcasters: each draws a random
//! spell from the grimoire and casts it at the other.
//!
//! ## Usage
//!
//! ```
//! arcanum [OPTIONS]
//!
//! Options:
//!   --caster "Name HEALTH MANA"   Specify a duelist (repeat for the second).
//!   --spellbook FILE              Load spells from a JSON spellbook file.
//!   --seed N                      Seed the spell selection for reproducible duels.
//!   --json                        Print the final state as JSON.
//! ```
//!
//! The first --caster is the opener, the second the responder. Duelists
//! without an explicit definition default to Loren and Morty at 300 health
//! and 125 mana.

use arcanum::{Grimoire, Spell, Spellcaster};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use std::env;
use std::fs;
use std::process;

/// Parsed command-line configuration.
struct DuelArgs {
    casters: Vec<Spellcaster>,
    spellbook: Option<String>,
    seed: Option<u64>,
    json: bool,
}

/// Parse a `--caster` value of the form "Name HEALTH MANA".
///
/// The name may contain spaces; the last two tokens are health and mana.
fn parse_caster_arg(raw: &str) -> Option<Spellcaster> {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    if tokens.len() < 3 {
        return None;
    }
    let mana: u32 = tokens[tokens.len() - 1].parse().ok()?;
    let health: u32 = tokens[tokens.len() - 2].parse().ok()?;
    let name = tokens[..tokens.len() - 2].join(" ");
    Some(Spellcaster::new(name, health, mana))
}

/// Parse command-line arguments.
fn parse_args() -> DuelArgs {
    let args: Vec<String> = env::args().collect();
    let mut casters: Vec<Spellcaster> = Vec::new();
    let mut spellbook: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--caster" => {
                if i + 1 < args.len() {
                    match parse_caster_arg(&args[i + 1]) {
                        Some(caster) => casters.push(caster),
                        None => {
                            eprintln!("Error: --caster expects \"Name HEALTH MANA\"");
                            process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --caster requires a value");
                    i += 1;
                }
            }
            "--spellbook" => {
                if i + 1 < args.len() {
                    spellbook = Some(args[i + 1].clone());
                    i += 2;
                } else {
                    eprintln!("Error: --spellbook requires a file path");
                    i += 1;
                }
            }
            "--seed" => {
                if i + 1 < args.len() {
                    match args[i + 1].parse() {
                        Ok(value) => seed = Some(value),
                        Err(_) => {
                            eprintln!("Error: --seed expects an integer");
                            process::exit(1);
                        }
                    }
                    i += 2;
                } else {
                    eprintln!("Error: --seed requires a value");
                    i += 1;
                }
            }
            "--json" => {
                json = true;
                i += 1;
            }
            other => {
                eprintln!("Error: unknown option '{}'", other);
                process::exit(1);
            }
        }
    }

    DuelArgs {
        casters,
        spellbook,
        seed,
        json,
    }
}

/// Load the grimoire from a file, or fall back to the built-in spellbook.
fn load_grimoire(path: Option<&str>) -> Grimoire {
    match path {
        Some(path) => {
            let text = match fs::read_to_string(path) {
                Ok(text) => text,
                Err(err) => {
                    eprintln!("Failed to read spellbook '{}': {}", path, err);
                    process::exit(1);
                }
            };
            match Grimoire::from_json_str(&text) {
                Ok(grimoire) => grimoire,
                Err(err) => {
                    eprintln!("Failed to load spellbook '{}': {}", path, err);
                    process::exit(1);
                }
            }
        }
        None => Grimoire::with_builtin_spells(),
    }
}

/// Have `caster` cast `spell` at `target` and narrate the outcome.
fn resolve_cast(caster: &mut Spellcaster, spell: &Spell, target: &mut Spellcaster) {
    let cost = spell.cost;
    let hit = spell.damage_amount();
    if caster.cast(spell, Some(&mut *target)) {
        match hit {
            Some(amount) => println!(
                "{} casts {} - {} takes {} damage ({} health left)",
                caster.name, spell.name, target.name, amount, target.health
            ),
            None => println!("{} casts {}", caster.name, spell.name),
        }
    } else {
        println!(
            "{} fails to cast {} (needs {} mana, has {})",
            caster.name, spell.name, cost, caster.mana
        );
    }
}

fn main() {
    let args = parse_args();
    if args.casters.len() > 2 {
        eprintln!("Error: at most two --caster definitions are supported");
        process::exit(1);
    }

    let grimoire = load_grimoire(args.spellbook.as_deref());
    if grimoire.is_empty() {
        eprintln!("Error: the spellbook contains no spells");
        process::exit(1);
    }

    let mut duelists = args.casters.into_iter();
    let mut opener = duelists
        .next()
        .unwrap_or_else(|| Spellcaster::new("Loren", 300, 125));
    let mut responder = duelists
        .next()
        .unwrap_or_else(|| Spellcaster::new("Morty", 300, 125));

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    println!("========================================");
    println!("   Arcanum - Spell Duel");
    println!("========================================\n");

    println!("Spellbook ({} spells):", grimoire.len());
    for name in grimoire.names() {
        if let Some(spell) = grimoire.get(name) {
            println!("  {}", spell.details());
        }
    }

    println!(
        "\n{} ({} health, {} mana) vs {} ({} health, {} mana)\n",
        opener.name, opener.health, opener.mana, responder.name, responder.health, responder.mana
    );

    let names = grimoire.names();

    // The opener strikes first; the responder answers only if still standing.
    let pick = names.choose(&mut rng).copied().unwrap_or_default();
    if let Some(spell) = grimoire.get(pick) {
        resolve_cast(&mut opener, spell, &mut responder);
    }
    if responder.is_alive() {
        let pick = names.choose(&mut rng).copied().unwrap_or_default();
        if let Some(spell) = grimoire.get(pick) {
            resolve_cast(&mut responder, spell, &mut opener);
        }
    } else {
        println!("{} is defeated before answering", responder.name);
    }

    println!("\n========================================");
    for caster in [&opener, &responder] {
        let status = if caster.is_alive() { "standing" } else { "defeated" };
        println!(
            "{}: {} health, {} mana ({})",
            caster.name, caster.health, caster.mana, status
        );
    }

    if args.json {
        match serde_json::to_string_pretty(&[&opener, &responder]) {
            Ok(text) => println!("\n{}", text),
            Err(err) => {
                eprintln!("Failed to serialize duel state: {}", err);
                process::exit(1);
            }
        }
    }
}
