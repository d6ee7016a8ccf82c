//! Deterministic turn-based combat rules.
//!
//! `combat-core` owns the data a fight is made of and the pure functions that
//! transform it. Nothing in this crate stores state between calls: the host
//! keeps the authoritative [`Character`] and [`AbilitySet`] values and replaces
//! them with the values these functions return.
//!
//! - [`model`]: value types (stats, characters, abilities, events)
//! - [`combat`]: attack and heal resolution
//! - [`cooldown`]: per-slot cooldown clocks and the turn-advance rule
//! - [`config`]: tunable parameters and balance constants
//!
//! ```
//! use combat_core::{Ability, Character, resolve_attack};
//!
//! let hero = Character::new_player("Hero");
//! let slime = Character::new_monster("Slime");
//!
//! let event = resolve_attack(&hero, &slime, &Ability::basic_attack());
//! assert_eq!(event.damage, 14);
//! assert_eq!(event.defender_hp_after, 6);
//!
//! let slime = slime.with_hp(event.defender_hp_after);
//! assert!(!slime.is_defeated());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "serde")]
pub mod codec;
pub mod combat;
pub mod config;
pub mod cooldown;
pub mod error;
pub mod model;

#[cfg(feature = "serde")]
pub use codec::{CodecError, decode, encode};
pub use combat::{
    apply_damage, calculate_damage, resolve_action, resolve_attack, resolve_attack_with,
    resolve_heal,
};
pub use config::CombatConfig;
pub use cooldown::{AbilitySet, AbilitySlot};
pub use error::{CombatError, ConfigError, ErrorSeverity};
pub use model::{
    Ability, AbilityEffect, AbilityKind, Character, CombatEvent, HealEvent, Stats, TurnEvent,
};
