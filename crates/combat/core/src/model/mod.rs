//! Value types describing combatants, abilities, and combat outcomes.
//!
//! These types carry no rules of their own beyond constructors and small
//! accessors. Mutation is expressed as methods returning a new value.

pub mod ability;
pub mod character;
pub mod event;
pub mod stats;

pub use ability::{Ability, AbilityEffect, AbilityKind};
pub use character::Character;
pub use event::{CombatEvent, HealEvent, TurnEvent};
pub use stats::Stats;
