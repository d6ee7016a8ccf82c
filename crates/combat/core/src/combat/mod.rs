//! Combat resolution.
//!
//! Pure functions from (actor, target, ability) to an event. Nothing here
//! mutates a [`Character`](crate::Character); the caller applies the event.
//!
//! # Integer width
//!
//! All arithmetic is `i32` and saturating. Inputs near `i32::MIN`/`i32::MAX`
//! clamp to the type bounds instead of wrapping, so the damage floor holds for
//! every input.
//!
//! # Core Functions
//!
//! - `resolve_attack`: damage-style event, floor of 1
//! - `resolve_heal`: self-heal capped at maximum hp
//! - `resolve_action`: dispatch on the ability's effect

pub mod damage;
pub mod heal;
pub mod resolve;

pub use damage::{apply_damage, calculate_damage};
pub use heal::resolve_heal;
pub use resolve::{resolve_action, resolve_attack, resolve_attack_with};
