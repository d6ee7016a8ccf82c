//! Ability slots and their cooldown clocks.
//!
//! # Turn model
//!
//! Cooldowns are counted in the owning combatant's turns:
//!
//! 1. At the start of its turn, every slot of the acting combatant advances
//!    once ([`AbilitySet::advance_turn`]).
//! 2. The action selector picks among slots that are now usable.
//! 3. The chosen slot is activated ([`AbilitySet::activate`]), setting its
//!    cooldown to `cooldown_max`.
//!
//! A slot with `cooldown_max = n` used on turn `t` is usable again on turn
//! `t + n`.

pub mod set;
pub mod slot;

pub use set::AbilitySet;
pub use slot::AbilitySlot;
