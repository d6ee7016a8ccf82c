//! Headless combat simulator.
//!
//! Pits two AI-controlled combatants against each other using the rules in
//! `combat-core` and the selectors in `combat-ai`. Fully deterministic: the
//! same configuration always produces the same turn log.
//!
//! - [`encounter`]: the turn loop and its records
//! - [`matrix`]: all strategy pairings at once
//! - [`config`]: environment-driven configuration

pub mod config;
pub mod encounter;
pub mod error;
pub mod matrix;

pub use config::SimConfig;
pub use encounter::{Combatant, Encounter, EncounterReport, Outcome, Side, TurnRecord};
pub use error::SimError;
pub use matrix::{MatchupResult, run_matrix};
