//! Action selection for autonomous combatants.
//!
//! Each decision is a fresh, stateless evaluation:
//!
//! 1. **Snapshot**: [`AiContext`] captures the actor's hp ratio and which
//!    slots are off cooldown.
//! 2. **Rules**: a [`Strategy`] is an ordered list of `(hp band, preferred
//!    kind)` rules compiled into a behavior tree.
//! 3. **Fallback**: the tree always ends in the canonical Basic Attack, so
//!    every call produces exactly one ability.
//!
//! # Core Components
//!
//! - [`choose_action`]: tiered heal / power / basic policy with default thresholds
//! - [`ActionSelector`]: configurable selector returning the chosen slot as well
//! - [`StrategyKind`]: built-in personalities (tiered, aggressive, defensive)

pub mod config;
pub mod context;
pub mod nodes;
pub mod selector;
pub mod strategy;

pub use config::SelectorConfig;
pub use context::{AiContext, Pick};
pub use selector::{ActionSelector, Choice, choose_action};
pub use strategy::{BehaviorTree, HpBand, Rule, Strategy, StrategyKind};
