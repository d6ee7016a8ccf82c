//! Minimal behavior tree for turn-based decision making.
//!
//! Every tick resolves within a single call: there is no `Running` state and
//! no delta time. A tree is evaluated once per decision against a mutable
//! context (the blackboard) and leaves its result there.
//!
//! - [`Behavior`]: trait implemented by every node
//! - [`Status`]: `Success` or `Failure`
//! - Composites: [`Sequence`] (AND), [`Selector`] (OR)
//! - Decorators: [`Inverter`], [`AlwaysSucceed`]
//!
//! Leaves are context-specific: callers implement [`Behavior`] for their own
//! condition and action structs.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::{Behavior, BoxedBehavior};
pub use composite::{Selector, Sequence};
pub use decorator::{AlwaysSucceed, Inverter};
pub use status::Status;
