//! Leaf nodes evaluated against [`AiContext`](crate::AiContext).
//!
//! - [`conditions`]: read-only checks
//! - [`actions`]: write a [`Pick`](crate::Pick) into the context

pub mod actions;
pub mod conditions;

pub use actions::{UseDefault, UseFirst};
pub use conditions::{InHpBand, OpponentInHpBand};
