//! The [`Behavior`] trait shared by every node.
//!
//! Nodes are generic over a context type `C` so the same composites can drive
//! any blackboard the caller defines.

use crate::Status;

/// A node that can be evaluated against a context.
pub trait Behavior<C>: Send + Sync {
    /// Evaluates the node once.
    ///
    /// Conditions only read `ctx`; actions may write their decision into it.
    fn tick(&self, ctx: &mut C) -> Status;
}

/// Heap-allocated node, used for heterogeneous child lists.
pub type BoxedBehavior<C> = Box<dyn Behavior<C>>;

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
