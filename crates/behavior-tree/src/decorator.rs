//! Single-child decorators.

use crate::{Behavior, BoxedBehavior, Status};

/// Logical NOT of its child.
pub struct Inverter<C> {
    child: BoxedBehavior<C>,
}

impl<C> Inverter<C> {
    pub fn new(child: BoxedBehavior<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        self.child.tick(ctx).invert()
    }
}

/// Ticks its child and reports `Success` whatever the child returned.
///
/// Use it for optional steps inside a [`crate::Sequence`].
pub struct AlwaysSucceed<C> {
    child: BoxedBehavior<C>,
}

impl<C> AlwaysSucceed<C> {
    pub fn new(child: BoxedBehavior<C>) -> Self {
        Self { child }
    }
}

impl<C> Behavior<C> for AlwaysSucceed<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        let _ = self.child.tick(ctx);
        Status::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        ticks: u32,
    }

    struct CountAndFail;
    impl Behavior<Counter> for CountAndFail {
        fn tick(&self, ctx: &mut Counter) -> Status {
            ctx.ticks += 1;
            Status::Failure
        }
    }

    struct HasTicked;
    impl Behavior<Counter> for HasTicked {
        fn tick(&self, ctx: &mut Counter) -> Status {
            Status::from_bool(ctx.ticks > 0)
        }
    }

    #[test]
    fn inverter_negates_condition() {
        let healthy = Inverter::new(Box::new(HasTicked));

        let mut ctx = Counter { ticks: 0 };
        assert_eq!(healthy.tick(&mut ctx), Status::Success);
        ctx.ticks = 2;
        assert_eq!(healthy.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn always_succeed_still_ticks_child() {
        let node = AlwaysSucceed::new(Box::new(CountAndFail));

        let mut ctx = Counter { ticks: 0 };
        assert_eq!(node.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.ticks, 1);
    }
}
