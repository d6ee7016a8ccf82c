//! Composite nodes: [`Sequence`] and [`Selector`].
//!
//! Both evaluate children strictly left to right and short-circuit, so the
//! order children are given in is the order of priority.

use crate::{Behavior, BoxedBehavior, Status};

/// Runs children until one fails (logical AND).
///
/// Returns `Success` only if every child succeeds. Children after the first
/// failure are not ticked.
pub struct Sequence<C> {
    children: Vec<BoxedBehavior<C>>,
}

impl<C> Sequence<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<BoxedBehavior<C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_failure() {
                return Status::Failure;
            }
        }
        Status::Success
    }
}

/// Runs children until one succeeds (logical OR).
///
/// This is the fallback chain: the first child that succeeds wins and the
/// rest are skipped. Returns `Failure` if every child fails.
pub struct Selector<C> {
    children: Vec<BoxedBehavior<C>>,
}

impl<C> Selector<C> {
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<BoxedBehavior<C>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        for child in &self.children {
            if child.tick(ctx).is_success() {
                return Status::Success;
            }
        }
        Status::Failure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Turn {
        hp: i32,
        picked: Vec<&'static str>,
    }

    struct Pick(&'static str);
    impl Behavior<Turn> for Pick {
        fn tick(&self, ctx: &mut Turn) -> Status {
            ctx.picked.push(self.0);
            Status::Success
        }
    }

    struct Wounded;
    impl Behavior<Turn> for Wounded {
        fn tick(&self, ctx: &mut Turn) -> Status {
            Status::from_bool(ctx.hp < 10)
        }
    }

    struct Never;
    impl Behavior<Turn> for Never {
        fn tick(&self, _ctx: &mut Turn) -> Status {
            Status::Failure
        }
    }

    #[test]
    fn sequence_runs_action_when_guard_holds() {
        let seq = Sequence::new(vec![Box::new(Wounded), Box::new(Pick("heal"))]);

        let mut ctx = Turn {
            hp: 3,
            ..Turn::default()
        };
        assert_eq!(seq.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.picked, vec!["heal"]);
    }

    #[test]
    fn sequence_stops_at_failed_guard() {
        let seq = Sequence::new(vec![Box::new(Wounded), Box::new(Pick("heal"))]);

        let mut ctx = Turn {
            hp: 25,
            ..Turn::default()
        };
        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert!(ctx.picked.is_empty());
    }

    #[test]
    fn selector_takes_first_successful_branch() {
        let sel = Selector::new(vec![
            Box::new(Never),
            Box::new(Pick("basic")),
            Box::new(Pick("unreachable")),
        ]);

        let mut ctx = Turn::default();
        assert_eq!(sel.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.picked, vec!["basic"]);
    }

    #[test]
    fn selector_fails_when_no_branch_applies() {
        let sel = Selector::new(vec![Box::new(Never), Box::new(Never)]);

        let mut ctx = Turn::default();
        assert_eq!(sel.tick(&mut ctx), Status::Failure);
    }

    #[test]
    #[should_panic(expected = "Selector must have at least one child")]
    fn selector_rejects_empty_children() {
        let _ = Selector::<Turn>::new(Vec::new());
    }
}
