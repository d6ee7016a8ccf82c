//! Shorthand constructors returning boxed nodes.

use crate::{AlwaysSucceed, BoxedBehavior, Inverter, Selector, Sequence};

#[inline]
pub fn sequence<C: 'static>(children: Vec<BoxedBehavior<C>>) -> BoxedBehavior<C> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<BoxedBehavior<C>>) -> BoxedBehavior<C> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn inverter<C: 'static>(child: BoxedBehavior<C>) -> BoxedBehavior<C> {
    Box::new(Inverter::new(child))
}

#[inline]
pub fn always_succeed<C: 'static>(child: BoxedBehavior<C>) -> BoxedBehavior<C> {
    Box::new(AlwaysSucceed::new(child))
}
