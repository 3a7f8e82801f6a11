mod container;
mod count;
mod generator;

use alloc::rc::Rc;

pub use self::{container::*, count::*, generator::*};
use crate::Sequence;

/// Borrows a slice, yielding references to its elements in order.
pub fn borrowed<T>(slice: &[T]) -> Sequence<Borrowed<'_, T>> {
	Sequence::new(Borrowed::new(slice))
}

/// Wraps any iterator. The iterator is fused so the result stays exhausted once it ends.
pub fn iter<I>(iter: I) -> Sequence<Iter<I::IntoIter>>
where
	I: IntoIterator,
{
	Sequence::new(Iter::new(iter.into_iter()))
}

/// Takes shared ownership of a container. Clones of the resulting sequence share the buffer but
/// each keep their own position in it.
pub fn owned<T: Clone>(data: impl Into<Rc<[T]>>) -> Sequence<Shared<T>> {
	Sequence::new(Shared::new(data.into()))
}

pub fn single<T>(value: T) -> Sequence<Single<T>> {
	Sequence::new(Single::new(value))
}

/// Yields clones of `value` forever. Bound it with [`Sequence::take`] or
/// [`Sequence::take_while`] before draining.
pub fn repeat<T: Clone>(value: T) -> Sequence<Repeat<T>> {
	Sequence::new(Repeat::new(value))
}

/// Counts up from `init` forever.
pub fn iota<T: Countable>(init: T) -> Sequence<Iota<T>> {
	Sequence::new(Iota::new(init))
}

/// Counts from `start` up to, but not including, `end`. Empty when `start >= end`.
pub fn range<T: Countable>(start: T, end: T) -> Sequence<Range<T>> {
	Sequence::new(Range::new(start, end))
}

/// Drives a state machine: `f` turns the current state into the next value and the state to
/// carry forward, or returns `None` to end the sequence.
pub fn unfold<S, T, F>(state: S, f: F) -> Sequence<Unfold<S, F>>
where
	F: FnMut(S) -> Option<(T, S)>,
{
	Sequence::new(Unfold::new(state, f))
}

/// Calls `f` on every pull until it first returns `None`; it is never called again after that.
pub fn generate<T, F>(f: F) -> Sequence<Generate<F>>
where
	F: FnMut() -> Option<T>,
{
	Sequence::new(Generate::new(f))
}

pub const fn empty<T>() -> Sequence<Empty<T>> {
	Sequence::new(Empty::new())
}
