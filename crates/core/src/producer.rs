use alloc::boxed::Box;
use core::fmt::{Debug, Formatter, Result as FmtResult};

/// The atomic unit of a pipeline: a piece of state that hands out one value per pull.
///
/// # Exhaustion stability
///
/// Once [`pull`](Self::pull) has returned `None`, every later call on the same instance must return
/// `None` as well. Every producer in this crate upholds that, and combinators such as
/// [`DropFirst`](crate::DropFirst), [`Concat`](crate::Concat) and [`Zip`](crate::Zip) rely on it.
///
/// Composed producers own their inner producer by value, so cloning one clones the whole chain of
/// cursors down to the source.
pub trait Producer {
	type Item;

	fn pull(&mut self) -> Option<Self::Item>;
}

impl<P> Producer for &mut P
where
	P: Producer + ?Sized,
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		(**self).pull()
	}
}

trait CloneProducer<'a, T>: Producer<Item = T> {
	fn clone_boxed(&self) -> Box<dyn CloneProducer<'a, T> + 'a>;
}

impl<'a, P> CloneProducer<'a, P::Item> for P
where
	P: Producer + Clone + 'a,
{
	fn clone_boxed(&self) -> Box<dyn CloneProducer<'a, P::Item> + 'a> {
		Box::new(self.clone())
	}
}

/// A type-erased producer, for pipelines whose shape is only known at runtime.
///
/// Cloning a boxed producer deep-copies the erased chain, the same as cloning the concrete one.
pub struct BoxedProducer<'a, T> {
	inner: Box<dyn CloneProducer<'a, T> + 'a>,
}

impl<'a, T> BoxedProducer<'a, T> {
	pub fn new<P>(producer: P) -> Self
	where
		P: Producer<Item = T> + Clone + 'a,
	{
		Self {
			inner: Box::new(producer),
		}
	}
}

impl<T> Clone for BoxedProducer<'_, T> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone_boxed(),
		}
	}
}

impl<T> Debug for BoxedProducer<'_, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_struct("BoxedProducer").finish_non_exhaustive()
	}
}

impl<T> Producer for BoxedProducer<'_, T> {
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		Producer::pull(&mut *self.inner)
	}
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use super::{BoxedProducer, Producer};
	use crate::{iota, range};

	fn pull_twice<P: Producer>(mut producer: P) -> [Option<P::Item>; 2] {
		[producer.pull(), producer.pull()]
	}

	#[test]
	fn mutable_reference_shares_cursor() {
		let mut seq = range(0, 5).into_producer();

		assert_eq!(pull_twice(&mut seq), [Some(0), Some(1)]);
		assert_eq!(seq.pull(), Some(2));
	}

	#[test]
	fn boxed_clones_are_independent() {
		let mut first = BoxedProducer::new(iota(10u8).take(3).into_producer());

		assert_eq!(first.pull(), Some(10));

		let mut second = first.clone();

		assert_eq!(first.pull(), Some(11));
		assert_eq!(first.pull(), Some(12));
		assert_eq!(first.pull(), None);

		let rest = core::iter::from_fn(|| second.pull()).collect::<Vec<_>>();
		assert_eq!(rest, [11, 12]);
	}
}
