use tracing::trace;

use crate::{Producer, Sequence};

/// Flattens a sequence of sequences, draining each inner sequence before pulling the next one
/// from `outer`.
#[derive(Debug, Clone)]
pub struct Join<P, Q> {
	outer: P,
	active: Option<Q>,
}

impl<P, Q> Join<P, Q> {
	pub(crate) const fn new(outer: P) -> Self {
		Self {
			outer,
			active: None,
		}
	}
}

impl<P, Q> Producer for Join<P, Q>
where
	P: Producer<Item = Sequence<Q>>,
	Q: Producer,
{
	type Item = Q::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		loop {
			if let Some(active) = &mut self.active {
				if let Some(value) = active.pull() {
					return Some(value);
				}

				self.active = None;
			}

			let next = self.outer.pull()?;

			trace!("adopting next inner sequence");
			self.active = Some(next.into_producer());
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::{vec, vec::Vec};

	use crate::{Producer, iota, iter, owned, range};

	#[test]
	fn flattens_in_order() {
		let nested = vec![owned([1, 2]), owned([3]), owned([4, 5, 6])];

		let out = iter(nested).join().collect_to::<Vec<_>>();

		assert_eq!(out, [1, 2, 3, 4, 5, 6]);
	}

	#[test]
	fn skips_empty_inner_sequences() {
		let out = range(0, 5)
			.transform(|n| range(0, n).filter(|x| x % 2 == 0))
			.join()
			.collect_to::<Vec<_>>();

		assert_eq!(out, [0, 0, 0, 2, 0, 2]);
	}

	#[test]
	fn bounded_inner_from_infinite_outer() {
		let out = iota(1)
			.transform(|n| range(0, n))
			.join()
			.take(6)
			.collect_to::<Vec<_>>();

		assert_eq!(out, [0, 0, 1, 0, 1, 2]);
	}

	#[test]
	fn stays_exhausted() {
		let mut producer = iter([owned([1]), owned([2])]).join().into_producer();

		assert_eq!(producer.pull(), Some(1));
		assert_eq!(producer.pull(), Some(2));

		for _ in 0..3 {
			assert_eq!(producer.pull(), None);
		}
	}
}
