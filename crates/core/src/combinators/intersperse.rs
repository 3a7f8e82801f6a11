use crate::Producer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IntersperseState {
	Start,
	Separator,
	Item,
	Done,
}

/// Places a separator between consecutive values, never before the first or after the last.
///
/// A separator is only emitted once the value after it has already been pulled, so one value is
/// held back in `pending` between the separator and the item.
#[derive(Debug, Clone)]
pub struct Intersperse<P: Producer> {
	inner: P,
	separator: P::Item,
	pending: Option<P::Item>,
	state: IntersperseState,
}

impl<P: Producer> Intersperse<P> {
	pub(crate) const fn new(inner: P, separator: P::Item) -> Self {
		Self {
			inner,
			separator,
			pending: None,
			state: IntersperseState::Start,
		}
	}
}

impl<P> Producer for Intersperse<P>
where
	P: Producer,
	P::Item: Clone,
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		match self.state {
			IntersperseState::Start => {
				let value = self.inner.pull();

				self.state = if value.is_some() {
					IntersperseState::Separator
				} else {
					IntersperseState::Done
				};

				value
			}
			IntersperseState::Separator => {
				if let Some(next) = self.inner.pull() {
					self.pending = Some(next);
					self.state = IntersperseState::Item;

					Some(self.separator.clone())
				} else {
					self.state = IntersperseState::Done;

					None
				}
			}
			IntersperseState::Item => {
				self.state = IntersperseState::Separator;

				self.pending.take()
			}
			IntersperseState::Done => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use alloc::{string::String, vec::Vec};

	use crate::{borrowed, empty, range, single};

	#[test]
	fn separates_values() {
		let out = range(1, 4).intersperse(0).collect_to::<Vec<_>>();

		assert_eq!(out, [1, 0, 2, 0, 3]);
	}

	#[test]
	fn output_length() {
		for n in 0..6 {
			let out = range(0, n).intersperse(-1).collect_to::<Vec<_>>();

			assert_eq!(out.len(), (2 * n - 1).max(0) as usize);

			for (i, value) in out.iter().enumerate() {
				assert_eq!(*value == -1, i % 2 == 1);
			}
		}
	}

	#[test]
	fn single_and_empty() {
		assert_eq!(single(7).intersperse(0).collect_to::<Vec<_>>(), [7]);
		assert!(empty::<u8>().intersperse(0).collect_to::<Vec<_>>().is_empty());
	}

	#[test]
	fn joins_words() {
		let words = ["lazy", "pull", "sequences"];

		let sentence = borrowed(&words)
			.cloned()
			.intersperse(" ")
			.collect_to::<String>();

		assert_eq!(sentence, "lazy pull sequences");
	}

	#[test]
	fn stays_exhausted() {
		let mut seq = range(0, 2).intersperse(9);

		assert_eq!(seq.pull(), Some(0));
		assert_eq!(seq.pull(), Some(9));
		assert_eq!(seq.pull(), Some(1));

		for _ in 0..3 {
			assert_eq!(seq.pull(), None);
		}
	}
}
