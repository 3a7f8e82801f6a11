use core::iter::FusedIterator;

use crate::Producer;

/// Single-pass forward cursor over a producer, used to hand sequences to anything that expects an
/// [`Iterator`].
///
/// A live cursor always holds the value it points at: construction pulls once up front, and every
/// [`advance`](Self::advance) replaces the cached value with a fresh pull. The default cursor has no
/// producer and is the end sentinel.
pub struct Cursor<P: Producer> {
	producer: Option<P>,
	current: Option<P::Item>,
	position: usize,
}

impl<P: Producer> Cursor<P> {
	pub fn new(mut producer: P) -> Self {
		let current = producer.pull();

		Self {
			producer: current.is_some().then_some(producer),
			current,
			position: 0,
		}
	}

	#[must_use]
	pub const fn current(&self) -> Option<&P::Item> {
		self.current.as_ref()
	}

	#[must_use]
	pub const fn is_end(&self) -> bool {
		self.current.is_none()
	}

	/// How many times the cursor has moved since it was created.
	#[must_use]
	pub const fn position(&self) -> usize {
		self.position
	}

	pub fn advance(&mut self) {
		self.next();
	}

	fn refill(&mut self) {
		self.current = self.producer.as_mut().and_then(Producer::pull);

		if self.current.is_none() {
			self.producer = None;
		}
	}
}

impl<P> Clone for Cursor<P>
where
	P: Clone + Producer,
	P::Item: Clone,
{
	fn clone(&self) -> Self {
		Self {
			producer: self.producer.clone(),
			current: self.current.clone(),
			position: self.position,
		}
	}
}

impl<P: Producer> Default for Cursor<P> {
	fn default() -> Self {
		Self {
			producer: None,
			current: None,
			position: 0,
		}
	}
}

impl<P: Producer> PartialEq for Cursor<P> {
	fn eq(&self, other: &Self) -> bool {
		match (&self.current, &other.current) {
			(None, None) => true,
			(Some(_), Some(_)) => self.position == other.position,
			_ => false,
		}
	}
}

impl<P: Producer> FusedIterator for Cursor<P> {}

impl<P: Producer> Iterator for Cursor<P> {
	type Item = P::Item;

	fn next(&mut self) -> Option<Self::Item> {
		let value = self.current.take()?;

		self.position += 1;
		self.refill();

		Some(value)
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(usize::from(self.current.is_some()), None)
	}
}

#[cfg(test)]
mod tests {
	use alloc::{collections::VecDeque, vec::Vec};
	use core::cell::Cell;

	use super::Cursor;
	use crate::{generate, range};

	#[test]
	fn construction_pulls_once() {
		let pulls = Cell::new(0);
		let seq = generate(|| {
			pulls.set(pulls.get() + 1);
			Some(pulls.get())
		});

		let cursor = seq.into_iter();

		assert_eq!(pulls.get(), 1);
		assert_eq!(cursor.current(), Some(&1));
	}

	#[test]
	fn advance_replaces_current() {
		let mut cursor = range(0, 3).into_iter();

		assert_eq!(cursor.current(), Some(&0));
		cursor.advance();
		assert_eq!(cursor.current(), Some(&1));
		assert_eq!(cursor.position(), 1);
	}

	#[test]
	fn reaches_end_sentinel() {
		let mut cursor = range(0, 2).into_iter();
		let end = Cursor::default();

		assert!(cursor != end);
		cursor.advance();
		assert!(cursor != end);
		cursor.advance();
		assert!(cursor == end);
		assert!(cursor.is_end());

		cursor.advance();
		assert!(cursor == end);
	}

	#[test]
	fn equality_tracks_position() {
		let mut a = range(0, 5).into_iter();
		let mut b = range(10, 15).into_iter();

		assert!(a == b);
		a.advance();
		assert!(a != b);
		b.advance();
		assert!(a == b);
	}

	#[test]
	fn empty_source_starts_at_end() {
		assert!(range(0, 0).into_iter() == Cursor::default());
	}

	#[test]
	fn builds_containers() {
		let from_loop = {
			let mut out = Vec::new();
			for x in range(0, 4) {
				out.push(x);
			}
			out
		};
		assert_eq!(from_loop, [0, 1, 2, 3]);

		let deque = range(0, 3).collect_to::<VecDeque<_>>();
		assert_eq!(deque, [0, 1, 2]);
	}
}
