use tracing::trace;

use crate::{Producer, Sequence};

/// Drains `first` completely before touching `second`. Once `first` is exhausted it is dropped
/// and never pulled again.
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
	first: Option<A>,
	second: B,
}

impl<A, B> Concat<A, B> {
	pub(crate) const fn new(first: A, second: B) -> Self {
		Self {
			first: Some(first),
			second,
		}
	}
}

impl<A, B> Producer for Concat<A, B>
where
	A: Producer,
	B: Producer<Item = A::Item>,
{
	type Item = A::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		if let Some(first) = &mut self.first {
			if let Some(value) = first.pull() {
				return Some(value);
			}

			trace!("first half of concat exhausted");
			self.first = None;
		}

		self.second.pull()
	}
}

/// Pulls both inputs on every call, even when the first one is already exhausted, so
/// side-effecting inputs keep running in lockstep. Yields only when both produced a value.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
	a: A,
	b: B,
}

impl<A, B> Zip<A, B> {
	pub(crate) const fn new(a: A, b: B) -> Self {
		Self { a, b }
	}
}

impl<A, B> Producer for Zip<A, B>
where
	A: Producer,
	B: Producer,
{
	type Item = (A::Item, B::Item);

	fn pull(&mut self) -> Option<Self::Item> {
		let a = self.a.pull();
		let b = self.b.pull();

		Some((a?, b?))
	}
}

#[derive(Debug, Clone)]
pub struct Zip3<A, B, C> {
	a: A,
	b: B,
	c: C,
}

impl<A, B, C> Producer for Zip3<A, B, C>
where
	A: Producer,
	B: Producer,
	C: Producer,
{
	type Item = (A::Item, B::Item, C::Item);

	fn pull(&mut self) -> Option<Self::Item> {
		let a = self.a.pull();
		let b = self.b.pull();
		let c = self.c.pull();

		Some((a?, b?, c?))
	}
}

#[derive(Debug, Clone)]
pub struct Zip4<A, B, C, D> {
	a: A,
	b: B,
	c: C,
	d: D,
}

impl<A, B, C, D> Producer for Zip4<A, B, C, D>
where
	A: Producer,
	B: Producer,
	C: Producer,
	D: Producer,
{
	type Item = (A::Item, B::Item, C::Item, D::Item);

	fn pull(&mut self) -> Option<Self::Item> {
		let a = self.a.pull();
		let b = self.b.pull();
		let c = self.c.pull();
		let d = self.d.pull();

		Some((a?, b?, c?, d?))
	}
}

pub fn concat<A, B>(a: Sequence<A>, b: Sequence<B>) -> Sequence<Concat<A, B>>
where
	A: Producer,
	B: Producer<Item = A::Item>,
{
	Sequence::new(Concat::new(a.into_producer(), b.into_producer()))
}

pub fn concat3<A, B, C>(
	a: Sequence<A>,
	b: Sequence<B>,
	c: Sequence<C>,
) -> Sequence<Concat<Concat<A, B>, C>>
where
	A: Producer,
	B: Producer<Item = A::Item>,
	C: Producer<Item = A::Item>,
{
	concat(concat(a, b), c)
}

pub fn concat4<A, B, C, D>(
	a: Sequence<A>,
	b: Sequence<B>,
	c: Sequence<C>,
	d: Sequence<D>,
) -> Sequence<Concat<Concat<Concat<A, B>, C>, D>>
where
	A: Producer,
	B: Producer<Item = A::Item>,
	C: Producer<Item = A::Item>,
	D: Producer<Item = A::Item>,
{
	concat(concat3(a, b, c), d)
}

pub fn zip<A, B>(a: Sequence<A>, b: Sequence<B>) -> Sequence<Zip<A, B>>
where
	A: Producer,
	B: Producer,
{
	Sequence::new(Zip::new(a.into_producer(), b.into_producer()))
}

pub fn zip3<A, B, C>(a: Sequence<A>, b: Sequence<B>, c: Sequence<C>) -> Sequence<Zip3<A, B, C>>
where
	A: Producer,
	B: Producer,
	C: Producer,
{
	Sequence::new(Zip3 {
		a: a.into_producer(),
		b: b.into_producer(),
		c: c.into_producer(),
	})
}

pub fn zip4<A, B, C, D>(
	a: Sequence<A>,
	b: Sequence<B>,
	c: Sequence<C>,
	d: Sequence<D>,
) -> Sequence<Zip4<A, B, C, D>>
where
	A: Producer,
	B: Producer,
	C: Producer,
	D: Producer,
{
	Sequence::new(Zip4 {
		a: a.into_producer(),
		b: b.into_producer(),
		c: c.into_producer(),
		d: d.into_producer(),
	})
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;
	use core::cell::Cell;

	use super::{concat, concat3, concat4, zip, zip3, zip4};
	use crate::{borrowed, empty, generate, iota, owned, range, repeat, single};

	#[test]
	fn concat_appends_in_order() {
		let a = [1, 2, 3];
		let b = [4, 5];

		let out = concat(owned(a), owned(b)).collect_to::<Vec<_>>();

		assert_eq!(out.len(), a.len() + b.len());
		assert_eq!(out[..a.len()], a);
		assert_eq!(out[a.len()..], b);
	}

	#[test]
	fn concat_with_empty_sides() {
		assert_eq!(
			concat(empty(), range(0, 2)).collect_to::<Vec<_>>(),
			[0, 1]
		);
		assert_eq!(
			concat(range(0, 2), empty()).collect_to::<Vec<_>>(),
			[0, 1]
		);
	}

	#[test]
	fn concat_never_returns_to_first() {
		let calls = Cell::new(0);
		let first = generate(|| {
			calls.set(calls.get() + 1);
			(calls.get() != 2).then_some(0)
		});

		let out = concat(first, range(1, 4)).collect_to::<Vec<_>>();

		assert_eq!(out, [0, 1, 2, 3]);
		assert_eq!(calls.get(), 2);
	}

	#[test]
	fn concat_many() {
		let out = concat4(single(0), range(1, 3), single(3), repeat(4).take(2))
			.collect_to::<Vec<_>>();

		assert_eq!(out, [0, 1, 2, 3, 4, 4]);

		let mixed = concat3(
			range(0u8, 2).convert::<i64>(),
			single(-1i64),
			range(0i32, 1).convert::<i64>(),
		)
		.collect_to::<Vec<_>>();

		assert_eq!(mixed, [0, 1, -1, 0]);
	}

	#[test]
	fn zip_stops_at_shortest() {
		let letters = ['a', 'b', 'c'];

		let out = zip(iota(0), borrowed(&letters).cloned()).collect_to::<Vec<_>>();

		assert_eq!(out, [(0, 'a'), (1, 'b'), (2, 'c')]);
		assert_eq!(zip(range(0, 5), range(0, 2)).count(), 2);
		assert_eq!(zip(range(0, 0), iota(0)).count(), 0);
	}

	#[test]
	fn zip_pulls_every_input() {
		let pulls = Cell::new(0);
		let counted = generate(|| {
			pulls.set(pulls.get() + 1);
			Some(pulls.get())
		});

		let mut seq = zip(range(0, 1), counted);

		assert_eq!(seq.pull(), Some((0, 1)));
		assert_eq!(seq.pull(), None);
		assert_eq!(seq.pull(), None);
		assert_eq!(pulls.get(), 3);
	}

	#[test]
	fn zip_wider() {
		let three = zip3(range(0, 3), repeat('x'), iota(10)).collect_to::<Vec<_>>();
		assert_eq!(three, [(0, 'x', 10), (1, 'x', 11), (2, 'x', 12)]);

		let four = zip4(iota(0), iota(1), iota(2), range(3, 5)).collect_to::<Vec<_>>();
		assert_eq!(four, [(0, 1, 2, 3), (1, 2, 3, 4)]);
	}

	#[test]
	fn concat_stays_exhausted() {
		let mut seq = concat(single(1), owned([2]));

		assert_eq!(seq.pull(), Some(1));
		assert_eq!(seq.pull(), Some(2));

		for _ in 0..3 {
			assert_eq!(seq.pull(), None);
		}
	}

	#[test]
	fn wide_zips_stay_exhausted() {
		let mut three = zip3(range(0, 1), iota(0), repeat('x'));
		let mut four = zip4(iota(0), range(0, 1), iota(0), iota(0));

		assert_eq!(three.pull(), Some((0, 0, 'x')));
		assert_eq!(four.pull(), Some((0, 0, 0, 0)));

		for _ in 0..3 {
			assert_eq!(three.pull(), None);
			assert_eq!(four.pull(), None);
		}
	}
}
