use alloc::rc::Rc;

use tracing::debug;

use crate::{
	BoxedProducer, Cloned, Concat, Convert, Cursor, DropFirst, DropWhile, DropWhileIndexed,
	EmptyAccess, Filter, FilterIndexed, Inspect, Intersperse, Join, Producer, Shared, Step, Take,
	TakeWhile, TakeWhileIndexed, Transform, TransformIndexed, TransformMaybe,
	TransformMaybeIndexed, Zip,
};

/// A lazy sequence: the public handle around one [`Producer`].
///
/// Cloning a sequence clones its whole producer chain, so the clone and the original advance
/// independently. To let several places advance the *same* cursor, go through
/// [`by_ref`](Self::by_ref) instead.
#[must_use = "sequences are lazy and do nothing unless pulled"]
#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct Sequence<P> {
	producer: P,
}

pub type BoxedSequence<'a, T> = Sequence<BoxedProducer<'a, T>>;

impl<P> Sequence<P> {
	pub const fn new(producer: P) -> Self {
		Self { producer }
	}

	#[must_use]
	pub fn into_producer(self) -> P {
		self.producer
	}
}

impl<P: Producer> Sequence<P> {
	pub fn pull(&mut self) -> Option<P::Item> {
		self.producer.pull()
	}

	/// A handle that advances this sequence's cursor rather than a copy of it.
	pub const fn by_ref(&mut self) -> Sequence<&mut P> {
		Sequence::new(&mut self.producer)
	}

	/// Erases the producer type.
	pub fn boxed<'a>(self) -> BoxedSequence<'a, P::Item>
	where
		P: Clone + 'a,
	{
		Sequence::new(BoxedProducer::new(self.producer))
	}

	pub fn transform<F, U>(self, f: F) -> Sequence<Transform<P, F>>
	where
		F: FnMut(P::Item) -> U,
	{
		Sequence::new(Transform::new(self.producer, f))
	}

	pub fn transform_indexed<F, U>(self, f: F) -> Sequence<TransformIndexed<P, F>>
	where
		F: FnMut(usize, P::Item) -> U,
	{
		Sequence::new(TransformIndexed::new(self.producer, f))
	}

	pub fn filter<F>(self, pred: F) -> Sequence<Filter<P, F>>
	where
		F: FnMut(&P::Item) -> bool,
	{
		Sequence::new(Filter::new(self.producer, pred))
	}

	pub fn filter_indexed<F>(self, pred: F) -> Sequence<FilterIndexed<P, F>>
	where
		F: FnMut(usize, &P::Item) -> bool,
	{
		Sequence::new(FilterIndexed::new(self.producer, pred))
	}

	pub fn transform_maybe<F, U>(self, f: F) -> Sequence<TransformMaybe<P, F>>
	where
		F: FnMut(P::Item) -> Option<U>,
	{
		Sequence::new(TransformMaybe::new(self.producer, f))
	}

	pub fn transform_maybe_indexed<F, U>(self, f: F) -> Sequence<TransformMaybeIndexed<P, F>>
	where
		F: FnMut(usize, P::Item) -> Option<U>,
	{
		Sequence::new(TransformMaybeIndexed::new(self.producer, f))
	}

	pub fn inspect<F>(self, f: F) -> Sequence<Inspect<P, F>>
	where
		F: FnMut(&P::Item),
	{
		Sequence::new(Inspect::new(self.producer, f))
	}

	pub fn cloned<'a, T>(self) -> Sequence<Cloned<P>>
	where
		P: Producer<Item = &'a T>,
		T: Clone + 'a,
	{
		Sequence::new(Cloned::new(self.producer))
	}

	pub fn convert<U>(self) -> Sequence<Convert<P, U>>
	where
		P::Item: Into<U>,
	{
		Sequence::new(Convert::new(self.producer))
	}

	/// At most `count` values. Upstream is pulled at most `count` times.
	pub fn take(self, count: usize) -> Sequence<Take<P>> {
		Sequence::new(Take::new(self.producer, count))
	}

	/// Skips `count` values, lazily, on the first pull.
	pub fn drop(self, count: usize) -> Sequence<DropFirst<P>> {
		Sequence::new(DropFirst::new(self.producer, count))
	}

	/// Every `step`th value, starting with the first.
	///
	/// # Panics
	///
	/// Panics if `step` is zero.
	pub fn step(self, step: usize) -> Sequence<Step<P>> {
		Sequence::new(Step::new(self.producer, step))
	}

	pub fn take_while<F>(self, pred: F) -> Sequence<TakeWhile<P, F>>
	where
		F: FnMut(&P::Item) -> bool,
	{
		Sequence::new(TakeWhile::new(self.producer, pred))
	}

	pub fn take_while_indexed<F>(self, pred: F) -> Sequence<TakeWhileIndexed<P, F>>
	where
		F: FnMut(usize, &P::Item) -> bool,
	{
		Sequence::new(TakeWhileIndexed::new(self.producer, pred))
	}

	pub fn drop_while<F>(self, pred: F) -> Sequence<DropWhile<P, F>>
	where
		F: FnMut(&P::Item) -> bool,
	{
		Sequence::new(DropWhile::new(self.producer, pred))
	}

	pub fn drop_while_indexed<F>(self, pred: F) -> Sequence<DropWhileIndexed<P, F>>
	where
		F: FnMut(usize, &P::Item) -> bool,
	{
		Sequence::new(DropWhileIndexed::new(self.producer, pred))
	}

	pub fn concat<Q>(self, other: Sequence<Q>) -> Sequence<Concat<P, Q>>
	where
		Q: Producer<Item = P::Item>,
	{
		crate::concat(self, other)
	}

	pub fn zip<Q>(self, other: Sequence<Q>) -> Sequence<Zip<P, Q>>
	where
		Q: Producer,
	{
		crate::zip(self, other)
	}

	pub fn intersperse(self, separator: P::Item) -> Sequence<Intersperse<P>>
	where
		P::Item: Clone,
	{
		Sequence::new(Intersperse::new(self.producer, separator))
	}

	pub fn join<Q>(self) -> Sequence<Join<P, Q>>
	where
		P: Producer<Item = Sequence<Q>>,
		Q: Producer,
	{
		Sequence::new(Join::new(self.producer))
	}

	pub fn maybe_front(&mut self) -> Option<P::Item> {
		self.pull()
	}

	pub fn front(&mut self) -> Result<P::Item, EmptyAccess> {
		self.maybe_front().ok_or(EmptyAccess::front())
	}

	/// The value `index` places past the current cursor. Everything before it is consumed.
	pub fn maybe_at(&mut self, index: usize) -> Option<P::Item> {
		self.by_ref().drop(index).maybe_front()
	}

	pub fn at(&mut self, index: usize) -> Result<P::Item, EmptyAccess> {
		self.maybe_at(index).ok_or(EmptyAccess::new(index))
	}

	#[tracing::instrument(skip_all)]
	pub fn for_each<F>(self, mut f: F)
	where
		F: FnMut(P::Item),
	{
		let count = self.fold(0usize, |count, value| {
			f(value);
			count + 1
		});

		debug!(count, "sequence drained");
	}

	#[tracing::instrument(skip_all)]
	pub fn for_each_indexed<F>(self, mut f: F)
	where
		F: FnMut(usize, P::Item),
	{
		let count = self.fold(0usize, |index, value| {
			f(index, value);
			index + 1
		});

		debug!(count, "sequence drained");
	}

	/// Consumes values up to and including the first one that satisfies `pred`.
	pub fn find_if<F>(&mut self, mut pred: F) -> Option<P::Item>
	where
		F: FnMut(&P::Item) -> bool,
	{
		self.by_ref().drop_while(|value| !pred(value)).maybe_front()
	}

	/// How many values were pulled before the first one satisfying `pred`.
	pub fn index_of<F>(&mut self, mut pred: F) -> Option<usize>
	where
		F: FnMut(&P::Item) -> bool,
	{
		let mut index = 0;

		while let Some(value) = self.pull() {
			if pred(&value) {
				return Some(index);
			}

			index += 1;
		}

		None
	}

	pub fn fold<B, F>(mut self, init: B, mut f: F) -> B
	where
		F: FnMut(B, P::Item) -> B,
	{
		let mut acc = init;

		while let Some(value) = self.pull() {
			acc = f(acc, value);
		}

		acc
	}

	#[must_use]
	pub fn count(self) -> usize {
		self.fold(0, |count, _| count + 1)
	}

	/// Drains the sequence into any container, through the [`Cursor`] bridge.
	#[tracing::instrument(skip_all)]
	pub fn collect_to<C>(self) -> C
	where
		C: FromIterator<P::Item>,
	{
		C::from_iter(self)
	}
}

impl<P: Producer> IntoIterator for Sequence<P> {
	type IntoIter = Cursor<P>;
	type Item = P::Item;

	fn into_iter(self) -> Self::IntoIter {
		Cursor::new(self.producer)
	}
}

impl<T: Clone> FromIterator<T> for Sequence<Shared<T>> {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		Self::new(Shared::new(Rc::from_iter(iter)))
	}
}
