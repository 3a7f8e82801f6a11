use core::{
	fmt::{Debug, Formatter, Result as FmtResult},
	marker::PhantomData,
};

use crate::Producer;

#[derive(Clone)]
pub struct Transform<P, F> {
	inner: P,
	f: F,
}

impl<P, F> Transform<P, F> {
	pub(crate) const fn new(inner: P, f: F) -> Self {
		Self { inner, f }
	}
}

impl<P, F, U> Producer for Transform<P, F>
where
	P: Producer,
	F: FnMut(P::Item) -> U,
{
	type Item = U;

	fn pull(&mut self) -> Option<Self::Item> {
		self.inner.pull().map(&mut self.f)
	}
}

/// Like [`Transform`], but also hands `f` the number of values this stage has produced so far.
#[derive(Clone)]
pub struct TransformIndexed<P, F> {
	inner: P,
	f: F,
	index: usize,
}

impl<P, F> TransformIndexed<P, F> {
	pub(crate) const fn new(inner: P, f: F) -> Self {
		Self { inner, f, index: 0 }
	}
}

impl<P, F, U> Producer for TransformIndexed<P, F>
where
	P: Producer,
	F: FnMut(usize, P::Item) -> U,
{
	type Item = U;

	fn pull(&mut self) -> Option<Self::Item> {
		let value = self.inner.pull()?;

		let index = self.index;
		self.index += 1;

		Some((self.f)(index, value))
	}
}

/// Keeps pulling until `pred` accepts a value.
///
/// Over an infinite source that never satisfies `pred`, a pull never returns.
#[derive(Clone)]
pub struct Filter<P, F> {
	inner: P,
	pred: F,
}

impl<P, F> Filter<P, F> {
	pub(crate) const fn new(inner: P, pred: F) -> Self {
		Self { inner, pred }
	}
}

impl<P, F> Producer for Filter<P, F>
where
	P: Producer,
	F: FnMut(&P::Item) -> bool,
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		loop {
			let value = self.inner.pull()?;

			if (self.pred)(&value) {
				return Some(value);
			}
		}
	}
}

/// The index passed to `pred` counts every value pulled from upstream by this stage, including
/// the rejected ones.
#[derive(Clone)]
pub struct FilterIndexed<P, F> {
	inner: P,
	pred: F,
	index: usize,
}

impl<P, F> FilterIndexed<P, F> {
	pub(crate) const fn new(inner: P, pred: F) -> Self {
		Self {
			inner,
			pred,
			index: 0,
		}
	}
}

impl<P, F> Producer for FilterIndexed<P, F>
where
	P: Producer,
	F: FnMut(usize, &P::Item) -> bool,
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		loop {
			let value = self.inner.pull()?;

			let index = self.index;
			self.index += 1;

			if (self.pred)(index, &value) {
				return Some(value);
			}
		}
	}
}

/// Filter and transform in one pass: `None` from `f` skips the value.
#[derive(Clone)]
pub struct TransformMaybe<P, F> {
	inner: P,
	f: F,
}

impl<P, F> TransformMaybe<P, F> {
	pub(crate) const fn new(inner: P, f: F) -> Self {
		Self { inner, f }
	}
}

impl<P, F, U> Producer for TransformMaybe<P, F>
where
	P: Producer,
	F: FnMut(P::Item) -> Option<U>,
{
	type Item = U;

	fn pull(&mut self) -> Option<Self::Item> {
		loop {
			let value = self.inner.pull()?;

			if let Some(mapped) = (self.f)(value) {
				return Some(mapped);
			}
		}
	}
}

#[derive(Clone)]
pub struct TransformMaybeIndexed<P, F> {
	inner: P,
	f: F,
	index: usize,
}

impl<P, F> TransformMaybeIndexed<P, F> {
	pub(crate) const fn new(inner: P, f: F) -> Self {
		Self { inner, f, index: 0 }
	}
}

impl<P, F, U> Producer for TransformMaybeIndexed<P, F>
where
	P: Producer,
	F: FnMut(usize, P::Item) -> Option<U>,
{
	type Item = U;

	fn pull(&mut self) -> Option<Self::Item> {
		loop {
			let value = self.inner.pull()?;

			let index = self.index;
			self.index += 1;

			if let Some(mapped) = (self.f)(index, value) {
				return Some(mapped);
			}
		}
	}
}

#[derive(Clone)]
pub struct Inspect<P, F> {
	inner: P,
	f: F,
}

impl<P, F> Inspect<P, F> {
	pub(crate) const fn new(inner: P, f: F) -> Self {
		Self { inner, f }
	}
}

impl<P, F> Producer for Inspect<P, F>
where
	P: Producer,
	F: FnMut(&P::Item),
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		let value = self.inner.pull()?;

		(self.f)(&value);

		Some(value)
	}
}

#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct Cloned<P> {
	inner: P,
}

impl<P> Cloned<P> {
	pub(crate) const fn new(inner: P) -> Self {
		Self { inner }
	}
}

impl<'a, P, T> Producer for Cloned<P>
where
	P: Producer<Item = &'a T>,
	T: Clone + 'a,
{
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		self.inner.pull().cloned()
	}
}

/// Converts every value through [`Into`], mostly to line up element types before a
/// [`concat`](crate::concat).
#[repr(transparent)]
pub struct Convert<P, U> {
	inner: P,
	marker: PhantomData<fn() -> U>,
}

impl<P, U> Convert<P, U> {
	pub(crate) const fn new(inner: P) -> Self {
		Self {
			inner,
			marker: PhantomData,
		}
	}
}

impl<P: Clone, U> Clone for Convert<P, U> {
	fn clone(&self) -> Self {
		Self::new(self.inner.clone())
	}
}

impl<P: Debug, U> Debug for Convert<P, U> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_tuple("Convert").field(&self.inner).finish()
	}
}

impl<P, U> Producer for Convert<P, U>
where
	P: Producer,
	P::Item: Into<U>,
{
	type Item = U;

	fn pull(&mut self) -> Option<Self::Item> {
		self.inner.pull().map(Into::into)
	}
}
