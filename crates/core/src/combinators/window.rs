use core::mem;

use tracing::{debug, trace};

use crate::Producer;

/// Yields at most `remaining` values, and never touches upstream once the quota is spent.
#[derive(Debug, Clone)]
pub struct Take<P> {
	inner: P,
	remaining: usize,
}

impl<P> Take<P> {
	pub(crate) const fn new(inner: P, count: usize) -> Self {
		Self {
			inner,
			remaining: count,
		}
	}
}

impl<P: Producer> Producer for Take<P> {
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		if matches!(self.remaining, 0) {
			return None;
		}

		match self.inner.pull() {
			Some(value) => {
				self.remaining -= 1;
				Some(value)
			}
			None => {
				self.remaining = 0;
				None
			}
		}
	}
}

/// Discards the first `pending` values the first time it is pulled, then passes everything
/// through.
#[derive(Debug, Clone)]
pub struct DropFirst<P> {
	inner: P,
	pending: usize,
}

impl<P> DropFirst<P> {
	pub(crate) const fn new(inner: P, count: usize) -> Self {
		Self {
			inner,
			pending: count,
		}
	}
}

impl<P: Producer> Producer for DropFirst<P> {
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		let pending = mem::take(&mut self.pending);

		if pending > 0 {
			debug!(pending, "skipping leading values");

			for _ in 0..pending {
				self.inner.pull()?;
			}
		}

		self.inner.pull()
	}
}

/// Keeps upstream values `0, step, 2 * step, ...` and discards the rest.
#[derive(Debug, Clone)]
pub struct Step<P> {
	inner: P,
	step: usize,
	phase: usize,
}

impl<P> Step<P> {
	pub(crate) const fn new(inner: P, step: usize) -> Self {
		assert!(step != 0, "step size in `Sequence::step` must be non-zero");

		Self {
			inner,
			step,
			phase: 0,
		}
	}
}

impl<P: Producer> Producer for Step<P> {
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		loop {
			let value = self.inner.pull()?;

			let keep = matches!(self.phase, 0);
			self.phase = (self.phase + 1) % self.step;

			if keep {
				return Some(value);
			}
		}
	}
}

/// Yields values while `pred` holds. The first failure closes the stage for good, even if later
/// upstream values would pass again.
#[derive(Clone)]
pub struct TakeWhile<P, F> {
	inner: P,
	pred: F,
	closed: bool,
}

impl<P, F> TakeWhile<P, F> {
	pub(crate) const fn new(inner: P, pred: F) -> Self {
		Self {
			inner,
			pred,
			closed: false,
		}
	}
}

impl<P, F> Producer for TakeWhile<P, F>
where
	P: Producer,
	F: FnMut(&P::Item) -> bool,
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		if self.closed {
			return None;
		}

		match self.inner.pull() {
			Some(value) if (self.pred)(&value) => Some(value),
			_ => {
				trace!("take_while closed");
				self.closed = true;
				None
			}
		}
	}
}

#[derive(Clone)]
pub struct TakeWhileIndexed<P, F> {
	inner: P,
	pred: F,
	index: usize,
	closed: bool,
}

impl<P, F> TakeWhileIndexed<P, F> {
	pub(crate) const fn new(inner: P, pred: F) -> Self {
		Self {
			inner,
			pred,
			index: 0,
			closed: false,
		}
	}
}

impl<P, F> Producer for TakeWhileIndexed<P, F>
where
	P: Producer,
	F: FnMut(usize, &P::Item) -> bool,
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		if self.closed {
			return None;
		}

		let index = self.index;
		self.index += 1;

		match self.inner.pull() {
			Some(value) if (self.pred)(index, &value) => Some(value),
			_ => {
				trace!(index, "take_while_indexed closed");
				self.closed = true;
				None
			}
		}
	}
}

/// Skips the prefix for which `pred` holds, then passes everything through unchecked.
#[derive(Clone)]
pub struct DropWhile<P, F> {
	inner: P,
	pred: F,
	dropping: bool,
}

impl<P, F> DropWhile<P, F> {
	pub(crate) const fn new(inner: P, pred: F) -> Self {
		Self {
			inner,
			pred,
			dropping: true,
		}
	}
}

impl<P, F> Producer for DropWhile<P, F>
where
	P: Producer,
	F: FnMut(&P::Item) -> bool,
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		if mem::take(&mut self.dropping) {
			loop {
				let value = self.inner.pull()?;

				if !(self.pred)(&value) {
					return Some(value);
				}
			}
		}

		self.inner.pull()
	}
}

#[derive(Clone)]
pub struct DropWhileIndexed<P, F> {
	inner: P,
	pred: F,
	dropping: bool,
}

impl<P, F> DropWhileIndexed<P, F> {
	pub(crate) const fn new(inner: P, pred: F) -> Self {
		Self {
			inner,
			pred,
			dropping: true,
		}
	}
}

impl<P, F> Producer for DropWhileIndexed<P, F>
where
	P: Producer,
	F: FnMut(usize, &P::Item) -> bool,
{
	type Item = P::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		if mem::take(&mut self.dropping) {
			let mut index = 0;

			loop {
				let value = self.inner.pull()?;

				if !(self.pred)(index, &value) {
					return Some(value);
				}

				index += 1;
			}
		}

		self.inner.pull()
	}
}
