use alloc::rc::Rc;
use core::{
	fmt::{Debug, Formatter, Result as FmtResult},
	iter::Fuse,
};

use crate::Producer;

#[repr(transparent)]
pub struct Borrowed<'a, T: 'a> {
	slice: &'a [T],
}

impl<'a, T: 'a> Borrowed<'a, T> {
	pub(crate) const fn new(slice: &'a [T]) -> Self {
		Self { slice }
	}

	#[must_use]
	pub const fn remaining(&self) -> &'a [T] {
		self.slice
	}
}

impl<'a, T: 'a> Clone for Borrowed<'a, T> {
	fn clone(&self) -> Self {
		Self { slice: self.slice }
	}
}

impl<'a, T: 'a + Debug> Debug for Borrowed<'a, T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_tuple("Borrowed").field(&self.slice).finish()
	}
}

impl<'a, T: 'a> Producer for Borrowed<'a, T> {
	type Item = &'a T;

	fn pull(&mut self) -> Option<Self::Item> {
		let (first, rest) = self.slice.split_first()?;

		self.slice = rest;

		Some(first)
	}
}

#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct Iter<I> {
	iter: Fuse<I>,
}

impl<I: Iterator> Iter<I> {
	pub(crate) fn new(iter: I) -> Self {
		Self { iter: iter.fuse() }
	}
}

impl<I: Iterator> Producer for Iter<I> {
	type Item = I::Item;

	fn pull(&mut self) -> Option<Self::Item> {
		self.iter.next()
	}
}

/// A cursor into reference-counted storage.
///
/// The storage is never written through, so any number of cursors may walk it at once.
pub struct Shared<T> {
	data: Rc<[T]>,
	index: usize,
}

impl<T> Shared<T> {
	pub(crate) const fn new(data: Rc<[T]>) -> Self {
		Self { data, index: 0 }
	}

	#[must_use]
	pub fn remaining(&self) -> &[T] {
		self.data.get(self.index..).unwrap_or_default()
	}
}

impl<T> Clone for Shared<T> {
	fn clone(&self) -> Self {
		Self {
			data: Rc::clone(&self.data),
			index: self.index,
		}
	}
}

impl<T: Debug> Debug for Shared<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.debug_struct("Shared")
			.field("remaining", &self.remaining())
			.finish()
	}
}

impl<T: Clone> Producer for Shared<T> {
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		let value = self.data.get(self.index)?.clone();

		self.index += 1;

		Some(value)
	}
}
