use core::{
	fmt::{Debug, Formatter, Result as FmtResult},
	marker::PhantomData,
};

use crate::Producer;

#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct Single<T> {
	value: Option<T>,
}

impl<T> Single<T> {
	pub(crate) const fn new(value: T) -> Self {
		Self { value: Some(value) }
	}
}

impl<T> Producer for Single<T> {
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		self.value.take()
	}
}

#[derive(Debug, Clone)]
#[repr(transparent)]
pub struct Repeat<T> {
	value: T,
}

impl<T> Repeat<T> {
	pub(crate) const fn new(value: T) -> Self {
		Self { value }
	}
}

impl<T: Clone> Producer for Repeat<T> {
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		Some(self.value.clone())
	}
}

#[derive(Clone)]
pub struct Unfold<S, F> {
	state: Option<S>,
	f: F,
}

impl<S, F> Unfold<S, F> {
	pub(crate) const fn new(state: S, f: F) -> Self {
		Self {
			state: Some(state),
			f,
		}
	}
}

impl<S, T, F> Producer for Unfold<S, F>
where
	F: FnMut(S) -> Option<(T, S)>,
{
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		let state = self.state.take()?;

		let (value, next) = (self.f)(state)?;

		self.state = Some(next);

		Some(value)
	}
}

#[derive(Clone)]
#[repr(transparent)]
pub struct Generate<F> {
	f: Option<F>,
}

impl<F> Generate<F> {
	pub(crate) const fn new(f: F) -> Self {
		Self { f: Some(f) }
	}
}

impl<T, F> Producer for Generate<F>
where
	F: FnMut() -> Option<T>,
{
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		let value = (self.f.as_mut()?)();

		if value.is_none() {
			self.f = None;
		}

		value
	}
}

#[repr(transparent)]
pub struct Empty<T> {
	marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
	pub(crate) const fn new() -> Self {
		Self {
			marker: PhantomData,
		}
	}
}

impl<T> Clone for Empty<T> {
	fn clone(&self) -> Self {
		Self::new()
	}
}

impl<T> Debug for Empty<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_str("Empty")
	}
}

impl<T> Default for Empty<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Producer for Empty<T> {
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		None
	}
}
