use core::{
	error::Error as CoreError,
	fmt::{Display, Formatter, Result as FmtResult},
};

/// A value was requested from a sequence that had nothing left to give.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyAccess {
	index: usize,
}

impl EmptyAccess {
	#[must_use]
	pub const fn new(index: usize) -> Self {
		Self { index }
	}

	#[must_use]
	pub const fn front() -> Self {
		Self::new(0)
	}

	/// The position, counted from the handle's current cursor, that was requested.
	#[must_use]
	pub const fn index(self) -> usize {
		self.index
	}
}

impl Display for EmptyAccess {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		f.write_str("sequence has no element at index ")?;
		Display::fmt(&self.index, f)
	}
}

impl CoreError for EmptyAccess {}
