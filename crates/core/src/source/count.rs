use crate::Producer;

/// Types [`iota`](crate::iota) and [`range`](crate::range) can count through.
pub trait Countable: Clone + PartialOrd {
	/// The next value up, or [`None`] past the end of the type's domain.
	#[must_use]
	fn checked_successor(&self) -> Option<Self>;
}

macro_rules! impl_countable {
	(int => $($ty:ty),*) => {
		$(
			impl Countable for $ty {
				fn checked_successor(&self) -> Option<Self> {
					self.checked_add(1)
				}
			}
		)*
	};
	(float => $($ty:ty),*) => {
		$(
			impl Countable for $ty {
				fn checked_successor(&self) -> Option<Self> {
					Some(*self + 1.0)
				}
			}
		)*
	};
}

impl_countable!(int => u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
impl_countable!(float => f32, f64);

/// Counts up forever, or until the last value of `T` has been produced.
#[derive(Debug, Clone)]
pub struct Iota<T> {
	next: Option<T>,
}

impl<T> Iota<T> {
	pub(crate) const fn new(init: T) -> Self {
		Self { next: Some(init) }
	}
}

impl<T: Countable> Producer for Iota<T> {
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		let current = self.next.take()?;

		self.next = current.checked_successor();

		Some(current)
	}
}

#[derive(Debug, Clone)]
pub struct Range<T> {
	current: Option<T>,
	end: T,
}

impl<T> Range<T> {
	pub(crate) const fn new(start: T, end: T) -> Self {
		Self {
			current: Some(start),
			end,
		}
	}
}

impl<T: Countable> Producer for Range<T> {
	type Item = T;

	fn pull(&mut self) -> Option<Self::Item> {
		let current = self.current.take().filter(|current| *current < self.end)?;

		self.current = current.checked_successor();

		Some(current)
	}
}
