use crate::EmptyAccess;

/// The per-pull termination signal. A producer answers every pull with an [`Option`]: `Some` when
/// it produced a value and `None` once it is exhausted.
pub trait Signal<T> {
	fn has_value(&self) -> bool;

	fn value(self) -> Result<T, EmptyAccess>;
}

impl<T> Signal<T> for Option<T> {
	fn has_value(&self) -> bool {
		self.is_some()
	}

	fn value(self) -> Result<T, EmptyAccess> {
		self.ok_or(EmptyAccess::front())
	}
}

#[cfg(test)]
mod tests {
	use super::Signal as _;
	use crate::EmptyAccess;

	#[test]
	fn present() -> Result<(), EmptyAccess> {
		let signal = Some(3);

		assert!(signal.has_value());
		assert_eq!(signal.value()?, 3);

		Ok(())
	}

	#[test]
	fn absent() {
		let signal = None::<u8>;

		assert!(!signal.has_value());
		assert_eq!(signal.value(), Err(EmptyAccess::front()));
	}
}
