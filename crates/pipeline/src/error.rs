use core::{
	error::Error as CoreError,
	fmt::{Display, Formatter, Result as FmtResult},
};

/// Everything that can go wrong between pipeline text and a running sequence.
///
/// Parse errors carry the byte offset into the source text where they were detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineError {
	InvalidCharacter(usize),
	UnexpectedToken(usize),
	MissingArgument(usize),
	InvalidNumber(usize),
	UnknownSource(usize),
	UnknownStage(usize),
	EmptyPipeline,
	ZeroStep,
	ZeroDivisor,
}

impl PipelineError {
	#[must_use]
	pub const fn offset(self) -> Option<usize> {
		match self {
			Self::InvalidCharacter(offset)
			| Self::UnexpectedToken(offset)
			| Self::MissingArgument(offset)
			| Self::InvalidNumber(offset)
			| Self::UnknownSource(offset)
			| Self::UnknownStage(offset) => Some(offset),
			Self::EmptyPipeline | Self::ZeroStep | Self::ZeroDivisor => None,
		}
	}
}

impl Display for PipelineError {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		let (message, offset) = match *self {
			Self::InvalidCharacter(offset) => ("invalid character", offset),
			Self::UnexpectedToken(offset) => ("unexpected token", offset),
			Self::MissingArgument(offset) => ("missing argument", offset),
			Self::InvalidNumber(offset) => ("number out of range", offset),
			Self::UnknownSource(offset) => ("unknown source", offset),
			Self::UnknownStage(offset) => ("unknown stage", offset),
			Self::EmptyPipeline => return f.write_str("pipeline has no source"),
			Self::ZeroStep => return f.write_str("step size must be non-zero"),
			Self::ZeroDivisor => return f.write_str("cannot keep multiples of zero"),
		};

		f.write_str(message)?;
		f.write_str(" at offset ")?;
		Display::fmt(&offset, f)
	}
}

impl CoreError for PipelineError {}

#[cfg(test)]
mod tests {
	use alloc::string::ToString as _;

	use super::PipelineError;

	#[test]
	fn display() {
		assert_eq!(
			PipelineError::UnknownStage(9).to_string(),
			"unknown stage at offset 9"
		);
		assert_eq!(
			PipelineError::ZeroStep.to_string(),
			"step size must be non-zero"
		);
	}

	#[test]
	fn offsets() {
		assert_eq!(PipelineError::InvalidNumber(3).offset(), Some(3));
		assert_eq!(PipelineError::EmptyPipeline.offset(), None);
	}
}
