#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![no_std]

//! Declarative integer pipelines lowered onto [`lazyseq_core`] sequences.
//!
//! A [`Pipeline`] is a [`Source`] followed by any number of [`Stage`]s. It can be written as text
//! (`range 0 10 | mul 3 | take 2`), or deserialized from any serde format, and [`Pipeline::build`]
//! turns it into a single type-erased [`BoxedSequence`].

extern crate alloc;

mod error;
mod inner;
mod parser;

use alloc::vec::Vec;
use core::{
	fmt::{Display, Formatter, Result as FmtResult},
	str::FromStr,
};

use lazyseq_core::{BoxedSequence, iota, owned, range, repeat, single, unfold};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub use self::{error::*, parser::*};

/// Where a pipeline's values come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Source {
	/// A fixed list of values (`values [1, 2, 3]`).
	Values(Vec<i64>),
	/// Exactly one value (`single 7`).
	Single(i64),
	/// The same value forever (`repeat 7`).
	Repeat(i64),
	/// Counts up from a value forever (`iota 0`).
	Iota(i64),
	/// Counts from `start` up to, but excluding, `end` (`range 0 10`).
	Range { start: i64, end: i64 },
	/// `1, 1, 2, 3, 5, ...`, ending at the last value that fits in an `i64` (`fibonacci`).
	Fibonacci,
}

impl Source {
	#[must_use]
	pub fn build(&self) -> BoxedSequence<'static, i64> {
		match *self {
			Self::Values(ref values) => owned(values.as_slice()).boxed(),
			Self::Single(value) => single(value).boxed(),
			Self::Repeat(value) => repeat(value).boxed(),
			Self::Iota(start) => iota(start).boxed(),
			Self::Range { start, end } => range(start, end).boxed(),
			Self::Fibonacci => unfold((Some(1i64), Some(1i64)), |(a, b)| {
				let a = a?;

				Some((a, (b, b.and_then(|b| a.checked_add(b)))))
			})
			.boxed(),
		}
	}
}

impl Display for Source {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::Values(values) => {
				f.write_str("values [")?;

				for (i, value) in values.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}

					Display::fmt(value, f)?;
				}

				f.write_str("]")
			}
			Self::Single(value) => write!(f, "single {value}"),
			Self::Repeat(value) => write!(f, "repeat {value}"),
			Self::Iota(start) => write!(f, "iota {start}"),
			Self::Range { start, end } => write!(f, "range {start} {end}"),
			Self::Fibonacci => f.write_str("fibonacci"),
		}
	}
}

/// One step applied to the values flowing through a pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
	Take(usize),
	Drop(usize),
	/// Keep every nth value, starting with the first.
	Step(usize),
	/// Wrapping addition.
	Add(i64),
	/// Wrapping multiplication.
	Mul(i64),
	KeepMultiplesOf(i64),
	/// Stops at the first value not below the bound.
	TakeWhileBelow(i64),
	/// Skips values until the first one not below the bound.
	DropWhileBelow(i64),
	Intersperse(i64),
	/// Continue with another source once the current values run out.
	Concat(Source),
	/// Pairs values with another source and adds them, ending with the shorter of the two.
	ZipSum(Source),
	/// Replaces each value `n` with `0, 1, ..., n - 1`.
	Expand,
}

impl Stage {
	pub fn apply(
		&self,
		seq: BoxedSequence<'static, i64>,
	) -> Result<BoxedSequence<'static, i64>, PipelineError> {
		Ok(match *self {
			Self::Take(count) => seq.take(count).boxed(),
			Self::Drop(count) => seq.drop(count).boxed(),
			Self::Step(0) => return Err(PipelineError::ZeroStep),
			Self::Step(step) => seq.step(step).boxed(),
			Self::Add(n) => seq.transform(move |x| x.wrapping_add(n)).boxed(),
			Self::Mul(n) => seq.transform(move |x| x.wrapping_mul(n)).boxed(),
			Self::KeepMultiplesOf(0) => return Err(PipelineError::ZeroDivisor),
			Self::KeepMultiplesOf(n) => seq.filter(move |x| x.wrapping_rem(n) == 0).boxed(),
			Self::TakeWhileBelow(bound) => seq.take_while(move |x| *x < bound).boxed(),
			Self::DropWhileBelow(bound) => seq.drop_while(move |x| *x < bound).boxed(),
			Self::Intersperse(separator) => seq.intersperse(separator).boxed(),
			Self::Concat(ref source) => seq.concat(source.build()).boxed(),
			Self::ZipSum(ref source) => seq
				.zip(source.build())
				.transform(|(a, b)| a.wrapping_add(b))
				.boxed(),
			Self::Expand => seq.transform(|n| range(0, n)).join().boxed(),
		})
	}
}

impl Display for Stage {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		match self {
			Self::Take(count) => write!(f, "take {count}"),
			Self::Drop(count) => write!(f, "drop {count}"),
			Self::Step(step) => write!(f, "step {step}"),
			Self::Add(n) => write!(f, "add {n}"),
			Self::Mul(n) => write!(f, "mul {n}"),
			Self::KeepMultiplesOf(n) => write!(f, "keep_multiples_of {n}"),
			Self::TakeWhileBelow(bound) => write!(f, "take_while_below {bound}"),
			Self::DropWhileBelow(bound) => write!(f, "drop_while_below {bound}"),
			Self::Intersperse(separator) => write!(f, "intersperse {separator}"),
			Self::Concat(source) => write!(f, "concat {source}"),
			Self::ZipSum(source) => write!(f, "zip_sum {source}"),
			Self::Expand => f.write_str("expand"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
	pub source: Source,
	#[serde(default)]
	pub stages: Vec<Stage>,
}

impl Pipeline {
	#[must_use]
	pub const fn new(source: Source) -> Self {
		Self {
			source,
			stages: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_stage(mut self, stage: Stage) -> Self {
		self.stages.push(stage);
		self
	}

	#[tracing::instrument(skip_all, fields(stages = self.stages.len()))]
	pub fn build(&self) -> Result<BoxedSequence<'static, i64>, PipelineError> {
		debug!(source = %self.source, "building pipeline");

		self.stages
			.iter()
			.try_fold(self.source.build(), |seq, stage| {
				trace!(%stage, "applying stage");
				stage.apply(seq)
			})
	}

	/// Builds the pipeline and collects at most `limit` of its values.
	pub fn evaluate(&self, limit: usize) -> Result<Vec<i64>, PipelineError> {
		Ok(self.build()?.take(limit).collect_to())
	}
}

impl Display for Pipeline {
	fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
		Display::fmt(&self.source, f)?;

		for stage in &self.stages {
			f.write_str(" | ")?;
			Display::fmt(stage, f)?;
		}

		Ok(())
	}
}

impl FromStr for Pipeline {
	type Err = PipelineError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Parser::new(s).parse()
	}
}

#[cfg(test)]
mod tests {
	use alloc::{string::ToString as _, vec, vec::Vec};

	use super::{Pipeline, PipelineError, Source, Stage};

	fn eval(text: &str) -> Result<Vec<i64>, PipelineError> {
		text.parse::<Pipeline>()?.evaluate(64)
	}

	#[test]
	fn sources() -> Result<(), PipelineError> {
		assert_eq!(eval("values [3, 1, 2]")?, [3, 1, 2]);
		assert_eq!(eval("single 7")?, [7]);
		assert_eq!(eval("repeat 7 | take 3")?, [7, 7, 7]);
		assert_eq!(eval("iota -2 | take 4")?, [-2, -1, 0, 1]);
		assert_eq!(eval("range 2 5")?, [2, 3, 4]);
		assert!(eval("range 5 2")?.is_empty());
		assert_eq!(
			eval("fibonacci | take 10")?,
			[1, 1, 2, 3, 5, 8, 13, 21, 34, 55]
		);

		Ok(())
	}

	#[test]
	fn fibonacci_ends_before_overflow() -> Result<(), PipelineError> {
		let all = Pipeline::new(Source::Fibonacci).evaluate(usize::MAX)?;

		assert_eq!(all.len(), 92);
		assert_eq!(all.last(), Some(&7_540_113_804_746_346_429));

		Ok(())
	}

	#[test]
	fn windowing() -> Result<(), PipelineError> {
		assert_eq!(eval("iota 0 | drop 3 | take 3")?, [3, 4, 5]);
		assert_eq!(eval("range 0 10 | step 3")?, [0, 3, 6, 9]);
		assert_eq!(eval("values [1, 2, 9, 1] | take_while_below 5")?, [1, 2]);
		assert_eq!(eval("values [1, 2, 9, 1] | drop_while_below 5")?, [9, 1]);

		Ok(())
	}

	#[test]
	fn iota_reaches_integer_maximum() -> Result<(), PipelineError> {
		assert_eq!(eval("iota 9223372036854775807 | take 1")?, [i64::MAX]);
		assert_eq!(eval("iota 9223372036854775806")?, [i64::MAX - 1, i64::MAX]);
		assert_eq!(
			eval("values [1, 2, 3] | zip_sum iota 9223372036854775806")?,
			[i64::MAX, i64::MIN]
		);

		Ok(())
	}

	#[test]
	fn arithmetic() -> Result<(), PipelineError> {
		assert_eq!(eval("range 0 4 | mul 3 | add 1")?, [1, 4, 7, 10]);
		assert_eq!(eval("range -4 5 | keep_multiples_of 4")?, [-4, 0, 4]);
		assert_eq!(
			eval("single 9223372036854775807 | add 1")?,
			[i64::MIN]
		);

		Ok(())
	}

	#[test]
	fn multi_source() -> Result<(), PipelineError> {
		assert_eq!(eval("range 0 2 | concat values [7, 8]")?, [0, 1, 7, 8]);
		assert_eq!(eval("range 0 3 | zip_sum iota 10")?, [10, 12, 14]);
		assert_eq!(eval("iota 0 | zip_sum values [5, 5]")?, [5, 6]);
		assert_eq!(eval("values [1, 2, 3] | intersperse 0")?, [1, 0, 2, 0, 3]);
		assert_eq!(eval("range 0 4 | expand")?, [0, 0, 1, 0, 1, 2]);

		Ok(())
	}

	#[test]
	fn limit_bounds_infinite_pipelines() -> Result<(), PipelineError> {
		let values = "iota 1 | expand".parse::<Pipeline>()?.evaluate(5)?;

		assert_eq!(values, [0, 0, 1, 0, 1]);

		Ok(())
	}

	#[test]
	fn rejects_degenerate_stages() -> Result<(), PipelineError> {
		let zero_step = "iota 0 | step 0".parse::<Pipeline>()?;
		let zero_divisor = "iota 0 | keep_multiples_of 0".parse::<Pipeline>()?;

		assert_eq!(zero_step.evaluate(1), Err(PipelineError::ZeroStep));
		assert_eq!(zero_divisor.evaluate(1), Err(PipelineError::ZeroDivisor));

		Ok(())
	}

	#[test]
	fn display_reparses() -> Result<(), PipelineError> {
		let pipeline = Pipeline::new(Source::Values(vec![-1, 2]))
			.with_stage(Stage::ZipSum(Source::Range { start: 0, end: 3 }))
			.with_stage(Stage::KeepMultiplesOf(2))
			.with_stage(Stage::Expand);

		let text = pipeline.to_string();

		assert_eq!(
			text,
			"values [-1, 2] | zip_sum range 0 3 | keep_multiples_of 2 | expand"
		);
		assert_eq!(text.parse::<Pipeline>()?, pipeline);

		Ok(())
	}

	#[test]
	fn from_toml() -> Result<(), toml::de::Error> {
		let pipeline = toml::from_str::<Pipeline>(
			r#"
			source = { range = { start = 0, end = 6 } }
			stages = [{ step = 2 }, { concat = { values = [9] } }, "expand"]
			"#,
		)?;

		assert_eq!(
			pipeline,
			Pipeline::new(Source::Range { start: 0, end: 6 })
				.with_stage(Stage::Step(2))
				.with_stage(Stage::Concat(Source::Values(vec![9])))
				.with_stage(Stage::Expand)
		);

		Ok(())
	}

	#[test]
	fn from_ron() -> Result<(), ron::error::SpannedError> {
		let pipeline = ron::from_str::<Pipeline>("(source: fibonacci)")?;

		assert_eq!(pipeline, Pipeline::new(Source::Fibonacci));

		let pipeline = ron::from_str::<Pipeline>(
			"(source: iota(1), stages: [take_while_below(4), intersperse(0)])",
		)?;

		assert_eq!(pipeline.evaluate(10), Ok(vec![1, 0, 2, 0, 3]));

		Ok(())
	}
}
