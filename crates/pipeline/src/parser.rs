use alloc::vec::Vec;
use core::{iter::Peekable, ops::Range, str::FromStr};

use logos::{Logos as _, SpannedIter};
use tracing::{debug, info, trace};

use super::{Pipeline, PipelineError, Source, Stage, inner::Token};

/// Reads the text form of a [`Pipeline`]: a source followed by `|`-separated stages.
///
/// ```
/// use lazyseq_pipeline::{Parser, Source, Stage};
///
/// let pipeline = Parser::new("range 0 10 | mul 3 | take 2").parse()?;
///
/// assert_eq!(pipeline.source, Source::Range { start: 0, end: 10 });
/// assert_eq!(pipeline.stages, [Stage::Mul(3), Stage::Take(2)]);
/// # Ok::<(), lazyseq_pipeline::PipelineError>(())
/// ```
pub struct Parser<'source> {
	source: &'source str,
	tokens: Peekable<SpannedIter<'source, Token>>,
}

impl<'source> Parser<'source> {
	pub fn new(source: &'source str) -> Self {
		debug!("got source with length {}", source.len());

		Self {
			source,
			tokens: Token::lexer(source).spanned().peekable(),
		}
	}

	pub fn parse(mut self) -> Result<Pipeline, PipelineError> {
		info!("scanning {} chars", self.source.len());

		if self.tokens.peek().is_none() {
			return Err(PipelineError::EmptyPipeline);
		}

		let source = self.parse_source()?;
		let mut stages = Vec::new();

		while let Some((token, span)) = self.next()? {
			if token != Token::Pipe {
				return Err(PipelineError::UnexpectedToken(span.start));
			}

			stages.push(self.parse_stage()?);
		}

		debug!("parsed {} stages", stages.len());

		Ok(Pipeline { source, stages })
	}

	fn next(&mut self) -> Result<Option<(Token, Range<usize>)>, PipelineError> {
		match self.tokens.next() {
			None => Ok(None),
			Some((Ok(token), span)) => Ok(Some((token, span))),
			Some((Err(()), span)) => Err(PipelineError::InvalidCharacter(span.start)),
		}
	}

	fn peek_is(&mut self, expected: Token) -> bool {
		matches!(self.tokens.peek(), Some((Ok(token), _)) if *token == expected)
	}

	/// Pulls the next token, requiring it to be `expected`.
	fn argument(&mut self, expected: Token) -> Result<Range<usize>, PipelineError> {
		match self.next()? {
			Some((token, span)) if token == expected => Ok(span),
			Some((Token::Pipe, span)) => Err(PipelineError::MissingArgument(span.start)),
			Some((_, span)) => Err(PipelineError::UnexpectedToken(span.start)),
			None => Err(PipelineError::MissingArgument(self.source.len())),
		}
	}

	fn word(&mut self) -> Result<(&'source str, usize), PipelineError> {
		let source = self.source;
		let span = self.argument(Token::Word)?;

		Ok((&source[span.clone()], span.start))
	}

	fn number<T: FromStr>(&mut self) -> Result<T, PipelineError> {
		let source = self.source;
		let span = self.argument(Token::Number)?;

		source[span.clone()]
			.parse()
			.map_err(|_| PipelineError::InvalidNumber(span.start))
	}

	fn values(&mut self) -> Result<Vec<i64>, PipelineError> {
		self.argument(Token::OpenBracket)?;

		let mut values = Vec::new();

		if self.peek_is(Token::CloseBracket) {
			self.next()?;
			return Ok(values);
		}

		loop {
			values.push(self.number()?);

			match self.next()? {
				Some((Token::Comma, _)) => {}
				Some((Token::CloseBracket, _)) => break,
				Some((_, span)) => return Err(PipelineError::UnexpectedToken(span.start)),
				None => return Err(PipelineError::MissingArgument(self.source.len())),
			}
		}

		Ok(values)
	}

	fn parse_source(&mut self) -> Result<Source, PipelineError> {
		let (name, offset) = self.word()?;

		let source = match name {
			"values" => Source::Values(self.values()?),
			"single" => Source::Single(self.number()?),
			"repeat" => Source::Repeat(self.number()?),
			"iota" => Source::Iota(self.number()?),
			"range" => {
				let start = self.number()?;
				let end = self.number()?;

				Source::Range { start, end }
			}
			"fibonacci" => Source::Fibonacci,
			_ => return Err(PipelineError::UnknownSource(offset)),
		};

		trace!(%source, "parsed source");

		Ok(source)
	}

	fn parse_stage(&mut self) -> Result<Stage, PipelineError> {
		let (name, offset) = self.word()?;

		let stage = match name {
			"take" => Stage::Take(self.number()?),
			"drop" => Stage::Drop(self.number()?),
			"step" => Stage::Step(self.number()?),
			"add" => Stage::Add(self.number()?),
			"mul" => Stage::Mul(self.number()?),
			"keep_multiples_of" => Stage::KeepMultiplesOf(self.number()?),
			"take_while_below" => Stage::TakeWhileBelow(self.number()?),
			"drop_while_below" => Stage::DropWhileBelow(self.number()?),
			"intersperse" => Stage::Intersperse(self.number()?),
			"concat" => Stage::Concat(self.parse_source()?),
			"zip_sum" => Stage::ZipSum(self.parse_source()?),
			"expand" => Stage::Expand,
			_ => return Err(PipelineError::UnknownStage(offset)),
		};

		trace!(%stage, "parsed stage");

		Ok(stage)
	}
}
