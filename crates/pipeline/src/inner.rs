use logos::Logos;

/// Kept private so the [`Logos`] implementation doesn't leak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Logos)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Token {
	#[token("|")]
	Pipe,
	#[token(",")]
	Comma,
	#[token("[")]
	OpenBracket,
	#[token("]")]
	CloseBracket,
	#[regex("-?[0-9]+")]
	Number,
	#[regex("[a-z_]+")]
	Word,
}

#[cfg(test)]
mod tests {
	use alloc::vec::Vec;

	use logos::Logos as _;

	use super::Token;

	#[test]
	fn skips_whitespace() {
		let tokens = Token::lexer("range 0\t-3 |\n take [1,2]")
			.collect::<Result<Vec<_>, _>>()
			.unwrap();

		assert_eq!(
			tokens,
			[
				Token::Word,
				Token::Number,
				Token::Number,
				Token::Pipe,
				Token::Word,
				Token::OpenBracket,
				Token::Number,
				Token::Comma,
				Token::Number,
				Token::CloseBracket,
			]
		);
	}

	#[test]
	fn rejects_unknown_characters() {
		let mut lexer = Token::lexer("take 5 ; drop");

		assert_eq!(lexer.next(), Some(Ok(Token::Word)));
		assert_eq!(lexer.next(), Some(Ok(Token::Number)));
		assert_eq!(lexer.next(), Some(Err(())));
		assert_eq!(lexer.span(), 7..8);
	}
}
