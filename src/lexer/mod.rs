//! Turns Monkey source text into tokens.
//!
//! The lexer is a single forward cursor over the bytes of the source. Each
//! call to [`Lexer::next_token`] skips whitespace and then groups the bytes at
//! the cursor into one lexeme: an operator or delimiter, a maximal run of
//! identifier characters (which may turn out to be a keyword, the `maximal
//! munch` rule), or a maximal run of decimal digits.
//!
//! Monkey source is ASCII. Anything else is rejected before scanning starts,
//! an unknown ASCII byte becomes an [`TokenType::Illegal`] token and is left
//! for the parser to complain about.
mod token;

use TokenType::*;
pub use token::*;

use crate::error::lexer::LexError;

/// A lexer for Monkey source code
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
	/// User input source code
	source:        &'a str,
	/// Points at the byte currently being considered
	position:      usize,
	/// Points at the byte after `position`
	read_position: usize,
	/// The byte at `position`, `0` once the input is exhausted
	current:       u8,
	/// Set once the iterator has handed out `Eof`
	finished:      bool,
}

impl<'a> Lexer<'a> {
	/// Create a lexer, rejecting any non-ASCII input up front.
	pub fn new(source: &'a str) -> Result<Self, LexError> {
		if let Some((position, character)) = source.char_indices().find(|(_, c)| !c.is_ascii()) {
			return Err(LexError::UnsupportedCharacter { position, character });
		}
		let mut lexer = Self { source, position: 0, read_position: 0, current: 0, finished: false };
		lexer.read_byte();
		Ok(lexer)
	}

	/// Scan the next token. Once the input is exhausted this keeps returning
	/// `Eof`.
	pub fn next_token(&mut self) -> Token<'a> {
		self.skip_whitespace();
		let start = self.position;
		#[rustfmt::skip]
		let r#type = match self.current {
			b'=' => if self.match_next(b'=') { EqualEqual } else { Assign },
			b'!' => if self.match_next(b'=') { BangEqual } else { Bang },
			b'+' => Plus,
			b'-' => Minus,
			b'*' => Asterisk,
			b'/' => Slash,
			b'<' => Less,
			b'>' => Greater,
			b',' => Comma,
			b';' => Semicolon,
			b'(' => LeftParen,
			b')' => RightParen,
			b'{' => LeftBrace,
			b'}' => RightBrace,
			0 if self.position >= self.source.len() => return Token::new(Eof, ""),
			c if is_identifier_start(c) => return self.identifier(),
			c if c.is_ascii_digit() => return self.integer(),
			_ => Illegal,
		};
		self.read_byte();
		Token::new(r#type, &self.source[start..self.position])
	}

	/// Move the cursor one byte forward.
	fn read_byte(&mut self) {
		self.current = self.source.as_bytes().get(self.read_position).copied().unwrap_or(0);
		self.position = self.read_position.min(self.source.len());
		self.read_position = self.position + 1;
	}

	/// Peek the byte after the current one
	fn peek(&self) -> u8 { self.source.as_bytes().get(self.read_position).copied().unwrap_or(0) }

	/// Consume the next byte if it is the expected one
	fn match_next(&mut self, expected: u8) -> bool {
		matches!(self.peek(), c if c == expected && { self.read_byte(); true })
	}

	fn skip_whitespace(&mut self) {
		while matches!(self.current, b' ' | b'\t' | b'\r' | b'\n') {
			self.read_byte();
		}
	}

	/// Scan an identifier or keyword
	fn identifier(&mut self) -> Token<'a> {
		let start = self.position;
		while is_identifier_start(self.current) {
			self.read_byte();
		}
		let text = &self.source[start..self.position];
		Token::new(TokenType::keyword_or_identifier(text), text)
	}

	/// Scan an integer literal
	fn integer(&mut self) -> Token<'a> {
		let start = self.position;
		while self.current.is_ascii_digit() {
			self.read_byte();
		}
		Token::new(Integer, &self.source[start..self.position])
	}
}

fn is_identifier_start(c: u8) -> bool { c.is_ascii_alphabetic() || c == b'_' }

impl<'a> Iterator for Lexer<'a> {
	type Item = Token<'a>;

	/// Yields every token up to and including the single `Eof`.
	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}
		let token = self.next_token();
		self.finished = token.is_eof();
		Some(token)
	}
}
