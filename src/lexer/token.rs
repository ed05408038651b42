use std::fmt::Display;

/// A token produced by the lexer. The lexeme borrows from the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
	pub r#type: TokenType,
	pub lexeme: &'a str,
}

impl<'a> Token<'a> {
	pub fn new(r#type: TokenType, lexeme: &'a str) -> Self { Self { r#type, lexeme } }

	pub fn is_eof(&self) -> bool { self.r#type == TokenType::Eof }
}

/// The different kinds of tokens in Monkey. Literal text lives on the
/// [`Token`], so every kind is a plain tag and can key the parser tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
	/// A byte no rule knows about.
	Illegal,
	/// End of input.
	Eof,
	/// Identifier, e.g. variable or parameter name.
	Identifier,
	/// Decimal integer literal, e.g. `123`.
	Integer,
	/// Assign `=`.
	Assign,
	/// Plus `+`.
	Plus,
	/// Minus `-`.
	Minus,
	/// Bang `!`.
	Bang,
	/// Asterisk `*`.
	Asterisk,
	/// Slash `/`.
	Slash,
	/// Equal equal `==`.
	EqualEqual,
	/// Bang equal `!=`.
	BangEqual,
	/// Less than `<`.
	Less,
	/// Greater than `>`.
	Greater,
	/// Comma `,`.
	Comma,
	/// Semicolon `;`.
	Semicolon,
	/// Left parenthesis `(`.
	LeftParen,
	/// Right parenthesis `)`.
	RightParen,
	/// Left brace `{`.
	LeftBrace,
	/// Right brace `}`.
	RightBrace,
	/// Function literal keyword `fn`.
	Function,
	/// Binding keyword `let`.
	Let,
	/// Boolean literal `true`.
	True,
	/// Boolean literal `false`.
	False,
	/// Conditional keyword `if`.
	If,
	/// Alternative branch keyword `else`.
	Else,
	/// Return statement keyword.
	Return,
}

impl TokenType {
	/// Classify a maximal identifier run against the keyword table.
	pub fn keyword_or_identifier(value: &str) -> Self {
		match value {
			"fn" => TokenType::Function,
			"let" => TokenType::Let,
			"true" => TokenType::True,
			"false" => TokenType::False,
			"if" => TokenType::If,
			"else" => TokenType::Else,
			"return" => TokenType::Return,
			_ => TokenType::Identifier,
		}
	}
}

impl Display for TokenType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use TokenType::*;
		#[rustfmt::skip]
		let name = match self {
			Illegal => "ILLEGAL",
			Eof => "EOF",
			Identifier => "IDENT",
			Integer => "INT",
			Assign => "=",
			Plus => "+",
			Minus => "-",
			Bang => "!",
			Asterisk => "*",
			Slash => "/",
			EqualEqual => "==",
			BangEqual => "!=",
			Less => "<",
			Greater => ">",
			Comma => ",",
			Semicolon => ";",
			LeftParen => "(",
			RightParen => ")",
			LeftBrace => "{",
			RightBrace => "}",
			Function => "FUNCTION",
			Let => "LET",
			True => "TRUE",
			False => "FALSE",
			If => "IF",
			Else => "ELSE",
			Return => "RETURN",
		};
		write!(f, "{name}")
	}
}
