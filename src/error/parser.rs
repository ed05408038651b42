use crate::lexer::TokenType;

/// A syntax error collected by the parser. Parsing carries on after one.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{type}")]
pub struct ParseError {
	r#type: ParseErrorType,
}

impl ParseError {
	pub fn new(r#type: ParseErrorType) -> Self { Self { r#type } }

	pub fn r#type(&self) -> &ParseErrorType { &self.r#type }
}

impl From<ParseErrorType> for ParseError {
	fn from(r#type: ParseErrorType) -> Self { Self::new(r#type) }
}

/// Types of syntax errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorType {
	/// A required token was not the next one.
	UnexpectedToken { expected: TokenType, actual: TokenType },
	/// No expression can start with this token.
	NoPrefixParseFunction(TokenType),
	/// An integer literal does not fit in an `i64`.
	InvalidInteger(String),
}

impl std::fmt::Display for ParseErrorType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use ParseErrorType::*;
		match self {
			UnexpectedToken { expected, actual } => {
				write!(f, "expected next token to be {expected}, got {actual} instead")
			}
			NoPrefixParseFunction(kind) => {
				write!(f, "no prefix parse function for {kind} found")
			}
			InvalidInteger(literal) => {
				write!(f, "could not parse {literal} as integer")
			}
		}
	}
}
