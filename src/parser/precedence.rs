use crate::lexer::TokenType;

/// Binding power of an operator, lowest first. The declaration order is the
/// precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Precedence {
	Lowest,
	/// `==` `!=`
	Equals,
	/// `<` `>`
	LessGreater,
	/// `+` `-`
	Sum,
	/// `*` `/`
	Product,
	/// `-x` `!x`
	Prefix,
	/// `f(x)`
	Call,
}

impl Precedence {
	/// Precedence of a token in infix position. Tokens that cannot continue an
	/// expression bind as `Lowest`.
	pub fn of(r#type: TokenType) -> Self {
		use TokenType::*;
		match r#type {
			EqualEqual | BangEqual => Precedence::Equals,
			Less | Greater => Precedence::LessGreater,
			Plus | Minus => Precedence::Sum,
			Asterisk | Slash => Precedence::Product,
			LeftParen => Precedence::Call,
			_ => Precedence::Lowest,
		}
	}
}
