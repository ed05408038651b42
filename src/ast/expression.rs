//! Expression AST nodes
//!
//! An `Expression` is a tree structure representing code like `-a * (b + 1)`
//! as nested nodes. Grouping parentheses leave no node behind, the tree shape
//! alone records them.

use std::{fmt::Display, rc::Rc};

use crate::ast::statement::BlockStatement;

/// Expression AST nodes
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
	Identifier(String),
	IntegerLiteral(i64),
	Boolean(bool),
	Prefix { operator: PrefixOperator, right: Box<Expression> },
	Infix { left: Box<Expression>, operator: InfixOperator, right: Box<Expression> },
	If { condition: Box<Expression>, consequence: BlockStatement, alternative: Option<BlockStatement> },
	/// Parameters and body are shared with every function value created from
	/// this literal, so the values can outlive the parsed program.
	FunctionLiteral { parameters: Rc<Vec<String>>, body: Rc<BlockStatement> },
	Call { function: Box<Expression>, arguments: Vec<Expression> },
}

impl Expression {
	pub fn prefix(operator: PrefixOperator, right: Expression) -> Self {
		Expression::Prefix { operator, right: Box::new(right) }
	}

	pub fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Self {
		Expression::Infix { left: Box::new(left), operator, right: Box::new(right) }
	}

	pub fn if_else(condition: Expression, consequence: BlockStatement, alternative: Option<BlockStatement>) -> Self {
		Expression::If { condition: Box::new(condition), consequence, alternative }
	}

	pub fn function(parameters: Vec<String>, body: BlockStatement) -> Self {
		Expression::FunctionLiteral { parameters: Rc::new(parameters), body: Rc::new(body) }
	}

	pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
		Expression::Call { function: Box::new(function), arguments }
	}
}

/// Unary operators: `!` and `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
	Bang,
	Minus,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
	Plus,
	Minus,
	Asterisk,
	Slash,
	Less,
	Greater,
	Equal,
	NotEqual,
}

impl Display for Expression {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use Expression::*;
		match self {
			Identifier(name) => write!(f, "{name}"),
			IntegerLiteral(value) => write!(f, "{value}"),
			Boolean(value) => write!(f, "{value}"),
			Prefix { operator, right } => write!(f, "({operator}{right})"),
			Infix { left, operator, right } => write!(f, "({left} {operator} {right})"),
			If { condition, consequence, alternative } => {
				write!(f, "if {condition} {consequence}")?;
				if let Some(alternative) = alternative {
					write!(f, " else {alternative}")?;
				}
				Ok(())
			}
			FunctionLiteral { parameters, body } => write!(f, "fn({}) {body}", parameters.join(", ")),
			Call { function, arguments } => write!(
				f,
				"{function}({})",
				arguments.iter().map(|arg| arg.to_string()).collect::<Vec<String>>().join(", ")
			),
		}
	}
}

impl Display for PrefixOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			PrefixOperator::Bang => write!(f, "!"),
			PrefixOperator::Minus => write!(f, "-"),
		}
	}
}

impl Display for InfixOperator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use InfixOperator::*;
		#[rustfmt::skip]
		let symbol = match self {
			Plus => "+",
			Minus => "-",
			Asterisk => "*",
			Slash => "/",
			Less => "<",
			Greater => ">",
			Equal => "==",
			NotEqual => "!=",
		};
		write!(f, "{symbol}")
	}
}
