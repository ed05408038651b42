//! Statements never appear where an expression is expected. Blocks only occur
//! as the branches of an `if` and as function bodies.

use std::fmt::Display;

use crate::ast::expression::Expression;

/// A statement in the programming language.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
	/// `let <name> = <value>;`
	Let {
		/// The name being bound.
		name:  String,
		/// The bound expression.
		value: Expression,
	},
	/// `return <value>;`
	Return(Expression),
	/// An expression used as a statement.
	Expression(Expression),
}

/// A braced sequence of statements. Blocks do not open a new scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlockStatement {
	pub statements: Vec<Statement>,
}

impl BlockStatement {
	pub fn new(statements: Vec<Statement>) -> Self { Self { statements } }
}

impl Display for Statement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Statement::Let { name, value } => write!(f, "let {name} = {value};"),
			Statement::Return(value) => write!(f, "return {value};"),
			Statement::Expression(expression) => write!(f, "{expression}"),
		}
	}
}

impl Display for BlockStatement {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
	}
}
