//! The abstract syntax tree built by the parser.
//!
//! Two families of nodes exist: [`Statement`]s, which are executed for their
//! effect on the environment, and [`Expression`]s, which produce a value. A
//! [`Program`] is the root, one REPL line or one source file. Every node owns
//! its children, the only sharing is the `Rc` around function literal parts.
//!
//! All nodes print back as source-like text with every infix and prefix
//! expression fully parenthesized, which makes operator precedence visible:
//!
//! ``` markdown
//! 1 * 2 + 3   =>   ((1 * 2) + 3)
//! -a * b      =>   ((-a) * b)
//! ```

pub mod expression;
pub mod statement;

use std::fmt::Display;

pub use expression::{Expression, InfixOperator, PrefixOperator};
pub use statement::{BlockStatement, Statement};

/// The parse root: an ordered sequence of statements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
	pub statements: Vec<Statement>,
}

impl Display for Program {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.statements.iter().try_for_each(|statement| write!(f, "{statement}"))
	}
}

/// A borrowed view of any node, the input of
/// [`evaluate`](crate::interpreter::evaluate).
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
	Program(&'a Program),
	Block(&'a BlockStatement),
	Statement(&'a Statement),
	Expression(&'a Expression),
}

impl<'a> From<&'a Program> for Node<'a> {
	fn from(program: &'a Program) -> Self { Node::Program(program) }
}

impl<'a> From<&'a BlockStatement> for Node<'a> {
	fn from(block: &'a BlockStatement) -> Self { Node::Block(block) }
}

impl<'a> From<&'a Statement> for Node<'a> {
	fn from(statement: &'a Statement) -> Self { Node::Statement(statement) }
}

impl<'a> From<&'a Expression> for Node<'a> {
	fn from(expression: &'a Expression) -> Self { Node::Expression(expression) }
}
