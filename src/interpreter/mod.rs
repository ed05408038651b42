//! Monkey tree-walking evaluator.
//!
//! The evaluator walks the abstract syntax tree (AST) produced by the parser,
//! recursively evaluating each node against an environment and computing its
//! runtime value.
//!
//! # Control flow
//!
//! - **Errors**: every step returns `Result`, an error stops the evaluation of
//!   everything around it. [`evaluate`] hands it back as [`Value::Error`].
//! - **Return**: `return` wraps its value in [`Value::Return`]. Blocks pass the
//!   wrapper up untouched, the enclosing function call (or the program) strips
//!   it. That is what lets `return` leave nested `if` blocks but not the
//!   function it is in.
//!
//! # Scoping
//!
//! Only `let` writes to an environment, and only to the innermost one. A call
//! evaluates the body in a new scope enclosed by the function's captured
//! environment, see [`environment`](crate::environment).

pub mod function;
pub mod value;

use std::rc::Rc;

use function::FunctionValue;
use value::{NULL, Value};

use crate::{ast::{BlockStatement, Expression, Node, Program, Statement}, environment::{Env, Environment}, error::interpreter::RuntimeError};

/// Evaluate any node in `env`.
///
/// Returns `None` when the node produces no value: a `let`, an empty program
/// or an empty block. Runtime failures come back as [`Value::Error`].
pub fn evaluate<'a>(node: impl Into<Node<'a>>, env: &Env) -> Option<Value> {
	let result = match node.into() {
		Node::Program(program) => eval_program(program, env),
		Node::Block(block) => eval_block_statement(block, env),
		Node::Statement(statement) => eval_statement(statement, env),
		Node::Expression(expression) => eval_expression(expression, env).map(Some),
	};
	result.unwrap_or_else(|error| {
		tracing::debug!(%error, "evaluation failed");
		Some(error.into())
	})
}

/// Run the statements in order. A `return` ends the program with its
/// unwrapped value.
fn eval_program(program: &Program, env: &Env) -> Result<Option<Value>, RuntimeError> {
	let mut result = None;
	for statement in &program.statements {
		match eval_statement(statement, env)? {
			Some(Value::Return(value)) => return Ok(Some(*value)),
			value => result = value,
		}
	}
	Ok(result)
}

/// Like [`eval_program`], but a `return` stays wrapped for the enclosing call.
fn eval_block_statement(block: &BlockStatement, env: &Env) -> Result<Option<Value>, RuntimeError> {
	let mut result = None;
	for statement in &block.statements {
		result = eval_statement(statement, env)?;
		if matches!(result, Some(Value::Return(_))) {
			break;
		}
	}
	Ok(result)
}

fn eval_statement(statement: &Statement, env: &Env) -> Result<Option<Value>, RuntimeError> {
	Ok(match statement {
		Statement::Expression(expression) => Some(eval_expression(expression, env)?),
		Statement::Return(expression) => Some(Value::Return(Box::new(eval_expression(expression, env)?))),
		Statement::Let { name, value } => {
			let value = eval_expression(value, env)?;
			env.borrow_mut().set(name.as_str(), value);
			None
		}
	})
}

fn eval_expression(expression: &Expression, env: &Env) -> Result<Value, RuntimeError> {
	Ok(match expression {
		Expression::IntegerLiteral(n) => Value::Integer(*n),
		Expression::Boolean(b) => Value::from(*b),
		Expression::Prefix { operator, right } => eval_expression(right, env)?.prefix_op(*operator)?,
		Expression::Infix { left, operator, right } => {
			let left = eval_expression(left, env)?;
			let right = eval_expression(right, env)?;
			left.binary_op(*operator, &right)?
		}
		Expression::If { condition, consequence, alternative } => {
			if eval_expression(condition, env)?.is_truthy() {
				eval_block_statement(consequence, env)?.unwrap_or(NULL)
			} else if let Some(alternative) = alternative {
				eval_block_statement(alternative, env)?.unwrap_or(NULL)
			} else {
				NULL
			}
		}
		Expression::Identifier(name) => {
			env.borrow().get(name).ok_or_else(|| RuntimeError::IdentifierNotFound(name.clone()))?
		}
		Expression::FunctionLiteral { parameters, body } => {
			Value::Function(Rc::new(FunctionValue::new(parameters.clone(), body.clone(), env.clone())))
		}
		Expression::Call { function, arguments } => {
			let function = eval_expression(function, env)?;
			// Left to right, the first error wins.
			let arguments =
				arguments.iter().map(|argument| eval_expression(argument, env)).collect::<Result<Vec<_>, _>>()?;
			apply_function(&function, arguments)?
		}
	})
}

/// Call `function` with already evaluated arguments. This is where a
/// `return` from the body is unwrapped.
#[tracing::instrument(level = "trace", skip_all, fields(arguments = arguments.len()))]
fn apply_function(function: &Value, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
	let Value::Function(function) = function else {
		return Err(RuntimeError::NotAFunction(function.type_name()));
	};
	if function.parameters.len() != arguments.len() {
		return Err(RuntimeError::WrongArgumentCount { want: function.parameters.len(), got: arguments.len() });
	}

	let call_env = Environment::new_enclosed(function.env.clone());
	{
		let mut scope = call_env.borrow_mut();
		for (parameter, argument) in function.parameters.iter().zip(arguments) {
			scope.set(parameter.as_str(), argument);
		}
	}

	Ok(match eval_block_statement(&function.body, &call_env)? {
		Some(Value::Return(value)) => *value,
		Some(value) => value,
		None => NULL,
	})
}
