use std::{fmt::Display, rc::Rc};

use Value::*;

use crate::{ast::{InfixOperator, PrefixOperator}, error::interpreter::RuntimeError, interpreter::function::FunctionValue};

/// The one `true`.
pub const TRUE: Value = Boolean(true);
/// The one `false`.
pub const FALSE: Value = Boolean(false);
/// The one `null`.
pub const NULL: Value = Null;

/// Value represents a runtime value in Monkey.
#[derive(Debug, Clone)]
pub enum Value {
	Integer(i64),
	Boolean(bool),
	Null,
	/// A value on its way out of a function body. Never escapes a call or a
	/// program.
	Return(Box<Value>),
	/// A failed evaluation, reported to the caller as an ordinary value.
	Error(RuntimeError),
	Function(Rc<FunctionValue>),
}

impl Value {
	/// The type tag used in error messages.
	pub fn type_name(&self) -> &'static str {
		match self {
			Integer(_) => "INTEGER",
			Boolean(_) => "BOOLEAN",
			Null => "NULL",
			Return(_) => "RETURN_VALUE",
			Error(_) => "ERROR",
			Function(_) => "FUNCTION",
		}
	}

	/// `null` and `false` are falsy, everything else is truthy.
	pub fn is_truthy(&self) -> bool {
		match self {
			Null => false,
			Boolean(b) => *b,
			_ => true,
		}
	}

	pub fn is_error(&self) -> bool { matches!(self, Error(_)) }

	/// Applies a unary operator.
	pub fn prefix_op(&self, operator: PrefixOperator) -> Result<Value, RuntimeError> {
		match (operator, self) {
			(PrefixOperator::Bang, value) => Ok(Value::from(!value.is_truthy())),
			(PrefixOperator::Minus, Integer(n)) => {
				n.checked_neg().map(Integer).ok_or_else(|| RuntimeError::IntegerOverflow(format!("-{n}")))
			}
			(PrefixOperator::Minus, value) => Err(RuntimeError::UnknownOperator(format!("-{}", value.type_name()))),
		}
	}

	/// Performs a binary operation between two values.
	pub fn binary_op(&self, operator: InfixOperator, right: &Self) -> Result<Value, RuntimeError> {
		match (self, right) {
			(Integer(l), Integer(r)) => integer_op(*l, operator, *r),
			(Boolean(l), Boolean(r)) => match operator {
				InfixOperator::Equal => Ok(Value::from(l == r)),
				InfixOperator::NotEqual => Ok(Value::from(l != r)),
				_ => Err(self.unknown_operator(operator, right)),
			},
			_ if self.type_name() != right.type_name() => Err(RuntimeError::TypeMismatch {
				left: self.type_name(),
				operator: operator.to_string(),
				right: right.type_name(),
			}),
			_ => Err(self.unknown_operator(operator, right)),
		}
	}

	fn unknown_operator(&self, operator: InfixOperator, right: &Self) -> RuntimeError {
		RuntimeError::UnknownOperator(format!("{} {operator} {}", self.type_name(), right.type_name()))
	}
}

/// Checked integer arithmetic and comparison. Division truncates toward zero.
fn integer_op(l: i64, operator: InfixOperator, r: i64) -> Result<Value, RuntimeError> {
	use InfixOperator::*;

	let overflow = || RuntimeError::IntegerOverflow(format!("{l} {operator} {r}"));
	Ok(match operator {
		Plus => Integer(l.checked_add(r).ok_or_else(overflow)?),
		Minus => Integer(l.checked_sub(r).ok_or_else(overflow)?),
		Asterisk => Integer(l.checked_mul(r).ok_or_else(overflow)?),
		Slash if r == 0 => return Err(RuntimeError::DivisionByZero(l)),
		Slash => Integer(l.checked_div(r).ok_or_else(overflow)?),
		Less => Value::from(l < r),
		Greater => Value::from(l > r),
		Equal => Value::from(l == r),
		NotEqual => Value::from(l != r),
	})
}

impl From<bool> for Value {
	fn from(value: bool) -> Self { if value { TRUE } else { FALSE } }
}

impl From<RuntimeError> for Value {
	fn from(error: RuntimeError) -> Self { Error(error) }
}

/// Functions are equal only to themselves.
impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Integer(l), Integer(r)) => l == r,
			(Boolean(l), Boolean(r)) => l == r,
			(Null, Null) => true,
			(Return(l), Return(r)) => l == r,
			(Error(l), Error(r)) => l == r,
			(Function(l), Function(r)) => Rc::ptr_eq(l, r),
			_ => false,
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Integer(n) => write!(f, "{n}"),
			Boolean(b) => write!(f, "{b}"),
			Null => write!(f, "null"),
			Return(value) => write!(f, "{value}"),
			Error(error) => write!(f, "ERROR: {error}"),
			Function(function) => write!(f, "{function}"),
		}
	}
}
