/// Errors that can occur during evaluation. They surface to the caller as
/// [`Value::Error`](crate::Value::Error).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RuntimeError {
	/// Operator not defined for the operand type(s), e.g. `-true`
	#[error("unknown operator: {0}")]
	UnknownOperator(String),
	/// Infix operands of different types, e.g. `5 + true`
	#[error("type mismatch: {left} {operator} {right}")]
	TypeMismatch { left: &'static str, operator: String, right: &'static str },
	#[error("identifier not found: {0}")]
	IdentifierNotFound(String),
	/// Callee is not a function value
	#[error("not a function: {0}")]
	NotAFunction(&'static str),
	#[error("wrong number of arguments: want={want}, got={got}")]
	WrongArgumentCount { want: usize, got: usize },
	#[error("division by zero: {0} / 0")]
	DivisionByZero(i64),
	/// Checked integer arithmetic failed
	#[error("integer overflow: {0}")]
	IntegerOverflow(String),
}
