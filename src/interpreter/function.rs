use std::{fmt::{Debug, Display}, rc::Rc};

use crate::{ast::BlockStatement, environment::Env};

/// A closure: a function literal paired with the environment it was
/// evaluated in.
pub struct FunctionValue {
	pub parameters: Rc<Vec<String>>,
	pub body:       Rc<BlockStatement>,
	/// Captured by reference, later bindings in it stay visible.
	pub env:        Env,
}

impl FunctionValue {
	pub fn new(parameters: Rc<Vec<String>>, body: Rc<BlockStatement>, env: Env) -> Self {
		Self { parameters, body, env }
	}
}

// The captured environment usually contains the function itself.
impl Debug for FunctionValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FunctionValue")
			.field("parameters", &self.parameters)
			.field("body", &self.body)
			.finish_non_exhaustive()
	}
}

impl Display for FunctionValue {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "fn({}) {{\n{}\n}}", self.parameters.join(", "), self.body)
	}
}
