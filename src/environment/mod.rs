//! Name bindings.
//!
//! An environment is one scope: a map from names to values plus a link to the
//! enclosing scope. Lookups walk the chain outwards, writes always land in the
//! innermost map, so a `let` inside a function shadows an outer binding
//! instead of overwriting it.
//!
//! The global environment lives as long as the REPL. Every function call gets
//! a fresh environment whose outer link is the environment the function was
//! *defined* in, not the caller's. That is what makes closures work:
//!
//! ``` markdown
//! let newAdder = fn(x) { fn(y) { x + y } };
//! let addTwo = newAdder(2);   // captures the call scope where x = 2
//! addTwo(3);                  // scope { y: 3 } -> { x: 2 } -> global
//! ```
//!
//! Blocks do not open scopes.

use std::collections::HashMap;

use crate::{interpreter::value::Value, utils::RcCell};

/// Shared handle to an environment. Clone the handle, not the environment.
pub type Env = RcCell<Environment>;

#[derive(Debug, Default)]
pub struct Environment {
	store: HashMap<String, Value>,
	outer: Option<Env>,
}

impl Environment {
	/// A top-level environment with no bindings.
	pub fn new_global() -> Env { Environment::default().into() }

	/// A new innermost scope on top of `outer`.
	pub fn new_enclosed(outer: Env) -> Env { Environment { store: HashMap::new(), outer: Some(outer) }.into() }

	/// Look `name` up, innermost scope first.
	pub fn get(&self, name: &str) -> Option<Value> {
		self.store.get(name).cloned().or_else(|| self.outer.as_ref().and_then(|outer| outer.borrow().get(name)))
	}

	/// Bind `name` in this scope. An existing binding here is replaced, one in
	/// an outer scope is shadowed.
	pub fn set(&mut self, name: impl Into<String>, value: Value) { self.store.insert(name.into(), value); }

	pub fn outer(&self) -> Option<&Env> { self.outer.as_ref() }
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn get_walks_outwards() {
		let global = Environment::new_global();
		global.borrow_mut().set("a", Value::Integer(1));
		let inner = Environment::new_enclosed(global.clone());
		inner.borrow_mut().set("b", Value::Integer(2));

		assert_eq!(inner.borrow().get("a"), Some(Value::Integer(1)));
		assert_eq!(inner.borrow().get("b"), Some(Value::Integer(2)));
		assert_eq!(global.borrow().get("b"), None);
		assert_eq!(inner.borrow().get("c"), None);
	}

	#[test]
	fn set_shadows_outer_binding() {
		let global = Environment::new_global();
		global.borrow_mut().set("x", Value::Integer(1));
		let inner = Environment::new_enclosed(global.clone());
		inner.borrow_mut().set("x", Value::Integer(2));

		assert_eq!(inner.borrow().get("x"), Some(Value::Integer(2)));
		assert_eq!(global.borrow().get("x"), Some(Value::Integer(1)));
	}

	#[test]
	fn set_replaces_binding() {
		let global = Environment::new_global();
		global.borrow_mut().set("x", Value::Integer(1));
		global.borrow_mut().set("x", Value::Boolean(true));
		assert_eq!(global.borrow().get("x"), Some(Value::Boolean(true)));
	}

	#[test]
	fn enclosed_shares_outer() {
		let global = Environment::new_global();
		let inner = Environment::new_enclosed(global.clone());
		assert!(inner.borrow().outer().is_some_and(|outer| outer.ptr_eq(&global)));

		// Bindings added to the outer scope later are still visible.
		global.borrow_mut().set("late", Value::Null);
		assert_eq!(inner.borrow().get("late"), Some(Value::Null));
	}
}
