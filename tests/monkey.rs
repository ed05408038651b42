use std::path::PathBuf;

use pretty_assertions::assert_eq;
use zmonkey::{Monkey, MonkeyError, RuntimeError, Value};

fn script(name: &str) -> PathBuf { PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name) }

#[test]
fn test_monkey_file() {
	let monkey = Monkey::new();
	let result = monkey.run_file(script("closures.monkey"));
	assert_eq!(result.unwrap(), Some(Value::Integer(110)));

	// Top-level bindings of the script stay around.
	assert_eq!(monkey.run("addTwo(40)").unwrap(), Some(Value::Integer(42)));
}

#[test]
fn test_missing_file() {
	let monkey = Monkey::new();
	let error = monkey.run_file(script("does_not_exist.monkey")).unwrap_err();
	assert!(matches!(error, MonkeyError::InternalError(_)));
}

#[test]
fn test_repl_session_keeps_bindings() {
	let monkey = Monkey::new();
	let lines = ["let a = 5;", "let b = a * 2;", "let twice = fn(f, x) { f(f(x)) };", "twice(fn(n) { n + b }, a)"];
	let results: Vec<_> = lines.iter().map(|line| monkey.run(line).unwrap()).collect();
	assert_eq!(results, vec![None, None, None, Some(Value::Integer(25))]);
	assert_eq!(monkey.environment().borrow().get("b"), Some(Value::Integer(10)));
}

#[test]
fn test_display_forms() {
	let monkey = Monkey::new();
	let display = |source: &str| monkey.run(source).unwrap().map(|value| value.to_string());
	assert_eq!(display("1 + 2"), Some("3".to_string()));
	assert_eq!(display("1 > 2"), Some("false".to_string()));
	assert_eq!(display("if (false) { 1 }"), Some("null".to_string()));
	assert_eq!(display("fn(a, b) { a * b }"), Some("fn(a, b) {\n(a * b)\n}".to_string()));
	assert_eq!(display("5 + true; 10"), Some("ERROR: type mismatch: INTEGER + BOOLEAN".to_string()));
	assert_eq!(display("let z = 1;"), None);
}

#[test]
fn test_runtime_error_is_a_value() {
	let monkey = Monkey::new();
	let result = monkey.run("let f = fn(x) { x }; f(y)").unwrap();
	assert_eq!(result, Some(Value::Error(RuntimeError::IdentifierNotFound("y".to_string()))));
}

#[test]
fn test_parse_errors_skip_evaluation() {
	let monkey = Monkey::new();
	let error = monkey.run("let x = 1; let = 2; let y 3;").unwrap_err();
	match &error {
		MonkeyError::ParserErrors(errors) => assert_eq!(errors.len(), 2),
		other => panic!("expected parser errors, got {other:?}"),
	}
	assert_eq!(
		error.to_string(),
		"Parser errors:\n\texpected next token to be IDENT, got = instead\n\texpected next token to be =, got INT instead"
	);
	// Nothing ran, not even the valid first statement.
	assert_eq!(monkey.environment().borrow().get("x"), None);
}

#[test]
fn test_non_ascii_is_rejected() {
	let monkey = Monkey::new();
	let error = monkey.run("let s = 1; // ünïcode").unwrap_err();
	assert!(matches!(error, MonkeyError::LexError(_)));
}
