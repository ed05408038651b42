use std::{fs::read_to_string, io::Write, path::Path};

use anyhow::Context;

use crate::{Value, environment::{Env, Environment}, error::MonkeyError, interpreter::evaluate, lexer::Lexer, parser::Parser};

const PROMPT: &str = ">> ";

/// Monkey drives source text through the lexer, parser and evaluator.
///
/// One instance owns one global environment, so bindings made by one call to
/// [`run`](Self::run) are visible to the next.
pub struct Monkey {
	env: Env,
}

impl Default for Monkey {
	fn default() -> Self { Self::new() }
}

impl Monkey {
	pub fn new() -> Self { Self { env: Environment::new_global() } }

	/// The global environment shared by every run.
	pub fn environment(&self) -> &Env { &self.env }

	/// Run a source file. An error value at the end is turned into
	/// [`MonkeyError::RuntimeError`].
	pub fn run_file<P: AsRef<Path>>(&self, path: P) -> Result<Option<Value>, MonkeyError> {
		let path = path.as_ref();
		let source =
			read_to_string(path).with_context(|| format!("Failed open source file {}", path.display()))?;
		match self.run(&source)? {
			Some(Value::Error(error)) => Err(error.into()),
			value => Ok(value),
		}
	}

	/// Run the REPL prompt until stdin is closed.
	pub fn run_prompt(&self) {
		let mut input = String::new();
		let stdin = std::io::stdin();
		loop {
			input.clear();
			print!("{PROMPT}");
			if let Err(e) = std::io::stdout().flush() {
				eprintln!("Failed flush: {e}");
			}
			match stdin.read_line(&mut input) {
				Ok(0) => {
					println!("\nExited zmonkey repl");
					break;
				}
				Ok(_) => {}
				Err(e) => {
					eprintln!("Failed read line: {e}");
					continue;
				}
			}
			match self.run(input.trim()) {
				Ok(Some(value)) => println!("{value}"),
				Ok(None) => {}
				Err(e) => eprintln!("{e}"),
			}
		}
	}

	/// Run `source` against the global environment.
	///
	/// Lex and parse failures are errors and nothing is evaluated. A runtime
	/// failure is a successful run that produced a [`Value::Error`].
	pub fn run(&self, source: &str) -> Result<Option<Value>, MonkeyError> {
		let lexer = Lexer::new(source)?;
		let mut parser = Parser::new(lexer);
		let program = parser.parse_program();
		if !parser.errors().is_empty() {
			tracing::debug!(errors = parser.errors().len(), "parse failed");
			return Err(MonkeyError::ParserErrors(parser.errors().to_vec()));
		}
		tracing::debug!(bytes = source.len(), statements = program.statements.len(), "evaluating");

		Ok(evaluate(&program, &self.env))
	}
}
