pub mod interpreter;
pub mod lexer;
pub mod parser;

/// MonkeyError is the top-level error type for running Monkey source.
#[derive(thiserror::Error, Debug)]
pub enum MonkeyError {
	/// Internal error, e.g. failing to read a source file
	#[error("InternalError: {0:#}")]
	InternalError(#[from] anyhow::Error),
	/// The source could not be lexed at all
	#[error("Lex error: {0}")]
	LexError(#[from] lexer::LexError),
	/// Syntax errors, nothing was evaluated
	#[error("Parser errors:\n{}", display_parse_errors(.0))]
	ParserErrors(Vec<parser::ParseError>),
	/// Evaluation ended in an error value
	#[error("Runtime error: {0}")]
	RuntimeError(#[from] interpreter::RuntimeError),
}

fn display_parse_errors(errors: &[parser::ParseError]) -> String {
	errors.iter().map(|e| format!("\t{e}")).collect::<Vec<String>>().join("\n")
}
