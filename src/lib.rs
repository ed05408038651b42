//! # From source text to a value
//!
//! User's source code: `let average = (min + max) / 2;`

//! ## Lexing
//!
//! Also known as `scanning` or `lexical analysis`, takes in the characters and
//! converts them into tokens. Single characters `(`, `;`, integers `123`,
//! identifiers `min` and keywords `let` are all tokens. Whitespace is dropped.
//!
//! So the tokens are
//! `["let", "average", "=", "(", "min", "+", "max", ")", "/", "2", ";"]`.
//! See [`lexer`].

//! ## Parsing
//!
//! A `parser` builds a tree structure out of the tokens, the `abstract syntax
//! tree` or `AST`, and reports `syntax errors`. Operator precedence decides
//! the shape of the tree:
//!
//! ``` markdown
//! average (Statement::Let)
//! └── / (Expression::Infix)
//!     ├── + (Expression::Infix)
//!     │   ├── min (Expression::Identifier)
//!     │   └── max (Expression::Identifier)
//!     └── 2 (Expression::IntegerLiteral)
//! ```
//!
//! See [`parser`] and [`ast`].

//! ## Evaluating
//!
//! A tree-walk interpreter executes the AST right after parsing it. Each node
//! is evaluated against an [`Env`], a chain of scopes mapping names to values.
//! Functions are values too and remember the scope they were created in, that
//! is a `closure`.
//!
//! Nothing is type checked ahead of time. `5 + true` parses fine and
//! evaluates to an error value. See [`interpreter`] and [`environment`].

//! ## Three kinds of failure
//!
//! - Lexing rejects non-ASCII input outright ([`LexError`]).
//! - Parsing collects [`ParseError`]s and keeps going with the next statement.
//! - Evaluation produces [`Value::Error`], an ordinary value that stops the
//!   rest of the evaluation and is handed back to the caller.
//!
//! ```
//! use zmonkey::{Environment, Lexer, Parser, Value, evaluate};
//!
//! let env = Environment::new_global();
//! let mut parser = Parser::new(Lexer::new("let add = fn(a, b) { a + b }; add(2, 3)").unwrap());
//! let program = parser.parse_program();
//! assert!(parser.errors().is_empty());
//! assert_eq!(evaluate(&program, &env), Some(Value::Integer(5)));
//! ```

pub mod ast;
pub mod cli;
pub mod environment;
mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
mod runner;
mod utils;

pub use environment::{Env, Environment};
pub use error::{MonkeyError, interpreter::RuntimeError, lexer::LexError, parser::{ParseError, ParseErrorType}};
pub use interpreter::{evaluate, value::{FALSE, NULL, TRUE, Value}};
pub use lexer::{Lexer, Token, TokenType};
pub use parser::Parser;
pub use runner::Monkey;
pub use utils::RcCell;
