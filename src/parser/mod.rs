//! The `Lexer` works with the lexical grammar, its alphabet is characters.
//! The `Parser` works with the syntactic grammar, its alphabet is tokens.
//!
//! Statements are parsed by recursive descent on the leading keyword.
//! Expressions are parsed with Pratt's top down operator precedence: every
//! token that can start an expression owns a *prefix* parse function, every
//! token that can continue one owns an *infix* parse function that receives
//! the expression parsed so far, and each infix token carries a binding power.
//!
//! |Name|Operators|Associates
//! --|--|--
//! Equals|== !=|Left
//! LessGreater|< >|Left
//! Sum|+ -|Left
//! Product|* /|Left
//! Prefix|! -|Right
//! Call|f(x)|Left
//!
//! Grammar:
//!
//! ``` BNF
//! program        → statement* EOF ;
//! statement      → letStmt | returnStmt | exprStmt ;
//! letStmt        → "let" IDENT "=" expression ";"? ;
//! returnStmt     → "return" expression ";"? ;
//! exprStmt       → expression ";"? ;
//! block          → "{" statement* "}" ;
//! expression     → prefix ( infix )* ;
//! prefix         → IDENT | INT | "true" | "false" | ( "!" | "-" ) expression
//!                | "(" expression ")" | if | function ;
//! if             → "if" "(" expression ")" block ( "else" block )? ;
//! function       → "fn" "(" ( IDENT ( "," IDENT )* )? ")" block ;
//! infix          → OPERATOR expression | "(" ( expression ( "," expression )* )? ")" ;
//! ```
//!
//! A `let` or `return` may drop its `;` only when it is the last statement of
//! the input or of a block.

mod precedence;

use std::collections::HashMap;

use TokenType::*;
use precedence::Precedence;

use crate::{ast::{BlockStatement, Expression, InfixOperator, PrefixOperator, Program, Statement}, error::parser::{ParseError, ParseErrorType}, lexer::{Lexer, Token, TokenType}};

/// Parses an expression starting at the current token.
type PrefixParseFn<'a> = fn(&mut Parser<'a>) -> Result<Expression, ParseError>;
/// Continues the given left operand with the current (infix) token.
type InfixParseFn<'a> = fn(&mut Parser<'a>, Expression) -> Result<Expression, ParseError>;

/// A Pratt parser over a token stream.
pub struct Parser<'a> {
	lexer:            Lexer<'a>,
	/// The token under examination
	current:          Token<'a>,
	/// One token of lookahead
	peek:             Token<'a>,
	errors:           Vec<ParseError>,
	/// Braces opened and not yet closed, up to and including `current`
	depth:            usize,
	prefix_parse_fns: HashMap<TokenType, PrefixParseFn<'a>>,
	infix_parse_fns:  HashMap<TokenType, InfixParseFn<'a>>,
}

impl<'a> Parser<'a> {
	pub fn new(mut lexer: Lexer<'a>) -> Self {
		let current = lexer.next_token();
		let peek = lexer.next_token();
		let mut parser = Self {
			lexer,
			current,
			peek,
			errors: Vec::new(),
			depth: usize::from(current.r#type == LeftBrace),
			prefix_parse_fns: HashMap::new(),
			infix_parse_fns: HashMap::new(),
		};

		parser.register_prefix(Identifier, Parser::parse_identifier);
		parser.register_prefix(Integer, Parser::parse_integer_literal);
		parser.register_prefix(True, Parser::parse_boolean);
		parser.register_prefix(False, Parser::parse_boolean);
		parser.register_prefix(Bang, |parser| parser.parse_prefix_expression(PrefixOperator::Bang));
		parser.register_prefix(Minus, |parser| parser.parse_prefix_expression(PrefixOperator::Minus));
		parser.register_prefix(LeftParen, Parser::parse_grouped_expression);
		parser.register_prefix(If, Parser::parse_if_expression);
		parser.register_prefix(Function, Parser::parse_function_literal);

		parser.register_infix(Plus, |parser, left| parser.parse_infix_expression(left, InfixOperator::Plus));
		parser.register_infix(Minus, |parser, left| parser.parse_infix_expression(left, InfixOperator::Minus));
		parser.register_infix(Asterisk, |parser, left| parser.parse_infix_expression(left, InfixOperator::Asterisk));
		parser.register_infix(Slash, |parser, left| parser.parse_infix_expression(left, InfixOperator::Slash));
		parser.register_infix(Less, |parser, left| parser.parse_infix_expression(left, InfixOperator::Less));
		parser.register_infix(Greater, |parser, left| parser.parse_infix_expression(left, InfixOperator::Greater));
		parser.register_infix(EqualEqual, |parser, left| parser.parse_infix_expression(left, InfixOperator::Equal));
		parser.register_infix(BangEqual, |parser, left| parser.parse_infix_expression(left, InfixOperator::NotEqual));
		parser.register_infix(LeftParen, Parser::parse_call_expression);

		parser
	}

	/// Parse the whole input. Syntax errors are collected in
	/// [`errors`](Self::errors) and the offending statement is dropped.
	pub fn parse_program(&mut self) -> Program {
		let mut program = Program::default();
		while !self.current.is_eof() {
			match self.parse_statement() {
				Ok(statement) => program.statements.push(statement),
				Err(error) => {
					self.report(error);
					self.synchronize();
				}
			}
			self.next_token();
		}
		program
	}

	/// Syntax errors collected so far, in source order.
	pub fn errors(&self) -> &[ParseError] { &self.errors }

	fn register_prefix(&mut self, r#type: TokenType, function: PrefixParseFn<'a>) {
		self.prefix_parse_fns.insert(r#type, function);
	}

	fn register_infix(&mut self, r#type: TokenType, function: InfixParseFn<'a>) {
		self.infix_parse_fns.insert(r#type, function);
	}

	fn parse_statement(&mut self) -> Result<Statement, ParseError> {
		match self.current.r#type {
			Let => self.parse_let_statement(),
			Return => self.parse_return_statement(),
			_ => self.parse_expression_statement(),
		}
	}

	fn parse_let_statement(&mut self) -> Result<Statement, ParseError> {
		self.expect_peek(Identifier)?;
		let name = self.current.lexeme.to_string();
		self.expect_peek(Assign)?;
		self.next_token();

		let value = self.parse_expression(Precedence::Lowest)?;
		self.end_statement()?;
		Ok(Statement::Let { name, value })
	}

	fn parse_return_statement(&mut self) -> Result<Statement, ParseError> {
		self.next_token();
		let value = self.parse_expression(Precedence::Lowest)?;
		self.end_statement()?;
		Ok(Statement::Return(value))
	}

	fn parse_expression_statement(&mut self) -> Result<Statement, ParseError> {
		let expression = self.parse_expression(Precedence::Lowest)?;
		if self.peek_is(Semicolon) {
			self.next_token();
		}
		Ok(Statement::Expression(expression))
	}

	/// A `let` or `return` ends at `;`, which is consumed, or right before a
	/// closing brace or the end of input.
	fn end_statement(&mut self) -> Result<(), ParseError> {
		match self.peek.r#type {
			Semicolon => {
				self.next_token();
				Ok(())
			}
			RightBrace | Eof => Ok(()),
			actual => Err(ParseErrorType::UnexpectedToken { expected: Semicolon, actual }.into()),
		}
	}

	/// Pratt loop: parse a prefix, then keep folding it into infix expressions
	/// while the next operator binds tighter than `precedence`.
	fn parse_expression(&mut self, precedence: Precedence) -> Result<Expression, ParseError> {
		let prefix = self
			.prefix_parse_fns
			.get(&self.current.r#type)
			.copied()
			.ok_or(ParseErrorType::NoPrefixParseFunction(self.current.r#type))?;
		let mut left = prefix(self)?;

		while precedence < Precedence::of(self.peek.r#type) {
			let Some(infix) = self.infix_parse_fns.get(&self.peek.r#type).copied() else {
				return Ok(left);
			};
			self.next_token();
			left = infix(self, left)?;
		}
		Ok(left)
	}

	fn parse_identifier(&mut self) -> Result<Expression, ParseError> {
		Ok(Expression::Identifier(self.current.lexeme.to_string()))
	}

	fn parse_integer_literal(&mut self) -> Result<Expression, ParseError> {
		let literal = self.current.lexeme;
		literal
			.parse()
			.map(Expression::IntegerLiteral)
			.map_err(|_| ParseError::from(ParseErrorType::InvalidInteger(literal.to_string())))
	}

	fn parse_boolean(&mut self) -> Result<Expression, ParseError> {
		Ok(Expression::Boolean(self.current_is(True)))
	}

	fn parse_prefix_expression(&mut self, operator: PrefixOperator) -> Result<Expression, ParseError> {
		self.next_token();
		let right = self.parse_expression(Precedence::Prefix)?;
		Ok(Expression::prefix(operator, right))
	}

	/// Same precedence on the right keeps equal operators left associative.
	fn parse_infix_expression(&mut self, left: Expression, operator: InfixOperator) -> Result<Expression, ParseError> {
		let precedence = Precedence::of(self.current.r#type);
		self.next_token();
		let right = self.parse_expression(precedence)?;
		Ok(Expression::infix(left, operator, right))
	}

	fn parse_grouped_expression(&mut self) -> Result<Expression, ParseError> {
		self.next_token(); // consume '('
		let expression = self.parse_expression(Precedence::Lowest)?;
		self.expect_peek(RightParen)?;
		Ok(expression)
	}

	fn parse_if_expression(&mut self) -> Result<Expression, ParseError> {
		self.expect_peek(LeftParen)?;
		self.next_token();
		let condition = self.parse_expression(Precedence::Lowest)?;
		self.expect_peek(RightParen)?;

		self.expect_peek(LeftBrace)?;
		let consequence = self.parse_block_statement()?;

		let alternative = if self.peek_is(Else) {
			self.next_token();
			self.expect_peek(LeftBrace)?;
			Some(self.parse_block_statement()?)
		} else {
			None
		};
		Ok(Expression::if_else(condition, consequence, alternative))
	}

	/// Parse statements up to the matching `}`. The current token is `{` on
	/// entry and `}` on exit.
	fn parse_block_statement(&mut self) -> Result<BlockStatement, ParseError> {
		self.next_token(); // consume '{'
		let mut statements = Vec::new();
		while !matches!(self.current.r#type, RightBrace | Eof) {
			statements.push(self.parse_statement()?);
			self.next_token();
		}
		if self.current.is_eof() {
			return Err(ParseErrorType::UnexpectedToken { expected: RightBrace, actual: Eof }.into());
		}
		Ok(BlockStatement::new(statements))
	}

	fn parse_function_literal(&mut self) -> Result<Expression, ParseError> {
		self.expect_peek(LeftParen)?;
		let parameters = self.parse_function_parameters()?;
		self.expect_peek(LeftBrace)?;
		let body = self.parse_block_statement()?;
		Ok(Expression::function(parameters, body))
	}

	fn parse_function_parameters(&mut self) -> Result<Vec<String>, ParseError> {
		let mut parameters = Vec::new();
		if self.peek_is(RightParen) {
			self.next_token();
			return Ok(parameters);
		}

		self.expect_peek(Identifier)?;
		parameters.push(self.current.lexeme.to_string());
		while self.peek_is(Comma) {
			self.next_token();
			self.expect_peek(Identifier)?;
			parameters.push(self.current.lexeme.to_string());
		}
		self.expect_peek(RightParen)?;
		Ok(parameters)
	}

	fn parse_call_expression(&mut self, function: Expression) -> Result<Expression, ParseError> {
		let arguments = self.parse_call_arguments()?;
		Ok(Expression::call(function, arguments))
	}

	fn parse_call_arguments(&mut self) -> Result<Vec<Expression>, ParseError> {
		let mut arguments = Vec::new();
		if self.peek_is(RightParen) {
			self.next_token();
			return Ok(arguments);
		}

		self.next_token();
		arguments.push(self.parse_expression(Precedence::Lowest)?);
		while self.peek_is(Comma) {
			self.next_token();
			self.next_token();
			arguments.push(self.parse_expression(Precedence::Lowest)?);
		}
		self.expect_peek(RightParen)?;
		Ok(arguments)
	}

	/// Advance both tokens in lock-step.
	fn next_token(&mut self) {
		self.current = self.peek;
		self.peek = self.lexer.next_token();
		match self.current.r#type {
			LeftBrace => self.depth += 1,
			RightBrace => self.depth = self.depth.saturating_sub(1),
			_ => {}
		}
	}

	fn current_is(&self, r#type: TokenType) -> bool { self.current.r#type == r#type }

	fn peek_is(&self, r#type: TokenType) -> bool { self.peek.r#type == r#type }

	/// Advance only if the next token has the expected type.
	fn expect_peek(&mut self, expected: TokenType) -> Result<(), ParseError> {
		if self.peek_is(expected) {
			self.next_token();
			Ok(())
		} else {
			Err(ParseErrorType::UnexpectedToken { expected, actual: self.peek.r#type }.into())
		}
	}

	fn report(&mut self, error: ParseError) {
		tracing::debug!(%error, token = %self.current.r#type, "syntax error");
		self.errors.push(error);
	}

	/// Drop the rest of a broken top level statement, including any blocks it
	/// opened: stop on its `;`, on the `}` closing its last block, or at the
	/// end of input.
	fn synchronize(&mut self) {
		loop {
			match self.current.r#type {
				Eof => return,
				Semicolon if self.depth == 0 => return,
				RightBrace if self.depth == 0 => {
					// `else`, a call or an operator still belong to this statement
					if self.peek_is(Else) || self.infix_parse_fns.contains_key(&self.peek.r#type) {
						self.next_token();
						continue;
					}
					if self.peek_is(Semicolon) {
						self.next_token();
					}
					return;
				}
				_ => self.next_token(),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn parse_program(input: &str) -> (Program, Vec<String>) {
		let mut parser = Parser::new(Lexer::new(input).unwrap());
		let program = parser.parse_program();
		let errors = parser.errors().iter().map(ToString::to_string).collect();
		(program, errors)
	}

	fn parse(input: &str, equals: &str) {
		let (program, errors) = parse_program(input);
		assert_eq!(errors, Vec::<String>::new(), "input: {input}");
		assert_eq!(program.to_string(), equals);
	}

	fn parse_errors(input: &str) -> Vec<String> { parse_program(input).1 }

	#[test]
	fn parse_let_statements() {
		let (program, errors) = parse_program("let x = 5;\nlet y = true;\nlet foobar = y;");
		assert!(errors.is_empty());
		assert_eq!(program.statements, vec![
			Statement::Let { name: "x".to_string(), value: Expression::IntegerLiteral(5) },
			Statement::Let { name: "y".to_string(), value: Expression::Boolean(true) },
			Statement::Let { name: "foobar".to_string(), value: Expression::Identifier("y".to_string()) },
		]);
	}

	#[test]
	fn parse_return_statements() {
		let (program, errors) = parse_program("return 5;\nreturn 10;\nreturn add(15);");
		assert!(errors.is_empty());
		assert_eq!(program.statements.len(), 3);
		assert!(program.statements.iter().all(|s| matches!(s, Statement::Return(_))));
		assert_eq!(program.to_string(), "return 5;return 10;return add(15);");
	}

	#[test]
	fn parse_identifier_and_literals() {
		parse("foobar;", "foobar");
		parse("5;", "5");
		parse("true;", "true");
		parse("false", "false");
	}

	#[test]
	fn parse_prefix_expressions() {
		parse("!5;", "(!5)");
		parse("-15;", "(-15)");
		parse("!true;", "(!true)");
		parse("!!false", "(!(!false))");
		parse("-a * b", "((-a) * b)");
	}

	#[test]
	fn parse_infix_expressions() {
		for operator in ["+", "-", "*", "/", ">", "<", "==", "!="] {
			parse(&format!("5 {operator} 5;"), &format!("(5 {operator} 5)"));
		}
		parse("true == false", "(true == false)");
	}

	#[test]
	fn parse_operator_precedence() {
		parse("1*2+3;", "((1 * 2) + 3)");
		parse("a + b + c", "((a + b) + c)");
		parse("a + b - c", "((a + b) - c)");
		parse("a * b * c", "((a * b) * c)");
		parse("a * b / c", "((a * b) / c)");
		parse("a + b / c", "(a + (b / c))");
		parse("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)");
		parse("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)");
		parse("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))");
		parse("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))");
		parse("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))");
		parse("5 * 5 / 10 + 18 - 8 + 12", "(((((5 * 5) / 10) + 18) - 8) + 12)");
		parse("3 > 5 == false", "((3 > 5) == false)");
	}

	#[test]
	fn parse_grouping() {
		parse("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)");
		parse("(5 + 5) * 2", "((5 + 5) * 2)");
		parse("2 / (5 + 5)", "(2 / (5 + 5))");
		parse("-(5 + 5)", "(-(5 + 5))");
		parse("!(true == true)", "(!(true == true))");
	}

	#[test]
	fn parse_call_precedence() {
		parse("a + add(b * c) + d", "((a + add((b * c))) + d)");
		parse("add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))", "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))");
		parse("add(a + b + c * d / f + g)", "add((((a + b) + ((c * d) / f)) + g))");
		parse("add()", "add()");
		parse("fn(x) { x }(5)", "fn(x) x(5)");
	}

	#[test]
	fn parse_if_expressions() {
		parse("if (x < y) { x }", "if (x < y) x");
		parse("if (x < y) { x } else { y }", "if (x < y) x else y");
		let (program, _) = parse_program("if (x) { 1; 2 } else { }");
		match &program.statements[0] {
			Statement::Expression(Expression::If { consequence, alternative, .. }) => {
				assert_eq!(consequence.statements.len(), 2);
				assert_eq!(alternative.as_ref().map(|b| b.statements.len()), Some(0));
			}
			other => panic!("expected if expression, got {other:?}"),
		}
	}

	#[test]
	fn parse_function_literals() {
		parse("fn(x, y) { x + y; }", "fn(x, y) (x + y)");
		let (program, _) = parse_program("fn() {}; fn(x) {}; fn(x, y, z) {};");
		let arities: Vec<_> = program
			.statements
			.iter()
			.map(|s| match s {
				Statement::Expression(Expression::FunctionLiteral { parameters, .. }) => parameters.len(),
				other => panic!("expected function literal, got {other:?}"),
			})
			.collect();
		assert_eq!(arities, vec![0, 1, 3]);
	}

	#[test]
	fn parse_nested_blocks() {
		parse("let f = fn(x) { if (x) { return 1; } return 2; };", "let f = fn(x) if x return 1;return 2;;");
		parse("let a = fn() { let b = 1 }", "let a = fn() let b = 1;;");
	}

	#[test]
	fn parse_optional_semicolons() {
		parse("let x = 5", "let x = 5;");
		parse("return x", "return x;");
		parse("1 + 2 3", "(1 + 2)3");
	}

	#[test]
	fn let_errors() {
		assert_eq!(parse_errors("let = 5;"), vec!["expected next token to be IDENT, got = instead"]);
		assert_eq!(parse_errors("let x 5;"), vec!["expected next token to be =, got INT instead"]);
		assert_eq!(parse_errors("let 838383;"), vec!["expected next token to be IDENT, got INT instead"]);
	}

	#[test]
	fn missing_semicolon_is_reported() {
		let (program, errors) = parse_program("return 5;\nreturn 10;\nreturn 993 322;");
		assert_eq!(errors, vec!["expected next token to be ;, got INT instead"]);
		assert_eq!(program.to_string(), "return 5;return 10;");
	}

	#[test]
	fn recovery_keeps_later_statements() {
		let (program, errors) = parse_program("let x = ; let y = 2; y");
		assert_eq!(errors, vec!["no prefix parse function for ; found"]);
		assert_eq!(program.to_string(), "let y = 2;y");
	}

	#[test]
	fn recovery_drops_the_whole_enclosing_statement() {
		let (program, errors) = parse_program("let f = fn() { let = 1; 2 }; let y = 3;");
		assert_eq!(errors, vec!["expected next token to be IDENT, got = instead"]);
		assert_eq!(program.to_string(), "let y = 3;");

		let (program, errors) = parse_program("if (x) { if (y) { 1 + } 2 } else { 3 } let y = 3;");
		assert_eq!(errors, vec!["no prefix parse function for } found"]);
		assert_eq!(program.to_string(), "let y = 3;");

		let (program, errors) = parse_program("let g = fn() { return 1 2 }(1) + 1; g");
		assert_eq!(errors, vec!["expected next token to be ;, got INT instead"]);
		assert_eq!(program.to_string(), "g");

		let (program, errors) = parse_program("{ 1 }; 2");
		assert_eq!(errors, vec!["no prefix parse function for { found"]);
		assert_eq!(program.to_string(), "2");
	}

	#[test]
	fn no_prefix_parse_function() {
		assert_eq!(parse_errors("@"), vec!["no prefix parse function for ILLEGAL found"]);
		assert_eq!(parse_errors("}"), vec!["no prefix parse function for } found"]);
		assert_eq!(parse_errors("5 + ;"), vec!["no prefix parse function for ; found"]);
	}

	#[test]
	fn construct_errors() {
		assert_eq!(parse_errors("if x { 1 }"), vec!["expected next token to be (, got IDENT instead"]);
		assert_eq!(parse_errors("if (x) 1"), vec!["expected next token to be {, got INT instead"]);
		assert_eq!(parse_errors("if (x) { 1 } else 2"), vec!["expected next token to be {, got INT instead"]);
		assert_eq!(parse_errors("fn(x, 1) { x }"), vec!["expected next token to be IDENT, got INT instead"]);
		assert_eq!(parse_errors("add(1, 2"), vec!["expected next token to be ), got EOF instead"]);
		assert_eq!(parse_errors("(1 + 2"), vec!["expected next token to be ), got EOF instead"]);
		assert_eq!(parse_errors("fn(x) { x"), vec!["expected next token to be }, got EOF instead"]);
	}

	#[test]
	fn integer_out_of_range() {
		assert_eq!(parse_errors("99999999999999999999"), vec!["could not parse 99999999999999999999 as integer"]);
		let mut parser = Parser::new(Lexer::new("-99999999999999999999").unwrap());
		parser.parse_program();
		assert!(matches!(
			parser.errors()[0].r#type(),
			ParseErrorType::InvalidInteger(literal) if literal == "99999999999999999999"
		));
		parse("9223372036854775807", "9223372036854775807");
	}
}
