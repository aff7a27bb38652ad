//! Recursive-descent parser producing the source-shaped AST.
//!
//! The grammar is tiny:
//!
//! ```text
//! Program := Expr*
//! Expr    := Number | Call
//! Call    := '(' Name Expr* ')'
//! ```
//!
//! Calls keep a flat `params` list here; reshaping them into callee and
//! arguments is the transformer's job.

use serde::Serialize;

use crate::error::{Expected, ParseError, UnexpectedEofSnafu, UnexpectedTokenSnafu};
use crate::tokenizer::{Token, TokenKind};

/// Root of the source AST.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
  pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
  CallExpression { name: String, params: Vec<Node> },
  NumberLiteral { value: String },
}

impl Node {
  pub fn call(name: impl Into<String>, params: Vec<Node>) -> Self {
    Self::CallExpression {
      name: name.into(),
      params,
    }
  }

  pub fn number(value: impl Into<String>) -> Self {
    Self::NumberLiteral {
      value: value.into(),
    }
  }
}

/// Parse a complete token stream. An empty stream is an empty program.
pub fn parse(tokens: &[Token]) -> Result<Program, ParseError> {
  let mut stream = TokenStream::new(tokens);
  let mut body = Vec::new();

  while !stream.is_eof() {
    body.push(parse_expr(&mut stream)?);
  }

  Ok(Program { body })
}

fn parse_expr(stream: &mut TokenStream) -> Result<Node, ParseError> {
  match stream.peek().map(|token| token.kind) {
    Some(TokenKind::Number) => {
      let token = stream.expect(TokenKind::Number, Expected::Expression)?;
      Ok(Node::number(token.text.as_str()))
    }
    Some(TokenKind::LeftParen) => parse_call(stream),
    _ => Err(stream.unexpected(Expected::Expression)),
  }
}

fn parse_call(stream: &mut TokenStream) -> Result<Node, ParseError> {
  stream.expect(TokenKind::LeftParen, Expected::Expression)?;
  let name = stream.expect(TokenKind::Name, Expected::Name)?.text.clone();

  let mut params = Vec::new();
  while !stream.equal(TokenKind::RightParen) {
    if stream.is_eof() {
      return Err(stream.unexpected(Expected::ClosingParen));
    }
    params.push(parse_expr(stream)?);
  }

  Ok(Node::CallExpression { name, params })
}

/// Cursor over the token slice, owned by a single `parse` call.
struct TokenStream<'a> {
  tokens: &'a [Token],
  pos: usize,
}

impl<'a> TokenStream<'a> {
  fn new(tokens: &'a [Token]) -> Self {
    Self { tokens, pos: 0 }
  }

  fn peek(&self) -> Option<&'a Token> {
    self.tokens.get(self.pos)
  }

  fn is_eof(&self) -> bool {
    self.pos >= self.tokens.len()
  }

  /// Consume the current token if it has the given kind.
  fn equal(&mut self, kind: TokenKind) -> bool {
    if self.peek().is_some_and(|token| token.kind == kind) {
      self.pos += 1;
      return true;
    }
    false
  }

  fn expect(&mut self, kind: TokenKind, expected: Expected) -> Result<&'a Token, ParseError> {
    match self.peek() {
      Some(token) if token.kind == kind => {
        self.pos += 1;
        Ok(token)
      }
      _ => Err(self.unexpected(expected)),
    }
  }

  /// Describe whatever sits at the cursor as a failure to find `expected`.
  fn unexpected(&self, expected: Expected) -> ParseError {
    match self.peek() {
      Some(token) => UnexpectedTokenSnafu {
        expected,
        found: token.kind,
        text: token.text.as_str(),
        position: token.loc,
      }
      .build(),
      None => UnexpectedEofSnafu {
        expected,
        position: self.tokens.last().map_or(0, Token::end),
      }
      .build(),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tokenizer::tokenize;

  fn parse_str(input: &str) -> Result<Program, ParseError> {
    parse(&tokenize(input).unwrap())
  }

  #[test]
  fn parse_single_call() {
    assert_eq!(
      parse_str("(add 2 2)").unwrap(),
      Program {
        body: vec![Node::call("add", vec![Node::number("2"), Node::number("2")])]
      }
    );
  }

  #[test]
  fn parse_nested_calls() {
    assert_eq!(
      parse_str("(add 2 (subtract 4 2))").unwrap().body,
      vec![Node::call(
        "add",
        vec![
          Node::number("2"),
          Node::call("subtract", vec![Node::number("4"), Node::number("2")]),
        ]
      )]
    );
  }

  #[test]
  fn parse_empty_input() {
    assert_eq!(parse_str("").unwrap(), Program::default());
  }

  #[test]
  fn parse_call_without_params() {
    assert_eq!(parse_str("(now)").unwrap().body, vec![Node::call("now", vec![])]);
  }

  #[test]
  fn parse_several_top_level_expressions() {
    assert_eq!(
      parse_str("(a) 7 (b 1)").unwrap().body,
      vec![
        Node::call("a", vec![]),
        Node::number("7"),
        Node::call("b", vec![Node::number("1")]),
      ]
    );
  }

  #[test]
  fn missing_closing_paren() {
    assert_eq!(
      parse_str("(add 2 2"),
      Err(ParseError::UnexpectedEof {
        expected: Expected::ClosingParen,
        position: 8
      })
    );
  }

  #[test]
  fn lone_open_paren_needs_a_name() {
    assert_eq!(
      parse_str("("),
      Err(ParseError::UnexpectedEof {
        expected: Expected::Name,
        position: 1
      })
    );
  }

  #[test]
  fn call_must_start_with_name() {
    assert_eq!(
      parse_str("(2 3)"),
      Err(ParseError::UnexpectedToken {
        expected: Expected::Name,
        found: TokenKind::Number,
        text: "2".to_string(),
        position: 1
      })
    );
  }

  #[test]
  fn bare_name_is_not_an_expression() {
    assert_eq!(
      parse_str("(add x)"),
      Err(ParseError::UnexpectedToken {
        expected: Expected::Expression,
        found: TokenKind::Name,
        text: "x".to_string(),
        position: 5
      })
    );
  }

  #[test]
  fn stray_closing_paren() {
    assert_eq!(
      parse_str("(a))"),
      Err(ParseError::UnexpectedToken {
        expected: Expected::Expression,
        found: TokenKind::RightParen,
        text: ")".to_string(),
        position: 3
      })
    );
  }
}
