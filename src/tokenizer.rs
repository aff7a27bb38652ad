//! Lexical analysis: turns the raw input string into a vector of tokens.
//!
//! A single left-to-right scan with no backtracking. Names are runs of ASCII
//! letters; numbers are runs of digits. The extended grammar also accepts the
//! operator names `+ - * / %` (always one character each) and one interior
//! decimal point per number.

use std::fmt;

use serde::Serialize;

use crate::config::Grammar;
use crate::error::{InvalidCharacterSnafu, LexError};

/// Kinds of tokens recognised by the front-end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenKind {
  LeftParen,
  RightParen,
  Name,
  Number,
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      TokenKind::LeftParen => "left paren",
      TokenKind::RightParen => "right paren",
      TokenKind::Name => "name",
      TokenKind::Number => "number",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
  #[serde(rename = "type")]
  pub kind: TokenKind,
  pub text: String,
  /// Byte offset of the first character.
  pub loc: usize,
}

impl Token {
  pub fn new(kind: TokenKind, text: impl Into<String>, loc: usize) -> Self {
    Self {
      kind,
      text: text.into(),
      loc,
    }
  }

  /// Byte offset just past the token.
  pub fn end(&self) -> usize {
    self.loc + self.text.len()
  }
}

const OPERATORS: [u8; 5] = [b'+', b'-', b'*', b'/', b'%'];

/// Lex with the default (extended) grammar.
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
  tokenize_with(input, Grammar::default())
}

pub fn tokenize_with(input: &str, grammar: Grammar) -> Result<Vec<Token>, LexError> {
  let mut tokens = Vec::new();
  let bytes = input.as_bytes();
  let mut i = 0;

  while i < bytes.len() {
    let c = bytes[i];
    if c.is_ascii_whitespace() {
      i += 1;
      continue;
    }

    if c == b'(' || c == b')' {
      let kind = if c == b'(' {
        TokenKind::LeftParen
      } else {
        TokenKind::RightParen
      };
      tokens.push(Token::new(kind, &input[i..i + 1], i));
      i += 1;
      continue;
    }

    if c.is_ascii_alphabetic() {
      let start = i;
      while i < bytes.len() && bytes[i].is_ascii_alphabetic() {
        i += 1;
      }
      tokens.push(Token::new(TokenKind::Name, &input[start..i], start));
      continue;
    }

    if c.is_ascii_digit() {
      let start = i;
      i = scan_digits(bytes, i);
      // Only an interior point counts: "1." leaves the dot for the next round.
      if grammar.allows_decimals()
        && bytes.get(i) == Some(&b'.')
        && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
      {
        i = scan_digits(bytes, i + 1);
      }
      tokens.push(Token::new(TokenKind::Number, &input[start..i], start));
      continue;
    }

    if grammar.allows_operators() && OPERATORS.contains(&c) {
      tokens.push(Token::new(TokenKind::Name, &input[i..i + 1], i));
      i += 1;
      continue;
    }

    let character = input[i..].chars().next().unwrap_or('\0');
    return InvalidCharacterSnafu {
      character,
      position: i,
    }
    .fail();
  }

  Ok(tokens)
}

fn scan_digits(bytes: &[u8], mut i: usize) -> usize {
  while i < bytes.len() && bytes[i].is_ascii_digit() {
    i += 1;
  }
  i
}
