//! Error taxonomy shared across the compilation pipeline.
//!
//! Each stage owns a small error enum; `CompileError` wraps them without
//! losing which stage failed. Diagnostics point at the offending byte with a
//! caret, in the same style for every stage.

use std::fmt;

use serde::Serialize;
use snafu::Snafu;

use crate::tokenizer::TokenKind;

pub type CompileResult<T> = Result<T, CompileError>;

/// The pipeline stage an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
  Lex,
  Parse,
  Generate,
}

impl fmt::Display for Stage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Stage::Lex => "lex",
      Stage::Parse => "parse",
      Stage::Generate => "generate",
    })
  }
}

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
  Expression,
  Name,
  ClosingParen,
}

impl fmt::Display for Expected {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Expected::Expression => "a number or \"(\"",
      Expected::Name => "a call name",
      Expected::ClosingParen => "\")\"",
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum LexError {
  #[snafu(display("invalid character '{character}' at offset {position}"))]
  InvalidCharacter { character: char, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ParseError {
  #[snafu(display("expected {expected}, but got {found} \"{text}\" at offset {position}"))]
  UnexpectedToken {
    expected: Expected,
    found: TokenKind,
    text: String,
    position: usize,
  },
  #[snafu(display("expected {expected}, but reached end of input at offset {position}"))]
  UnexpectedEof { expected: Expected, position: usize },
}

/// Raised when the generator is handed a tree the transformer never builds.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum GenerateError {
  #[snafu(display("internal error: expression statement nested inside {within}"))]
  NestedStatement { within: &'static str },
}

#[derive(Debug, Snafu)]
pub enum CompileError {
  #[snafu(transparent)]
  Lex { source: LexError },
  #[snafu(transparent)]
  Parse { source: ParseError },
  #[snafu(transparent)]
  Internal { source: GenerateError },
}

impl CompileError {
  pub fn stage(&self) -> Stage {
    match self {
      CompileError::Lex { .. } => Stage::Lex,
      CompileError::Parse { .. } => Stage::Parse,
      CompileError::Internal { .. } => Stage::Generate,
    }
  }

  /// Byte offset into the input the error refers to, if any.
  pub fn position(&self) -> Option<usize> {
    match self {
      CompileError::Lex {
        source: LexError::InvalidCharacter { position, .. },
      } => Some(*position),
      CompileError::Parse {
        source:
          ParseError::UnexpectedToken { position, .. } | ParseError::UnexpectedEof { position, .. },
      } => Some(*position),
      CompileError::Internal { .. } => None,
    }
  }

  /// Format the error against the input it came from, with a caret under
  /// the offending character.
  pub fn render(&self, source: &str) -> String {
    let Some(loc) = self.position() else {
      return self.to_string();
    };
    let expr_line = format!("'{source}'");
    let safe_loc = loc.min(source.len());
    let char_offset = source.get(..safe_loc).map_or(0, |s| s.chars().count()) + 1; // account for opening quote
    let marker = format!("{}^", " ".repeat(char_offset));
    format!("{expr_line}\n{marker} {self}")
  }
}
