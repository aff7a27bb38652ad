//! Compile options.

use std::fmt;
use std::str::FromStr;

/// Which flavour of the prefix notation the tokenizer accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grammar {
  /// Letters, digits, parentheses and whitespace only.
  Basic,
  /// `Basic` plus the operator names `+ - * / %` and decimal numbers.
  #[default]
  Extended,
}

impl Grammar {
  pub fn allows_operators(self) -> bool {
    matches!(self, Grammar::Extended)
  }

  pub fn allows_decimals(self) -> bool {
    matches!(self, Grammar::Extended)
  }
}

impl fmt::Display for Grammar {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Grammar::Basic => "basic",
      Grammar::Extended => "extended",
    })
  }
}

impl FromStr for Grammar {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "basic" => Ok(Grammar::Basic),
      "extended" => Ok(Grammar::Extended),
      other => Err(format!(
        "unknown grammar \"{other}\" (expected \"basic\" or \"extended\")"
      )),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompileOptions {
  pub grammar: Grammar,
}

impl CompileOptions {
  pub fn with_grammar(grammar: Grammar) -> Self {
    Self { grammar }
  }
}
