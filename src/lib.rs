//! Crate root: wires together the compilation pipeline.
//!
//! Input like `(add 2 (subtract 4 2))` becomes `add(2, subtract(4, 2));`.
//! The stages run strictly in order and share no state between calls:
//! - `tokenizer` performs lexical analysis and produces a flat token stream.
//! - `parser` builds the source AST, where calls carry a flat parameter list.
//! - `transformer` reshapes it into the target AST of callees, arguments and
//!   statements.
//! - `codegen` unparses the target AST into text.
//! - `error` holds the per-stage errors and the aggregate `CompileError`.

pub mod codegen;
pub mod config;
pub mod error;
pub mod parser;
pub mod report;
pub mod tokenizer;
pub mod transformer;

use tracing::debug;

pub use config::{CompileOptions, Grammar};
pub use error::{CompileError, CompileResult, Stage};
pub use report::Report;
pub use tokenizer::{Token, TokenKind};

/// Compile a source string with the default options.
pub fn compile(input: &str) -> CompileResult<String> {
  compile_with(input, &CompileOptions::default())
}

pub fn compile_with(input: &str, options: &CompileOptions) -> CompileResult<String> {
  Compilation::run(input, options).map(Compilation::into_output)
}

/// Every intermediate product of one successful compilation.
#[derive(Debug, Clone)]
pub struct Compilation {
  tokens: Vec<Token>,
  source_ast: parser::Program,
  target_ast: transformer::Program,
  output: String,
}

impl Compilation {
  #[tracing::instrument(name = "compile", skip_all, fields(len = input.len(), grammar = %options.grammar))]
  pub fn run(input: &str, options: &CompileOptions) -> CompileResult<Self> {
    let result = Self::run_stages(input, options);
    if let Err(err) = &result {
      debug!(stage = %err.stage(), error = %err, "compilation failed");
    }
    result
  }

  fn run_stages(input: &str, options: &CompileOptions) -> CompileResult<Self> {
    let tokens = tokenizer::tokenize_with(input, options.grammar)?;
    debug!(count = tokens.len(), "tokenized");

    let source_ast = parser::parse(&tokens)?;
    debug!(statements = source_ast.body.len(), "parsed");

    let target_ast = transformer::transform(&source_ast);
    debug!(statements = target_ast.body.len(), "transformed");

    let output = codegen::generate(&target_ast)?;
    debug!(bytes = output.len(), "generated");

    Ok(Self {
      tokens,
      source_ast,
      target_ast,
      output,
    })
  }

  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  pub fn source_ast(&self) -> &parser::Program {
    &self.source_ast
  }

  pub fn target_ast(&self) -> &transformer::Program {
    &self.target_ast
  }

  pub fn output(&self) -> &str {
    &self.output
  }

  pub fn into_output(self) -> String {
    self.output
  }
}
