//! JSON envelope for reporting a compilation to other processes.
//!
//! Success serializes as `{"output": "..."}`, failure as
//! `{"error": "...", "stage": "lex"}`.

use serde::Serialize;

use crate::error::{CompileResult, Stage};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
  Output { output: String },
  Error { error: String, stage: Stage },
}

impl Report {
  pub fn from_result(result: &CompileResult<String>) -> Self {
    match result {
      Ok(output) => Report::Output {
        output: output.clone(),
      },
      Err(err) => Report::Error {
        error: err.to_string(),
        stage: err.stage(),
      },
    }
  }

  pub fn is_error(&self) -> bool {
    matches!(self, Report::Error { .. })
  }

  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}
