//! Code generation: unparse the target AST into C-style call syntax.
//!
//! Statements are joined with newlines; each one ends in `;`. Expression
//! statements are only legal directly in the program body, anything else
//! means the transformer handed over a tree it should never build.

use crate::error::{GenerateError, NestedStatementSnafu};
use crate::transformer::{Node, Program};

/// Emit source text for a program.
pub fn generate(program: &Program) -> Result<String, GenerateError> {
  let mut out = String::new();
  for (i, node) in program.body.iter().enumerate() {
    if i > 0 {
      out.push('\n');
    }
    emit_stmt(node, &mut out)?;
  }
  Ok(out)
}

fn emit_stmt(node: &Node, out: &mut String) -> Result<(), GenerateError> {
  match node {
    Node::ExpressionStatement { expression } => {
      if matches!(**expression, Node::ExpressionStatement { .. }) {
        return NestedStatementSnafu {
          within: "another expression statement",
        }
        .fail();
      }
      emit_expr(expression, out)?;
      out.push(';');
      Ok(())
    }
    _ => emit_expr(node, out),
  }
}

fn emit_expr(node: &Node, out: &mut String) -> Result<(), GenerateError> {
  match node {
    Node::Identifier { name } => out.push_str(name),
    Node::NumberLiteral { value } => out.push_str(value),
    Node::CallExpression { callee, arguments } => {
      out.push_str(&callee.name);
      out.push('(');
      for (i, arg) in arguments.iter().enumerate() {
        if i > 0 {
          out.push_str(", ");
        }
        emit_expr(arg, out)?;
      }
      out.push(')');
    }
    Node::ExpressionStatement { .. } => {
      return NestedStatementSnafu {
        within: "a call argument",
      }
      .fail();
    }
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn generate_statement() {
    let program = Program {
      body: vec![Node::statement(Node::call(
        "add",
        vec![Node::number("2"), Node::number("2")],
      ))],
    };
    assert_eq!(generate(&program).unwrap(), "add(2, 2);");
  }

  #[test]
  fn generate_joins_with_newlines() {
    let program = Program {
      body: vec![
        Node::statement(Node::call("a", vec![])),
        Node::statement(Node::call(
          "b",
          vec![Node::call("c", vec![Node::number("1.5")])],
        )),
      ],
    };
    assert_eq!(generate(&program).unwrap(), "a();\nb(c(1.5));");
  }

  #[test]
  fn generate_bare_leaves() {
    let program = Program {
      body: vec![
        Node::number("007"),
        Node::Identifier {
          name: "x".to_string(),
        },
      ],
    };
    assert_eq!(generate(&program).unwrap(), "007\nx");
  }

  #[test]
  fn generate_empty_program() {
    assert_eq!(generate(&Program::default()).unwrap(), "");
  }

  #[test]
  fn statement_inside_arguments_is_internal_error() {
    let program = Program {
      body: vec![Node::statement(Node::call(
        "f",
        vec![Node::statement(Node::number("1"))],
      ))],
    };
    assert_eq!(
      generate(&program),
      Err(GenerateError::NestedStatement {
        within: "a call argument"
      })
    );
  }

  #[test]
  fn doubly_wrapped_statement_is_internal_error() {
    let program = Program {
      body: vec![Node::statement(Node::statement(Node::call("f", vec![])))],
    };
    assert!(matches!(
      generate(&program),
      Err(GenerateError::NestedStatement { .. })
    ));
  }
}
