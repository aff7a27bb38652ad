//! Rewrite the source AST into the target (C-like) AST.
//!
//! Calls become a callee identifier plus an argument list. A call sitting
//! directly in the program body is wrapped in an `ExpressionStatement`; a call
//! used as an argument stays bare. Each recursive step receives the vector its
//! result belongs in, so the parent decides where a node lands.

use serde::Serialize;

use crate::parser;

/// Root of the target AST.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Program {
  pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub struct Identifier {
  pub name: String,
}

impl Identifier {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into() }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Node {
  ExpressionStatement {
    expression: Box<Node>,
  },
  CallExpression {
    callee: Identifier,
    arguments: Vec<Node>,
  },
  Identifier {
    name: String,
  },
  NumberLiteral {
    value: String,
  },
}

impl Node {
  pub fn statement(expression: Node) -> Self {
    Self::ExpressionStatement {
      expression: Box::new(expression),
    }
  }

  pub fn call(callee: impl Into<String>, arguments: Vec<Node>) -> Self {
    Self::CallExpression {
      callee: Identifier::new(callee),
      arguments,
    }
  }

  pub fn number(value: impl Into<String>) -> Self {
    Self::NumberLiteral {
      value: value.into(),
    }
  }
}

/// Kind of the source node that owns the node being transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parent {
  Program,
  Call,
}

/// Build a fresh target tree; the source tree is left untouched.
pub fn transform(program: &parser::Program) -> Program {
  let mut body = Vec::with_capacity(program.body.len());
  for node in &program.body {
    transform_node(node, Parent::Program, &mut body);
  }
  Program { body }
}

fn transform_node(node: &parser::Node, parent: Parent, out: &mut Vec<Node>) {
  match node {
    parser::Node::NumberLiteral { value } => out.push(Node::number(value.as_str())),
    parser::Node::CallExpression { name, params } => {
      let mut arguments = Vec::with_capacity(params.len());
      for param in params {
        transform_node(param, Parent::Call, &mut arguments);
      }
      let call = Node::CallExpression {
        callee: Identifier::new(name.as_str()),
        arguments,
      };
      out.push(match parent {
        Parent::Program => Node::statement(call),
        Parent::Call => call,
      });
    }
  }
}
