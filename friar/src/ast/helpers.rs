use std::fmt;

use super::*;

impl Declaration {
  pub fn get_location(&self) -> &SourceLocation {
    match self {
      | Declaration::Global(location, _) => location,
      | Declaration::Function(location, _) => location,
    }
  }

  pub fn name(&self) -> &str {
    match self {
      | Declaration::Global(_, name) => name,
      | Declaration::Function(_, definition) => &definition.name,
    }
  }
}

impl PartialEq for Declaration {
  fn eq(&self, other: &Declaration) -> bool {
    match (self, other) {
      | (Declaration::Global(_, lhs), Declaration::Global(_, rhs)) => lhs == rhs,
      | (Declaration::Function(_, lhs), Declaration::Function(_, rhs)) => lhs == rhs,
      | _ => false,
    }
  }
}

impl PartialEq for Statement {
  fn eq(&self, other: &Statement) -> bool {
    match (self, other) {
      | (Statement::If(_, lhs_cond, lhs_then, lhs_else), Statement::If(_, rhs_cond, rhs_then, rhs_else)) => {
        lhs_cond == rhs_cond && lhs_then == rhs_then && lhs_else == rhs_else
      },
      | (Statement::While(_, lhs_cond, lhs_body), Statement::While(_, rhs_cond, rhs_body)) => {
        lhs_cond == rhs_cond && lhs_body == rhs_body
      },
      | (Statement::Return(_, lhs), Statement::Return(_, rhs)) => lhs == rhs,
      | (Statement::Continue(_), Statement::Continue(_)) => true,
      | (Statement::Break(_), Statement::Break(_)) => true,
      | (Statement::Expression(lhs), Statement::Expression(rhs)) => lhs == rhs,
      | _ => false,
    }
  }
}

impl PartialEq for Expression {
  fn eq(&self, other: &Expression) -> bool {
    match (self, other) {
      | (Expression::Literal(_, lhs), Expression::Literal(_, rhs)) => lhs == rhs,
      | (Expression::Variable(_, lhs), Expression::Variable(_, rhs)) => lhs == rhs,
      | (Expression::Array(_, lhs), Expression::Array(_, rhs)) => lhs == rhs,
      | (Expression::Unary(_, lhs_op, lhs), Expression::Unary(_, rhs_op, rhs)) => {
        lhs_op == rhs_op && lhs == rhs
      },
      | (Expression::Binary(_, lhs_op, lhs_a, lhs_b), Expression::Binary(_, rhs_op, rhs_a, rhs_b)) => {
        lhs_op == rhs_op && lhs_a == rhs_a && lhs_b == rhs_b
      },
      | (Expression::Index(_, lhs_src, lhs_idx), Expression::Index(_, rhs_src, rhs_idx)) => {
        lhs_src == rhs_src && lhs_idx == rhs_idx
      },
      | (Expression::Call(_, lhs_func, lhs_args), Expression::Call(_, rhs_func, rhs_args)) => {
        lhs_func == rhs_func && lhs_args == rhs_args
      },
      | (Expression::Assign(_, lhs_name, lhs), Expression::Assign(_, rhs_name, rhs)) => {
        lhs_name == rhs_name && lhs == rhs
      },
      | (
        Expression::IndexAssign(_, lhs_src, lhs_idx, lhs),
        Expression::IndexAssign(_, rhs_src, rhs_idx, rhs),
      ) => lhs_src == rhs_src && lhs_idx == rhs_idx && lhs == rhs,
      | _ => false,
    }
  }
}

impl fmt::Display for Literal {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Literal::Int(value) => write!(f, "{value}"),
      | Literal::Str(value) => write!(f, "'{value}'"),
      | Literal::Bool(value) => write!(f, "{value}"),
      | Literal::Null => write!(f, "null"),
    }
  }
}

/// Canonical rendering with every operator application parenthesized, so the shape of the
/// tree is visible: `1 - 2 - 3` renders as `(1 - (2 - 3))`.
impl fmt::Display for Expression {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Expression::Literal(_, literal) => write!(f, "{literal}"),
      | Expression::Variable(_, name) => write!(f, "{name}"),
      | Expression::Array(_, items) => write!(f, "[{}]", join(items)),
      | Expression::Unary(_, op, expr) => write!(f, "({}{expr})", op.symbol()),
      | Expression::Binary(_, op, lhs, rhs) => write!(f, "({lhs} {} {rhs})", op.symbol()),
      | Expression::Index(_, source, index) => write!(f, "{source}[{index}]"),
      | Expression::Call(_, callee, args) => write!(f, "{callee}({})", join(args)),
      | Expression::Assign(_, name, value) => write!(f, "({name} = {value})"),
      | Expression::IndexAssign(_, source, index, value) => {
        write!(f, "({source}[{index}] = {value})")
      },
    }
  }
}

fn join(exprs: &[Expression]) -> String {
  exprs
    .iter()
    .map(|expr| expr.to_string())
    .collect::<Vec<_>>()
    .join(", ")
}
