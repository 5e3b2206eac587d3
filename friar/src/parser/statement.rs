use super::combinators::{check, expect, guard};
use super::expression::parse_expression;
use crate::ast::*;
use crate::errors::*;
use crate::source::Input;

/// `block := '{' { statement } '}'`
pub fn parse_block(input: &mut Input) -> Result<Block, LangError> {
  expect(input, "{", "'{'")?;

  let mut statements = vec![];

  while guard(input, "}")?.is_none() {
    statements.push(parse_statement(input)?);
  }

  Ok(statements)
}

pub fn parse_statement(input: &mut Input) -> Result<Statement, LangError> {
  if let Some(token) = guard(input, "if")? {
    let condition = parse_expression(input)?;
    let then_branch = parse_block(input)?;

    let else_branch = match guard(input, "else")? {
      | Some(_) => Some(parse_block(input)?),
      | None => None,
    };

    return Ok(Statement::If(token.location, condition, then_branch, else_branch));
  }

  if let Some(token) = guard(input, "while")? {
    let condition = parse_expression(input)?;
    let body = parse_block(input)?;

    return Ok(Statement::While(token.location, condition, body));
  }

  let statement = if let Some(token) = guard(input, "return")? {
    let value = if check(input, ";")? {
      None
    } else {
      Some(parse_expression(input)?)
    };

    Statement::Return(token.location, value)
  } else if let Some(token) = guard(input, "continue")? {
    Statement::Continue(token.location)
  } else if let Some(token) = guard(input, "break")? {
    Statement::Break(token.location)
  } else {
    Statement::Expression(parse_expression(input)?)
  };

  expect(input, ";", "';'")?;

  Ok(statement)
}

#[cfg(test)]
mod tests {
  use indoc::indoc;

  use super::super::testing::*;
  use super::*;

  #[test]
  fn test_simple_statements() {
    assert_eq(parse_statement, "return;", Statement::Return(loc(), None));
    assert_eq(parse_statement, "return x;", Statement::Return(loc(), Some(var("x"))));
    assert_eq(parse_statement, "break;", Statement::Break(loc()));
    assert_eq(parse_statement, "continue;", Statement::Continue(loc()));
    assert_eq(
      parse_statement,
      "print(1);",
      Statement::Expression(call(var("print"), vec![int(1)])),
    );
  }

  #[test]
  fn test_if_else() {
    let code = indoc! {"
      if x < 1 {
        return 1;
      } else {
        x = x - 1;
      }
    "};

    assert_eq(
      parse_statement,
      code,
      Statement::If(
        loc(),
        binary(BinaryOperator::Less, var("x"), int(1)),
        vec![Statement::Return(loc(), Some(int(1)))],
        Some(vec![Statement::Expression(Expression::Assign(
          loc(),
          "x".to_string(),
          Box::new(binary(BinaryOperator::Sub, var("x"), int(1))),
        ))]),
      ),
    );
  }

  #[test]
  fn test_while() {
    assert_eq(
      parse_statement,
      "while i { i = i - 1; continue; }",
      Statement::While(
        loc(),
        var("i"),
        vec![
          Statement::Expression(Expression::Assign(
            loc(),
            "i".to_string(),
            Box::new(binary(BinaryOperator::Sub, var("i"), int(1))),
          )),
          Statement::Continue(loc()),
        ],
      ),
    );
    assert_eq(parse_statement, "while 0 {}", Statement::While(loc(), int(0), vec![]));
  }

  #[test]
  fn test_errors() {
    is_err(parse_statement, "return 1");
    is_err(parse_statement, "x");
    is_err(parse_statement, "if x { return 1; ");
    is_err(parse_statement, "if x return 1;");
    is_err(parse_statement, "while { }");
    is_err(parse_statement, "break 1;");
  }
}
