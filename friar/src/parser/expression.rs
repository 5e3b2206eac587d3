use super::combinators::{self, expect, guard, take_delim};
use crate::ast::*;
use crate::errors::*;
use crate::lexer::{SpannedToken, Token, TokenKind};
use crate::source::Input;

/// `expr := primary (simple-assign | index-assign | binary-op)?`
///
/// The right-hand side of both assignments and binary operators is a full expression, so chains
/// associate to the right and every operator has the same precedence.
pub fn parse_expression(input: &mut Input) -> Result<Expression, LangError> {
  let primary = parse_primary(input)?;

  if let Some(assign) = guard(input, "=")? {
    let value = Box::new(parse_expression(input)?);

    return match primary {
      | Expression::Variable(location, name) => Ok(Expression::Assign(location, name, value)),
      | Expression::Index(location, source, index) => {
        Ok(Expression::IndexAssign(location, source, index, value))
      },
      | target => Err(input.error(ParseError::InvalidAssignmentTarget {
        location: assign.location,
        target: target.to_string(),
      })),
    };
  }

  for operator in BinaryOperator::ALL {
    if let Some(token) = guard(input, operator.symbol())? {
      let rhs = parse_expression(input)?;

      return Ok(Expression::Binary(
        token.location,
        operator,
        Box::new(primary),
        Box::new(rhs),
      ));
    }
  }

  Ok(primary)
}

/// An atom followed by any chain of `[index]` and `(arguments)` suffixes.
pub fn parse_primary(input: &mut Input) -> Result<Expression, LangError> {
  let mut expr = parse_atom(input)?;

  loop {
    if let Some(open) = guard(input, "[")? {
      let index = parse_expression(input)?;
      expect(input, "]", "']'")?;

      expr = Expression::Index(open.location, Box::new(expr), Box::new(index));
    } else if let Some(open) = guard(input, "(")? {
      let arguments = take_delim(input, ")", ",", parse_expression)?;

      expr = Expression::Call(open.location, Box::new(expr), arguments);
    } else {
      return Ok(expr);
    }
  }
}

fn parse_atom(input: &mut Input) -> Result<Expression, LangError> {
  // Parentheses only group, they leave no node behind.
  if guard(input, "(")?.is_some() {
    let expr = parse_expression(input)?;
    expect(input, ")", "')'")?;

    return Ok(expr);
  }

  for operator in UnaryOperator::ALL {
    if let Some(token) = guard(input, operator.symbol())? {
      let operand = parse_primary(input)?;

      return Ok(Expression::Unary(token.location, operator, Box::new(operand)));
    }
  }

  if let Some(open) = guard(input, "[")? {
    let items = take_delim(input, "]", ",", parse_expression)?;

    return Ok(Expression::Array(open.location, items));
  }

  if let Some(SpannedToken {
    location,
    token: Token::Identifier(name),
  }) = guard(input, TokenKind::Identifier)?
  {
    return Ok(Expression::Variable(location, name));
  }

  if let Some(SpannedToken {
    location,
    token: Token::Value(literal),
  }) = guard(input, TokenKind::Value)?
  {
    return Ok(Expression::Literal(location, literal));
  }

  if let Some(SpannedToken {
    location,
    token: Token::String(text),
  }) = guard(input, TokenKind::String)?
  {
    return Ok(Expression::Literal(location, Literal::Str(text)));
  }

  Err(combinators::unmatched(
    input,
    &["(", "+", "-", "!", "[", "identifier", "literal"],
  ))
}

#[cfg(test)]
mod tests {
  use super::super::testing::*;
  use super::*;

  #[test]
  fn test_literals() {
    assert_eq(parse_expression, "42", int(42));
    assert_eq(parse_expression, "'raw'", str("raw"));
    assert_eq(parse_expression, "\"text\"", str("text"));
    assert_eq(parse_expression, "null", Expression::Literal(loc(), Literal::Null));
    assert_eq(parse_expression, "true", Expression::Literal(loc(), Literal::Bool(true)));
  }

  #[test]
  fn test_binary_operators_associate_right() {
    assert_eq(
      parse_expression,
      "1 - 2 - 3",
      binary(BinaryOperator::Sub, int(1), binary(BinaryOperator::Sub, int(2), int(3))),
    );
    assert_eq(
      parse_expression,
      "2 * 3 + 4",
      binary(BinaryOperator::Mul, int(2), binary(BinaryOperator::Add, int(3), int(4))),
    );
  }

  #[test]
  fn test_parens() {
    assert_eq(
      parse_expression,
      "(1 - 2) - 3",
      binary(BinaryOperator::Sub, binary(BinaryOperator::Sub, int(1), int(2)), int(3)),
    );
    assert_eq(parse_expression, "((x))", var("x"));
  }

  #[test]
  fn test_compound_comparisons() {
    assert_eq(
      parse_expression,
      "a <= b != c",
      binary(
        BinaryOperator::LessEqual,
        var("a"),
        binary(BinaryOperator::NotEqual, var("b"), var("c")),
      ),
    );
  }

  #[test]
  fn test_unary_binds_to_primary() {
    assert_eq(
      parse_expression,
      "-x + 1",
      binary(
        BinaryOperator::Add,
        Expression::Unary(loc(), UnaryOperator::Minus, Box::new(var("x"))),
        int(1),
      ),
    );
    assert_eq(
      parse_expression,
      "!!a[0]",
      Expression::Unary(
        loc(),
        UnaryOperator::Not,
        Box::new(Expression::Unary(
          loc(),
          UnaryOperator::Not,
          Box::new(index(var("a"), int(0))),
        )),
      ),
    );
  }

  #[test]
  fn test_postfix_chains() {
    assert_eq(
      parse_expression,
      "f()[0](1)",
      call(index(call(var("f"), vec![]), int(0)), vec![int(1)]),
    );
    assert_eq(parse_expression, "f(a, b,)", call(var("f"), vec![var("a"), var("b")]));
  }

  #[test]
  fn test_array_literals() {
    assert_eq(parse_expression, "[]", Expression::Array(loc(), vec![]));
    assert_eq(
      parse_expression,
      "[1, [2], 'x']",
      Expression::Array(
        loc(),
        vec![int(1), Expression::Array(loc(), vec![int(2)]), str("x")],
      ),
    );
  }

  #[test]
  fn test_assignments() {
    assert_eq(
      parse_expression,
      "a = b = 1",
      Expression::Assign(
        loc(),
        "a".to_string(),
        Box::new(Expression::Assign(loc(), "b".to_string(), Box::new(int(1)))),
      ),
    );
    assert_eq(
      parse_expression,
      "xs[i + 1] = 9",
      Expression::IndexAssign(
        loc(),
        Box::new(var("xs")),
        Box::new(binary(BinaryOperator::Add, var("i"), int(1))),
        Box::new(int(9)),
      ),
    );
  }

  #[test]
  fn test_rendering() {
    assert_eq!(
      parse("a = 1 + f(2)[3] * -b").to_string(),
      "(a = (1 + (f(2)[3] * (-b))))"
    );
  }

  #[test]
  fn test_errors() {
    is_err(parse_expression, "1 +");
    is_err(parse_expression, "f(1");
    is_err(parse_expression, "[1 2]");
    is_err(parse_expression, "1 = 2");
    is_err(parse_expression, "f() = 2");
    is_err(parse_expression, ")");
    is_err(parse_expression, "local");
  }
}
