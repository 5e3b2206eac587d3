//! Testing utilities for parser(s).

use std::fmt::Debug;

use super::combinators;
use super::expression::parse_expression;
use crate::ast::*;
use crate::errors::*;
use crate::lexer::Lexer;
use crate::source::{Input, SourceCode, SourceLocation};

fn run<F, T>(func: F, code: &str) -> Result<T, LangError>
where
  F: Fn(&mut Input) -> Result<T, LangError>,
{
  let mut input = Input::new(Lexer::new(&SourceCode::from_str(code)));
  let result = func(&mut input)?;
  combinators::complete(&mut input)?;

  Ok(result)
}

pub fn assert_eq<F, T: Debug + PartialEq>(func: F, code: &str, value: T)
where
  F: Fn(&mut Input) -> Result<T, LangError>,
{
  match run(func, code) {
    | Ok(res) => {
      println!("Value: {:?}", res);
      assert_eq!(value, res);
    },
    | Err(error) => {
      println!("Error: {}\n", error);
      panic!();
    },
  }
}

pub fn is_err<F, T: Debug>(func: F, code: &str)
where
  F: Fn(&mut Input) -> Result<T, LangError>,
{
  match run(func, code) {
    | Ok(res) => {
      println!("Unexpected success: {:?}\n", res);
      panic!();
    },
    | Err(error) => {
      println!("Error: {}\n", error);
    },
  }
}

pub fn parse(code: &str) -> Expression {
  match run(parse_expression, code) {
    | Ok(expr) => expr,
    | Err(error) => panic!("{}", error),
  }
}

// Node builders. Locations are ignored when nodes are compared.

pub fn loc() -> SourceLocation {
  SourceCode::from_str("").start()
}

pub fn int(value: Int) -> Expression {
  Expression::Literal(loc(), Literal::Int(value))
}

pub fn str(value: &str) -> Expression {
  Expression::Literal(loc(), Literal::Str(value.to_string()))
}

pub fn var(name: &str) -> Expression {
  Expression::Variable(loc(), name.to_string())
}

pub fn binary(operator: BinaryOperator, lhs: Expression, rhs: Expression) -> Expression {
  Expression::Binary(loc(), operator, Box::new(lhs), Box::new(rhs))
}

pub fn index(source: Expression, index: Expression) -> Expression {
  Expression::Index(loc(), Box::new(source), Box::new(index))
}

pub fn call(callee: Expression, arguments: Vec<Expression>) -> Expression {
  Expression::Call(loc(), Box::new(callee), arguments)
}
