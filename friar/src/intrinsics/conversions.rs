use nom::character::complete::{digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::sequence::pair;
use nom::IResult;

use crate::ast::*;
use crate::errors::*;

/// Integer coercion. Strings convert through their leading, optionally signed, digits and
/// default to zero.
pub fn int_of(value: &Value) -> Result<Int, LangError> {
  match value {
    | Value::Int(value) => Ok(*value),
    | Value::Str(text) => leading_int(text),
    | Value::Null => Ok(0),
    | Value::Bool(_) | Value::Array(_) | Value::Function(_) => {
      Err(InterpreterError::ExpectedInt(value.clone()).wrap())
    },
  }
}

fn signed_digits(input: &str) -> IResult<&str, &str> {
  recognize(pair(opt(one_of("+-")), digit1))(input)
}

fn leading_int(text: &str) -> Result<Int, LangError> {
  match signed_digits(text.trim_start()) {
    | Ok((_, digits)) => digits
      .parse::<Int>()
      .map_err(|_| InterpreterError::IntegerOverflow("to_int").wrap()),
    | Err(_) => Ok(0),
  }
}

/// Whether the integer coercion of `text` is nonzero, decided on the digits alone so that
/// arbitrarily long numbers stay valid.
fn has_nonzero_digits(text: &str) -> bool {
  match signed_digits(text.trim_start()) {
    | Ok((_, digits)) => digits.chars().any(|ch| ch.is_ascii_digit() && ch != '0'),
    | Err(_) => false,
  }
}

/// String coercion, the printable form of a value.
pub fn string_of(value: &Value) -> String {
  value.to_string()
}

/// Truthiness as used by conditions and logical operators.
pub fn truthy_of(value: &Value) -> Result<bool, LangError> {
  match value {
    | Value::Int(value) => Ok(*value != 0),
    // Strings are truthy through their integer coercion, so "0" and "abc" are both false.
    | Value::Str(text) => Ok(has_nonzero_digits(text)),
    | Value::Bool(value) => Ok(*value),
    | Value::Null => Ok(false),
    | Value::Array(items) => Ok(!items.borrow().is_empty()),
    | Value::Function(_) => Err(
      InterpreterError::UndefinedOperation {
        operator: "truth test",
        kind: value.kind(),
      }
      .wrap(),
    ),
  }
}

pub fn array_of(value: &Value) -> Result<ArrayRef, LangError> {
  match value {
    | Value::Array(items) => Ok(items.clone()),
    | _ => Err(InterpreterError::ExpectedArray(value.clone()).wrap()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_int_of() {
    assert_eq!(int_of(&Value::Int(-4)), Ok(-4));
    assert_eq!(int_of(&Value::from("42abc")), Ok(42));
    assert_eq!(int_of(&Value::from("  -7")), Ok(-7));
    assert_eq!(int_of(&Value::from("+3")), Ok(3));
    assert_eq!(int_of(&Value::from("abc")), Ok(0));
    assert_eq!(int_of(&Value::from("")), Ok(0));
    assert_eq!(int_of(&Value::Null), Ok(0));
    assert!(int_of(&Value::Bool(true)).is_err());
    assert!(int_of(&Value::array(vec![])).is_err());
  }

  #[test]
  fn test_truthy_of() {
    assert_eq!(truthy_of(&Value::Int(0)), Ok(false));
    assert_eq!(truthy_of(&Value::Int(-1)), Ok(true));
    assert_eq!(truthy_of(&Value::from("0")), Ok(false));
    assert_eq!(truthy_of(&Value::from("abc")), Ok(false));
    assert_eq!(truthy_of(&Value::from("12")), Ok(true));
    assert_eq!(truthy_of(&Value::from("99999999999999999999")), Ok(true));
    assert_eq!(truthy_of(&Value::from(" -000")), Ok(false));
    assert_eq!(truthy_of(&Value::from("-0010x")), Ok(true));
    assert_eq!(truthy_of(&Value::Null), Ok(false));
    assert_eq!(truthy_of(&Value::array(vec![])), Ok(false));
    assert_eq!(truthy_of(&Value::array(vec![Value::Null])), Ok(true));
  }

  #[test]
  fn test_string_of() {
    assert_eq!(string_of(&Value::Null), "null");
    assert_eq!(string_of(&Value::from(vec![Value::Int(1), Value::from("a")])), "[1, a]");
  }
}
