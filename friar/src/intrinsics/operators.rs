use crate::ast::*;
use crate::errors::*;
use crate::intrinsics::conversions::*;

/// Upper bound, in bytes, of a string built by repetition.
pub const MAX_STRING_LENGTH: usize = 1 << 28;

fn undefined(operator: &'static str, value: &Value) -> LangError {
  InterpreterError::UndefinedOperation {
    operator,
    kind: value.kind(),
  }
  .wrap()
}

fn overflow(operator: BinaryOperator) -> LangError {
  InterpreterError::IntegerOverflow(operator.symbol()).wrap()
}

/// Applies a binary operator. Both operands are already evaluated and the behavior is picked by
/// the kind of the left one.
pub fn binary(operator: BinaryOperator, lhs: &Value, rhs: &Value) -> Result<Value, LangError> {
  match lhs {
    | Value::Int(value) => int_operation(operator, *value, lhs, rhs),
    | Value::Str(text) => str_operation(operator, text, lhs, rhs),
    | Value::Array(items) => array_operation(operator, items, lhs, rhs),
    | Value::Bool(_) | Value::Null | Value::Function(_) => common_operation(operator, lhs, rhs),
  }
}

/// Operators every kind supports: structural equality and eager logical connectives.
fn common_operation(operator: BinaryOperator, lhs: &Value, rhs: &Value) -> Result<Value, LangError> {
  match operator {
    | BinaryOperator::Equal => Ok(Value::Bool(lhs == rhs)),
    | BinaryOperator::NotEqual => Ok(Value::Bool(lhs != rhs)),
    | BinaryOperator::And => {
      let (lhs, rhs) = (truthy_of(lhs)?, truthy_of(rhs)?);
      Ok(Value::Bool(lhs && rhs))
    },
    | BinaryOperator::Or => {
      let (lhs, rhs) = (truthy_of(lhs)?, truthy_of(rhs)?);
      Ok(Value::Bool(lhs || rhs))
    },
    | _ => Err(undefined(operator.symbol(), lhs)),
  }
}

fn int_operation(
  operator: BinaryOperator,
  value: Int,
  lhs: &Value,
  rhs: &Value,
) -> Result<Value, LangError> {
  let result = match operator {
    | BinaryOperator::Add => value.checked_add(int_of(rhs)?).ok_or_else(|| overflow(operator))?,
    | BinaryOperator::Sub => value.checked_sub(int_of(rhs)?).ok_or_else(|| overflow(operator))?,
    | BinaryOperator::Mul => value.checked_mul(int_of(rhs)?).ok_or_else(|| overflow(operator))?,
    | BinaryOperator::Div => floored_div(value, int_of(rhs)?)?,
    | BinaryOperator::Rem => floored_rem(value, int_of(rhs)?)?,
    | BinaryOperator::Less => return Ok(Value::Bool(value < int_of(rhs)?)),
    | BinaryOperator::Greater => return Ok(Value::Bool(value > int_of(rhs)?)),
    | BinaryOperator::LessEqual => return Ok(Value::Bool(value <= int_of(rhs)?)),
    | BinaryOperator::GreaterEqual => return Ok(Value::Bool(value >= int_of(rhs)?)),
    | BinaryOperator::Equal => return Ok(Value::Bool(value == int_of(rhs)?)),
    | BinaryOperator::NotEqual => return Ok(Value::Bool(value != int_of(rhs)?)),
    | BinaryOperator::And | BinaryOperator::Or => return common_operation(operator, lhs, rhs),
  };

  Ok(Value::Int(result))
}

/// Division rounding towards negative infinity.
fn floored_div(lhs: Int, rhs: Int) -> Result<Int, LangError> {
  if rhs == 0 {
    return Err(InterpreterError::DivisionByZero.wrap());
  }

  let quotient = lhs
    .checked_div(rhs)
    .ok_or_else(|| overflow(BinaryOperator::Div))?;

  if lhs % rhs != 0 && (lhs < 0) != (rhs < 0) {
    Ok(quotient - 1)
  } else {
    Ok(quotient)
  }
}

/// Remainder taking the sign of the divisor.
fn floored_rem(lhs: Int, rhs: Int) -> Result<Int, LangError> {
  if rhs == 0 {
    return Err(InterpreterError::DivisionByZero.wrap());
  }

  let remainder = lhs
    .checked_rem(rhs)
    .ok_or_else(|| overflow(BinaryOperator::Rem))?;

  if remainder != 0 && (remainder < 0) != (rhs < 0) {
    Ok(remainder + rhs)
  } else {
    Ok(remainder)
  }
}

fn str_operation(
  operator: BinaryOperator,
  text: &str,
  lhs: &Value,
  rhs: &Value,
) -> Result<Value, LangError> {
  match operator {
    | BinaryOperator::Add => Ok(Value::Str(format!("{text}{}", string_of(rhs)))),
    | BinaryOperator::Mul => {
      let count = int_of(rhs)?;

      let times = usize::try_from(count)
        .map_err(|_| InterpreterError::NegativeRepetition(count).wrap())?;

      let length = text
        .len()
        .checked_mul(times)
        .ok_or_else(|| overflow(operator))?;

      if length > MAX_STRING_LENGTH {
        return Err(
          InterpreterError::StringTooLong {
            length,
            limit: MAX_STRING_LENGTH,
          }
          .wrap(),
        );
      }

      Ok(Value::Str(text.repeat(times)))
    },
    | _ => common_operation(operator, lhs, rhs),
  }
}

fn array_operation(
  operator: BinaryOperator,
  items: &ArrayRef,
  lhs: &Value,
  rhs: &Value,
) -> Result<Value, LangError> {
  match operator {
    | BinaryOperator::Add => {
      let other = array_of(rhs)?;

      let mut result = items.borrow().clone();
      result.extend(other.borrow().iter().cloned());

      Ok(Value::array(result))
    },
    | _ => common_operation(operator, lhs, rhs),
  }
}

pub fn unary(operator: UnaryOperator, value: &Value) -> Result<Value, LangError> {
  match operator {
    | UnaryOperator::Plus => Ok(value.clone()),
    | UnaryOperator::Minus => match value {
      | Value::Int(value) => value
        .checked_neg()
        .map(Value::Int)
        .ok_or_else(|| InterpreterError::IntegerOverflow("-").wrap()),
      | _ => Err(undefined(operator.symbol(), value)),
    },
    | UnaryOperator::Not => Ok(Value::Bool(!truthy_of(value)?)),
  }
}

fn position_of(index: &Value, length: usize) -> Result<usize, LangError> {
  let index = int_of(index)?;

  usize::try_from(index)
    .ok()
    .filter(|position| *position < length)
    .ok_or_else(|| InterpreterError::IndexOutOfBounds { index, length }.wrap())
}

/// `source[index]` on an Array or a Str. Strings yield one character strings.
pub fn index(source: &Value, index: &Value) -> Result<Value, LangError> {
  match source {
    | Value::Array(items) => {
      let items = items.borrow();
      let position = position_of(index, items.len())?;

      Ok(items[position].clone())
    },
    | Value::Str(text) => {
      let position = position_of(index, text.chars().count())?;

      Ok(
        text
          .chars()
          .nth(position)
          .map(|ch| Value::Str(ch.to_string()))
          .unwrap_or(Value::Null),
      )
    },
    | _ => Err(undefined("[]", source)),
  }
}

/// `source[index] = value` on an Array. Returns the stored value.
pub fn assign_index(source: &Value, index: &Value, value: Value) -> Result<Value, LangError> {
  match source {
    | Value::Array(items) => {
      let mut items = items.borrow_mut();
      let position = position_of(index, items.len())?;

      items[position] = value.clone();

      Ok(value)
    },
    | _ => Err(undefined("[]=", source)),
  }
}
