use crate::ast::*;
use crate::errors::*;
use crate::intrinsics::conversions::array_of;
use crate::intrinsics::helpers::*;
use crate::intrinsics::IntrinsicStatement;
use crate::runtime::Interpreter;

pub fn module() -> Vec<IntrinsicStatement> {
  vec![
    create_intrinsic("push", 2, push),
    create_intrinsic("pop", 1, pop),
    create_intrinsic("length", 1, length),
  ]
}

/// Appends to the array in place and returns the appended value.
fn push(_: &mut Interpreter, args: &[Value]) -> Result<Value, LangError> {
  match args {
    | [array, value] => {
      array_of(array)?.borrow_mut().push(value.clone());
      Ok(value.clone())
    },
    | _ => Err(arity_error("push", 2, args)),
  }
}

/// Removes and returns the last element, `null` when the array is empty.
fn pop(_: &mut Interpreter, args: &[Value]) -> Result<Value, LangError> {
  match args {
    | [array] => Ok(array_of(array)?.borrow_mut().pop().unwrap_or(Value::Null)),
    | _ => Err(arity_error("pop", 1, args)),
  }
}

fn length(_: &mut Interpreter, args: &[Value]) -> Result<Value, LangError> {
  let count = match args {
    | [Value::Array(items)] => items.borrow().len(),
    | [Value::Str(text)] => text.chars().count(),
    | [other] => return Err(InterpreterError::ExpectedArrayOrStr(other.clone()).wrap()),
    | _ => return Err(arity_error("length", 1, args)),
  };

  Int::try_from(count)
    .map(Value::Int)
    .map_err(|_| InterpreterError::IntegerOverflow("length").wrap())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::runtime::testing::*;

  #[test]
  fn test_push_and_pop() {
    let mut interpreter = interpreter();
    let array = Value::array(vec![Value::Int(1)]);

    assert_eq!(push(&mut interpreter, &[array.clone(), Value::from("x")]), Ok(Value::from("x")));
    assert_eq!(array.to_string(), "[1, x]");
    assert_eq!(pop(&mut interpreter, &[array.clone()]), Ok(Value::from("x")));
    assert_eq!(pop(&mut interpreter, &[array.clone()]), Ok(Value::Int(1)));
    assert_eq!(pop(&mut interpreter, &[array]), Ok(Value::Null));
  }

  #[test]
  fn test_push_requires_array() {
    let mut interpreter = interpreter();

    assert_eq!(
      push(&mut interpreter, &[Value::Int(1), Value::Int(2)]),
      Err(InterpreterError::ExpectedArray(Value::Int(1)).wrap())
    );
  }

  #[test]
  fn test_length() {
    let mut interpreter = interpreter();

    assert_eq!(length(&mut interpreter, &[Value::from("héllo")]), Ok(Value::Int(5)));
    assert_eq!(
      length(&mut interpreter, &[Value::array(vec![Value::Null; 3])]),
      Ok(Value::Int(3))
    );
    assert!(length(&mut interpreter, &[Value::Int(3)]).is_err());
  }
}
