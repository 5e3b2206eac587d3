use super::IntrinsicStatement;
use crate::ast::*;
use crate::errors::*;

/// Builds an intrinsic function with given name, arity, and a function pointer with actual
/// implementation of that intrinsic.
pub fn create_intrinsic(
  name: &'static str,
  arity: usize,
  intrinsic: IntrinsicFn,
) -> IntrinsicStatement {
  let function = Function::Intrinsic(IntrinsicFunction {
    name: name.to_string(),
    arity,
    function: intrinsic,
  });

  (name.to_owned(), Value::Function(function.into()))
}

/// Error for an intrinsic invoked with the wrong number of arguments.
pub fn arity_error(name: &str, expected: usize, args: &[Value]) -> LangError {
  InterpreterError::FunctionArityMismatch {
    name: name.to_string(),
    expected,
    found: args.len(),
  }
  .wrap()
}
