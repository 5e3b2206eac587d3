use crate::ast::*;
use crate::errors::*;
use crate::intrinsics::helpers::*;
use crate::intrinsics::IntrinsicStatement;
use crate::runtime::Interpreter;

pub fn module() -> Vec<IntrinsicStatement> {
  vec![create_intrinsic("print", 1, print)]
}

/// Writes the printable form of its argument and a newline, then returns the argument.
fn print(interpreter: &mut Interpreter, args: &[Value]) -> Result<Value, LangError> {
  match args {
    | [value] => {
      interpreter.write_line(&value.to_string())?;
      Ok(value.clone())
    },
    | _ => Err(arity_error("print", 1, args)),
  }
}
