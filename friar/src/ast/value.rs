use std::cell::RefCell;
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use super::{FunctionDefinition, Int, Literal};
use crate::errors::LangError;
use crate::runtime::Interpreter;

pub type IntrinsicFn = fn(&mut Interpreter, &[Value]) -> Result<Value, LangError>;

/// Elements of an array, shared between every alias of the array.
pub type ArrayRef = Rc<RefCell<Vec<Value>>>;

/// Runtime value. The set of kinds is closed.
#[derive(Clone, Debug)]
pub enum Value {
  Int(Int),
  Str(String),
  Bool(bool),
  Null,
  /// Arrays are reference values: mutations are visible through every alias.
  Array(ArrayRef),
  Function(Rc<Function>),
}

#[derive(Debug)]
pub enum Function {
  /// A `function` declared in the program. Its body is re-evaluated on every call.
  Definition(Rc<FunctionDefinition>),
  /// A native function supplied by the host.
  Intrinsic(IntrinsicFunction),
}

pub struct IntrinsicFunction {
  pub name: String,
  pub arity: usize,
  pub function: IntrinsicFn,
}

impl Value {
  pub fn array(items: Vec<Value>) -> Value {
    Value::Array(Rc::new(RefCell::new(items)))
  }

  pub fn kind(&self) -> &'static str {
    match self {
      | Value::Int(_) => "Int",
      | Value::Str(_) => "Str",
      | Value::Bool(_) => "Bool",
      | Value::Null => "Null",
      | Value::Array(_) => "Array",
      | Value::Function(_) => "Function",
    }
  }
}

impl Function {
  pub fn name(&self) -> &str {
    match self {
      | Function::Definition(definition) => &definition.name,
      | Function::Intrinsic(intrinsic) => &intrinsic.name,
    }
  }

  pub fn arity(&self) -> usize {
    match self {
      | Function::Definition(definition) => definition.parameters.len(),
      | Function::Intrinsic(intrinsic) => intrinsic.arity,
    }
  }
}

impl From<Int> for Value {
  fn from(value: Int) -> Self {
    Value::Int(value)
  }
}

impl From<bool> for Value {
  fn from(value: bool) -> Self {
    Value::Bool(value)
  }
}

impl From<String> for Value {
  fn from(value: String) -> Self {
    Value::Str(value)
  }
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::Str(value.to_string())
  }
}

impl From<Vec<Value>> for Value {
  fn from(items: Vec<Value>) -> Self {
    Value::array(items)
  }
}

impl From<()> for Value {
  fn from(_: ()) -> Self {
    Value::Null
  }
}

impl From<&Literal> for Value {
  fn from(literal: &Literal) -> Self {
    match literal {
      | Literal::Int(value) => Value::Int(*value),
      | Literal::Str(value) => Value::Str(value.clone()),
      | Literal::Bool(value) => Value::Bool(*value),
      | Literal::Null => Value::Null,
    }
  }
}

/// Identity of an array's storage, used to detect cycles.
type ArrayId = *const RefCell<Vec<Value>>;

/// Structural equality; values of different kinds are never equal and functions are compared by
/// identity. A pair of arrays already being compared further up counts as equal, so cyclic
/// arrays terminate.
impl PartialEq for Value {
  fn eq(&self, other: &Value) -> bool {
    equals(self, other, &mut vec![])
  }
}

fn equals(lhs: &Value, rhs: &Value, seen: &mut Vec<(ArrayId, ArrayId)>) -> bool {
  match (lhs, rhs) {
    | (Value::Int(lhs), Value::Int(rhs)) => lhs == rhs,
    | (Value::Str(lhs), Value::Str(rhs)) => lhs == rhs,
    | (Value::Bool(lhs), Value::Bool(rhs)) => lhs == rhs,
    | (Value::Null, Value::Null) => true,
    | (Value::Array(lhs), Value::Array(rhs)) => {
      let pair = (Rc::as_ptr(lhs), Rc::as_ptr(rhs));

      if Rc::ptr_eq(lhs, rhs) || seen.contains(&pair) {
        return true;
      }

      let (lhs, rhs) = (lhs.borrow(), rhs.borrow());

      if lhs.len() != rhs.len() {
        return false;
      }

      seen.push(pair);
      let result = lhs.iter().zip(rhs.iter()).all(|(lhs, rhs)| equals(lhs, rhs, seen));
      seen.pop();

      result
    },
    | (Value::Function(lhs), Value::Function(rhs)) => Rc::ptr_eq(lhs, rhs),
    | _ => false,
  }
}

/// Printable form, also used when a value is coerced to a string. An array nested inside itself
/// prints as `[...]`.
impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    printable(self, f, &mut vec![])
  }
}

fn printable(value: &Value, f: &mut Formatter<'_>, seen: &mut Vec<ArrayId>) -> fmt::Result {
  match value {
    | Value::Int(value) => write!(f, "{value}"),
    | Value::Str(value) => f.write_str(value),
    | Value::Bool(value) => write!(f, "{value}"),
    | Value::Null => f.write_str("null"),
    | Value::Array(items) => {
      let id = Rc::as_ptr(items);

      if seen.contains(&id) {
        return f.write_str("[...]");
      }

      seen.push(id);
      f.write_str("[")?;

      for (index, item) in items.borrow().iter().enumerate() {
        if index > 0 {
          f.write_str(", ")?;
        }

        printable(item, f, seen)?;
      }

      seen.pop();
      f.write_str("]")
    },
    | Value::Function(function) => write!(f, "<function:{}>", function.name()),
  }
}

impl Debug for IntrinsicFunction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "<intrinsic function '{}'>", self.name)
  }
}
