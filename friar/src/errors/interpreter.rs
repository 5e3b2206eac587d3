use std::fmt;

use ariadne::{Label, Report, ReportKind};

use super::helpers::char_span;
use super::*;
use crate::ast::{Int, Value};
use crate::source::{SourceCode, SourceLocation};

#[derive(Clone, Debug, PartialEq)]
pub enum InterpreterError {
  MissingDefinition(String),
  FunctionArityMismatch {
    name: String,
    expected: usize,
    found: usize,
  },
  NotCallable(Value),
  UndefinedOperation {
    operator: &'static str,
    kind: &'static str,
  },
  ExpectedArray(Value),
  ExpectedInt(Value),
  ExpectedArrayOrStr(Value),
  IndexOutOfBounds {
    index: Int,
    length: usize,
  },
  DivisionByZero,
  IntegerOverflow(&'static str),
  NegativeRepetition(Int),
  StringTooLong {
    length: usize,
    limit: usize,
  },
  /// `break` or `continue` reached the boundary of a function.
  EscapingSignal(&'static str),
  MissingFrame(String),
  OutputError(String),
}

impl Wrappable for InterpreterError {
  type Wrapper = LangError;

  fn wrap(self) -> LangError {
    LangError::Interpreter(None, self)
  }
}

impl fmt::Display for InterpreterError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | InterpreterError::MissingDefinition(name) => write!(f, "undefined variable `{name}`"),
      | InterpreterError::FunctionArityMismatch {
        name,
        expected,
        found,
      } => write!(
        f,
        "function `{name}` expects {expected} argument(s), but was called with {found}"
      ),
      | InterpreterError::NotCallable(value) => {
        write!(f, "value of kind {} is not callable", value.kind())
      },
      | InterpreterError::UndefinedOperation { operator, kind } => {
        write!(f, "operation `{operator}` is not defined for {kind}")
      },
      | InterpreterError::ExpectedArray(value) => {
        write!(f, "expected an Array, but found {}", value.kind())
      },
      | InterpreterError::ExpectedInt(value) => {
        write!(f, "expected a value convertible to Int, but found {}", value.kind())
      },
      | InterpreterError::ExpectedArrayOrStr(value) => {
        write!(f, "expected an Array or a Str, but found {}", value.kind())
      },
      | InterpreterError::IndexOutOfBounds { index, length } => {
        write!(f, "index {index} is out of bounds for length {length}")
      },
      | InterpreterError::DivisionByZero => write!(f, "division by zero"),
      | InterpreterError::IntegerOverflow(operator) => {
        write!(f, "integer overflow in `{operator}`")
      },
      | InterpreterError::NegativeRepetition(count) => {
        write!(f, "cannot repeat a string {count} times")
      },
      | InterpreterError::StringTooLong { length, limit } => {
        write!(f, "string of {length} bytes exceeds the limit of {limit} bytes")
      },
      | InterpreterError::EscapingSignal(signal) => {
        write!(f, "`{signal}` used outside of a loop")
      },
      | InterpreterError::MissingFrame(name) => {
        write!(f, "cannot assign `{name}` outside of a function call")
      },
      | InterpreterError::OutputError(message) => write!(f, "failed to write output: {message}"),
    }
  }
}

/// Builds a report for a runtime error. Errors raised without a location get no label.
pub fn report_runtime<'a>(
  error: &'a InterpreterError,
  location: Option<&'a SourceLocation>,
  source: &'a SourceCode,
) -> ReportBuilder<'a> {
  let file = source.file_name();

  match location {
    | Some(location) => {
      let span = char_span(location, source);

      Report::build(ReportKind::Error, file, span.start)
        .with_message(error.to_string())
        .with_label(Label::new((file, span)))
    },
    | None => Report::build(ReportKind::Error, file, 0).with_message(error.to_string()),
  }
}
