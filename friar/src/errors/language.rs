use std::fmt;
use std::io;

use ariadne::Source;

use super::*;
use crate::source::{SourceCode, SourceLocation};

#[derive(PartialEq, Debug, Clone)]
pub enum LangError {
  Lexer(SourceCode, LexicalError),
  Parser(SourceCode, ParseError),
  /// Runtime errors pick up the location of the innermost node that failed, see [LangError::at].
  Interpreter(Option<SourceLocation>, InterpreterError),
  Loader(LoaderError),
}

impl LangError {
  /// Attaches a location to a runtime error that has none yet.
  pub fn at(self, location: &SourceLocation) -> LangError {
    match self {
      | LangError::Interpreter(None, error) => {
        LangError::Interpreter(Some(location.clone()), error)
      },
      | other => other,
    }
  }

  pub fn location(&self) -> Option<&SourceLocation> {
    match self {
      | LangError::Lexer(_, error) => Some(error.location()),
      | LangError::Parser(_, error) => Some(error.location()),
      | LangError::Interpreter(location, _) => location.as_ref(),
      | LangError::Loader(_) => None,
    }
  }

  /// Prints an [ariadne] report to stderr. Runtime errors are reported against `source`, the
  /// program that was running.
  pub fn eprint(&self, source: &SourceCode) -> io::Result<()> {
    match self {
      | LangError::Lexer(code, error) => print(error.report(code), code),
      | LangError::Parser(code, error) => print(error.report(code), code),
      | LangError::Interpreter(location, error) => {
        print(report_runtime(error, location.as_ref(), source), source)
      },
      | LangError::Loader(error) => {
        eprintln!("{error}");
        Ok(())
      },
    }
  }
}

fn print<'a>(report: ReportBuilder<'a>, code: &'a SourceCode) -> io::Result<()> {
  report
    .finish()
    .eprint((code.file_name(), Source::from(code.as_str())))
}

/// One line diagnostic of the form `file:line:column: message`.
impl fmt::Display for LangError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | LangError::Lexer(_, error) => write!(f, "{}: {error}", error.location()),
      | LangError::Parser(_, error) => write!(f, "{}: {error}", error.location()),
      | LangError::Interpreter(Some(location), error) => write!(f, "{location}: {error}"),
      | LangError::Interpreter(None, error) => write!(f, "{error}"),
      | LangError::Loader(error) => write!(f, "{error}"),
    }
  }
}

impl std::error::Error for LangError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_innermost_location_wins() {
    let code = SourceCode::from_str("a\nb");
    let inner = code.start();
    let outer = code.start().advance("a\n");

    let error = InterpreterError::DivisionByZero.wrap().at(&inner).at(&outer);

    assert_eq!(error.location(), Some(&inner));
    assert_eq!(error.to_string(), "inline:1:1: division by zero");
  }

  #[test]
  fn test_display_without_location() {
    let error = InterpreterError::MissingDefinition("main".to_string()).wrap();

    assert_eq!(error.to_string(), "undefined variable `main`");
  }
}
