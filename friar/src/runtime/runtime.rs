use std::fs;
use std::io::Write;
use std::sync::Arc;

use tracing::debug;

use super::Interpreter;
use crate::ast::{Program, Value};
use crate::errors::{InterpreterError, LangError, LoaderError, Wrappable};
use crate::lexer::Lexer;
use crate::parser::Parser;
use crate::source::SourceCode;

/// Name of the function invoked once a program is loaded.
pub const ENTRY_POINT: &str = "main";

pub struct Runtime {
  pub interpreter: Interpreter,
}

impl Runtime {
  pub fn new() -> Runtime {
    Runtime {
      interpreter: Interpreter::new(),
    }
  }

  /// Creates a runtime whose programs print to `output` instead of stdout.
  pub fn with_output(output: Box<dyn Write>) -> Runtime {
    Runtime {
      interpreter: Interpreter::with_output(output),
    }
  }

  /// Parses the whole source and declares every top level declaration as a global. Nothing is
  /// declared if parsing fails.
  pub fn load(&mut self, code: &SourceCode) -> Result<Program, LangError> {
    let mut parser = Parser::new(Lexer::new(code));
    let program = parser.parse_program()?;

    debug!(
      file = code.file_path(),
      declarations = program.declarations.len(),
      "program loaded"
    );

    for decl in &program.declarations {
      self.interpreter.eval_declaration(decl);
    }

    Ok(program)
  }

  /// Loads a program and runs its entry point, returning whatever it returned.
  pub fn run(&mut self, code: &SourceCode) -> Result<Value, LangError> {
    let program = self.load(code)?;

    let main = self
      .interpreter
      .env
      .get(ENTRY_POINT)
      .ok_or_else(|| InterpreterError::MissingDefinition(ENTRY_POINT.to_string()).wrap())?;

    let result = self.interpreter.apply(&main, &[]);

    // Errors that escape `main` itself are reported at its declaration.
    match program
      .declarations
      .iter()
      .find(|decl| decl.name() == ENTRY_POINT)
    {
      | Some(decl) => result.map_err(|error| error.at(decl.get_location())),
      | None => result,
    }
  }

  /// Reads, loads and runs a program file.
  pub fn run_file(&mut self, path: &str) -> Result<Value, LangError> {
    let code = Self::read_file(path)?;
    self.run(&code)
  }

  pub fn read_file(path: &str) -> Result<SourceCode, LangError> {
    let bytes = fs::read(path).map_err(|error| {
      LoaderError::IO {
        error: Arc::new(error),
        path: path.to_string(),
      }
      .wrap()
    })?;

    Ok(SourceCode::from_bytes(bytes, path))
  }

  /// Runs an in-memory program, e.g. `function main() { return 1; }`.
  pub fn eval_program(&mut self, code: &str) -> Result<Value, LangError> {
    self.run(&SourceCode::from_str(code))
  }

  /// Evaluates a standalone expression like, e.g. `1 + 2`, against the current globals.
  pub fn eval_expression(&mut self, expr: &str) -> Result<Value, LangError> {
    let code = SourceCode::from_str(expr);
    let mut parser = Parser::new(Lexer::new(&code));
    let expr = parser.parse_expression()?;

    self.interpreter.eval_expression(&expr)
  }
}

impl Default for Runtime {
  fn default() -> Self {
    Self::new()
  }
}
