use crate::ast::Value;
use crate::errors::LangError;
use crate::runtime::Runtime;
use crate::source::SourceCode;

/// Program run when no file is given.
pub const SAMPLE: &str = include_str!("../../samples/sample.fr");

/// Runs the program at `path`, or the bundled sample, printing a report of any error to stderr.
pub fn read(path: Option<&str>) -> Result<Value, LangError> {
  let code = match path {
    | Some(path) => Runtime::read_file(path).map_err(|error| {
      eprintln!("{error}");
      error
    })?,
    | None => SourceCode::from_string(SAMPLE.to_string(), "samples/sample.fr"),
  };

  let mut runtime = Runtime::new();

  runtime.run(&code).map_err(|error| {
    if error.eprint(&code).is_err() {
      eprintln!("{error}");
    }

    error
  })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::runtime::testing::runtime;

  #[test]
  fn test_sample_runs() {
    let (mut runtime, output) = runtime();

    assert!(runtime.eval_program(SAMPLE).is_ok());
    assert!(!output.contents().is_empty());
  }
}
