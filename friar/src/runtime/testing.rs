//! Testing utilities for the runtime.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use super::{Interpreter, Runtime};
use crate::ast::Value;
use crate::errors::LangError;

/// In-memory program output, readable after the writer was handed to an interpreter.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
  pub fn contents(&self) -> String {
    String::from_utf8_lossy(&self.0.borrow()).to_string()
  }
}

impl Write for SharedBuffer {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    self.0.borrow_mut().extend_from_slice(buf);
    Ok(buf.len())
  }

  fn flush(&mut self) -> io::Result<()> {
    Ok(())
  }
}

pub fn interpreter() -> Interpreter {
  Interpreter::with_output(Box::new(SharedBuffer::default()))
}

pub fn runtime() -> (Runtime, SharedBuffer) {
  let buffer = SharedBuffer::default();

  (Runtime::with_output(Box::new(buffer.clone())), buffer)
}

/// Runs a whole program and returns what `main` returned along with everything printed.
pub fn run(code: &str) -> (Result<Value, LangError>, String) {
  let (mut runtime, buffer) = runtime();
  let result = runtime.eval_program(code);

  (result, buffer.contents())
}

pub fn run_ok(code: &str) -> Value {
  match run(code) {
    | (Ok(value), _) => value,
    | (Err(error), _) => {
      println!("Error: {error}");
      panic!();
    },
  }
}
