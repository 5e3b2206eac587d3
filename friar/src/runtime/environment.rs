use std::collections::HashMap;

use tracing::trace;

use crate::ast::Value;
use crate::errors::{InterpreterError, LangError, Wrappable};

/// Parameter and local bindings of the function call being executed.
pub type Frame = HashMap<String, Value>;

/// Two tier variable storage: globals, plus the frame of the active call if there is one.
#[derive(Clone, Debug, Default)]
pub struct Environment {
  globals: HashMap<String, Value>,
  frame: Option<Frame>,
}

impl Environment {
  pub fn new() -> Self {
    Self::default()
  }

  /// Declares or redeclares a global.
  pub fn declare_global(&mut self, name: &str, value: Value) {
    self.globals.insert(name.to_owned(), value);
  }

  /// Looks a name up in globals first, then in the active frame.
  pub fn get(&self, name: &str) -> Option<Value> {
    self
      .globals
      .get(name)
      .or_else(|| self.frame.as_ref().and_then(|frame| frame.get(name)))
      .cloned()
  }

  /// Rebinds an existing global, otherwise binds the name in the active frame.
  pub fn assign(&mut self, name: &str, value: Value) -> Result<(), LangError> {
    if let Some(slot) = self.globals.get_mut(name) {
      *slot = value;
      return Ok(());
    }

    match &mut self.frame {
      | Some(frame) => {
        frame.insert(name.to_owned(), value);
        Ok(())
      },
      | None => Err(InterpreterError::MissingFrame(name.to_string()).wrap()),
    }
  }

  /// Installs a new frame and returns the one it shadows, to be given back to
  /// [Environment::exit_frame].
  pub fn enter_frame(&mut self, frame: Frame) -> Option<Frame> {
    trace!(bindings = frame.len(), "push frame");
    self.frame.replace(frame)
  }

  pub fn exit_frame(&mut self, previous: Option<Frame>) {
    trace!(restored = previous.is_some(), "pop frame");
    self.frame = previous;
  }

  pub fn has_frame(&self) -> bool {
    self.frame.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_assign_prefers_globals() {
    let mut env = Environment::new();
    env.declare_global("counter", Value::Null);

    let previous = env.enter_frame(Frame::new());
    env.assign("counter", Value::Int(1)).unwrap();
    env.assign("local", Value::Int(2)).unwrap();
    env.exit_frame(previous);

    assert_eq!(env.get("counter"), Some(Value::Int(1)));
    assert_eq!(env.get("local"), None);
  }

  #[test]
  fn test_assign_without_frame() {
    let mut env = Environment::new();

    assert_eq!(
      env.assign("x", Value::Int(1)),
      Err(InterpreterError::MissingFrame("x".to_string()).wrap())
    );
  }

  #[test]
  fn test_frames_shadow_and_restore() {
    let mut env = Environment::new();

    let outer = env.enter_frame(Frame::from([("x".to_string(), Value::Int(1))]));
    assert!(outer.is_none());

    let inner = env.enter_frame(Frame::new());
    assert_eq!(env.get("x"), None);

    env.exit_frame(inner);
    assert_eq!(env.get("x"), Some(Value::Int(1)));

    env.exit_frame(outer);
    assert!(!env.has_frame());
  }
}
