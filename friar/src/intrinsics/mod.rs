use crate::ast::Value;

pub(crate) mod conversions;
pub(crate) mod helpers;
pub(crate) mod modules;
pub(crate) mod operators;

pub type IntrinsicStatement = (String, Value);

/// Native functions registered as globals before a program is loaded.
pub fn intrinsics() -> Vec<IntrinsicStatement> {
  let mut statements = modules::io::module();
  statements.extend(modules::collections::module());
  statements
}
