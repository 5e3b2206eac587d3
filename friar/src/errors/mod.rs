use std::ops::Range;

pub use interpreter::*;
pub use language::*;
pub use lexer::*;
pub use loader::*;
pub use parser::*;

use crate::source::SourceCode;

mod helpers;
mod interpreter;
mod language;
mod lexer;
mod loader;
mod parser;

/// This trait allows for wrapping a given error in a more generic error.
pub trait Wrappable {
  type Wrapper;

  fn wrap(self) -> Self::Wrapper;
}

/// Report builder labelling character ranges of a named source.
pub type ReportBuilder<'a> = ariadne::ReportBuilder<(&'a str, Range<usize>)>;

/// Errors that can be rendered as an [ariadne] report against the code they refer to.
pub trait Reportable<'a> {
  fn report(&'a self, source: &'a SourceCode) -> ReportBuilder<'a>;
}
