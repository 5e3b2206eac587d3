use std::fmt;

use ariadne::{Label, Report, ReportKind};

use super::helpers::char_span;
use super::*;
use crate::source::{SourceCode, SourceLocation};

#[derive(PartialEq, Debug, Clone)]
pub enum LexicalError {
  UnknownToken { location: SourceLocation, found: char },
  InvalidIntegerSuffix { location: SourceLocation },
  IntegerTooLarge { location: SourceLocation, digits: String },
  UnterminatedString { location: SourceLocation, quote: char },
}

impl LexicalError {
  pub fn location(&self) -> &SourceLocation {
    match self {
      | LexicalError::UnknownToken { location, .. } => location,
      | LexicalError::InvalidIntegerSuffix { location } => location,
      | LexicalError::IntegerTooLarge { location, .. } => location,
      | LexicalError::UnterminatedString { location, .. } => location,
    }
  }
}

impl fmt::Display for LexicalError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | LexicalError::UnknownToken { found, .. } => write!(f, "unknown token start: {found:?}"),
      | LexicalError::InvalidIntegerSuffix { .. } => {
        write!(f, "invalid suffix after integer literal")
      },
      | LexicalError::IntegerTooLarge { digits, .. } => {
        write!(f, "integer literal `{digits}` is too large")
      },
      | LexicalError::UnterminatedString { quote: '\'', .. } => {
        write!(f, "unterminated single quote encountered")
      },
      | LexicalError::UnterminatedString { .. } => {
        write!(f, "unterminated double quote encountered")
      },
    }
  }
}

impl<'a> Reportable<'a> for LexicalError {
  fn report(&'a self, source: &'a SourceCode) -> ReportBuilder<'a> {
    let span = char_span(self.location(), source);
    let source = source.file_name();

    Report::build(ReportKind::Error, source, span.start)
      .with_message(self.to_string())
      .with_label(Label::new((source, span)))
  }
}
