use std::fmt;

use ariadne::{Label, Report, ReportKind};

use super::helpers::char_span;
use super::*;
use crate::lexer::Token;
use crate::source::{SourceCode, SourceLocation};

#[derive(PartialEq, Debug, Clone)]
pub enum ParseError {
  /// `found` is `None` when the input ended early.
  Expected {
    location: SourceLocation,
    expected: String,
    found: Option<Token>,
  },
  UnmatchedToken {
    location: SourceLocation,
    found: Option<Token>,
    options: Vec<String>,
  },
  InvalidAssignmentTarget {
    location: SourceLocation,
    target: String,
  },
  ReservedKeyword {
    location: SourceLocation,
    keyword: String,
  },
}

impl ParseError {
  pub fn location(&self) -> &SourceLocation {
    match self {
      | ParseError::Expected { location, .. } => location,
      | ParseError::UnmatchedToken { location, .. } => location,
      | ParseError::InvalidAssignmentTarget { location, .. } => location,
      | ParseError::ReservedKeyword { location, .. } => location,
    }
  }
}

fn describe(found: &Option<Token>) -> String {
  match found {
    | Some(token) => format!("'{token}'"),
    | None => "end of input".to_string(),
  }
}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | ParseError::Expected {
        expected, found, ..
      } => write!(f, "expected {expected}, but found {}", describe(found)),
      | ParseError::UnmatchedToken { found, .. } => {
        write!(f, "found unexpected {}", describe(found))
      },
      | ParseError::InvalidAssignmentTarget { target, .. } => {
        write!(f, "cannot assign to `{target}`")
      },
      | ParseError::ReservedKeyword { keyword, .. } => {
        write!(f, "`{keyword}` is a reserved keyword")
      },
    }
  }
}

impl<'a> Reportable<'a> for ParseError {
  fn report(&'a self, source: &'a SourceCode) -> ReportBuilder<'a> {
    let span = char_span(self.location(), source);
    let source = source.file_name();

    let report = Report::build(ReportKind::Error, source, span.start)
      .with_message(self.to_string())
      .with_label(Label::new((source, span)));

    match self {
      | ParseError::UnmatchedToken { options, .. } if !options.is_empty() => {
        report.with_note(format!("possible options: {}", options.join(", ")))
      },
      | ParseError::InvalidAssignmentTarget { .. } => {
        report.with_note("only variables and indexed elements can be assigned to")
      },
      | ParseError::ReservedKeyword { .. } => {
        report.with_note("the keyword has no meaning yet and cannot be used as a name")
      },
      | _ => report,
    }
  }
}
