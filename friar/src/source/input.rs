use crate::errors::{LangError, ParseError};
use crate::lexer::{Lexer, SpannedToken, Token};
use crate::source::SourceLocation;

/// Token stream with a single token of lookahead, pulled lazily from the [Lexer].
pub struct Input {
  lexer: Lexer,
  peeked: Option<SpannedToken>,
}

impl Input {
  pub fn new(lexer: Lexer) -> Self {
    Input {
      lexer,
      peeked: None,
    }
  }

  /// Returns the lookahead token without consuming it.
  pub fn peek(&mut self) -> Result<Option<&SpannedToken>, LangError> {
    if self.peeked.is_none() {
      self.peeked = self.lexer.read_next()?;
    }

    Ok(self.peeked.as_ref())
  }

  /// Consumes and returns the lookahead token.
  pub fn advance(&mut self) -> Result<Option<SpannedToken>, LangError> {
    match self.peeked.take() {
      | Some(token) => Ok(Some(token)),
      | None => self.lexer.read_next(),
    }
  }

  /// Token last returned by [Input::peek], if it has not been consumed since.
  pub fn current(&self) -> Option<&Token> {
    self.peeked.as_ref().map(|spanned| &spanned.token)
  }

  /// Location of the lookahead token, or of the end of input.
  pub fn location(&mut self) -> Result<SourceLocation, LangError> {
    self.peek()?;

    Ok(match &self.peeked {
      | Some(token) => token.location.clone(),
      | None => self.lexer.location(),
    })
  }

  pub fn is_empty(&mut self) -> Result<bool, LangError> {
    Ok(self.peek()?.is_none())
  }

  pub fn error(&self, error: ParseError) -> LangError {
    LangError::Parser(self.lexer.source(), error)
  }
}
