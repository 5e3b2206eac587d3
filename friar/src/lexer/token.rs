use std::fmt;

use crate::ast::Literal;
use crate::source::SourceLocation;

pub const KEYWORDS: [&str; 10] = [
  "global", "import", "function", "local", "return", "if", "else", "while", "continue", "break",
];

#[derive(PartialEq, Debug, Clone)]
pub struct SpannedToken {
  pub location: SourceLocation,
  pub token: Token,
}

#[derive(PartialEq, Debug, Clone)]
pub enum Token {
  /// Integers, single quoted strings, `true`, `false` and `null`.
  Value(Literal),
  /// Double quoted string, kept apart for interpolation.
  String(String),
  Identifier(String),
  /// Punctuation, operators and keywords.
  Symbol(String),
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum TokenKind {
  Value,
  String,
  Identifier,
  Symbol,
}

impl Token {
  pub fn kind(&self) -> TokenKind {
    match self {
      | Token::Value(_) => TokenKind::Value,
      | Token::String(_) => TokenKind::String,
      | Token::Identifier(_) => TokenKind::Identifier,
      | Token::Symbol(_) => TokenKind::Symbol,
    }
  }

  pub fn is_symbol(&self, symbol: &str) -> bool {
    matches!(self, Token::Symbol(value) if value == symbol)
  }
}

impl fmt::Display for Token {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | Token::Value(literal) => write!(f, "{literal}"),
      | Token::String(text) => write!(f, "\"{text}\""),
      | Token::Identifier(name) => write!(f, "{name}"),
      | Token::Symbol(symbol) => write!(f, "{symbol}"),
    }
  }
}

impl fmt::Display for TokenKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      | TokenKind::Value => "literal",
      | TokenKind::String => "string",
      | TokenKind::Identifier => "identifier",
      | TokenKind::Symbol => "symbol",
    };

    f.write_str(name)
  }
}
