use tracing::trace;

use super::parser;
use super::{SpannedToken, Token, KEYWORDS};
use crate::ast::{Int, Literal};
use crate::errors::{LangError, LexicalError};
use crate::source::{SourceCode, SourceLocation};

/// Lazy tokenizer: every call to [Lexer::read_next] produces exactly one token.
pub struct Lexer {
  code: SourceCode,
  location: SourceLocation,
  failed: bool,
}

impl Lexer {
  pub fn new(code: &SourceCode) -> Self {
    Lexer {
      code: code.clone(),
      location: code.start(),
      failed: false,
    }
  }

  pub fn source(&self) -> SourceCode {
    self.code.clone()
  }

  /// Location of the next character to be read.
  pub fn location(&self) -> SourceLocation {
    self.location.clone()
  }

  /// Reads the whole input at once.
  pub fn lex(&mut self) -> Result<Vec<SpannedToken>, LangError> {
    let mut tokens = vec![];

    while let Some(token) = self.read_next()? {
      tokens.push(token);
    }

    Ok(tokens)
  }

  /// Returns the next token, or `None` once the input is exhausted.
  pub fn read_next(&mut self) -> Result<Option<SpannedToken>, LangError> {
    let code = self.code.clone();

    let rest = &code.as_str()[self.location.offset..];
    let (rest, skipped) = parser::trivia(rest).unwrap_or((rest, ""));
    self.consume(skipped);

    let first = match rest.chars().next() {
      | Some(ch) => ch,
      | None => return Ok(None),
    };

    let start = self.location();

    let token = if first.is_ascii_digit() {
      self.read_int(rest)?
    } else if first == '\'' {
      let text = self.read_quoted(rest, parser::single_quoted, first)?;
      Token::Value(Literal::Str(text))
    } else if first == '"' {
      // TODO: interpolate `{name}` references once the grammar grows an interpolation node.
      let text = self.read_quoted(rest, parser::double_quoted, first)?;
      Token::String(text)
    } else if parser::is_word_char(first) {
      self.read_word(rest)
    } else {
      match parser::symbol(rest) {
        | Ok((_, symbol)) => {
          self.consume(symbol);
          Token::Symbol(symbol.to_string())
        },
        | Err(_) => {
          return Err(self.error(LexicalError::UnknownToken {
            location: start,
            found: first,
          }))
        },
      }
    };

    trace!(%start, ?token, "token");

    Ok(Some(SpannedToken {
      location: start,
      token,
    }))
  }

  fn read_int(&mut self, rest: &str) -> Result<Token, LangError> {
    let start = self.location();

    let digits = parser::int_literal(rest).map_or("", |(_, digits)| digits);

    self.consume(digits);

    if rest[digits.len()..].starts_with(parser::is_word_char) {
      return Err(self.error(LexicalError::InvalidIntegerSuffix {
        location: self.location(),
      }));
    }

    match digits.parse::<Int>() {
      | Ok(value) => Ok(Token::Value(Literal::Int(value))),
      | Err(_) => Err(self.error(LexicalError::IntegerTooLarge {
        location: start,
        digits: digits.to_string(),
      })),
    }
  }

  fn read_quoted<F>(&mut self, rest: &str, recognizer: F, quote: char) -> Result<String, LangError>
  where
    F: for<'a> Fn(&'a str) -> parser::ParseResult<'a, &'a str>,
  {
    match recognizer(rest) {
      | Ok((after, text)) => {
        self.consume(&rest[..rest.len() - after.len()]);
        Ok(text.to_string())
      },
      | Err(_) => Err(self.error(LexicalError::UnterminatedString {
        location: self.location(),
        quote,
      })),
    }
  }

  fn read_word(&mut self, rest: &str) -> Token {
    let word = parser::word(rest).map_or(rest, |(_, word)| word);
    self.consume(word);

    match word {
      | "true" => Token::Value(Literal::Bool(true)),
      | "false" => Token::Value(Literal::Bool(false)),
      | "null" => Token::Value(Literal::Null),
      | _ if KEYWORDS.contains(&word) => Token::Symbol(word.to_string()),
      | _ => Token::Identifier(word.to_string()),
    }
  }

  fn consume(&mut self, text: &str) {
    self.location = self.location.advance(text);
  }

  fn error(&mut self, error: LexicalError) -> LangError {
    self.failed = true;
    LangError::Lexer(self.code.clone(), error)
  }
}

/// Iterating stops after the first lexical error.
impl Iterator for Lexer {
  type Item = Result<SpannedToken, LangError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.failed {
      return None;
    }

    self.read_next().transpose()
  }
}

#[cfg(test)]
mod tests {
  use indoc::indoc;

  use super::*;

  fn tokens(code: &str) -> Vec<Token> {
    match Lexer::new(&SourceCode::from_str(code)).lex() {
      | Ok(tokens) => tokens.into_iter().map(|SpannedToken { token, .. }| token).collect(),
      | Err(err) => panic!("{:?}", err),
    }
  }

  fn lex_error(code: &str) -> LexicalError {
    match Lexer::new(&SourceCode::from_str(code)).lex() {
      | Err(LangError::Lexer(_, error)) => error,
      | other => panic!("expected a lexical error, got {:?}", other),
    }
  }

  fn symbol(value: &str) -> Token {
    Token::Symbol(value.to_string())
  }

  fn ident(value: &str) -> Token {
    Token::Identifier(value.to_string())
  }

  #[test]
  fn test_only_trivia() {
    assert!(tokens("").is_empty());
    assert!(tokens("   \n\t  ").is_empty());
    assert!(tokens("# just a comment").is_empty());
    assert!(tokens("# one\n\n   # two\n").is_empty());
  }

  #[test]
  fn test_tokens() {
    assert_eq!(
      tokens("counter = counter + 1;"),
      vec![
        ident("counter"),
        symbol("="),
        ident("counter"),
        symbol("+"),
        Token::Value(Literal::Int(1)),
        symbol(";"),
      ]
    );
  }

  #[test]
  fn test_literals_and_keywords() {
    assert_eq!(
      tokens("true false null 'raw' \"text\" while whilst"),
      vec![
        Token::Value(Literal::Bool(true)),
        Token::Value(Literal::Bool(false)),
        Token::Value(Literal::Null),
        Token::Value(Literal::Str("raw".to_string())),
        Token::String("text".to_string()),
        symbol("while"),
        ident("whilst"),
      ]
    );
  }

  #[test]
  fn test_compound_symbols() {
    assert_eq!(
      tokens("a<=b==c!=d>=e<f"),
      vec![
        ident("a"),
        symbol("<="),
        ident("b"),
        symbol("=="),
        ident("c"),
        symbol("!="),
        ident("d"),
        symbol(">="),
        ident("e"),
        symbol("<"),
        ident("f"),
      ]
    );
    assert_eq!(tokens("! ="), vec![symbol("!"), symbol("=")]);
  }

  #[test]
  fn test_locations() {
    let code = indoc! {"
      global x
      # comment
        function
    "};

    let located = Lexer::new(&SourceCode::from_str(code)).lex().unwrap();
    let positions = located
      .iter()
      .map(|token| (token.location.line, token.location.column))
      .collect::<Vec<_>>();

    assert_eq!(positions, vec![(1, 1), (1, 8), (3, 3)]);
  }

  #[test]
  fn test_is_lazy() {
    let mut lexer = Lexer::new(&SourceCode::from_str("a b @"));

    assert_eq!(lexer.next().unwrap().unwrap().token, ident("a"));
    assert_eq!(lexer.next().unwrap().unwrap().token, ident("b"));
    assert!(lexer.next().unwrap().is_err());
    assert!(lexer.next().is_none());
  }

  #[test]
  fn test_integer_suffix() {
    assert!(matches!(
      lex_error("12abc"),
      LexicalError::InvalidIntegerSuffix { location } if location.column == 3
    ));
    assert!(matches!(lex_error("1_"), LexicalError::InvalidIntegerSuffix { .. }));
  }

  #[test]
  fn test_integer_too_large() {
    assert!(matches!(
      lex_error("99999999999999999999999"),
      LexicalError::IntegerTooLarge { .. }
    ));
  }

  #[test]
  fn test_unterminated_strings() {
    assert!(matches!(
      lex_error("x = 'open"),
      LexicalError::UnterminatedString { quote: '\'', location } if location.column == 5
    ));
    assert!(matches!(
      lex_error("\"open"),
      LexicalError::UnterminatedString { quote: '"', .. }
    ));
  }

  #[test]
  fn test_unknown_token() {
    assert!(matches!(
      lex_error("a @ b"),
      LexicalError::UnknownToken { found: '@', location } if location.column == 3
    ));
  }
}
