use crate::errors::*;
use crate::lexer::{SpannedToken, Token, TokenKind};
use crate::source::Input;

/// Keywords the tokenizer knows about but no grammar rule accepts.
const RESERVED: [&str; 2] = ["import", "local"];

/// What a lookahead token is matched against: a literal symbol or a whole token kind.
#[derive(Clone, Copy, Debug)]
pub enum Pattern<'p> {
  Symbol(&'p str),
  Kind(TokenKind),
}

impl Pattern<'_> {
  fn matches(&self, token: &Token) -> bool {
    match self {
      | Pattern::Symbol(symbol) => token.is_symbol(symbol),
      | Pattern::Kind(kind) => token.kind() == *kind,
    }
  }
}

impl<'p> From<&'p str> for Pattern<'p> {
  fn from(symbol: &'p str) -> Self {
    Pattern::Symbol(symbol)
  }
}

impl From<TokenKind> for Pattern<'_> {
  fn from(kind: TokenKind) -> Self {
    Pattern::Kind(kind)
  }
}

/// Returns whether the lookahead token matches, without consuming it.
pub fn check<'p>(input: &mut Input, pattern: impl Into<Pattern<'p>>) -> Result<bool, LangError> {
  let pattern = pattern.into();

  Ok(matches!(input.peek()?, Some(spanned) if pattern.matches(&spanned.token)))
}

/// Consumes the lookahead token if it matches. Leaves the stream untouched otherwise.
pub fn guard<'p>(
  input: &mut Input,
  pattern: impl Into<Pattern<'p>>,
) -> Result<Option<SpannedToken>, LangError> {
  if check(input, pattern)? {
    input.advance()
  } else {
    Ok(None)
  }
}

/// Like [guard], but a mismatch is a parse error mentioning `description`.
pub fn expect<'p>(
  input: &mut Input,
  pattern: impl Into<Pattern<'p>>,
  description: &str,
) -> Result<SpannedToken, LangError> {
  match guard(input, pattern)? {
    | Some(token) => Ok(token),
    | None => Err(expected(input, description)),
  }
}

pub fn expect_identifier(input: &mut Input) -> Result<String, LangError> {
  match guard(input, TokenKind::Identifier)? {
    | Some(SpannedToken {
      token: Token::Identifier(name),
      ..
    }) => Ok(name),
    | _ => Err(expected(input, "identifier")),
  }
}

/// Parses elements until `closer`, with `delimiter` between them. One trailing delimiter right
/// before `closer` is accepted, so `[1, 2,]` is fine while `[,]` and `[1,,]` are not.
pub fn take_delim<T, F>(
  input: &mut Input,
  closer: &str,
  delimiter: &str,
  mut element: F,
) -> Result<Vec<T>, LangError>
where
  F: FnMut(&mut Input) -> Result<T, LangError>,
{
  let mut items = vec![];

  loop {
    if guard(input, closer)?.is_some() {
      return Ok(items);
    }

    items.push(element(input)?);

    if guard(input, delimiter)?.is_none() {
      expect(input, closer, &format!("'{delimiter}' or '{closer}'"))?;
      return Ok(items);
    }
  }
}

/// Fails unless the whole input has been consumed.
pub fn complete(input: &mut Input) -> Result<(), LangError> {
  if input.is_empty()? {
    Ok(())
  } else {
    Err(expected(input, "end of input"))
  }
}

pub fn expected(input: &mut Input, description: &str) -> LangError {
  let location = match input.location() {
    | Ok(location) => location,
    | Err(error) => return error,
  };

  input.error(ParseError::Expected {
    location,
    expected: description.to_string(),
    found: input.current().cloned(),
  })
}

/// Error for a token that starts none of the alternatives in `options`.
pub fn unmatched(input: &mut Input, options: &[&str]) -> LangError {
  let location = match input.location() {
    | Ok(location) => location,
    | Err(error) => return error,
  };

  let error = match input.current().cloned() {
    | Some(Token::Symbol(keyword)) if RESERVED.contains(&keyword.as_str()) => {
      ParseError::ReservedKeyword { location, keyword }
    },
    | found => ParseError::UnmatchedToken {
      location,
      found,
      options: options.iter().map(|option| option.to_string()).collect(),
    },
  };

  input.error(error)
}
