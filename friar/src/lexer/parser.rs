use nom::branch::*;
use nom::bytes::complete::*;
use nom::character::complete::*;
use nom::combinator::*;
use nom::multi::*;
use nom::sequence::*;
use nom::IResult;

pub type ParseResult<'a, T> = IResult<&'a str, T>;

// Primitives.

pub fn is_word_char(ch: char) -> bool {
  ch.is_ascii_alphanumeric() || ch == '_'
}

fn whitespace(input: &str) -> ParseResult<'_, &str> {
  take_while1(|ch: char| ch.is_whitespace())(input)
}

fn line_comment(input: &str) -> ParseResult<'_, &str> {
  recognize(pair(char('#'), take_till(|ch| ch == '\n')))(input)
}

// Non-terminals.

/// Whitespace and `#` comments between tokens. Never fails.
pub fn trivia(input: &str) -> ParseResult<'_, &str> {
  recognize(many0_count(alt((whitespace, line_comment))))(input)
}

pub fn int_literal(input: &str) -> ParseResult<'_, &str> {
  digit1(input)
}

pub fn single_quoted(input: &str) -> ParseResult<'_, &str> {
  delimited(char('\''), take_till(|ch| ch == '\''), char('\''))(input)
}

pub fn double_quoted(input: &str) -> ParseResult<'_, &str> {
  delimited(char('"'), take_till(|ch| ch == '"'), char('"'))(input)
}

pub fn word(input: &str) -> ParseResult<'_, &str> {
  take_while1(is_word_char)(input)
}

/// One punctuation character, or a two character comparison when `!`, `=`, `<` or `>` is
/// followed by `=`.
pub fn symbol(input: &str) -> ParseResult<'_, &str> {
  alt((
    recognize(pair(one_of("!=<>"), opt(char('=')))),
    recognize(one_of("-+*/%&|,;()[]{}")),
  ))(input)
}
