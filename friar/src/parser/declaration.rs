use std::rc::Rc;

use super::combinators::{self, expect, expect_identifier, guard, take_delim};
use super::statement::parse_block;
use crate::ast::*;
use crate::errors::*;
use crate::source::Input;

/// `program := { declaration }`
pub fn parse_program(input: &mut Input) -> Result<Program, LangError> {
  let mut declarations = vec![];

  while !input.is_empty()? {
    declarations.push(parse_declaration(input)?);
  }

  Ok(Program { declarations })
}

pub fn parse_declaration(input: &mut Input) -> Result<Declaration, LangError> {
  if let Some(token) = guard(input, "global")? {
    let name = expect_identifier(input)?;

    // The terminator is optional here.
    guard(input, ";")?;

    return Ok(Declaration::Global(token.location, name));
  }

  if let Some(token) = guard(input, "function")? {
    let name = expect_identifier(input)?;

    expect(input, "(", "'('")?;
    let parameters = take_delim(input, ")", ",", expect_identifier)?;
    let body = parse_block(input)?;

    let definition = FunctionDefinition {
      name,
      parameters,
      body,
    };

    return Ok(Declaration::Function(token.location, Rc::new(definition)));
  }

  Err(combinators::unmatched(input, &["global", "function"]))
}
