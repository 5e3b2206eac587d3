use super::combinators;
use super::declaration;
use super::expression;
use super::statement;
use crate::ast::*;
use crate::errors::*;
use crate::lexer::Lexer;
use crate::source::Input;

/// Recursive descent parser over a lazily tokenized source. Parsing is all or nothing: the first
/// error aborts it.
pub struct Parser {
  input: Input,
}

impl Parser {
  pub fn new(lexer: Lexer) -> Self {
    Parser {
      input: Input::new(lexer),
    }
  }

  pub fn parse_program(&mut self) -> Result<Program, LangError> {
    declaration::parse_program(&mut self.input)
  }

  pub fn parse_statement(&mut self) -> Result<Statement, LangError> {
    let statement = statement::parse_statement(&mut self.input)?;
    combinators::complete(&mut self.input)?;

    Ok(statement)
  }

  pub fn parse_expression(&mut self) -> Result<Expression, LangError> {
    let expression = expression::parse_expression(&mut self.input)?;
    combinators::complete(&mut self.input)?;

    Ok(expression)
  }
}
