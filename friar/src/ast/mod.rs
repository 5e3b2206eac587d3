use std::rc::Rc;

pub use value::*;

use crate::source::SourceLocation;

mod helpers;
mod value;

/// Default type for integer values.
pub type Int = i64;

/// A block is the body of a function, loop or conditional branch.
pub type Block = Vec<Statement>;

#[derive(Clone, Debug, PartialEq)]
pub struct Program {
  pub declarations: Vec<Declaration>,
}

/// Equality ignores locations, see `helpers`.
#[derive(Clone, Debug)]
pub enum Declaration {
  Global(SourceLocation, String),
  Function(SourceLocation, Rc<FunctionDefinition>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDefinition {
  pub name: String,
  pub parameters: Vec<String>,
  pub body: Block,
}

/// Equality ignores locations, see `helpers`.
#[derive(Clone, Debug)]
pub enum Statement {
  If(SourceLocation, Expression, Block, Option<Block>),
  While(SourceLocation, Expression, Block),
  Return(SourceLocation, Option<Expression>),
  Continue(SourceLocation),
  Break(SourceLocation),
  Expression(Expression),
}

/// Equality ignores locations, see `helpers`.
#[derive(Clone, Debug)]
pub enum Expression {
  Literal(SourceLocation, Literal),
  Variable(SourceLocation, String),
  Array(SourceLocation, Vec<Expression>),
  Unary(SourceLocation, UnaryOperator, Box<Expression>),
  Binary(SourceLocation, BinaryOperator, Box<Expression>, Box<Expression>),
  /// `source[index]`
  Index(SourceLocation, Box<Expression>, Box<Expression>),
  /// `callee(arguments...)`
  Call(SourceLocation, Box<Expression>, Vec<Expression>),
  /// `name = value`
  Assign(SourceLocation, String, Box<Expression>),
  /// `source[index] = value`
  IndexAssign(SourceLocation, Box<Expression>, Box<Expression>, Box<Expression>),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
  Int(Int),
  Str(String),
  Bool(bool),
  Null,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnaryOperator {
  Plus,
  Minus,
  Not,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOperator {
  Add,
  Sub,
  Mul,
  Div,
  Rem,
  Less,
  Greater,
  LessEqual,
  GreaterEqual,
  Equal,
  NotEqual,
  And,
  Or,
}

impl UnaryOperator {
  pub const ALL: [UnaryOperator; 3] = [UnaryOperator::Plus, UnaryOperator::Minus, UnaryOperator::Not];

  pub fn symbol(self) -> &'static str {
    match self {
      | UnaryOperator::Plus => "+",
      | UnaryOperator::Minus => "-",
      | UnaryOperator::Not => "!",
    }
  }
}

impl BinaryOperator {
  pub const ALL: [BinaryOperator; 13] = [
    BinaryOperator::Add,
    BinaryOperator::Sub,
    BinaryOperator::Mul,
    BinaryOperator::Div,
    BinaryOperator::Rem,
    BinaryOperator::Less,
    BinaryOperator::Greater,
    BinaryOperator::LessEqual,
    BinaryOperator::GreaterEqual,
    BinaryOperator::Equal,
    BinaryOperator::NotEqual,
    BinaryOperator::And,
    BinaryOperator::Or,
  ];

  pub fn symbol(self) -> &'static str {
    match self {
      | BinaryOperator::Add => "+",
      | BinaryOperator::Sub => "-",
      | BinaryOperator::Mul => "*",
      | BinaryOperator::Div => "/",
      | BinaryOperator::Rem => "%",
      | BinaryOperator::Less => "<",
      | BinaryOperator::Greater => ">",
      | BinaryOperator::LessEqual => "<=",
      | BinaryOperator::GreaterEqual => ">=",
      | BinaryOperator::Equal => "==",
      | BinaryOperator::NotEqual => "!=",
      | BinaryOperator::And => "&",
      | BinaryOperator::Or => "|",
    }
  }
}
