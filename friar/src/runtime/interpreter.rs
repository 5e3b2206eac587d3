use std::io::{self, Write};
use std::rc::Rc;

use tracing::debug;

use super::{Environment, Frame};
use crate::ast::*;
use crate::errors::{InterpreterError, LangError, Wrappable};
use crate::intrinsics;
use crate::intrinsics::conversions::truthy_of;
use crate::intrinsics::operators;
use crate::source::SourceLocation;

/// Result of executing a statement. Anything but `Normal` unwinds to the construct that handles
/// it: loops take `Breaking` and `Continuing`, calls take `Returning`.
#[derive(Clone, Debug, PartialEq)]
pub enum Flow {
  Normal(Value),
  Returning(Value),
  /// Loop signals keep the location of their statement, for when they escape a function.
  Breaking(SourceLocation),
  Continuing(SourceLocation),
}

pub struct Interpreter {
  pub env: Environment,
  output: Box<dyn Write>,
}

impl Interpreter {
  pub fn new() -> Self {
    Self::with_output(Box::new(io::stdout()))
  }

  /// Creates an interpreter printing to `output`, with intrinsics already declared as globals.
  pub fn with_output(output: Box<dyn Write>) -> Self {
    let mut env = Environment::new();

    for (name, value) in intrinsics::intrinsics() {
      env.declare_global(&name, value);
    }

    Interpreter { env, output }
  }

  pub fn write_line(&mut self, line: &str) -> Result<(), LangError> {
    writeln!(self.output, "{line}")
      .and_then(|_| self.output.flush())
      .map_err(|error| InterpreterError::OutputError(error.to_string()).wrap())
  }

  pub fn eval_declaration(&mut self, decl: &Declaration) {
    match decl {
      | Declaration::Global(_, name) => {
        debug!(%name, "declare global");
        self.env.declare_global(name, Value::Null);
      },
      | Declaration::Function(_, definition) => {
        debug!(name = %definition.name, arity = definition.parameters.len(), "declare function");

        let function = Function::Definition(Rc::clone(definition));
        self.env.declare_global(&definition.name, Value::Function(Rc::new(function)));
      },
    }
  }

  /// Runs statements in order, stopping at the first control flow signal.
  pub fn exec_block(&mut self, block: &[Statement]) -> Result<Flow, LangError> {
    let mut last = Value::Null;

    for statement in block {
      match self.exec_statement(statement)? {
        | Flow::Normal(value) => last = value,
        | signal => return Ok(signal),
      }
    }

    Ok(Flow::Normal(last))
  }

  pub fn exec_statement(&mut self, statement: &Statement) -> Result<Flow, LangError> {
    match statement {
      | Statement::If(location, condition, then_branch, else_branch) => {
        let condition = self.eval_expression(condition)?;

        if truthy_of(&condition).map_err(|error| error.at(location))? {
          self.exec_block(then_branch)
        } else if let Some(else_branch) = else_branch {
          self.exec_block(else_branch)
        } else {
          Ok(Flow::Normal(Value::Null))
        }
      },
      | Statement::While(location, condition, body) => {
        loop {
          let value = self.eval_expression(condition)?;

          if !truthy_of(&value).map_err(|error| error.at(location))? {
            break;
          }

          match self.exec_block(body)? {
            | Flow::Breaking(_) => break,
            | Flow::Returning(value) => return Ok(Flow::Returning(value)),
            | Flow::Normal(_) | Flow::Continuing(_) => {},
          }
        }

        Ok(Flow::Normal(Value::Null))
      },
      | Statement::Return(_, value) => {
        let value = match value {
          | Some(expr) => self.eval_expression(expr)?,
          | None => Value::Null,
        };

        Ok(Flow::Returning(value))
      },
      | Statement::Continue(location) => Ok(Flow::Continuing(location.clone())),
      | Statement::Break(location) => Ok(Flow::Breaking(location.clone())),
      | Statement::Expression(expr) => Ok(Flow::Normal(self.eval_expression(expr)?)),
    }
  }

  /// Evaluates operands left to right before applying anything to them. Errors are located at
  /// the innermost node that produced them.
  pub fn eval_expression(&mut self, expr: &Expression) -> Result<Value, LangError> {
    match expr {
      | Expression::Literal(_, literal) => Ok(Value::from(literal)),
      | Expression::Variable(location, name) => self
        .env
        .get(name)
        .ok_or_else(|| InterpreterError::MissingDefinition(name.clone()).wrap().at(location)),
      | Expression::Array(_, items) => {
        let values = items
          .iter()
          .map(|expr| self.eval_expression(expr))
          .collect::<Result<Vec<_>, _>>()?;

        Ok(Value::array(values))
      },
      | Expression::Unary(location, operator, operand) => {
        let value = self.eval_expression(operand)?;

        operators::unary(*operator, &value).map_err(|error| error.at(location))
      },
      | Expression::Binary(location, operator, lhs, rhs) => {
        let lhs = self.eval_expression(lhs)?;
        let rhs = self.eval_expression(rhs)?;

        operators::binary(*operator, &lhs, &rhs).map_err(|error| error.at(location))
      },
      | Expression::Index(location, source, index) => {
        let source = self.eval_expression(source)?;
        let index = self.eval_expression(index)?;

        operators::index(&source, &index).map_err(|error| error.at(location))
      },
      | Expression::Call(location, callee, arguments) => {
        let function = self.eval_expression(callee)?;
        let arguments = arguments
          .iter()
          .map(|expr| self.eval_expression(expr))
          .collect::<Result<Vec<_>, _>>()?;

        self
          .apply(&function, &arguments)
          .map_err(|error| error.at(location))
      },
      | Expression::Assign(location, name, value) => {
        let value = self.eval_expression(value)?;

        self
          .env
          .assign(name, value.clone())
          .map_err(|error| error.at(location))?;

        Ok(value)
      },
      | Expression::IndexAssign(location, source, index, value) => {
        let source = self.eval_expression(source)?;
        let index = self.eval_expression(index)?;
        let value = self.eval_expression(value)?;

        operators::assign_index(&source, &index, value).map_err(|error| error.at(location))
      },
    }
  }

  /// Calls a function value with already evaluated arguments.
  pub fn apply(&mut self, function: &Value, arguments: &[Value]) -> Result<Value, LangError> {
    let function = match function {
      | Value::Function(function) => Rc::clone(function),
      | other => return Err(InterpreterError::NotCallable(other.clone()).wrap()),
    };

    if function.arity() != arguments.len() {
      return Err(
        InterpreterError::FunctionArityMismatch {
          name: function.name().to_string(),
          expected: function.arity(),
          found: arguments.len(),
        }
        .wrap(),
      );
    }

    match function.as_ref() {
      | Function::Intrinsic(intrinsic) => (intrinsic.function)(self, arguments),
      | Function::Definition(definition) => self.exec_function(definition, arguments),
    }
  }

  fn exec_function(
    &mut self,
    definition: &FunctionDefinition,
    arguments: &[Value],
  ) -> Result<Value, LangError> {
    debug!(name = %definition.name, "enter function");

    let frame: Frame = definition
      .parameters
      .iter()
      .cloned()
      .zip(arguments.iter().cloned())
      .collect();

    let previous = self.env.enter_frame(frame);
    let result = self.exec_block(&definition.body);
    self.env.exit_frame(previous);

    debug!(name = %definition.name, ok = result.is_ok(), "exit function");

    match result? {
      | Flow::Normal(_) => Ok(Value::Null),
      | Flow::Returning(value) => Ok(value),
      | Flow::Breaking(location) => {
        Err(InterpreterError::EscapingSignal("break").wrap().at(&location))
      },
      | Flow::Continuing(location) => {
        Err(InterpreterError::EscapingSignal("continue").wrap().at(&location))
      },
    }
  }
}

impl Default for Interpreter {
  fn default() -> Self {
    Self::new()
  }
}
