
//! Postfix expressions and their evaluation.

pub mod arithmetic;

use arithmetic::ArithmeticError;
use crate::error::Error;
use crate::parsing::token::{Token, TokenData};
use crate::stack::Stack;

use itertools::Itertools;
use tracing::{debug, trace};

use std::fmt::{self, Display, Formatter};

/// The integer type all evaluation happens in.
pub type Integer = i64;

/// An expression in postfix (Reverse Polish) order, as produced by
/// the [shunting yard converter](crate::parsing::shunting_yard).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Postfix {
  tokens: Vec<Token>,
}

/// The final value of an evaluated expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Evaluation {
  value: Integer,
}

impl Postfix {
  pub fn new(tokens: Vec<Token>) -> Self {
    Self { tokens }
  }

  pub fn tokens(&self) -> &[Token] {
    &self.tokens
  }

  pub fn len(&self) -> usize {
    self.tokens.len()
  }

  pub fn is_empty(&self) -> bool {
    self.tokens.is_empty()
  }

  /// Evaluates the expression, consuming it front to back. Exactly one
  /// value must be left on the value stack at the end.
  pub fn evaluate(self) -> Result<Evaluation, Error> {
    let mut values = Stack::new();
    for token in self.tokens {
      evaluate_token(&mut values, token)?;
    }
    let value = values.into_single()?;
    debug!(value, "evaluated postfix expression");
    Ok(Evaluation::new(value))
  }
}

fn evaluate_token(values: &mut Stack<Integer>, token: Token) -> Result<(), Error> {
  trace!(token = %token, depth = values.len(), "evaluating");
  let Token { data, span } = token;
  match data {
    TokenData::Operand(digits) => {
      // Digit runs only fail to parse when they are too large.
      match digits.parse::<Integer>() {
        Ok(value) => values.push(value),
        Err(_) => return Err(Error::NumericOverflow { text: digits, span }),
      }
    }
    TokenData::Unary(operator) => {
      let operand = values.pop()?;
      let value = arithmetic::apply_unary(operator, operand)
        .ok_or(Error::InvalidOperand { operator, operand, span })?;
      values.push(value);
    }
    TokenData::Binary(operator) => {
      let (left, right) = values.pop_pair()?;
      let value = arithmetic::apply_binary(operator, left, right).map_err(|err| match err {
        ArithmeticError::DivisionByZero => Error::DivisionByZero { span },
        ArithmeticError::Overflow => Error::NumericOverflow { text: format!("{left} {operator} {right}"), span },
      })?;
      values.push(value);
    }
    TokenData::LeftParen | TokenData::RightParen | TokenData::Other(_) => {
      return Err(Error::UnrecognizedOperator { spelling: data.to_string(), span });
    }
  }
  Ok(())
}

impl Evaluation {
  pub fn new(value: Integer) -> Self {
    Self { value }
  }

  pub fn value(&self) -> Integer {
    self.value
  }

  /// The value in its printed form.
  pub fn expression(&self) -> String {
    self.value.to_string()
  }
}

impl Display for Postfix {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.tokens.iter().join(" "))
  }
}

impl Display for Evaluation {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.value)
  }
}
