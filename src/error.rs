
use crate::parsing::source::Span;
use crate::parsing::token::UnaryOperator;
use crate::postfix::Integer;
use crate::stack::StackError;

use thiserror::Error;

use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("Unbalanced parentheses: {kind} at {span}")]
  UnbalancedParentheses {
    kind: ParenMismatch,
    span: Span,
  },
  #[error("Invalid operand {operand} for unary operator '{operator}' at {span}")]
  InvalidOperand {
    operator: UnaryOperator,
    operand: Integer,
    span: Span,
  },
  #[error("Malformed expression: {0}")]
  MalformedExpression(#[from] StackError),
  #[error("Division by zero at {span}")]
  DivisionByZero {
    span: Span,
  },
  #[error("Unrecognized operator '{spelling}' at {span}")]
  UnrecognizedOperator {
    spelling: String,
    span: Span,
  },
  #[error("Numeric overflow in '{text}' at {span}")]
  NumericOverflow {
    text: String,
    span: Span,
  },
  #[error("Postfix expression has not been generated")]
  PostfixNotGenerated,
}

/// Which side of a parenthesis pair is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParenMismatch {
  /// A `(` that is never closed.
  Unclosed,
  /// A `)` with no matching `(`.
  Unopened,
}

impl Display for ParenMismatch {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      ParenMismatch::Unclosed => write!(f, "unclosed '('"),
      ParenMismatch::Unopened => write!(f, "unmatched ')'"),
    }
  }
}
