
//! Infix to postfix conversion using the shunting yard algorithm.

use super::precedence::should_pop;
use super::source::Span;
use super::token::{Token, TokenData};
use super::tokenizer::Tokenizer;
use crate::error::{Error, ParenMismatch};
use crate::postfix::Postfix;
use crate::stack::Stack;

use tracing::{debug, trace};

/// Conversion state: the postfix output produced so far and the
/// pending operators.
///
/// Excluding `(` entries, the operator stack is always non-increasing
/// in precedence from bottom to top.
#[derive(Debug, Clone, Default)]
pub struct ShuntingYard {
  output: Vec<Token>,
  operator_stack: Stack<Token>,
}

impl ShuntingYard {
  pub fn new() -> Self {
    Self::default()
  }

  /// Converts a whole expression, discarding any state left over from
  /// a previous run. On failure, the operator stack is left as it was
  /// at the point of failure.
  pub fn run(&mut self, expression: &str) -> Result<Postfix, Error> {
    self.reset();
    for token in Tokenizer::new(expression) {
      self.feed(token)?;
    }
    self.finish()
  }

  pub fn reset(&mut self) {
    self.output.clear();
    self.operator_stack.clear();
  }

  /// Handles a single token.
  pub fn feed(&mut self, token: Token) -> Result<(), Error> {
    trace!(token = %token, span = %token.span, "shunting yard token");
    match token.data {
      TokenData::Operand(_) => {
        self.output.push(token);
      }
      TokenData::LeftParen => {
        self.operator_stack.push(token);
      }
      TokenData::RightParen => {
        self.close_paren(token.span)?;
      }
      TokenData::Unary(_) | TokenData::Binary(_) | TokenData::Other(_) => {
        self.push_operator(token);
      }
    }
    Ok(())
  }

  /// Emits all remaining operators and returns the postfix
  /// expression.
  pub fn finish(&mut self) -> Result<Postfix, Error> {
    while let Some(top) = self.operator_stack.top() {
      if top.is_left_paren() {
        return Err(Error::UnbalancedParentheses { kind: ParenMismatch::Unclosed, span: top.span });
      }
      self.emit_top()?;
    }
    let postfix = Postfix::new(std::mem::take(&mut self.output));
    debug!(%postfix, "converted to postfix");
    Ok(postfix)
  }

  /// The pending operators, bottom of the stack first.
  pub fn operator_stack(&self) -> &Stack<Token> {
    &self.operator_stack
  }

  /// The postfix tokens emitted so far.
  pub fn output(&self) -> &[Token] {
    &self.output
  }

  fn push_operator(&mut self, token: Token) {
    let incoming = token.precedence();
    // Pop operators until we hit one that binds less tightly.
    while let Some(top) = self.operator_stack.pop_if(|top| should_pop(top.precedence(), incoming)) {
      trace!(operator = %top, "emitting operator");
      self.output.push(top);
    }
    self.operator_stack.push(token);
  }

  fn close_paren(&mut self, span: Span) -> Result<(), Error> {
    loop {
      match self.operator_stack.pop() {
        Ok(top) if top.is_left_paren() => return Ok(()),
        Ok(top) => self.output.push(top),
        Err(_) => return Err(Error::UnbalancedParentheses { kind: ParenMismatch::Unopened, span }),
      }
    }
  }

  fn emit_top(&mut self) -> Result<(), Error> {
    let top = self.operator_stack.pop()?;
    self.output.push(top);
    Ok(())
  }
}

/// Converts an infix expression to postfix.
pub fn convert(expression: &str) -> Result<Postfix, Error> {
  ShuntingYard::new().run(expression)
}
