
//! One expression, its postfix form, and its value.

use crate::error::Error;
use crate::parsing::shunting_yard::ShuntingYard;
use crate::parsing::token::Token;
use crate::postfix::{Evaluation, Postfix};

use tracing::debug;

/// Drives conversion and evaluation for a single expression.
///
/// [`generate_postfix`](Evaluator::generate_postfix) must succeed
/// before [`evaluate_postfix`](Evaluator::evaluate_postfix) is called.
/// Both may be called again; each call starts from scratch.
#[derive(Debug, Clone)]
pub struct Evaluator {
  expression: String,
  converter: ShuntingYard,
  postfix: Option<Postfix>,
  result: Option<Evaluation>,
}

impl Evaluator {
  pub fn new(expression: impl Into<String>) -> Self {
    Self {
      expression: expression.into(),
      converter: ShuntingYard::new(),
      postfix: None,
      result: None,
    }
  }

  /// Converts the expression to postfix, replacing any earlier
  /// conversion and result.
  pub fn generate_postfix(&mut self) -> Result<&Postfix, Error> {
    self.postfix = None;
    self.result = None;
    let postfix = self.converter.run(&self.expression)?;
    Ok(self.postfix.insert(postfix))
  }

  /// Evaluates the postfix expression produced by the last successful
  /// call to [`generate_postfix`](Evaluator::generate_postfix).
  pub fn evaluate_postfix(&mut self) -> Result<&Evaluation, Error> {
    let postfix = self.postfix.clone().ok_or(Error::PostfixNotGenerated)?;
    self.result = None;
    let evaluation = postfix.evaluate()?;
    debug!(expression = %self.expression, result = %evaluation, "evaluated expression");
    Ok(self.result.insert(evaluation))
  }

  pub fn expression(&self) -> &str {
    &self.expression
  }

  /// The postfix form from the last successful conversion.
  pub fn postfix(&self) -> Option<&Postfix> {
    self.postfix.as_ref()
  }

  /// The result of the last successful evaluation.
  pub fn postfix_result(&self) -> Option<&Evaluation> {
    self.result.as_ref()
  }

  /// A copy of the postfix token sequence. Empty if no conversion has
  /// succeeded.
  pub fn postfix_queue(&self) -> Vec<Token> {
    self.postfix.as_ref().map(|p| p.tokens().to_vec()).unwrap_or_default()
  }

  /// A copy of the operator stack as the last conversion left it,
  /// bottom first. Empty after a successful conversion.
  pub fn operator_stack(&self) -> Vec<Token> {
    self.converter.operator_stack().iter().cloned().collect()
  }
}

/// Converts and evaluates an infix expression in one step.
pub fn evaluate(expression: &str) -> Result<Evaluation, Error> {
  let mut evaluator = Evaluator::new(expression);
  evaluator.generate_postfix()?;
  evaluator.evaluate_postfix().copied()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ParenMismatch;

  #[test]
  fn test_generate_then_evaluate() {
    crate::test_utils::init_test_logging();
    let mut evaluator = Evaluator::new("!0 + 2");
    assert_eq!(evaluator.generate_postfix().unwrap().to_string(), "0 ! 2 +");
    assert_eq!(evaluator.evaluate_postfix().unwrap().value(), 3);
    assert_eq!(evaluator.expression(), "!0 + 2");
    assert_eq!(evaluator.postfix_result().unwrap().expression(), "3");
    assert_eq!(evaluator.postfix_queue().len(), 4);
    assert!(evaluator.operator_stack().is_empty());
  }

  #[test]
  fn test_evaluate_before_generate() {
    let mut evaluator = Evaluator::new("1 + 1");
    assert_eq!(evaluator.evaluate_postfix(), Err(Error::PostfixNotGenerated));
    assert!(evaluator.postfix_queue().is_empty());
    assert!(evaluator.postfix_result().is_none());
  }

  #[test]
  fn test_repeated_calls_do_not_accumulate() {
    let mut evaluator = Evaluator::new("3 + 4 * 2");
    evaluator.generate_postfix().unwrap();
    let first = evaluator.postfix_queue();
    evaluator.generate_postfix().unwrap();
    assert_eq!(evaluator.postfix_queue(), first);

    assert_eq!(evaluator.evaluate_postfix().unwrap().value(), 11);
    assert_eq!(evaluator.evaluate_postfix().unwrap().value(), 11);
  }

  #[test]
  fn test_failed_conversion_keeps_operator_stack() {
    let mut evaluator = Evaluator::new("2 * (1 + 2");
    let err = evaluator.generate_postfix().unwrap_err();
    assert!(matches!(err, Error::UnbalancedParentheses { kind: ParenMismatch::Unclosed, .. }));
    let stack: Vec<_> = evaluator.operator_stack().iter().map(|t| t.to_string()).collect();
    assert_eq!(stack, vec!["*", "("]);
    assert!(evaluator.postfix().is_none());
    assert_eq!(evaluator.evaluate_postfix(), Err(Error::PostfixNotGenerated));
  }

  #[test]
  fn test_failed_evaluation_clears_result() {
    let mut evaluator = Evaluator::new("5 / 0");
    evaluator.generate_postfix().unwrap();
    assert!(matches!(evaluator.evaluate_postfix(), Err(Error::DivisionByZero { .. })));
    assert!(evaluator.postfix_result().is_none());
    // The postfix form survives a failed evaluation.
    assert_eq!(evaluator.postfix().unwrap().to_string(), "5 0 /");
  }

  #[test]
  fn test_evaluate_helper() {
    assert_eq!(evaluate("(1 + 2) * 3").map(|e| e.value()), Ok(9));
    assert!(evaluate("(1 + 2").is_err());
  }
}
