
//! Checked integer semantics for the postfix operators.

use super::Integer;
use crate::parsing::token::{BinaryOperator, UnaryOperator};

use num::traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub};
use num::Zero;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
  #[error("division by zero")]
  DivisionByZero,
  #[error("result does not fit in a 64-bit integer")]
  Overflow,
}

/// Applies a unary operator. Returns `None` if the operand is outside
/// the operator's domain.
pub fn apply_unary(op: UnaryOperator, operand: Integer) -> Option<Integer> {
  match op {
    UnaryOperator::Not => logical_not(operand),
    UnaryOperator::Complement => Some(!operand),
  }
}

/// Logical negation, defined only on 0 and 1.
pub fn logical_not(operand: Integer) -> Option<Integer> {
  match operand {
    0 => Some(1),
    1 => Some(0),
    _ => None,
  }
}

pub fn apply_binary(op: BinaryOperator, left: Integer, right: Integer) -> Result<Integer, ArithmeticError> {
  match op {
    BinaryOperator::Add => CheckedAdd::checked_add(&left, &right).ok_or(ArithmeticError::Overflow),
    BinaryOperator::Subtract => CheckedSub::checked_sub(&left, &right).ok_or(ArithmeticError::Overflow),
    BinaryOperator::Multiply => CheckedMul::checked_mul(&left, &right).ok_or(ArithmeticError::Overflow),
    BinaryOperator::Divide => divide(left, right),
    BinaryOperator::Power => power(left, right),
  }
}

/// Division truncating toward zero.
pub fn divide(left: Integer, right: Integer) -> Result<Integer, ArithmeticError> {
  if right.is_zero() {
    return Err(ArithmeticError::DivisionByZero);
  }
  // Only i64::MIN / -1 can fail at this point.
  CheckedDiv::checked_div(&left, &right).ok_or(ArithmeticError::Overflow)
}

/// `base` raised to `exponent`. A negative exponent yields the real
/// result truncated toward zero, which is zero except for bases of
/// magnitude one.
pub fn power(base: Integer, exponent: Integer) -> Result<Integer, ArithmeticError> {
  if exponent < 0 {
    return match base {
      0 => Err(ArithmeticError::DivisionByZero),
      1 => Ok(1),
      -1 => Ok(if exponent % 2 == 0 { 1 } else { -1 }),
      _ => Ok(0),
    };
  }
  let exponent = usize::try_from(exponent).map_err(|_| ArithmeticError::Overflow)?;
  num::checked_pow(base, exponent).ok_or(ArithmeticError::Overflow)
}
