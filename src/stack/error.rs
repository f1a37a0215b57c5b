
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum StackError {
  #[error("Not enough stack elements, expected at least {expected} but found {actual}.")]
  NotEnoughElements {
    expected: usize,
    actual: usize,
  },
  #[error("Too many stack elements, expected exactly {expected} but found {actual}.")]
  TooManyElements {
    expected: usize,
    actual: usize,
  },
}
