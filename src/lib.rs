
//! Converts infix integer expressions to postfix (Reverse Polish)
//! form with the shunting yard algorithm, then evaluates the postfix
//! form.
//!
//! Operators, loosest binding first:
//! * `+`, `-`
//! * `*`, `/` (division truncates toward zero)
//! * `**` (power; left-associative, so `2 ** 3 ** 2` is 64)
//! * `!` (logical not on 0 and 1), `~` (bitwise complement)
//!
//! Operands are non-negative decimal literals. Arithmetic is checked
//! 64-bit, and every failure is reported as an [`Error`].

pub mod error;
pub mod evaluator;
pub mod parsing;
pub mod postfix;
pub mod stack;

pub use error::Error;
pub use evaluator::{evaluate, Evaluator};
pub use postfix::{Evaluation, Integer, Postfix};
