
//! The LIFO structure shared by the operator stack of the converter
//! and the value stack of the postfix evaluator.

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
