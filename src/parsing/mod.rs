
//! Tokenizing infix expressions and converting them to postfix.

pub mod precedence;
pub mod shunting_yard;
pub mod source;
pub mod token;
pub mod tokenizer;

pub use precedence::{precedence, precedence_rank, Precedence};
pub use shunting_yard::{convert, ShuntingYard};
pub use token::{Token, TokenData, UnaryOperator, BinaryOperator};
