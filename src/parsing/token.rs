
use super::precedence::{precedence, Precedence};
use super::source::Span;

use std::fmt::{self, Display, Formatter};

/// A single lexical unit of an infix expression, together with the
/// span of source text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
  pub data: TokenData,
  pub span: Span,
}

/// The contents of a token. This is a closed set; characters the
/// tokenizer does not assign a meaning to end up in
/// [`TokenData::Other`] rather than being dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenData {
  /// A run of decimal digits, kept verbatim. Parsing to an integer is
  /// deferred until evaluation.
  Operand(String),
  Unary(UnaryOperator),
  Binary(BinaryOperator),
  LeftParen,
  RightParen,
  /// Any other non-whitespace character.
  Other(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
  /// `!`, logical negation over the values 0 and 1.
  Not,
  /// `~`, bitwise complement.
  Complement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
  Add,
  Subtract,
  Multiply,
  Divide,
  /// `**`
  Power,
}

impl Token {
  pub fn new(data: TokenData, span: Span) -> Self {
    Self { data, span }
  }

  /// The precedence of this token, as used by the shunting yard
  /// algorithm. Operands and parentheses have none.
  pub fn precedence(&self) -> Option<Precedence> {
    match &self.data {
      TokenData::Operand(_) | TokenData::LeftParen | TokenData::RightParen => None,
      TokenData::Unary(op) => precedence(op.spelling()),
      TokenData::Binary(op) => precedence(op.spelling()),
      TokenData::Other(ch) => precedence(ch.encode_utf8(&mut [0; 4])),
    }
  }

  pub fn is_left_paren(&self) -> bool {
    self.data == TokenData::LeftParen
  }
}

impl UnaryOperator {
  pub fn spelling(self) -> &'static str {
    match self {
      UnaryOperator::Not => "!",
      UnaryOperator::Complement => "~",
    }
  }
}

impl BinaryOperator {
  pub fn spelling(self) -> &'static str {
    match self {
      BinaryOperator::Add => "+",
      BinaryOperator::Subtract => "-",
      BinaryOperator::Multiply => "*",
      BinaryOperator::Divide => "/",
      BinaryOperator::Power => "**",
    }
  }
}

impl Display for UnaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.spelling())
  }
}

impl Display for BinaryOperator {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.spelling())
  }
}

impl Display for TokenData {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      TokenData::Operand(digits) => f.write_str(digits),
      TokenData::Unary(op) => write!(f, "{op}"),
      TokenData::Binary(op) => write!(f, "{op}"),
      TokenData::LeftParen => f.write_str("("),
      TokenData::RightParen => f.write_str(")"),
      TokenData::Other(ch) => write!(f, "{ch}"),
    }
  }
}

impl Display for Token {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.data)
  }
}
