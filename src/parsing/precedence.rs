
//! The operator precedence table consulted by the shunting yard
//! converter.

use std::fmt::{self, Display, Formatter};

/// The binding strength of an operator. Higher values bind tighter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(u8);

impl Precedence {
  pub const COMMA: Precedence = Precedence(0);
  pub const ASSIGNMENT: Precedence = Precedence(1);
  pub const TERNARY: Precedence = Precedence(2);
  pub const LOGICAL_OR: Precedence = Precedence(3);
  pub const LOGICAL_AND: Precedence = Precedence(4);
  pub const BITWISE_OR: Precedence = Precedence(5);
  pub const BITWISE_XOR: Precedence = Precedence(6);
  pub const BITWISE_AND: Precedence = Precedence(7);
  pub const EQUALITY: Precedence = Precedence(8);
  pub const RELATIONAL: Precedence = Precedence(9);
  pub const SHIFT: Precedence = Precedence(10);
  pub const ADDITIVE: Precedence = Precedence(11);
  pub const MULTIPLICATIVE: Precedence = Precedence(12);
  pub const POWER: Precedence = Precedence(13);
  pub const UNARY: Precedence = Precedence(14);
  pub const POSTFIX: Precedence = Precedence(15);

  /// The rank used to signal an unrecognized spelling in the integer
  /// form of the table. See [`precedence_rank`].
  pub const UNKNOWN_RANK: i32 = -1;

  pub fn rank(self) -> i32 {
    i32::from(self.0)
  }
}

impl Display for Precedence {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Looks up the precedence of an operator by its spelling. Returns
/// `None` for spellings the table does not know, including bare
/// parentheses. An unknown precedence never takes part in a
/// comparison, so it never causes the operator stack to be popped.
///
/// Most of these spellings are never produced by the tokenizer. They
/// are listed so that new operators slot into the existing ordering.
pub fn precedence(op: &str) -> Option<Precedence> {
  let prec = match op {
    "," => Precedence::COMMA,
    "=" | "+=" | "-=" | "*=" | "/=" | "%=" | "<<=" | ">>=" | "&=" | "^=" | "|=" => Precedence::ASSIGNMENT,
    "?:" => Precedence::TERNARY,
    "||" | "or" => Precedence::LOGICAL_OR,
    "&&" | "and" => Precedence::LOGICAL_AND,
    "|" => Precedence::BITWISE_OR,
    "^" => Precedence::BITWISE_XOR,
    "&" => Precedence::BITWISE_AND,
    "==" | "!=" => Precedence::EQUALITY,
    "<" | "<=" | ">" | ">=" => Precedence::RELATIONAL,
    "<<" | ">>" => Precedence::SHIFT,
    "+" | "-" => Precedence::ADDITIVE,
    "*" | "/" | "%" => Precedence::MULTIPLICATIVE,
    "**" => Precedence::POWER,
    "!" | "~" | "u+" | "u-" | "++" | "--" | "sizeof" | "new" | "delete" => Precedence::UNARY,
    "()" | "[]" | "->" | "." | "p++" | "p--" => Precedence::POSTFIX,
    _ => return None,
  };
  Some(prec)
}

/// Integer form of [`precedence`], with [`Precedence::UNKNOWN_RANK`]
/// standing in for unrecognized spellings.
pub fn precedence_rank(op: &str) -> i32 {
  precedence(op).map_or(Precedence::UNKNOWN_RANK, Precedence::rank)
}

/// Whether an operator already on the stack, with precedence `top`,
/// must be emitted before an incoming operator with precedence
/// `incoming` is pushed. Ties pop, which makes equal-precedence
/// operators associate to the left.
pub fn should_pop(top: Option<Precedence>, incoming: Option<Precedence>) -> bool {
  match (top, incoming) {
    (Some(top), Some(incoming)) => top >= incoming,
    _ => false,
  }
}
