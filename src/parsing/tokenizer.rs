
use super::source::{SourceOffset, Span};
use super::token::{Token, TokenData, UnaryOperator, BinaryOperator};

use regex::Regex;
use once_cell::sync::Lazy;

static OPERAND_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+").unwrap());
static SPACES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*").unwrap());

#[derive(Debug, Clone)]
pub struct TokenizerState<'a> {
  input: &'a str,
  position: SourceOffset,
}

#[derive(Debug, Clone)]
pub struct TokenizerMatch<'a> {
  matched_str: &'a str,
  start: SourceOffset,
  end: SourceOffset,
}

/// Iterator over the tokens of an infix expression. Every
/// non-whitespace character belongs to exactly one token, so this
/// never fails.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
  state: TokenizerState<'a>,
}

impl<'a> TokenizerState<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { input, position: SourceOffset(0) }
  }

  pub fn is_eof(&self) -> bool {
    self.input.is_empty()
  }

  pub fn peek(&self) -> Option<char> {
    self.input.chars().next()
  }

  pub fn current_pos(&self) -> SourceOffset {
    self.position
  }

  /// Advances the position of `self` by `amount` bytes, returning the
  /// skipped portion. Never advances beyond one-past-the-end of the
  /// input. `amount` must land on a character boundary.
  pub fn advance(&mut self, mut amount: usize) -> TokenizerMatch<'a> {
    amount = amount.min(self.input.len());

    let match_pos = self.current_pos();
    let (prefix, suffix) = self.input.split_at(amount);
    self.position = self.position + amount;
    self.input = suffix;
    TokenizerMatch {
      matched_str: prefix,
      start: match_pos,
      end: match_pos + amount,
    }
  }

  pub fn read_literal(&mut self, literal: &str) -> Option<TokenizerMatch<'a>> {
    self.input.starts_with(literal).then(|| {
      self.advance(literal.len())
    })
  }

  /// If the current position of the string matches the given regex,
  /// returns the matched string and advances the tokenizer state. If
  /// not, returns `None`.
  ///
  /// The regex MUST be anchored at the start of the input. This
  /// function may panic if that precondition is not satisfied.
  pub fn read_regex(&mut self, regex: &Regex) -> Option<TokenizerMatch<'a>> {
    let m = regex.find(self.input)?;
    assert_eq!(m.start(), 0, "Regex must be anchored at the start of the input");

    Some(self.advance(m.len()))
  }

  /// Reads a single character, whatever it is.
  pub fn read_char(&mut self) -> Option<(char, TokenizerMatch<'a>)> {
    let ch = self.peek()?;
    Some((ch, self.advance(ch.len_utf8())))
  }

  pub fn consume_spaces(&mut self) {
    self.read_regex(&SPACES_RE);
  }
}

impl<'h> TokenizerMatch<'h> {
  pub fn as_str(&self) -> &'h str {
    self.matched_str
  }
  pub fn span(&self) -> Span {
    Span::new(self.start, self.end)
  }
}

impl<'a> Tokenizer<'a> {
  pub fn new(input: &'a str) -> Self {
    Self { state: TokenizerState::new(input) }
  }

  fn read_operand(&mut self) -> Option<Token> {
    self.state.read_regex(&OPERAND_RE).map(|m| {
      Token::new(TokenData::Operand(m.as_str().to_owned()), m.span())
    })
  }

  fn read_power(&mut self) -> Option<Token> {
    self.state.read_literal("**").map(|m| {
      Token::new(TokenData::Binary(BinaryOperator::Power), m.span())
    })
  }

  fn read_symbol(&mut self) -> Option<Token> {
    let (ch, m) = self.state.read_char()?;
    let data = match ch {
      '(' => TokenData::LeftParen,
      ')' => TokenData::RightParen,
      '+' => TokenData::Binary(BinaryOperator::Add),
      '-' => TokenData::Binary(BinaryOperator::Subtract),
      '*' => TokenData::Binary(BinaryOperator::Multiply),
      '/' => TokenData::Binary(BinaryOperator::Divide),
      '!' => TokenData::Unary(UnaryOperator::Not),
      '~' => TokenData::Unary(UnaryOperator::Complement),
      other => TokenData::Other(other),
    };
    Some(Token::new(data, m.span()))
  }
}

impl Iterator for Tokenizer<'_> {
  type Item = Token;

  fn next(&mut self) -> Option<Token> {
    self.state.consume_spaces();
    if self.state.is_eof() {
      return None;
    }
    self.read_operand()
      .or_else(|| self.read_power())
      .or_else(|| self.read_symbol())
  }
}

/// Splits an infix expression into tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
  Tokenizer::new(input).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn span(start: usize, end: usize) -> Span {
    Span::new(SourceOffset(start), SourceOffset(end))
  }

  fn spellings(input: &str) -> Vec<String> {
    tokenize(input).iter().map(|t| t.to_string()).collect()
  }

  #[test]
  fn test_advance() {
    let mut state = TokenizerState::new("abcdefg");
    assert_eq!(state.advance(3).as_str(), "abc");
    assert_eq!(state.current_pos(), SourceOffset(3));
    assert_eq!(state.advance(99).as_str(), "defg");
    assert!(state.is_eof());
    let m = state.advance(1);
    assert_eq!(m.as_str(), "");
    assert_eq!(m.span(), span(7, 7));
  }

  #[test]
  fn test_read_literal() {
    let mut state = TokenizerState::new("**2");
    assert!(state.read_literal("*2").is_none());
    assert_eq!(state.current_pos(), SourceOffset(0));
    let m = state.read_literal("**").unwrap();
    assert_eq!(m.span(), span(0, 2));
    assert_eq!(state.peek(), Some('2'));
  }

  #[test]
  fn test_read_regex_fail_leaves_position() {
    let mut state = TokenizerState::new("x12");
    assert!(state.read_regex(&OPERAND_RE).is_none());
    assert_eq!(state.current_pos(), SourceOffset(0));
  }

  #[test]
  fn test_consume_spaces() {
    let mut state = TokenizerState::new(" \t 1");
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(3));
    // No effect when there is nothing to consume.
    state.consume_spaces();
    assert_eq!(state.current_pos(), SourceOffset(3));
  }

  #[test]
  fn test_tokenize_arithmetic() {
    assert_eq!(spellings("3 + 4 * 2"), vec!["3", "+", "4", "*", "2"]);
    assert_eq!(spellings("(10-2)/4"), vec!["(", "10", "-", "2", ")", "/", "4"]);
    assert_eq!(spellings(""), Vec::<String>::new());
    assert_eq!(spellings("   "), Vec::<String>::new());
  }

  #[test]
  fn test_tokenize_digit_runs_are_greedy() {
    let tokens = tokenize("123 45");
    assert_eq!(tokens, vec![
      Token::new(TokenData::Operand("123".to_owned()), span(0, 3)),
      Token::new(TokenData::Operand("45".to_owned()), span(4, 6)),
    ]);
  }

  #[test]
  fn test_tokenize_power() {
    let tokens = tokenize("2**3");
    assert_eq!(tokens[1], Token::new(TokenData::Binary(BinaryOperator::Power), span(1, 3)));
    // Three stars are a power followed by a multiplication.
    assert_eq!(spellings("2***3"), vec!["2", "**", "*", "3"]);
    assert_eq!(spellings("2 * * 3"), vec!["2", "*", "*", "3"]);
  }

  #[test]
  fn test_tokenize_unary_and_other() {
    let tokens = tokenize("!0 ~1 %a");
    let data: Vec<_> = tokens.into_iter().map(|t| t.data).collect();
    assert_eq!(data, vec![
      TokenData::Unary(UnaryOperator::Not),
      TokenData::Operand("0".to_owned()),
      TokenData::Unary(UnaryOperator::Complement),
      TokenData::Operand("1".to_owned()),
      TokenData::Other('%'),
      TokenData::Other('a'),
    ]);
  }

  #[test]
  fn test_tokenize_multibyte_char() {
    let tokens = tokenize("1×2");
    assert_eq!(tokens[1], Token::new(TokenData::Other('×'), span(1, 3)));
    assert_eq!(tokens[2].span, span(3, 4));
  }
}
