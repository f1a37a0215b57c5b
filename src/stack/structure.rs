
use super::error::StackError;

/// LIFO stack. Implemented internally as a vector whose "top" is at
/// the end, allowing for constant-time pushes and pops.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Stack<T> {
  elements: Vec<T>,
}

impl<T> Stack<T> {

  pub fn new() -> Self {
    Self::default()
  }

  /// Asserts that the stack has size at least `expected` but does not
  /// pop anything.
  pub fn check_stack_size(&self, expected: usize) -> Result<(), StackError> {
    if self.len() < expected {
      Err(StackError::NotEnoughElements { expected, actual: self.len() })
    } else {
      Ok(())
    }
  }

  pub fn push(&mut self, element: T) {
    self.elements.push(element);
  }

  pub fn pop(&mut self) -> Result<T, StackError> {
    self.elements.pop().ok_or(StackError::NotEnoughElements { expected: 1, actual: 0 })
  }

  /// Pops the top two elements, returning them in push order: the
  /// element that was below the top comes first. In case of a
  /// [`StackError`], `self` will NOT be modified.
  pub fn pop_pair(&mut self) -> Result<(T, T), StackError> {
    self.check_stack_size(2)?;
    // unwrap: We checked the stack size already
    let second = self.elements.pop().unwrap();
    let first = self.elements.pop().unwrap();
    Ok((first, second))
  }

  /// Pops the top element only if `predicate` holds for it. Returns
  /// `None` if the stack is empty or the predicate fails, in which
  /// case the stack is unchanged.
  pub fn pop_if<F>(&mut self, predicate: F) -> Option<T>
  where F: FnOnce(&T) -> bool {
    if predicate(self.top()?) {
      self.elements.pop()
    } else {
      None
    }
  }

  /// Consumes the stack, which must contain exactly one element, and
  /// returns that element.
  pub fn into_single(mut self) -> Result<T, StackError> {
    match self.len() {
      1 => self.pop(),
      0 => Err(StackError::NotEnoughElements { expected: 1, actual: 0 }),
      actual => Err(StackError::TooManyElements { expected: 1, actual }),
    }
  }

  pub fn top(&self) -> Option<&T> {
    self.elements.last()
  }

  pub fn len(&self) -> usize {
    self.elements.len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements.is_empty()
  }

  pub fn clear(&mut self) {
    self.elements.clear();
  }

  /// Iterates from the bottom of the stack to the top.
  pub fn iter(&self) -> std::slice::Iter<'_, T> {
    self.elements.iter()
  }

}

impl<T> IntoIterator for Stack<T> {
  type Item = T;
  type IntoIter = std::vec::IntoIter<Self::Item>;

  /// Iterates (by value) from the bottom of the stack.
  fn into_iter(self) -> Self::IntoIter {
    self.elements.into_iter()
  }
}

/// Converts a vector to a stack, where the top of the stack is at the
/// end.
impl<T> From<Vec<T>> for Stack<T> {
  fn from(elements: Vec<T>) -> Self {
    Self { elements }
  }
}

impl<T> Default for Stack<T> {

  fn default() -> Self {
    Self {
      elements: Vec::with_capacity(10),
    }
  }

}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_push_pop() {
    let mut stack = Stack::from(vec![0, 10]);
    stack.push(20);
    assert_eq!(stack.pop(), Ok(20));
    assert_eq!(stack.pop(), Ok(10));
    assert_eq!(stack.pop(), Ok(0));
    assert_eq!(stack.pop(), Err(StackError::NotEnoughElements { expected: 1, actual: 0 }));
  }

  #[test]
  fn test_pop_pair() {
    let mut stack = Stack::from(vec![0, 10, 20]);
    assert_eq!(stack.pop_pair(), Ok((10, 20)));
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.pop_pair(), Err(StackError::NotEnoughElements { expected: 2, actual: 1 }));
    // Failed pops leave the stack alone.
    assert_eq!(stack.len(), 1);
    assert_eq!(stack.top(), Some(&0));
  }

  #[test]
  fn test_pop_if() {
    let mut stack = Stack::from(vec![1, 2, 3]);
    assert_eq!(stack.pop_if(|n| *n > 2), Some(3));
    assert_eq!(stack.pop_if(|n| *n > 2), None);
    assert_eq!(stack.len(), 2);

    let mut empty = Stack::<i32>::new();
    assert_eq!(empty.pop_if(|_| true), None);
  }

  #[test]
  fn test_into_single() {
    assert_eq!(Stack::from(vec!['A']).into_single(), Ok('A'));
    assert_eq!(
      Stack::<char>::new().into_single(),
      Err(StackError::NotEnoughElements { expected: 1, actual: 0 }),
    );
    assert_eq!(
      Stack::from(vec!['A', 'B', 'C']).into_single(),
      Err(StackError::TooManyElements { expected: 1, actual: 3 }),
    );
  }

  #[test]
  fn test_len_and_clear() {
    let mut stack = Stack::new();
    assert!(stack.is_empty());
    stack.push(0);
    stack.push(0);
    stack.push(0);
    assert_eq!(stack.len(), 3);
    stack.clear();
    assert_eq!(stack.len(), 0);
    assert!(stack.is_empty());
  }

  #[test]
  fn test_iter_bottom_to_top() {
    let stack = Stack::from(vec!['A', 'B', 'C', 'D']);
    assert_eq!(stack.iter().collect::<String>(), "ABCD");
    assert_eq!(stack.into_iter().collect::<Vec<_>>(), vec!['A', 'B', 'C', 'D']);
  }
}
