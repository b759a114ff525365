//! A source that drains a vector.

use std::collections::VecDeque;

use crate::poll::Poll;
use crate::source::Source;

/// A source that produces the items of a vector in order, then closes.
pub struct VecSource<T: 'static> {
  items: VecDeque<T>,
  current: Option<T>,
  name: String,
}

impl<T: 'static> VecSource<T> {
  /// Creates a source over the given items.
  pub fn new(items: Vec<T>) -> Self {
    Self {
      items: items.into(),
      current: None,
      name: "VecSource".to_string(),
    }
  }

  /// Overrides the display name of this source.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl<T: 'static> Source for VecSource<T> {
  type Output = T;

  fn name(&self) -> &str {
    &self.name
  }

  fn poll_next(&mut self) -> Poll {
    match self.items.pop_front() {
      Some(item) => {
        self.current = Some(item);
        Poll::Ready
      }
      None => Poll::Closed,
    }
  }

  fn value(&self) -> Option<&T> {
    self.current.as_ref()
  }
}
