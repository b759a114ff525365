//! A source that counts upward to a bound.

use std::fmt;

use num_traits::Num;

use crate::poll::Poll;
use crate::source::Source;

/// A source that produces `1, 2, 3, ...` up to an inclusive bound.
///
/// Once the bound is reached the source reports [`Poll::Closed`] on every
/// subsequent poll.
pub struct CounterSource<T>
where
  T: Num + Copy + PartialOrd + fmt::Display + 'static,
{
  current: T,
  bound: T,
  name: String,
}

impl<T> CounterSource<T>
where
  T: Num + Copy + PartialOrd + fmt::Display + 'static,
{
  /// Creates a counter that closes after producing `bound`.
  ///
  /// # Arguments
  ///
  /// * `bound` - The last value produced (inclusive).
  pub fn new(bound: T) -> Self {
    Self {
      current: T::zero(),
      bound,
      name: format!("Counter: bound = {}", bound),
    }
  }

  /// Overrides the display name of this source.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl<T> Source for CounterSource<T>
where
  T: Num + Copy + PartialOrd + fmt::Display + 'static,
{
  type Output = T;

  fn name(&self) -> &str {
    &self.name
  }

  fn poll_next(&mut self) -> Poll {
    if self.current >= self.bound {
      return Poll::Closed;
    }
    self.current = self.current + T::one();
    Poll::Ready
  }

  fn value(&self) -> Option<&T> {
    Some(&self.current)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn counts_to_bound_then_closes() {
    let mut source = CounterSource::new(3);
    let mut produced = Vec::new();
    while source.poll_next() == Poll::Ready {
      produced.push(*source.value().unwrap());
    }
    assert_eq!(produced, vec![1, 2, 3]);
    assert_eq!(source.poll_next(), Poll::Closed);
    assert_eq!(source.poll_next(), Poll::Closed);
  }

  #[test]
  fn zero_bound_closes_immediately() {
    let mut source: CounterSource<i64> = CounterSource::new(0);
    assert_eq!(source.poll_next(), Poll::Closed);
  }

  #[test]
  fn default_name_mentions_bound() {
    let source = CounterSource::new(10);
    assert_eq!(source.name(), "Counter: bound = 10");
    let renamed = CounterSource::new(10).with_name("lhs");
    assert_eq!(renamed.name(), "lhs");
  }
}
