//! A counting source that emits only every n-th value.

use std::fmt;

use num_traits::Num;

use crate::poll::Poll;
use crate::source::Source;

/// A source that counts `1, 2, 3, ...` up to an inclusive bound but only
/// reports [`Poll::Ready`] when the count is a multiple of `period`; the
/// polls in between advance the count and report [`Poll::Empty`].
///
/// With `period = 2` the source emits `2, 4, 6, ...`, skipping every other
/// tick.
pub struct PulseSource<T>
where
  T: Num + Copy + PartialOrd + fmt::Display + 'static,
{
  current: T,
  bound: T,
  period: T,
  name: String,
}

impl<T> PulseSource<T>
where
  T: Num + Copy + PartialOrd + fmt::Display + 'static,
{
  /// Creates a pulse source.
  ///
  /// # Arguments
  ///
  /// * `bound` - The last count reached (inclusive).
  /// * `period` - Emit on counts divisible by this value.
  pub fn new(bound: T, period: T) -> Self {
    Self {
      current: T::zero(),
      bound,
      period,
      name: format!("Pulse: bound = {}, period = {}", bound, period),
    }
  }

  /// Overrides the display name of this source.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl<T> Source for PulseSource<T>
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
    if self.current % self.period == T::zero() {
      Poll::Ready
    } else {
      Poll::Empty
    }
  }

  fn value(&self) -> Option<&T> {
    Some(&self.current)
  }
}
