//! A component that forwards only values matching a predicate.

use crate::component::Component;
use crate::node::SharedNode;
use crate::poll::Poll;
use crate::slot::InputSlot;

/// A single-input component that passes values through unchanged when the
/// predicate holds and reports [`Poll::Empty`] otherwise.
///
/// Rejected values suppress the downstream chain for the tick; polling
/// resumes as soon as the upstream produces a matching value.
pub struct FilterComponent<T, P>
where
  T: Clone + 'static,
  P: FnMut(&T) -> bool,
{
  input: InputSlot<T>,
  predicate: P,
  current: Option<T>,
  name: String,
}

impl<T, P> FilterComponent<T, P>
where
  T: Clone + 'static,
  P: FnMut(&T) -> bool,
{
  /// Creates a filter component from a predicate.
  pub fn new(predicate: P) -> Self {
    Self {
      input: InputSlot::new(),
      predicate,
      current: None,
      name: "Filter".to_string(),
    }
  }

  /// Overrides the display name of this component.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl<T, P> Component for FilterComponent<T, P>
where
  T: Clone + 'static,
  P: FnMut(&T) -> bool,
{
  type Inputs = (T,);
  type Output = T;

  fn name(&self) -> &str {
    &self.name
  }

  fn poll_next(&mut self) -> Poll {
    let Some(input) = self.input.value() else {
      return Poll::Empty;
    };
    if !(self.predicate)(&input) {
      return Poll::Empty;
    }
    let passed = input.clone();
    drop(input);
    self.current = Some(passed);
    Poll::Ready
  }

  fn value(&self) -> Option<&T> {
    self.current.as_ref()
  }

  fn connect(&mut self, source: Option<&SharedNode>, slot: usize) {
    if slot == 0 {
      self.input.bind(source);
    }
  }
}
