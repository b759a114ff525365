//! A component that combines two input streams value by value.

use crate::component::Component;
use crate::node::SharedNode;
use crate::poll::Poll;
use crate::slot::InputSlot;

/// A two-input component that combines the current values of both slots
/// through a closure each tick.
///
/// The scheduler polls the join only when both upstreams are ready, so the
/// combination always sees a fresh pair. `JoinComponent::new(|a, b| a + b)`
/// is the classic summing component.
pub struct JoinComponent<A, B, O, F>
where
  A: 'static,
  B: 'static,
  O: 'static,
  F: FnMut(&A, &B) -> O,
{
  left: InputSlot<A>,
  right: InputSlot<B>,
  combine: F,
  current: Option<O>,
  name: String,
}

impl<A, B, O, F> JoinComponent<A, B, O, F>
where
  A: 'static,
  B: 'static,
  O: 'static,
  F: FnMut(&A, &B) -> O,
{
  /// Creates a join component from a combining closure.
  pub fn new(combine: F) -> Self {
    Self {
      left: InputSlot::new(),
      right: InputSlot::new(),
      combine,
      current: None,
      name: "Join".to_string(),
    }
  }

  /// Overrides the display name of this component.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl<A, B, O, F> Component for JoinComponent<A, B, O, F>
where
  A: 'static,
  B: 'static,
  O: 'static,
  F: FnMut(&A, &B) -> O,
{
  type Inputs = (A, B);
  type Output = O;

  fn name(&self) -> &str {
    &self.name
  }

  fn poll_next(&mut self) -> Poll {
    let (Some(left), Some(right)) = (self.left.value(), self.right.value()) else {
      return Poll::Empty;
    };
    let combined = (self.combine)(&left, &right);
    drop(left);
    drop(right);
    self.current = Some(combined);
    Poll::Ready
  }

  fn value(&self) -> Option<&O> {
    self.current.as_ref()
  }

  fn connect(&mut self, source: Option<&SharedNode>, slot: usize) {
    match slot {
      0 => self.left.bind(source),
      1 => self.right.bind(source),
      _ => {}
    }
  }
}
