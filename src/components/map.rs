//! A component that applies a function to each value.

use crate::component::Component;
use crate::node::SharedNode;
use crate::poll::Poll;
use crate::slot::InputSlot;

/// A single-input component that maps each upstream value through a
/// closure.
pub struct MapComponent<I, O, F>
where
  I: 'static,
  O: 'static,
  F: FnMut(&I) -> O,
{
  input: InputSlot<I>,
  map: F,
  current: Option<O>,
  name: String,
}

impl<I, O, F> MapComponent<I, O, F>
where
  I: 'static,
  O: 'static,
  F: FnMut(&I) -> O,
{
  /// Creates a map component from a closure.
  pub fn new(map: F) -> Self {
    Self {
      input: InputSlot::new(),
      map,
      current: None,
      name: "Map".to_string(),
    }
  }

  /// Overrides the display name of this component.
  pub fn with_name(mut self, name: impl Into<String>) -> Self {
    self.name = name.into();
    self
  }
}

impl<I, O, F> Component for MapComponent<I, O, F>
where
  I: 'static,
  O: 'static,
  F: FnMut(&I) -> O,
{
  type Inputs = (I,);
  type Output = O;

  fn name(&self) -> &str {
    &self.name
  }

  fn poll_next(&mut self) -> Poll {
    let Some(input) = self.input.value() else {
      return Poll::Empty;
    };
    let mapped = (self.map)(&input);
    drop(input);
    self.current = Some(mapped);
    Poll::Ready
  }

  fn value(&self) -> Option<&O> {
    self.current.as_ref()
  }

  fn connect(&mut self, source: Option<&SharedNode>, slot: usize) {
    if slot == 0 {
      self.input.bind(source);
    }
  }
}
