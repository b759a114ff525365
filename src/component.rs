//! Component role: interior nodes with input slots and an output.

use std::any::Any;

use crate::error::PipelineError;
use crate::node::{ConcreteNode, Node, SharedNode};
use crate::poll::Poll;
use crate::slot::SlotList;
use crate::token::TypeToken;

/// Trait for nodes that transform upstream values into an output.
///
/// A component declares its input slots as the type-level tuple `Inputs`
/// and stores one [`InputSlot`](crate::InputSlot) per entry; its `connect`
/// implementation routes the handle to the matching slot. The scheduler
/// polls a component only in ticks where every upstream reported
/// [`Poll::Ready`].
pub trait Component {
  /// The ordered tuple of input slot types.
  type Inputs: SlotList;
  /// The type of the produced values.
  type Output: 'static;

  /// Returns the display name of this component.
  fn name(&self) -> &str;

  /// Advances the component by one tick.
  fn poll_next(&mut self) -> Poll;

  /// Returns the current output value, or `None` before the first
  /// [`Poll::Ready`].
  fn value(&self) -> Option<&Self::Output>;

  /// Binds `source` to input slot `slot`; `None` clears the slot.
  ///
  /// Called with slot indices below `Inputs::ARITY` only.
  fn connect(&mut self, source: Option<&SharedNode>, slot: usize);
}

/// Wrapper registering a [`Component`] implementation as a graph [`Node`].
pub struct ComponentNode<C: Component> {
  inner: C,
}

impl<C: Component> ComponentNode<C> {
  /// Wraps a component for registration via
  /// [`Pipeline::create_node`](crate::Pipeline::create_node).
  pub fn new(inner: C) -> Self {
    Self { inner }
  }

  /// Returns the wrapped component.
  pub fn inner(&self) -> &C {
    &self.inner
  }
}

impl<C: Component + 'static> Node for ComponentNode<C> {
  fn name(&self) -> &str {
    self.inner.name()
  }

  fn input_types(&self) -> Vec<TypeToken> {
    C::Inputs::type_tokens()
  }

  fn output_type(&self) -> TypeToken {
    TypeToken::of::<C::Output>()
  }

  fn poll_next(&mut self) -> Poll {
    self.inner.poll_next()
  }

  fn value_any(&self) -> Option<&dyn Any> {
    self.inner.value().map(|value| value as &dyn Any)
  }

  fn connect(&mut self, source: Option<&SharedNode>, slot: usize) -> Result<(), PipelineError> {
    if slot >= C::Inputs::ARITY {
      return Err(PipelineError::NoSuchSlot);
    }
    self.inner.connect(source, slot);
    Ok(())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }
}

impl<C: Component + 'static> ConcreteNode for ComponentNode<C> {
  type Inputs = C::Inputs;
  type Output = C::Output;
}
