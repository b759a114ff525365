//! Sink role: terminal nodes that consume values.

use std::any::Any;

use crate::error::PipelineError;
use crate::node::{ConcreteNode, Node, SharedNode};
use crate::poll::Poll;
use crate::token::{TypeToken, Void};

/// Trait for nodes that consume one input stream and produce nothing.
///
/// A sink has exactly one input slot (slot `0`) and the void output token.
/// The scheduler drives every tick from the sinks, so a sink's `poll_next`
/// runs once per tick whenever its upstream chain is ready.
pub trait Sink {
  /// The type of the consumed values.
  type Input: 'static;

  /// Returns the display name of this sink.
  fn name(&self) -> &str;

  /// Advances the sink by one tick.
  fn poll_next(&mut self) -> Poll;

  /// Binds `source` to slot `0`; `None` clears the slot.
  fn connect(&mut self, source: Option<&SharedNode>, slot: usize);
}

/// Wrapper registering a [`Sink`] implementation as a graph [`Node`].
pub struct SinkNode<K: Sink> {
  inner: K,
}

impl<K: Sink> SinkNode<K> {
  /// Wraps a sink for registration via
  /// [`Pipeline::create_node`](crate::Pipeline::create_node).
  pub fn new(inner: K) -> Self {
    Self { inner }
  }

  /// Returns the wrapped sink.
  pub fn inner(&self) -> &K {
    &self.inner
  }
}

impl<K: Sink + 'static> Node for SinkNode<K> {
  fn name(&self) -> &str {
    self.inner.name()
  }

  fn input_types(&self) -> Vec<TypeToken> {
    vec![TypeToken::of::<K::Input>()]
  }

  fn output_type(&self) -> TypeToken {
    TypeToken::void()
  }

  fn poll_next(&mut self) -> Poll {
    self.inner.poll_next()
  }

  fn value_any(&self) -> Option<&dyn Any> {
    None
  }

  fn connect(&mut self, source: Option<&SharedNode>, slot: usize) -> Result<(), PipelineError> {
    if slot != 0 {
      return Err(PipelineError::NoSuchSlot);
    }
    self.inner.connect(source, slot);
    Ok(())
  }

  fn as_any(&self) -> &dyn Any {
    self
  }
}

impl<K: Sink + 'static> ConcreteNode for SinkNode<K> {
  type Inputs = (K::Input,);
  type Output = Void;
}
