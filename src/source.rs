//! Source role: nodes with no inputs that produce values autonomously.

use std::any::Any;

use crate::error::PipelineError;
use crate::node::{ConcreteNode, Node, SharedNode};
use crate::poll::Poll;
use crate::token::TypeToken;

/// Trait for nodes that produce data without any inputs.
///
/// Sources are the starting point of every pipeline. Each tick the
/// scheduler polls the source directly; on [`Poll::Ready`] the current
/// output must be observable through [`Source::value`] until the next poll.
pub trait Source {
  /// The type of the produced values.
  type Output: 'static;

  /// Returns the display name of this source.
  fn name(&self) -> &str;

  /// Advances the source by one tick.
  fn poll_next(&mut self) -> Poll;

  /// Returns the current output value, or `None` before the first
  /// [`Poll::Ready`].
  fn value(&self) -> Option<&Self::Output>;
}

/// Wrapper registering a [`Source`] implementation as a graph [`Node`].
pub struct SourceNode<S: Source> {
  inner: S,
}

impl<S: Source> SourceNode<S> {
  /// Wraps a source for registration via
  /// [`Pipeline::create_node`](crate::Pipeline::create_node).
  pub fn new(inner: S) -> Self {
    Self { inner }
  }

  /// Returns the wrapped source.
  pub fn inner(&self) -> &S {
    &self.inner
  }
}

impl<S: Source + 'static> Node for SourceNode<S> {
  fn name(&self) -> &str {
    self.inner.name()
  }

  fn input_types(&self) -> Vec<TypeToken> {
    Vec::new()
  }

  fn output_type(&self) -> TypeToken {
    TypeToken::of::<S::Output>()
  }

  fn poll_next(&mut self) -> Poll {
    self.inner.poll_next()
  }

  fn value_any(&self) -> Option<&dyn Any> {
    self.inner.value().map(|value| value as &dyn Any)
  }

  fn connect(&mut self, _source: Option<&SharedNode>, _slot: usize) -> Result<(), PipelineError> {
    // A source has no input slots to bind.
    Err(PipelineError::NoSuchSlot)
  }

  fn as_any(&self) -> &dyn Any {
    self
  }
}

impl<S: Source + 'static> ConcreteNode for SourceNode<S> {
  type Inputs = ();
  type Output = S::Output;
}
