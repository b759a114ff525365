//! # Node Contract
//!
//! This module defines the capability set every graph element must satisfy.
//! [`Node`] is the object-safe, type-erased view the pipeline stores and
//! schedules; the role traits ([`Source`](crate::Source),
//! [`Component`](crate::Component), [`Sink`](crate::Sink)) are what user
//! code implements, and their wrapper nodes bridge the two.
//!
//! The [`ConcreteNode`] bound is the admission predicate for
//! [`Pipeline::create_node`](crate::Pipeline::create_node): a candidate must
//! publish a tuple-shaped input descriptor and an output descriptor on top
//! of the erased capability set. Types that only implement [`Node`] do not
//! qualify.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use crate::error::PipelineError;
use crate::poll::Poll;
use crate::slot::SlotList;
use crate::token::TypeToken;

/// A shared, interior-mutable handle to a type-erased node.
///
/// The pipeline owns one of these per registered node; nodes hold further
/// clones for their bound upstream slots. `Rc`/`RefCell` keep the whole
/// structure single-threaded.
pub type SharedNode = Rc<RefCell<dyn Node>>;

/// The shape of a graph node, derived from its type descriptors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
  /// A node with no inputs that produces values autonomously.
  Source,
  /// An interior node with both inputs and an output.
  Component,
  /// A node with a void output that consumes values.
  Sink,
}

/// Trait for type-erased node access.
///
/// This is the contract the scheduler and registry operate against. It is
/// normally implemented by the wrapper nodes
/// ([`SourceNode`](crate::SourceNode), [`ComponentNode`](crate::ComponentNode),
/// [`SinkNode`](crate::SinkNode)) rather than by hand.
pub trait Node: 'static {
  /// Returns the display name of this node. Not necessarily unique.
  fn name(&self) -> &str;

  /// Returns the per-slot input type tokens. The length of the returned
  /// sequence is the node's arity; slots are indexed `0..arity`.
  fn input_types(&self) -> Vec<TypeToken>;

  /// Returns the output type token. The void token marks a sink.
  fn output_type(&self) -> TypeToken;

  /// Advances this node by one tick.
  ///
  /// Called by the scheduler only after every upstream slot reported
  /// [`Poll::Ready`] in the current tick, and at most once per tick.
  fn poll_next(&mut self) -> Poll;

  /// Returns the current output value as `&dyn Any`.
  ///
  /// `None` for sinks and for producers that have not yet produced a value.
  /// The value is only meaningful when the most recent [`Node::poll_next`]
  /// returned [`Poll::Ready`].
  fn value_any(&self) -> Option<&dyn Any>;

  /// Binds `source` to input slot `slot`; `None` clears the slot.
  ///
  /// # Errors
  ///
  /// [`PipelineError::NoSuchSlot`] if the slot does not exist (always, for
  /// sources).
  fn connect(&mut self, source: Option<&SharedNode>, slot: usize) -> Result<(), PipelineError>;

  /// Returns `self` as `&dyn Any`, for downcasting to the concrete wrapper.
  fn as_any(&self) -> &dyn Any;

  /// Returns the number of input slots.
  fn arity(&self) -> usize {
    self.input_types().len()
  }

  /// Classifies this node by its type descriptors.
  fn kind(&self) -> NodeKind {
    if self.output_type().is_void() {
      NodeKind::Sink
    } else if self.input_types().is_empty() {
      NodeKind::Source
    } else {
      NodeKind::Component
    }
  }
}

/// The requirements a type must satisfy to be registered in a pipeline.
///
/// A concrete node publishes a fixed-arity, ordered input descriptor
/// (`Inputs`, a type-level tuple) and an output descriptor (`Output`), and
/// implements the full [`Node`] capability set. The wrapper nodes implement
/// this for every admissible role implementation; a bare-scalar input
/// descriptor or a hand-rolled [`Node`] without descriptors is rejected at
/// compile time.
pub trait ConcreteNode: Node + Sized {
  /// The ordered tuple of input slot types. May be empty.
  type Inputs: SlotList;
  /// The output value type; [`Void`](crate::Void) for sinks.
  type Output: 'static;
}
