//! # Input Slots
//!
//! Two pieces live here. [`SlotList`] is the type-level tuple describing a
//! node's input slots; implementations exist for tuples up to arity eight,
//! so a non-tuple descriptor is unrepresentable. [`InputSlot`] is the typed
//! binding a node embeds per slot: it holds the upstream handle installed
//! by `connect` and performs the borrow-and-downcast when the node reads
//! its input during a tick.

use std::cell::Ref;
use std::marker::PhantomData;

use crate::node::SharedNode;
use crate::token::TypeToken;

/// A fixed-arity, ordered list of input slot types.
///
/// Implemented for the unit tuple (sources) and for tuples of `'static`
/// types up to arity eight.
pub trait SlotList {
  /// The number of slots described.
  const ARITY: usize;

  /// Returns one type token per slot, in slot order.
  fn type_tokens() -> Vec<TypeToken>;
}

impl SlotList for () {
  const ARITY: usize = 0;

  fn type_tokens() -> Vec<TypeToken> {
    Vec::new()
  }
}

impl<S0: 'static> SlotList for (S0,) {
  const ARITY: usize = 1;

  fn type_tokens() -> Vec<TypeToken> {
    vec![TypeToken::of::<S0>()]
  }
}

impl<S0: 'static, S1: 'static> SlotList for (S0, S1) {
  const ARITY: usize = 2;

  fn type_tokens() -> Vec<TypeToken> {
    vec![TypeToken::of::<S0>(), TypeToken::of::<S1>()]
  }
}

impl<S0: 'static, S1: 'static, S2: 'static> SlotList for (S0, S1, S2) {
  const ARITY: usize = 3;

  fn type_tokens() -> Vec<TypeToken> {
    vec![TypeToken::of::<S0>(), TypeToken::of::<S1>(), TypeToken::of::<S2>()]
  }
}

impl<S0: 'static, S1: 'static, S2: 'static, S3: 'static> SlotList for (S0, S1, S2, S3) {
  const ARITY: usize = 4;

  fn type_tokens() -> Vec<TypeToken> {
    vec![
      TypeToken::of::<S0>(),
      TypeToken::of::<S1>(),
      TypeToken::of::<S2>(),
      TypeToken::of::<S3>(),
    ]
  }
}

impl<S0: 'static, S1: 'static, S2: 'static, S3: 'static, S4: 'static> SlotList
  for (S0, S1, S2, S3, S4)
{
  const ARITY: usize = 5;

  fn type_tokens() -> Vec<TypeToken> {
    vec![
      TypeToken::of::<S0>(),
      TypeToken::of::<S1>(),
      TypeToken::of::<S2>(),
      TypeToken::of::<S3>(),
      TypeToken::of::<S4>(),
    ]
  }
}

impl<S0: 'static, S1: 'static, S2: 'static, S3: 'static, S4: 'static, S5: 'static> SlotList
  for (S0, S1, S2, S3, S4, S5)
{
  const ARITY: usize = 6;

  fn type_tokens() -> Vec<TypeToken> {
    vec![
      TypeToken::of::<S0>(),
      TypeToken::of::<S1>(),
      TypeToken::of::<S2>(),
      TypeToken::of::<S3>(),
      TypeToken::of::<S4>(),
      TypeToken::of::<S5>(),
    ]
  }
}

impl<S0: 'static, S1: 'static, S2: 'static, S3: 'static, S4: 'static, S5: 'static, S6: 'static>
  SlotList for (S0, S1, S2, S3, S4, S5, S6)
{
  const ARITY: usize = 7;

  fn type_tokens() -> Vec<TypeToken> {
    vec![
      TypeToken::of::<S0>(),
      TypeToken::of::<S1>(),
      TypeToken::of::<S2>(),
      TypeToken::of::<S3>(),
      TypeToken::of::<S4>(),
      TypeToken::of::<S5>(),
      TypeToken::of::<S6>(),
    ]
  }
}

impl<
    S0: 'static,
    S1: 'static,
    S2: 'static,
    S3: 'static,
    S4: 'static,
    S5: 'static,
    S6: 'static,
    S7: 'static,
  > SlotList for (S0, S1, S2, S3, S4, S5, S6, S7)
{
  const ARITY: usize = 8;

  fn type_tokens() -> Vec<TypeToken> {
    vec![
      TypeToken::of::<S0>(),
      TypeToken::of::<S1>(),
      TypeToken::of::<S2>(),
      TypeToken::of::<S3>(),
      TypeToken::of::<S4>(),
      TypeToken::of::<S5>(),
      TypeToken::of::<S6>(),
      TypeToken::of::<S7>(),
    ]
  }
}

/// A typed binding to one upstream node.
///
/// Nodes store one `InputSlot<T>` per input slot and point their `connect`
/// implementation at [`InputSlot::bind`]. Reading goes through
/// [`InputSlot::value`], which borrows the upstream cell and downcasts its
/// current output to `T`. The pipeline checks type tokens at connect time,
/// so the downcast cannot fail on a slot it wired.
pub struct InputSlot<T> {
  source: Option<SharedNode>,
  _slot_type: PhantomData<fn() -> T>,
}

impl<T: 'static> InputSlot<T> {
  /// Creates an unbound slot.
  pub fn new() -> Self {
    Self {
      source: None,
      _slot_type: PhantomData,
    }
  }

  /// Installs (or clears, with `None`) the upstream handle.
  pub fn bind(&mut self, source: Option<&SharedNode>) {
    self.source = source.cloned();
  }

  /// Returns `true` if an upstream is currently bound.
  pub fn is_bound(&self) -> bool {
    self.source.is_some()
  }

  /// Borrows the upstream node's current output value.
  ///
  /// Returns `None` when the slot is unbound or the upstream has not yet
  /// produced a value. The borrow must be released before the upstream is
  /// polled again, which the tick discipline guarantees.
  pub fn value(&self) -> Option<Ref<'_, T>> {
    let cell = self.source.as_ref()?;
    Ref::filter_map(cell.borrow(), |node| {
      node.value_any().and_then(|value| value.downcast_ref::<T>())
    })
    .ok()
  }
}

impl<T: 'static> Default for InputSlot<T> {
  fn default() -> Self {
    Self::new()
  }
}
