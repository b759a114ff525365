//! # Tick Scheduler
//!
//! Pull-based execution of a pipeline, one tick at a time. Each call to
//! [`Pipeline::step`] sweeps the sinks in ascending id order and evaluates
//! `demand` for each: a node first demands all of its upstreams, inherits
//! [`Poll::Closed`] (with priority) or [`Poll::Empty`] from them without
//! being polled, and is otherwise polled exactly once. Results are
//! memoized per tick, so diamond dependencies resolve to a single poll per
//! node regardless of how many sinks demand them.
//!
//! Closure is monotone only within a tick: a node suppressed by a closed
//! upstream is not itself marked closed across ticks. Replacing the closed
//! source (erase, create, reconnect) brings the whole branch back to life
//! on the next tick.
//!
//! `step` never mutates graph structure and never fails; user `poll_next`
//! implementations may panic, in which case the partial tick is forfeit
//! but the pipeline remains structurally sound.

use std::collections::HashMap;

use tracing::trace;

use crate::graph::pipeline::{NodeId, Pipeline};
use crate::poll::Poll;

impl Pipeline {
  /// Executes exactly one tick.
  ///
  /// Returns `true` exactly when every sink observed [`Poll::Closed`]
  /// during this tick, which is the termination signal for
  /// [`Pipeline::run`].
  pub fn step(&mut self) -> bool {
    let mut memo: HashMap<NodeId, Poll> = HashMap::new();
    let sink_ids: Vec<NodeId> = self
      .nodes
      .iter()
      .filter(|(_, entry)| entry.node.borrow().output_type().is_void())
      .map(|(&id, _)| id)
      .collect();

    let mut all_closed = true;
    for id in sink_ids {
      if self.demand(id, &mut memo) != Poll::Closed {
        all_closed = false;
      }
    }
    all_closed
  }

  /// Steps the pipeline until every sink reports [`Poll::Closed`].
  ///
  /// The pipeline must be valid on entry; running an invalid graph has no
  /// meaningful result (a debug assertion guards against it).
  pub fn run(&mut self) {
    debug_assert!(self.is_valid(), "run() requires a valid pipeline");
    while !self.step() {}
  }

  /// Resolves the tick result of one node, memoized for the current tick.
  ///
  /// All upstreams are demanded first (slot order is immaterial); their
  /// results combine with `Closed` taking priority over `Empty`. Only when
  /// every upstream is `Ready` is the node itself polled, and then exactly
  /// once.
  fn demand(&self, id: NodeId, memo: &mut HashMap<NodeId, Poll>) -> Poll {
    if let Some(&resolved) = memo.get(&id) {
      return resolved;
    }
    // Connections always reference live nodes (mirror invariant).
    let entry = &self.nodes[&id];

    let mut inherited = Poll::Ready;
    for &upstream in entry.connections.values() {
      match self.demand(upstream, memo) {
        Poll::Closed => inherited = Poll::Closed,
        Poll::Empty => {
          if inherited == Poll::Ready {
            inherited = Poll::Empty;
          }
        }
        Poll::Ready => {}
      }
    }
    if inherited != Poll::Ready {
      memo.insert(id, inherited);
      return inherited;
    }

    let polled = entry.node.borrow_mut().poll_next();
    trace!(id, poll = ?polled, "poll");
    memo.insert(id, polled);
    polled
  }
}
