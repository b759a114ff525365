//! Structural validation of a pipeline.
//!
//! [`Pipeline::is_valid`] checks the invariants a graph must satisfy before
//! a run makes sense: every slot filled, every producer consumed, at least
//! one source and one sink, no cycles, and a single weakly-connected
//! component. It never panics and never errors; any violation simply
//! yields `false`.

use std::collections::{HashMap, HashSet};

use crate::graph::pipeline::{NodeId, Pipeline};

/// Traversal state for the cycle check.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
  /// On the current DFS stack; re-entering means a cycle.
  OnStack,
  /// Fully explored; no cycle reachable from here.
  Done,
}

impl Pipeline {
  /// Returns `true` exactly when the graph is structurally runnable:
  ///
  /// 1. every node's filled-slot count equals its arity,
  /// 2. every node with a non-void output feeds at least one slot,
  /// 3. at least one sink exists,
  /// 4. at least one source exists,
  /// 5. the graph is acyclic along the slot connections,
  /// 6. the graph forms a single weakly-connected component.
  pub fn is_valid(&self) -> bool {
    let mut has_sink = false;
    let mut has_source = false;
    for entry in self.nodes.values() {
      let node = entry.node.borrow();
      if entry.connections.len() != node.input_types().len() {
        return false;
      }
      let is_sink = node.output_type().is_void();
      if !is_sink && entry.dependencies.is_empty() {
        return false;
      }
      has_sink |= is_sink;
      has_source |= node.input_types().is_empty();
    }
    if !has_sink || !has_source {
      return false;
    }

    // Cycle check: three-colour DFS from every sink, walking sink-to-source
    // along the slot connections.
    let mut marks: HashMap<NodeId, Mark> = HashMap::new();
    let sink_ids: Vec<NodeId> = self
      .nodes
      .iter()
      .filter(|(_, entry)| entry.node.borrow().output_type().is_void())
      .map(|(&id, _)| id)
      .collect();
    for id in sink_ids {
      if self.has_cycle(id, &mut marks) {
        return false;
      }
    }

    // Connectivity: treat the graph as undirected and sweep once from an
    // arbitrary node; a second component leaves nodes unseen.
    let mut seen: HashSet<NodeId> = HashSet::new();
    if let Some(&start) = self.nodes.keys().next() {
      self.undirected_sweep(start, &mut seen);
    }
    seen.len() == self.nodes.len()
  }

  fn has_cycle(&self, id: NodeId, marks: &mut HashMap<NodeId, Mark>) -> bool {
    match marks.get(&id) {
      Some(Mark::OnStack) => return true,
      Some(Mark::Done) => return false,
      None => {}
    }
    marks.insert(id, Mark::OnStack);
    if let Some(entry) = self.nodes.get(&id) {
      for &upstream in entry.connections.values() {
        if self.has_cycle(upstream, marks) {
          return true;
        }
      }
    }
    marks.insert(id, Mark::Done);
    false
  }

  fn undirected_sweep(&self, id: NodeId, seen: &mut HashSet<NodeId>) {
    if !seen.insert(id) {
      return;
    }
    if let Some(entry) = self.nodes.get(&id) {
      for &upstream in entry.connections.values() {
        self.undirected_sweep(upstream, seen);
      }
      for &(downstream, _slot) in &entry.dependencies {
        self.undirected_sweep(downstream, seen);
      }
    }
  }
}
