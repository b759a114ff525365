//! # Pipeline Registry
//!
//! The [`Pipeline`] owns every node in the graph and provides the editing
//! API: identifier allocation, typed connection and disconnection, and
//! erasure. Per-node bookkeeping (which upstream feeds which slot, and
//! which downstream slots a node feeds) lives in the registry envelope
//! ([`NodeEntry`]), not in the user payload, and the two directions are
//! kept as exact mirrors of one another.
//!
//! Identifiers are dense integers allocated from `1`, monotonically
//! increasing, and never reused within a pipeline instance. Iteration over
//! the registry is ordered by id, which makes scheduling and rendering
//! deterministic.
//!
//! All preconditions of an editing operation are checked before any
//! mutation, so a failed call leaves the pipeline untouched.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::error::PipelineError;
use crate::node::{ConcreteNode, SharedNode};

/// Identifier of a node within a [`Pipeline`].
pub type NodeId = usize;

/// Registry envelope around one node: the shared handle plus the edge
/// bookkeeping the editing protocol maintains.
pub(crate) struct NodeEntry {
  /// The owned node.
  pub(crate) node: SharedNode,
  /// Filled input slots: slot index to upstream node id. A key is present
  /// exactly when the slot is filled.
  pub(crate) connections: BTreeMap<usize, NodeId>,
  /// Outgoing edges: one `(downstream id, downstream slot)` entry per
  /// connection fed by this node's output. Duplicates are permitted.
  pub(crate) dependencies: Vec<(NodeId, usize)>,
}

impl NodeEntry {
  fn new(node: SharedNode) -> Self {
    Self {
      node,
      connections: BTreeMap::new(),
      dependencies: Vec::new(),
    }
  }
}

/// A dataflow pipeline: an editable registry of nodes plus the scheduler
/// that drives them (see [`Pipeline::step`]).
///
/// Pipelines are move-only. `std::mem::take` transfers all nodes out and
/// leaves an empty but fully usable pipeline behind, with id allocation
/// starting fresh.
pub struct Pipeline {
  pub(crate) nodes: BTreeMap<NodeId, NodeEntry>,
  next_id: NodeId,
}

impl Default for Pipeline {
  fn default() -> Self {
    Self {
      nodes: BTreeMap::new(),
      next_id: 1,
    }
  }
}

impl Pipeline {
  /// Creates an empty pipeline.
  pub fn new() -> Self {
    Self::default()
  }

  /// Registers `node` and returns its freshly allocated id.
  ///
  /// The node must satisfy the [`ConcreteNode`] admission bound, which the
  /// wrapper nodes ([`SourceNode`](crate::SourceNode),
  /// [`ComponentNode`](crate::ComponentNode), [`SinkNode`](crate::SinkNode))
  /// provide. Never fails; ids of erased nodes are not reused.
  pub fn create_node<N: ConcreteNode>(&mut self, node: N) -> NodeId {
    let id = self.next_id;
    self.next_id += 1;
    let node: SharedNode = Rc::new(RefCell::new(node));
    debug!(id, name = %node.borrow().name(), "create node");
    self.nodes.insert(id, NodeEntry::new(node));
    id
  }

  /// Returns a shared handle to the node with the given id, or `None` for
  /// unknown or erased ids.
  ///
  /// The handle is a view into the registry; once the node is erased the
  /// registry forgets it and the pipeline will never poll it again.
  pub fn get_node(&self, id: NodeId) -> Option<SharedNode> {
    self.nodes.get(&id).map(|entry| Rc::clone(&entry.node))
  }

  /// Removes the node with the given id from the pipeline.
  ///
  /// Every slot the node fed downstream is left unfilled (the downstream
  /// nodes themselves are not erased), and every upstream node forgets the
  /// corresponding outgoing edges.
  ///
  /// # Errors
  ///
  /// [`PipelineError::InvalidNodeId`] if `id` is unknown; the pipeline is
  /// unchanged in that case.
  pub fn erase_node(&mut self, id: NodeId) -> Result<(), PipelineError> {
    let entry = self.nodes.remove(&id).ok_or(PipelineError::InvalidNodeId)?;
    for (_slot, upstream) in &entry.connections {
      if let Some(up) = self.nodes.get_mut(upstream) {
        up.dependencies.retain(|&(downstream, _)| downstream != id);
      }
    }
    for &(downstream, slot) in &entry.dependencies {
      if let Some(down) = self.nodes.get_mut(&downstream) {
        down.connections.remove(&slot);
        let _ = down.node.borrow_mut().connect(None, slot);
      }
    }
    debug!(id, "erase node");
    Ok(())
  }

  /// Wires the output of `src` into input slot `slot` of `dst`.
  ///
  /// # Errors
  ///
  /// Checked in this order, with no mutation on failure:
  ///
  /// 1. [`PipelineError::InvalidNodeId`] if either id is unknown.
  /// 2. [`PipelineError::SlotAlreadyUsed`] if the slot is already filled.
  /// 3. [`PipelineError::NoSuchSlot`] if `slot` is out of range for `dst`.
  /// 4. [`PipelineError::ConnectionTypeMismatch`] if `src`'s output token
  ///    differs from the slot's input token.
  pub fn connect(&mut self, src: NodeId, dst: NodeId, slot: usize) -> Result<(), PipelineError> {
    if !self.nodes.contains_key(&src) || !self.nodes.contains_key(&dst) {
      return Err(PipelineError::InvalidNodeId);
    }
    let dst_entry = &self.nodes[&dst];
    if dst_entry.connections.contains_key(&slot) {
      return Err(PipelineError::SlotAlreadyUsed);
    }
    let input_types = dst_entry.node.borrow().input_types();
    if slot >= input_types.len() {
      return Err(PipelineError::NoSuchSlot);
    }
    if input_types[slot] != self.nodes[&src].node.borrow().output_type() {
      return Err(PipelineError::ConnectionTypeMismatch);
    }

    let src_node = Rc::clone(&self.nodes[&src].node);
    self.nodes[&dst].node.borrow_mut().connect(Some(&src_node), slot)?;
    if let Some(entry) = self.nodes.get_mut(&dst) {
      entry.connections.insert(slot, src);
    }
    if let Some(entry) = self.nodes.get_mut(&src) {
      entry.dependencies.push((dst, slot));
    }
    debug!(src, dst, slot, "connect");
    Ok(())
  }

  /// Removes every connection from `src` into `dst`.
  ///
  /// Each affected slot of `dst` is cleared and left unfilled. If the two
  /// nodes are not connected the call is a silent no-op.
  ///
  /// # Errors
  ///
  /// [`PipelineError::InvalidNodeId`] if either id is unknown.
  pub fn disconnect(&mut self, src: NodeId, dst: NodeId) -> Result<(), PipelineError> {
    if !self.nodes.contains_key(&src) || !self.nodes.contains_key(&dst) {
      return Err(PipelineError::InvalidNodeId);
    }
    // Snapshot the affected slots before erasing from the map.
    let slots: Vec<usize> = self.nodes[&dst]
      .connections
      .iter()
      .filter_map(|(&slot, &upstream)| (upstream == src).then_some(slot))
      .collect();
    if let Some(entry) = self.nodes.get_mut(&dst) {
      for &slot in &slots {
        let _ = entry.node.borrow_mut().connect(None, slot);
        entry.connections.remove(&slot);
      }
    }
    if let Some(entry) = self.nodes.get_mut(&src) {
      entry.dependencies.retain(|&(downstream, _)| downstream != dst);
    }
    debug!(src, dst, "disconnect");
    Ok(())
  }

  /// Returns a snapshot of the `(downstream id, slot)` pairs fed by the
  /// output of the node with the given id.
  ///
  /// # Errors
  ///
  /// [`PipelineError::InvalidNodeId`] if `id` is unknown.
  pub fn get_dependencies(&self, id: NodeId) -> Result<Vec<(NodeId, usize)>, PipelineError> {
    self
      .nodes
      .get(&id)
      .map(|entry| entry.dependencies.clone())
      .ok_or(PipelineError::InvalidNodeId)
  }

  /// Returns the number of registered nodes.
  pub fn node_count(&self) -> usize {
    self.nodes.len()
  }

  /// Returns `true` if the pipeline has no nodes.
  pub fn is_empty(&self) -> bool {
    self.nodes.is_empty()
  }

  /// Returns the live node ids in ascending order.
  pub fn node_ids(&self) -> Vec<NodeId> {
    self.nodes.keys().copied().collect()
  }
}
