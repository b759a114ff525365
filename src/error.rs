//! Errors that may occur while editing a pipeline.

use thiserror::Error;

/// A wiring error reported by the graph editing operations.
///
/// All variants are user errors: the pipeline state is left unchanged when
/// any of them is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
  /// An expired or unknown node ID was provided.
  #[error("invalid node ID")]
  InvalidNodeId,
  /// Attempted to bind a non-existent slot.
  #[error("no such slot")]
  NoSuchSlot,
  /// Attempted to bind a slot that is already filled.
  #[error("slot already used")]
  SlotAlreadyUsed,
  /// The output type and the input type of a connection don't match.
  #[error("connection type mismatch")]
  ConnectionTypeMismatch,
}
