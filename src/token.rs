//! Type tokens for slot-level wiring checks.
//!
//! Every node describes its inputs and output as [`TypeToken`]s. Two tokens
//! compare equal exactly when they denote the same Rust type, which is all
//! the connection check needs. The distinguished [`Void`] type marks "no
//! value": a node whose output token is void is a sink.

use std::any::TypeId;

/// A type that carries no values. Used as the output of sink nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Void {}

/// An opaque, comparable handle identifying a value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeToken(TypeId);

impl TypeToken {
  /// Returns the token for the type `T`.
  pub fn of<T: 'static>() -> Self {
    Self(TypeId::of::<T>())
  }

  /// Returns the token marking "no value".
  pub fn void() -> Self {
    Self::of::<Void>()
  }

  /// Returns `true` if this token is the void token.
  pub fn is_void(self) -> bool {
    self == Self::void()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn tokens_compare_by_type() {
    assert_eq!(TypeToken::of::<i32>(), TypeToken::of::<i32>());
    assert_ne!(TypeToken::of::<i32>(), TypeToken::of::<f64>());
    assert_ne!(TypeToken::of::<String>(), TypeToken::void());
  }

  #[test]
  fn void_token_is_void() {
    assert!(TypeToken::void().is_void());
    assert!(TypeToken::of::<Void>().is_void());
    assert!(!TypeToken::of::<()>().is_void());
  }
}
