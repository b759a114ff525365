//! Built-in components.

pub mod filter;
pub mod join;
pub mod map;

pub use filter::FilterComponent;
pub use join::JoinComponent;
pub use map::MapComponent;
