#![doc = include_str!("../README.md")]

#[cfg(test)]
mod execution_test;

pub mod component;
pub mod components;
pub mod dot;
pub mod error;
pub mod graph;
pub mod node;
pub mod poll;
pub mod sink;
pub mod sinks;
pub mod slot;
pub mod source;
pub mod sources;
pub mod token;

pub use component::*;
pub use error::*;
pub use graph::*;
pub use node::*;
pub use poll::*;
pub use sink::*;
pub use slot::*;
pub use source::*;
pub use token::*;
