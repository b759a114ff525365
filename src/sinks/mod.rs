//! Built-in sinks.

pub mod buffer;
pub mod fmt;

pub use buffer::BufferSink;
pub use fmt::FmtSink;
