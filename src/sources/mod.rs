//! Built-in sources.

pub mod counter;
pub mod pulse;
pub mod vec;

pub use counter::CounterSource;
pub use pulse::PulseSource;
pub use vec::VecSource;
