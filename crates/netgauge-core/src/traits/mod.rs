//! Seams between the engine and its external collaborators.

pub mod clock;
pub mod collector;
pub mod verdict_sink;

pub use clock::Clock;
pub use collector::Collector;
pub use verdict_sink::VerdictSink;
