//! Tracing initialization, span names, and structured events.

pub mod events;
pub mod setup;
pub mod spans;

pub use setup::init_tracing;
