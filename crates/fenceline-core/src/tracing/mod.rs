//! Tracing setup for Fenceline.

pub mod setup;

pub use setup::init_tracing;
