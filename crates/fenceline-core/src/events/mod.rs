//! Event seam for scan progress.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when
//! unused. Keeps the engine free of console and file dependencies.

pub mod handler;

pub use handler::{NoopEvents, ScanEventHandler};
