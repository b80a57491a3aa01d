//! telemetry/mod.rs
//! Handle lifecycle telemetry: atomic counters and immutable snapshots.
//!
//! Notes:
//! - A process-wide `LifecycleCounters` is updated by every handle.
//! - Snapshots are plain data and serialize with serde.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
