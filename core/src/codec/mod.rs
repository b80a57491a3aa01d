//! codec/mod.rs
//! Seam between this crate and the external codec engine.
//!
//! Notes:
//! - Everything that touches libzstd goes through `CodecBackend`.
//! - `ZstdBackend` is the production implementation; tests inject doubles
//!   to observe native allocation and release.

pub mod types;
pub mod zstd;

pub use types::*;
pub use self::zstd::ZstdBackend;
