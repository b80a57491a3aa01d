//! telemetry/snapshot.rs
//!
//! Immutable view of the lifecycle counters.
//!
//! Design notes:
//! - Plain `u64` fields so the snapshot serializes the same way from Rust
//!   and through the Python binding (`to_json`).
//! - Counters are read one at a time with relaxed ordering; a snapshot taken
//!   while other threads create handles is approximate, never torn per field.

use serde::{Deserialize, Serialize};

use crate::handles::types::HandleKind;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindStats {
    pub created: u64,
    pub failed: u64,
    pub released: u64,
}

impl KindStats {
    /// Handles created and not yet released.
    pub fn live(&self) -> u64 {
        self.created.saturating_sub(self.released)
    }

    /// Released count never exceeds created count.
    pub fn is_consistent(&self) -> bool {
        self.released <= self.created
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleSnapshot {
    pub compression_context: KindStats,
    pub decompression_context: KindStats,
    pub dictionary: KindStats,
}

impl LifecycleSnapshot {
    pub fn get(&self, kind: HandleKind) -> KindStats {
        match kind {
            HandleKind::CompressionContext   => self.compression_context,
            HandleKind::DecompressionContext => self.decompression_context,
            HandleKind::Dictionary           => self.dictionary,
        }
    }

    /// Live handles across all kinds.
    pub fn total_live(&self) -> u64 {
        HandleKind::ALL.iter().map(|k| self.get(*k).live()).sum()
    }

    /// Per-kind difference `self - earlier`, for measuring one operation.
    pub fn since(&self, earlier: &LifecycleSnapshot) -> LifecycleSnapshot {
        fn diff(a: KindStats, b: KindStats) -> KindStats {
            KindStats {
                created: a.created.saturating_sub(b.created),
                failed: a.failed.saturating_sub(b.failed),
                released: a.released.saturating_sub(b.released),
            }
        }
        LifecycleSnapshot {
            compression_context: diff(self.compression_context, earlier.compression_context),
            decompression_context: diff(self.decompression_context, earlier.decompression_context),
            dictionary: diff(self.dictionary, earlier.dictionary),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
