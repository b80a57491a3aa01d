//! telemetry/counters.rs
//! Lifecycle counters for native handles.
//!
//! Summary: every handle records its successful creation, failed creation
//! and release here. Counters are atomics so handles can be dropped on any
//! thread; `snapshot()` turns them into an immutable `LifecycleSnapshot`.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::handles::types::HandleKind;
use crate::telemetry::snapshot::{KindStats, LifecycleSnapshot};

#[derive(Debug, Default)]
struct KindCounters {
    created: AtomicU64,
    failed: AtomicU64,
    released: AtomicU64,
}

impl KindCounters {
    const fn new() -> Self {
        Self {
            created: AtomicU64::new(0),
            failed: AtomicU64::new(0),
            released: AtomicU64::new(0),
        }
    }

    fn stats(&self) -> KindStats {
        KindStats {
            created: self.created.load(Ordering::Relaxed),
            failed: self.failed.load(Ordering::Relaxed),
            released: self.released.load(Ordering::Relaxed),
        }
    }
}

/// Per-kind creation/release counters.
#[derive(Debug, Default)]
pub struct LifecycleCounters {
    compression: KindCounters,
    decompression: KindCounters,
    dictionary: KindCounters,
}

impl LifecycleCounters {
    pub const fn new() -> Self {
        Self {
            compression: KindCounters::new(),
            decompression: KindCounters::new(),
            dictionary: KindCounters::new(),
        }
    }

    fn slot(&self, kind: HandleKind) -> &KindCounters {
        match kind {
            HandleKind::CompressionContext   => &self.compression,
            HandleKind::DecompressionContext => &self.decompression,
            HandleKind::Dictionary           => &self.dictionary,
        }
    }

    pub fn record_created(&self, kind: HandleKind) {
        self.slot(kind).created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failed(&self, kind: HandleKind) {
        self.slot(kind).failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_released(&self, kind: HandleKind) {
        self.slot(kind).released.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> LifecycleSnapshot {
        LifecycleSnapshot {
            compression_context: self.compression.stats(),
            decompression_context: self.decompression.stats(),
            dictionary: self.dictionary.stats(),
        }
    }
}

static GLOBAL: LifecycleCounters = LifecycleCounters::new();

/// Process-wide counters updated by every handle.
pub fn global() -> &'static LifecycleCounters {
    &GLOBAL
}

/// Snapshot of the process-wide counters.
pub fn snapshot() -> LifecycleSnapshot {
    GLOBAL.snapshot()
}
