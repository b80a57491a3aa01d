//! Shared test doubles.
//!
//! `CountingBackend` forwards to `ZstdBackend` but wraps every native object
//! so creates and drops can be counted, and can be told to refuse
//! allocations the way an exhausted codec would.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use zframe_core::codec::{CodecBackend, CodecErrorCode, CodecFailure, ZstdBackend};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[derive(Debug, Default)]
pub struct Ledger {
    pub creates: AtomicUsize,
    pub destroys: AtomicUsize,
}

impl Ledger {
    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn destroys(&self) -> usize {
        self.destroys.load(Ordering::SeqCst)
    }
}

/// A native object whose drop is recorded in the ledger.
pub struct Tracked<T> {
    ledger: Arc<Ledger>,
    pub inner: T,
}

impl<T> Tracked<T> {
    fn new(ledger: &Arc<Ledger>, inner: T) -> Self {
        ledger.creates.fetch_add(1, Ordering::SeqCst);
        Self { ledger: Arc::clone(ledger), inner }
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.ledger.destroys.fetch_add(1, Ordering::SeqCst);
    }
}

#[derive(Clone, Default)]
pub struct CountingBackend {
    pub ledger: Arc<Ledger>,
    /// Every constructor returns `None`.
    pub refuse_alloc: bool,
    /// Dictionary construction from an empty buffer returns `None`.
    pub reject_empty_dict: bool,
}

impl CountingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing() -> Self {
        Self { refuse_alloc: true, ..Self::default() }
    }

    pub fn rejecting_empty_dict() -> Self {
        Self { reject_empty_dict: true, ..Self::default() }
    }
}

impl CodecBackend for CountingBackend {
    type CCtx = Tracked<<ZstdBackend as CodecBackend>::CCtx>;
    type DCtx = Tracked<<ZstdBackend as CodecBackend>::DCtx>;
    type DDict = Tracked<<ZstdBackend as CodecBackend>::DDict>;

    fn name(&self) -> &'static str {
        "counting"
    }

    fn create_cctx(&self) -> Option<Self::CCtx> {
        if self.refuse_alloc {
            return None;
        }
        ZstdBackend.create_cctx().map(|c| Tracked::new(&self.ledger, c))
    }

    fn create_dctx(&self) -> Option<Self::DCtx> {
        if self.refuse_alloc {
            return None;
        }
        ZstdBackend.create_dctx().map(|d| Tracked::new(&self.ledger, d))
    }

    fn create_ddict(&self, dict: &[u8]) -> Option<Self::DDict> {
        if self.refuse_alloc || (self.reject_empty_dict && dict.is_empty()) {
            return None;
        }
        ZstdBackend.create_ddict(dict).map(|d| Tracked::new(&self.ledger, d))
    }

    fn write_skippable_frame(
        &self,
        dst: &mut [u8],
        metadata: &[u8],
        magic_variant: u32,
    ) -> Result<usize, CodecFailure> {
        ZstdBackend.write_skippable_frame(dst, metadata, magic_variant)
    }

    fn is_skippable_frame(&self, src: &[u8]) -> bool {
        ZstdBackend.is_skippable_frame(src)
    }

    fn read_skippable_frame(&self, dst: &mut [u8], src: &[u8]) -> Result<(usize, u32), CodecFailure> {
        ZstdBackend.read_skippable_frame(dst, src)
    }

    fn error_name(&self, code: CodecErrorCode) -> &'static str {
        ZstdBackend.error_name(code)
    }
}

/// Backend whose frame writer claims to have written more than it was
/// given room for.
pub struct OverreportingBackend;

impl CodecBackend for OverreportingBackend {
    type CCtx = ();
    type DCtx = ();
    type DDict = ();

    fn name(&self) -> &'static str {
        "overreporting"
    }

    fn create_cctx(&self) -> Option<()> {
        Some(())
    }

    fn create_dctx(&self) -> Option<()> {
        Some(())
    }

    fn create_ddict(&self, _dict: &[u8]) -> Option<()> {
        Some(())
    }

    fn write_skippable_frame(&self, dst: &mut [u8], _metadata: &[u8], _magic_variant: u32) -> Result<usize, CodecFailure> {
        Ok(dst.len() + 1)
    }

    fn is_skippable_frame(&self, _src: &[u8]) -> bool {
        true
    }

    fn read_skippable_frame(&self, dst: &mut [u8], _src: &[u8]) -> Result<(usize, u32), CodecFailure> {
        Ok((dst.len() + 1, 0))
    }

    fn error_name(&self, _code: CodecErrorCode) -> &'static str {
        "never"
    }
}
