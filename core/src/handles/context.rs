//! src/handles/context.rs
//!
//! Compression and decompression context handles.
//!
//! Design notes:
//! - Each handle owns exactly one native context; there is no `Clone`.
//! - `native_mut()` lends the context to streaming code, which borrows it
//!   for one operation and never takes ownership.
//! - The native context is freed by its own `Drop` after the handle's
//!   `Drop` has recorded the release.

use std::fmt;

use crate::codec::{CodecBackend, ZstdBackend};
use crate::handles::types::{HandleError, HandleKind};
use crate::handles::{acquire, release};

/// Owns one native compression context.
pub struct CompressionContext<B: CodecBackend = ZstdBackend> {
    native: B::CCtx,
}

impl CompressionContext<ZstdBackend> {
    /// Allocate a libzstd compression context.
    ///
    /// # Errors
    /// - `HandleError::ResourceExhausted` if libzstd cannot allocate it.
    pub fn new() -> Result<Self, HandleError> {
        Self::with_backend(&ZstdBackend)
    }
}

impl<B: CodecBackend> CompressionContext<B> {
    pub fn with_backend(backend: &B) -> Result<Self, HandleError> {
        let native = acquire(HandleKind::CompressionContext, backend.name(), backend.create_cctx())?;
        Ok(Self { native })
    }

    pub fn native(&self) -> &B::CCtx {
        &self.native
    }

    pub fn native_mut(&mut self) -> &mut B::CCtx {
        &mut self.native
    }

    /// Release the native context now instead of at end of scope.
    pub fn close(self) {
        drop(self);
    }
}

impl<B: CodecBackend> Drop for CompressionContext<B> {
    fn drop(&mut self) {
        release(HandleKind::CompressionContext);
    }
}

impl<B: CodecBackend> fmt::Debug for CompressionContext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompressionContext").finish_non_exhaustive()
    }
}

/// Owns one native decompression context.
pub struct DecompressionContext<B: CodecBackend = ZstdBackend> {
    native: B::DCtx,
}

impl DecompressionContext<ZstdBackend> {
    /// Allocate a libzstd decompression context.
    ///
    /// # Errors
    /// - `HandleError::ResourceExhausted` if libzstd cannot allocate it.
    pub fn new() -> Result<Self, HandleError> {
        Self::with_backend(&ZstdBackend)
    }
}

impl<B: CodecBackend> DecompressionContext<B> {
    pub fn with_backend(backend: &B) -> Result<Self, HandleError> {
        let native = acquire(HandleKind::DecompressionContext, backend.name(), backend.create_dctx())?;
        Ok(Self { native })
    }

    pub fn native(&self) -> &B::DCtx {
        &self.native
    }

    pub fn native_mut(&mut self) -> &mut B::DCtx {
        &mut self.native
    }

    pub fn close(self) {
        drop(self);
    }
}

impl<B: CodecBackend> Drop for DecompressionContext<B> {
    fn drop(&mut self) {
        release(HandleKind::DecompressionContext);
    }
}

impl<B: CodecBackend> fmt::Debug for DecompressionContext<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecompressionContext").finish_non_exhaustive()
    }
}
