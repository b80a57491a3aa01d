//! Digested decompression dictionaries.
//!
//! A `Dictionary` is built once from raw bytes and is read-only afterwards.
//! With the zstd backend it is `Send + Sync`, so one dictionary can back
//! many decompression contexts on different threads through an `Arc`.

use std::fmt;

use crate::codec::{CodecBackend, ZstdBackend};
use crate::handles::types::{HandleError, HandleKind};
use crate::handles::{acquire, release};

/// Owns one native digested dictionary.
pub struct Dictionary<B: CodecBackend = ZstdBackend> {
    native: B::DDict,
    source_len: usize,
}

impl Dictionary<ZstdBackend> {
    /// Build a libzstd decompression dictionary from `dictionary_bytes`.
    ///
    /// The bytes are copied; the caller's buffer can be dropped afterwards.
    ///
    /// # Errors
    /// - `HandleError::ResourceExhausted` if libzstd cannot build it.
    pub fn new(dictionary_bytes: &[u8]) -> Result<Self, HandleError> {
        Self::with_backend(&ZstdBackend, dictionary_bytes)
    }
}

impl<B: CodecBackend> Dictionary<B> {
    pub fn with_backend(backend: &B, dictionary_bytes: &[u8]) -> Result<Self, HandleError> {
        let native = acquire(
            HandleKind::Dictionary,
            backend.name(),
            backend.create_ddict(dictionary_bytes),
        )?;
        Ok(Self {
            native,
            source_len: dictionary_bytes.len(),
        })
    }

    pub fn native(&self) -> &B::DDict {
        &self.native
    }

    /// Length of the raw bytes the dictionary was built from.
    pub fn source_len(&self) -> usize {
        self.source_len
    }

    pub fn close(self) {
        drop(self);
    }
}

impl<B: CodecBackend> Drop for Dictionary<B> {
    fn drop(&mut self) {
        release(HandleKind::Dictionary);
    }
}

impl<B: CodecBackend> fmt::Debug for Dictionary<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dictionary")
            .field("source_len", &self.source_len)
            .finish_non_exhaustive()
    }
}
