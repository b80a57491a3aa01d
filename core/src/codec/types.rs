//! codec/types.rs
//! Backend trait and codec diagnostics.

use std::fmt;

/// Raw `size_t` return value of a codec call.
pub type CodecErrorCode = usize;

/// A failure reported by the codec, with its diagnostic name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecFailure {
    /// Stable error enum value (`ZSTD_ErrorCode`), not the raw return.
    pub code: u32,
    pub name: &'static str,
}

impl CodecFailure {
    pub fn new(code: u32, name: &'static str) -> Self {
        Self { code, name }
    }
}

impl fmt::Display for CodecFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.name, self.code)
    }
}

impl std::error::Error for CodecFailure {}

/// Operations this crate needs from the external codec engine.
///
/// Native objects are owned values. Their destructor is their `Drop` impl,
/// so a handle that owns one releases it exactly once, whether the handle
/// goes out of scope or is closed explicitly. A `None` from a constructor
/// means nothing was allocated and nothing will be released.
pub trait CodecBackend {
    /// Native compression state (`ZSTD_CCtx`).
    type CCtx;
    /// Native decompression state (`ZSTD_DCtx`).
    type DCtx;
    /// Native digested decompression dictionary (`ZSTD_DDict`).
    type DDict;

    /// Short backend name, used in logs.
    fn name(&self) -> &'static str;

    fn create_cctx(&self) -> Option<Self::CCtx>;

    fn create_dctx(&self) -> Option<Self::DCtx>;

    /// Build a dictionary from raw bytes. The backend copies what it needs;
    /// `dict` is not borrowed past the call.
    fn create_ddict(&self, dict: &[u8]) -> Option<Self::DDict>;

    /// Write a skippable frame header followed by `metadata` into the front
    /// of `dst`. Returns the number of bytes written.
    fn write_skippable_frame(
        &self,
        dst: &mut [u8],
        metadata: &[u8],
        magic_variant: u32,
    ) -> Result<usize, CodecFailure>;

    /// Whether `src` starts with a skippable frame magic number.
    fn is_skippable_frame(&self, src: &[u8]) -> bool;

    /// Decode the skippable frame at the front of `src`, copying its content
    /// into `dst`. Returns `(content_len, magic_variant)`.
    fn read_skippable_frame(
        &self,
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<(usize, u32), CodecFailure>;

    /// Human-readable name for a codec error code.
    fn error_name(&self, code: CodecErrorCode) -> &'static str;
}
