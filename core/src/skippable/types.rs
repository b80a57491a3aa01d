use thiserror::Error;

use crate::codec::CodecFailure;
use crate::constants::{DEFAULT_MAGIC_VARIANT, SKIPPABLE_HEADER_SIZE};

/// Options for writing a skippable frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameOptions {
    /// Selects one of the 16 reserved skippable magic numbers.
    /// Range checking is done by the codec.
    pub magic_variant: u32,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self { magic_variant: DEFAULT_MAGIC_VARIANT }
    }
}

impl FrameOptions {
    pub fn with_magic_variant(mut self, magic_variant: u32) -> Self {
        self.magic_variant = magic_variant;
        self
    }
}

impl From<Option<u32>> for FrameOptions {
    fn from(magic_variant: Option<u32>) -> Self {
        Self {
            magic_variant: magic_variant.unwrap_or(DEFAULT_MAGIC_VARIANT),
        }
    }
}

/// A decoded skippable frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippableFrame {
    pub magic_variant: u32,
    pub metadata: Vec<u8>,
}

impl SkippableFrame {
    /// Bytes the frame occupies on the wire (header + metadata).
    pub fn frame_len(&self) -> usize {
        SKIPPABLE_HEADER_SIZE + self.metadata.len()
    }

    pub fn into_metadata(self) -> Vec<u8> {
        self.metadata
    }
}

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("frame size overflow: payload {payload} + metadata {metadata} + header {header} bytes exceeds usize::MAX")]
    Overflow {
        payload: usize,
        metadata: usize,
        header: usize,
    },

    #[error("write skippable frame failed: {0}")]
    Encode(CodecFailure),

    #[error("read skippable frame failed: {0}")]
    Decode(CodecFailure),

    #[error("codec reported frame size {frame_size}, which leaves no room for {payload} payload bytes in a {capacity} byte buffer")]
    FrameSizeMismatch {
        frame_size: usize,
        payload: usize,
        capacity: usize,
    },

    #[error("skippable frame declares {declared} bytes but only {available} are available")]
    Malformed {
        declared: usize,
        available: usize,
    },
}
