use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The three native resource classes a handle can own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandleKind {
    CompressionContext,
    DecompressionContext,
    Dictionary,
}

impl HandleKind {
    pub const ALL: [HandleKind; 3] = [
        HandleKind::CompressionContext,
        HandleKind::DecompressionContext,
        HandleKind::Dictionary,
    ];

    /// Message used when the native constructor refuses to produce an object.
    pub fn failure_message(self) -> &'static str {
        match self {
            HandleKind::CompressionContext   => "compression context allocation failed",
            HandleKind::DecompressionContext => "decompression context allocation failed",
            HandleKind::Dictionary           => "dictionary build failed",
        }
    }
}

impl fmt::Display for HandleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandleKind::CompressionContext   => "compression context",
            HandleKind::DecompressionContext => "decompression context",
            HandleKind::Dictionary           => "dictionary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HandleError {
    /// The codec could not allocate or build the native object.
    #[error("{}", kind.failure_message())]
    ResourceExhausted { kind: HandleKind },
}

impl HandleError {
    pub fn kind(&self) -> HandleKind {
        match self {
            HandleError::ResourceExhausted { kind } => *kind,
        }
    }
}
