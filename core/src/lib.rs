//! zframe-core
//!
//! Skippable-frame codec and native handle lifecycle over libzstd.
//! No Python, no PyO3. The only `unsafe` lives in `codec::zstd`.

#![deny(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

// Codec seam
pub mod codec;

// Frames and handles
pub mod skippable;
pub mod handles;
pub mod telemetry;

pub use types::{ErrorKind, ZframeError};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::codec::{CodecBackend, CodecFailure, ZstdBackend};
    pub use crate::constants::{SKIPPABLE_HEADER_SIZE, SKIPPABLE_READ_CAPACITY};
    pub use crate::handles::{CompressionContext, DecompressionContext, Dictionary, HandleError, HandleKind};
    pub use crate::skippable::{
        is_skippable_frame,
        read_skippable_frame,
        read_skippable_frame_with_variant,
        split_skippable_frame,
        write_skippable_frame,
        FrameError,
        FrameOptions,
        SkippableFrame,
    };
    pub use crate::types::{ErrorKind, ZframeError};
}
