//! constants.rs
//! Protocol constants for zstd skippable frames.
//!
//! Layout of one skippable frame (all integers little-endian):
//!
//! ```text
//! [ magic (4) ]          SKIPPABLE_MAGIC_START + magic_variant
//! [ content size (4) ]   number of metadata bytes that follow
//! [ metadata (N) ]
//! ```
//!
//! The header is produced and parsed by libzstd; these values are kept here
//! for sizing and for callers that want to inspect raw buffers.

/// Fixed skippable frame header size: magic + content size.
pub const SKIPPABLE_HEADER_SIZE: usize = 8;

/// First magic number of the reserved skippable range.
pub const SKIPPABLE_MAGIC_START: u32 = 0x184D_2A50;

/// Mask that clears the variant nibble of a skippable magic number.
pub const SKIPPABLE_MAGIC_MASK: u32 = 0xFFFF_FFF0;

/// Highest magic variant accepted by the codec.
pub const MAX_MAGIC_VARIANT: u32 = 15;

/// Variant used when the caller does not pick one.
pub const DEFAULT_MAGIC_VARIANT: u32 = 0;

/// Scratch capacity used when reading metadata back out of a frame.
///
/// Fixed, independent of the input length. Metadata larger than this
/// cannot be read back through `read_skippable_frame`.
pub const SKIPPABLE_READ_CAPACITY: usize = 129 * 1024;
