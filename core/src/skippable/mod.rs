//! Skippable frame codec.
//!
//! Responsibilities:
//! - Size the output of a frame write without integer overflow
//! - Prepend a skippable frame (header + metadata) to an arbitrary payload
//! - Detect and decode a leading skippable frame
//!
//! Non-responsibilities:
//! - Compression
//! - Streaming
//! - Header byte layout (owned by the codec backend)

pub mod types;
pub mod sizing;
pub mod encode;
pub mod decode;

pub use types::{FrameError, FrameOptions, SkippableFrame};
pub use sizing::{checked_frame_size, frame_buffer_size};
pub use encode::{write_skippable_frame, write_skippable_frame_with};
pub use decode::{
    is_skippable_frame,
    read_skippable_frame,
    read_skippable_frame_with,
    read_skippable_frame_with_variant,
    split_skippable_frame,
    split_skippable_frame_with,
};
