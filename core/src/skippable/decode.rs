use log::{debug, warn};

use crate::codec::{CodecBackend, ZstdBackend};
use crate::constants::SKIPPABLE_READ_CAPACITY;
use crate::skippable::types::{FrameError, SkippableFrame};

/// Whether `input` starts with a skippable frame magic number.
#[inline]
pub fn is_skippable_frame(input: &[u8]) -> bool {
    ZstdBackend.is_skippable_frame(input)
}

/// Extract the metadata of the skippable frame at the front of `input`.
///
/// # Returns
/// - `Ok(None)` if `input` does not start with a skippable frame.
/// - `Ok(Some(metadata))` otherwise; empty metadata is `Some(vec![])`.
/// - `Err(FrameError::Decode)` if the frame is present but malformed.
pub fn read_skippable_frame(input: &[u8]) -> Result<Option<Vec<u8>>, FrameError> {
    Ok(read_skippable_frame_with(&ZstdBackend, input)?.map(SkippableFrame::into_metadata))
}

/// Like [`read_skippable_frame`], but keeps the decoded magic variant.
pub fn read_skippable_frame_with_variant(input: &[u8]) -> Result<Option<SkippableFrame>, FrameError> {
    read_skippable_frame_with(&ZstdBackend, input)
}

/// Split `input` into its leading skippable frame and the bytes after it.
pub fn split_skippable_frame(input: &[u8]) -> Result<Option<(SkippableFrame, &[u8])>, FrameError> {
    split_skippable_frame_with(&ZstdBackend, input)
}

/// Decode the leading skippable frame through an explicit backend.
///
/// Metadata is copied into a scratch buffer of `SKIPPABLE_READ_CAPACITY`
/// bytes regardless of `input.len()`, then trimmed to the decoded size.
pub fn read_skippable_frame_with<B: CodecBackend>(
    backend: &B,
    input: &[u8],
) -> Result<Option<SkippableFrame>, FrameError> {
    if !backend.is_skippable_frame(input) {
        return Ok(None);
    }

    let mut scratch = vec![0u8; SKIPPABLE_READ_CAPACITY];
    let (metadata_len, magic_variant) = backend
        .read_skippable_frame(&mut scratch, input)
        .map_err(|failure| {
            warn!(
                "{}: read skippable frame failed ({} input bytes): {}",
                backend.name(),
                input.len(),
                failure
            );
            FrameError::Decode(failure)
        })?;

    if metadata_len > scratch.len() {
        return Err(FrameError::Malformed {
            declared: metadata_len,
            available: scratch.len(),
        });
    }
    scratch.truncate(metadata_len);

    debug!(
        "read skippable frame: variant={} metadata={}B",
        magic_variant, metadata_len
    );
    Ok(Some(SkippableFrame {
        magic_variant,
        metadata: scratch,
    }))
}

/// [`split_skippable_frame`] through an explicit backend.
pub fn split_skippable_frame_with<'a, B: CodecBackend>(
    backend: &B,
    input: &'a [u8],
) -> Result<Option<(SkippableFrame, &'a [u8])>, FrameError> {
    let frame = match read_skippable_frame_with(backend, input)? {
        Some(frame) => frame,
        None => return Ok(None),
    };

    let rest = input
        .get(frame.frame_len()..)
        .ok_or(FrameError::Malformed {
            declared: frame.frame_len(),
            available: input.len(),
        })?;
    Ok(Some((frame, rest)))
}
