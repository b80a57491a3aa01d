use log::{debug, warn};

use crate::codec::{CodecBackend, ZstdBackend};
use crate::skippable::sizing::frame_buffer_size;
use crate::skippable::types::{FrameError, FrameOptions};

/// Prepend a skippable frame carrying `metadata` to `payload`.
///
/// Layout:
///
/// ```text
/// [ magic (4) ]          0x184D2A50 + magic_variant
/// [ metadata_len (4) ]
/// [ metadata (N) ]
/// [ payload (M) ]
/// ```
///
/// `magic_variant` defaults to 0 when `None`.
pub fn write_skippable_frame(
    payload: &[u8],
    metadata: &[u8],
    magic_variant: Option<u32>,
) -> Result<Vec<u8>, FrameError> {
    write_skippable_frame_with(&ZstdBackend, payload, metadata, &FrameOptions::from(magic_variant))
}

/// Same as [`write_skippable_frame`], through an explicit backend.
///
/// The output buffer is sized once, the backend writes header and metadata
/// into its front, and the payload is copied right after whatever the
/// backend reports as written. Nothing is returned on failure.
pub fn write_skippable_frame_with<B: CodecBackend>(
    backend: &B,
    payload: &[u8],
    metadata: &[u8],
    options: &FrameOptions,
) -> Result<Vec<u8>, FrameError> {
    let capacity = frame_buffer_size(payload.len(), metadata.len())?;
    let mut out = vec![0u8; capacity];

    let frame_size = backend
        .write_skippable_frame(&mut out, metadata, options.magic_variant)
        .map_err(|failure| {
            warn!(
                "{}: write skippable frame failed (variant {}): {}",
                backend.name(),
                options.magic_variant,
                failure
            );
            FrameError::Encode(failure)
        })?;

    let end = match frame_size.checked_add(payload.len()) {
        Some(end) if end <= capacity => end,
        _ => {
            return Err(FrameError::FrameSizeMismatch {
                frame_size,
                payload: payload.len(),
                capacity,
            })
        }
    };

    out[frame_size..end].copy_from_slice(payload);
    out.truncate(end);

    debug!(
        "wrote skippable frame: variant={} metadata={}B payload={}B total={}B",
        options.magic_variant,
        metadata.len(),
        payload.len(),
        out.len()
    );
    Ok(out)
}
