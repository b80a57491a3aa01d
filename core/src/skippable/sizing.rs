//! skippable/sizing.rs
//! Overflow-checked output sizing for the frame writer.

use crate::constants::SKIPPABLE_HEADER_SIZE;
use crate::skippable::types::FrameError;

/// Total buffer size for `header + metadata + payload`.
///
/// Each addend is compared against the headroom left below `usize::MAX`
/// before it is added, so the check itself never wraps. Fails before any
/// allocation happens.
pub fn checked_frame_size(
    payload_len: usize,
    metadata_len: usize,
    header_len: usize,
) -> Result<usize, FrameError> {
    let mut total: usize = 0;
    for addend in [header_len, metadata_len, payload_len] {
        if addend > usize::MAX - total {
            return Err(FrameError::Overflow {
                payload: payload_len,
                metadata: metadata_len,
                header: header_len,
            });
        }
        total += addend;
    }
    Ok(total)
}

/// `checked_frame_size` with the protocol header size.
#[inline]
pub fn frame_buffer_size(payload_len: usize, metadata_len: usize) -> Result<usize, FrameError> {
    checked_frame_size(payload_len, metadata_len, SKIPPABLE_HEADER_SIZE)
}
