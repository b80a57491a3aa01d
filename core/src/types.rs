use thiserror::Error;

use crate::{handles::HandleError, skippable::FrameError};

/// Coarse error classes, for callers that map errors onto another
/// language's exception types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Requested sizes exceed the platform integer range.
    Overflow,
    /// A native context or dictionary could not be created.
    ResourceExhausted,
    /// The codec refused to build a frame.
    FrameEncode,
    /// The codec refused to parse a frame.
    FrameDecode,
}

/// Unified error covering frame coding and handle construction.
/// `From` impls let `?` lift module errors into it.
#[derive(Debug, Error)]
pub enum ZframeError {
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    #[error("handle error: {0}")]
    Handle(#[from] HandleError),
}

impl ZframeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ZframeError::Frame(FrameError::Overflow { .. }) => ErrorKind::Overflow,
            ZframeError::Frame(FrameError::Encode(_))
            | ZframeError::Frame(FrameError::FrameSizeMismatch { .. }) => ErrorKind::FrameEncode,
            ZframeError::Frame(FrameError::Decode(_))
            | ZframeError::Frame(FrameError::Malformed { .. }) => ErrorKind::FrameDecode,
            ZframeError::Handle(HandleError::ResourceExhausted { .. }) => ErrorKind::ResourceExhausted,
        }
    }
}
