//! handles/mod.rs
//! Owning handles over native codec objects.
//!
//! Notes:
//! - A handle exists only if its native object was created; constructors
//!   return `Result` and a failed creation leaves nothing to release.
//! - The native object is released exactly once, when the handle is dropped
//!   or consumed by `close()`. Handles are move-only.
//! - Contexts lend their state mutably (one operation at a time);
//!   dictionaries only immutably and are `Sync` when the native type is.

pub mod types;
pub mod context;
pub mod dictionary;

pub use types::{HandleError, HandleKind};
pub use context::{CompressionContext, DecompressionContext};
pub use dictionary::Dictionary;

use log::{trace, warn};

use crate::telemetry;

/// Turn a native constructor result into a handle payload, recording the
/// outcome.
pub(crate) fn acquire<T>(kind: HandleKind, backend: &'static str, native: Option<T>) -> Result<T, HandleError> {
    match native {
        Some(native) => {
            telemetry::global().record_created(kind);
            trace!("{}: {} created", backend, kind);
            Ok(native)
        }
        None => {
            telemetry::global().record_failed(kind);
            warn!("{}: {}", backend, kind.failure_message());
            Err(HandleError::ResourceExhausted { kind })
        }
    }
}

/// Record a release. Called from `Drop`, right before the native value
/// itself is dropped.
pub(crate) fn release(kind: HandleKind) {
    telemetry::global().record_released(kind);
    trace!("{} released", kind);
}
