//! src/codec/zstd.rs
//!
//! libzstd backend.
//!
//! Design notes:
//! - Contexts and dictionaries come from `zstd-safe`; their `Drop` impls call
//!   `ZSTD_freeCCtx` / `ZSTD_freeDCtx` / `ZSTD_freeDDict`.
//! - Skippable frame functions live in the static-linking-only part of
//!   `zstd.h`, which `zstd-safe` does not wrap. They are called through the
//!   `zstd-sys` bindings it re-exports (`experimental` feature).
//! - This is the only module in the crate allowed to use `unsafe`.

#![allow(unsafe_code)]

use zstd_safe::zstd_sys;

use crate::codec::types::{CodecBackend, CodecErrorCode, CodecFailure};

/// libzstd reports an error as `(size_t)-ZSTD_ErrorCode`.
fn error_enum(code: CodecErrorCode) -> u32 {
    u32::try_from(code.wrapping_neg()).unwrap_or(u32::MAX)
}

/// Codec backend backed by the bundled libzstd.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZstdBackend;

impl ZstdBackend {
    fn check(&self, code: usize) -> Result<usize, CodecFailure> {
        // SAFETY: ZSTD_isError only inspects the integer it is given.
        if unsafe { zstd_sys::ZSTD_isError(code) } != 0 {
            Err(CodecFailure::new(error_enum(code), self.error_name(code)))
        } else {
            Ok(code)
        }
    }
}

impl CodecBackend for ZstdBackend {
    type CCtx = zstd_safe::CCtx<'static>;
    type DCtx = zstd_safe::DCtx<'static>;
    type DDict = zstd_safe::DDict<'static>;

    fn name(&self) -> &'static str {
        "zstd"
    }

    fn create_cctx(&self) -> Option<Self::CCtx> {
        zstd_safe::CCtx::try_create()
    }

    fn create_dctx(&self) -> Option<Self::DCtx> {
        zstd_safe::DCtx::try_create()
    }

    fn create_ddict(&self, dict: &[u8]) -> Option<Self::DDict> {
        zstd_safe::DDict::try_create(dict)
    }

    fn write_skippable_frame(
        &self,
        dst: &mut [u8],
        metadata: &[u8],
        magic_variant: u32,
    ) -> Result<usize, CodecFailure> {
        // SAFETY: `dst` is writable for `dst.len()` bytes and `metadata` is
        // readable for `metadata.len()` bytes; libzstd never writes past the
        // capacity it is given.
        let code = unsafe {
            zstd_sys::ZSTD_writeSkippableFrame(
                dst.as_mut_ptr().cast(),
                dst.len(),
                metadata.as_ptr().cast(),
                metadata.len(),
                magic_variant,
            )
        };
        self.check(code)
    }

    fn is_skippable_frame(&self, src: &[u8]) -> bool {
        // SAFETY: `src` is readable for `src.len()` bytes.
        unsafe { zstd_sys::ZSTD_isSkippableFrame(src.as_ptr().cast(), src.len()) != 0 }
    }

    fn read_skippable_frame(
        &self,
        dst: &mut [u8],
        src: &[u8],
    ) -> Result<(usize, u32), CodecFailure> {
        let mut magic_variant: u32 = 0;
        // SAFETY: both buffers are valid for the lengths passed alongside
        // them and `magic_variant` outlives the call.
        let code = unsafe {
            zstd_sys::ZSTD_readSkippableFrame(
                dst.as_mut_ptr().cast(),
                dst.len(),
                &mut magic_variant,
                src.as_ptr().cast(),
                src.len(),
            )
        };
        let len = self.check(code)?;
        Ok((len, magic_variant))
    }

    fn error_name(&self, code: CodecErrorCode) -> &'static str {
        zstd_safe::get_error_name(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SKIPPABLE_HEADER_SIZE;

    #[test]
    fn contexts_and_dictionaries_allocate() {
        let backend = ZstdBackend;
        assert!(backend.create_cctx().is_some());
        assert!(backend.create_dctx().is_some());
        assert!(backend.create_ddict(b"some raw dictionary content").is_some());
    }

    #[test]
    fn write_then_read_metadata() {
        let backend = ZstdBackend;
        let mut dst = vec![0u8; SKIPPABLE_HEADER_SIZE + 4];
        let written = backend.write_skippable_frame(&mut dst, b"meta", 3).unwrap();
        assert_eq!(written, SKIPPABLE_HEADER_SIZE + 4);
        assert!(backend.is_skippable_frame(&dst));

        let mut out = vec![0u8; 16];
        let (len, variant) = backend.read_skippable_frame(&mut out, &dst).unwrap();
        assert_eq!(&out[..len], b"meta");
        assert_eq!(variant, 3);
    }

    #[test]
    fn undersized_destination_is_reported() {
        let backend = ZstdBackend;
        let mut dst = vec![0u8; SKIPPABLE_HEADER_SIZE];
        let err = backend.write_skippable_frame(&mut dst, b"meta", 0).unwrap_err();
        // ZSTD_error_dstSize_tooSmall
        assert_eq!(err.code, 70);
        assert!(!err.name.is_empty());
        assert_eq!(err.to_string(), format!("{} (code 70)", err.name));
    }

    #[test]
    fn out_of_range_variant_reports_parameter_error() {
        let backend = ZstdBackend;
        let mut dst = vec![0u8; SKIPPABLE_HEADER_SIZE + 4];
        let err = backend.write_skippable_frame(&mut dst, b"meta", 16).unwrap_err();
        // ZSTD_error_parameter_outOfBound
        assert_eq!(err.code, 42);
    }

    #[test]
    fn error_enum_inverts_negated_return() {
        assert_eq!(error_enum(0usize.wrapping_sub(72)), 72);
        assert_eq!(error_enum(1), u32::MAX);
    }

    #[test]
    fn short_buffers_are_not_frames() {
        let backend = ZstdBackend;
        assert!(!backend.is_skippable_frame(b""));
        assert!(!backend.is_skippable_frame(b"abc"));
    }
}
