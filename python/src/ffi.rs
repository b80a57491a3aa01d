//! Python surface of zframe-core.
//!
//! Functions take and return `bytes`. Handle classes wrap the core handles
//! in an `Option` so `close()` can run early and more than once; the native
//! object is still released exactly once.

use log::debug;
use pyo3::create_exception;
use pyo3::exceptions::{PyMemoryError, PyOverflowError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyInt};

use zframe_core::handles::{CompressionContext, DecompressionContext, Dictionary, HandleError};
use zframe_core::skippable::{self, FrameError};
use zframe_core::telemetry;
use zframe_core::{ErrorKind, ZframeError};

create_exception!(zframe, FrameEncodeError, PyRuntimeError);
create_exception!(zframe, FrameDecodeError, PyRuntimeError);

fn to_py_err(err: ZframeError) -> PyErr {
    let message = err.to_string();
    match err.kind() {
        ErrorKind::Overflow => PyOverflowError::new_err(message),
        ErrorKind::ResourceExhausted => PyMemoryError::new_err(message),
        ErrorKind::FrameEncode => FrameEncodeError::new_err(message),
        ErrorKind::FrameDecode => FrameDecodeError::new_err(message),
    }
}

fn frame_err(err: FrameError) -> PyErr {
    to_py_err(err.into())
}

fn handle_err(err: HandleError) -> PyErr {
    to_py_err(err.into())
}

/// Any Python int is accepted. Values outside `u32` reach the codec as
/// `u32::MAX`, so they fail there like every other bad variant.
fn magic_variant_arg(value: Option<&Bound<'_, PyAny>>) -> PyResult<u32> {
    match value {
        None => Ok(0),
        Some(value) => Ok(value.downcast::<PyInt>()?.extract::<u32>().unwrap_or(u32::MAX)),
    }
}

fn py_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

// ============================================================================
// Skippable frames
// ============================================================================

/// Prepend a skippable frame holding `metadata` to `payload`.
#[pyfunction]
#[pyo3(signature = (payload, metadata, *, magic_variant = None))]
fn write_skippable_frame<'py>(
    py: Python<'py>,
    payload: &[u8],
    metadata: &[u8],
    magic_variant: Option<&Bound<'py, PyAny>>,
) -> PyResult<Bound<'py, PyBytes>> {
    let magic_variant = magic_variant_arg(magic_variant)?;
    let wire = py
        .allow_threads(|| skippable::write_skippable_frame(payload, metadata, Some(magic_variant)))
        .map_err(frame_err)?;
    Ok(PyBytes::new_bound(py, &wire))
}

/// Metadata of the leading skippable frame, or `None`.
#[pyfunction]
fn read_skippable_frame<'py>(py: Python<'py>, input: &[u8]) -> PyResult<Option<Bound<'py, PyBytes>>> {
    let metadata = py
        .allow_threads(|| skippable::read_skippable_frame(input))
        .map_err(frame_err)?;
    Ok(metadata.map(|m| PyBytes::new_bound(py, &m)))
}

/// `(metadata, magic_variant)` of the leading skippable frame, or `None`.
#[pyfunction]
fn read_skippable_frame_with_variant<'py>(
    py: Python<'py>,
    input: &[u8],
) -> PyResult<Option<(Bound<'py, PyBytes>, u32)>> {
    let frame = py
        .allow_threads(|| skippable::read_skippable_frame_with_variant(input))
        .map_err(frame_err)?;
    Ok(frame.map(|f| (PyBytes::new_bound(py, &f.metadata), f.magic_variant)))
}

#[pyfunction]
fn is_skippable_frame(input: &[u8]) -> bool {
    skippable::is_skippable_frame(input)
}

/// JSON snapshot of native handle lifecycle counters.
#[pyfunction]
fn handle_stats() -> PyResult<String> {
    telemetry::snapshot()
        .to_json()
        .map_err(|e| PyRuntimeError::new_err(format!("handle stats serialization failed: {}", e)))
}

// ============================================================================
// Handles
// ============================================================================

/// Compression context.
#[pyclass(name = "CContext")]
pub struct PyCContext {
    inner: Option<CompressionContext>,
}

#[pymethods]
impl PyCContext {
    #[new]
    fn new() -> PyResult<Self> {
        let inner = CompressionContext::new().map_err(handle_err)?;
        Ok(Self { inner: Some(inner) })
    }

    /// Release the native context. Later calls do nothing.
    fn close(&mut self) {
        if let Some(ctx) = self.inner.take() {
            ctx.close();
        }
    }

    #[getter]
    fn closed(&self) -> bool {
        self.inner.is_none()
    }

    fn __repr__(&self) -> String {
        format!("CContext(closed={})", py_bool(self.closed()))
    }
}

/// Decompression context.
#[pyclass(name = "DContext")]
pub struct PyDContext {
    inner: Option<DecompressionContext>,
}

#[pymethods]
impl PyDContext {
    #[new]
    fn new() -> PyResult<Self> {
        let inner = DecompressionContext::new().map_err(handle_err)?;
        Ok(Self { inner: Some(inner) })
    }

    fn close(&mut self) {
        if let Some(ctx) = self.inner.take() {
            ctx.close();
        }
    }

    #[getter]
    fn closed(&self) -> bool {
        self.inner.is_none()
    }

    fn __repr__(&self) -> String {
        format!("DContext(closed={})", py_bool(self.closed()))
    }
}

/// Digested decompression dictionary built from raw bytes.
#[pyclass(name = "DDictionary")]
pub struct PyDDictionary {
    inner: Option<Dictionary>,
}

#[pymethods]
impl PyDDictionary {
    #[new]
    fn new(dictionary: &[u8]) -> PyResult<Self> {
        let inner = Dictionary::new(dictionary).map_err(handle_err)?;
        Ok(Self { inner: Some(inner) })
    }

    fn close(&mut self) {
        if let Some(dict) = self.inner.take() {
            dict.close();
        }
    }

    #[getter]
    fn closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Size of the bytes the dictionary was built from.
    #[getter]
    fn source_len(&self) -> PyResult<usize> {
        self.inner
            .as_ref()
            .map(|dict| dict.source_len())
            .ok_or_else(|| PyValueError::new_err("dictionary is closed"))
    }

    fn __repr__(&self) -> String {
        match &self.inner {
            Some(dict) => format!("DDictionary(source_len={})", dict.source_len()),
            None => "DDictionary(closed=True)".to_string(),
        }
    }
}

// ============================================================================
// Registration
// ============================================================================

pub fn register(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(write_skippable_frame, m)?)?;
    m.add_function(wrap_pyfunction!(read_skippable_frame, m)?)?;
    m.add_function(wrap_pyfunction!(read_skippable_frame_with_variant, m)?)?;
    m.add_function(wrap_pyfunction!(is_skippable_frame, m)?)?;
    m.add_function(wrap_pyfunction!(handle_stats, m)?)?;

    m.add_class::<PyCContext>()?;
    m.add_class::<PyDContext>()?;
    m.add_class::<PyDDictionary>()?;

    m.add("FrameEncodeError", py.get_type_bound::<FrameEncodeError>())?;
    m.add("FrameDecodeError", py.get_type_bound::<FrameDecodeError>())?;

    debug!("zframe module registered");
    Ok(())
}
