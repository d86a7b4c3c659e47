use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

/// Convert a `BlurhashError` into a Python `ValueError`.
fn to_py_err(e: blurhash_codec::BlurhashError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Encode image pixel data into a BlurHash string.
///
/// Args:
///     data: Raw pixel bytes in RGBA order (length must be width * height * 4).
///     width: Image width in pixels.
///     height: Image height in pixels.
///     components_x: Number of horizontal components (1..=9).
///     components_y: Number of vertical components (1..=9).
///
/// Returns:
///     The BlurHash string.
#[pyfunction]
#[pyo3(signature = (data, width, height, components_x = 4, components_y = 3))]
fn encode(
    py: Python<'_>,
    data: &[u8],
    width: u32,
    height: u32,
    components_x: u32,
    components_y: u32,
) -> PyResult<String> {
    py.allow_threads(|| {
        blurhash_codec::encode(data, width, height, components_x, components_y)
    })
    .map_err(to_py_err)
}

/// Decode a BlurHash string into raw RGBA pixel data.
///
/// Args:
///     blurhash: The BlurHash string to decode.
///     width: Desired output width in pixels (1..=10000).
///     height: Desired output height in pixels (1..=10000).
///     punch: Contrast multiplier (default 1.0; values below 1.0 act as 1.0).
///
/// Returns:
///     A bytes object of length width * height * 4 containing RGBA pixel data.
#[pyfunction]
#[pyo3(signature = (blurhash, width, height, punch = 1.0))]
fn decode(
    py: Python<'_>,
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> PyResult<Py<PyBytes>> {
    let pixels = py
        .allow_threads(|| blurhash_codec::decode(blurhash, width, height, punch))
        .map_err(to_py_err)?;
    Ok(PyBytes::new(py, &pixels).into())
}

/// Check whether a string is a structurally valid BlurHash.
///
/// Returns:
///     A tuple (valid, reason) where reason is None for valid hashes.
#[pyfunction]
fn is_valid(blurhash: &str) -> (bool, Option<String>) {
    blurhash_codec::is_valid(blurhash)
}

/// Extract the number of X and Y components from a BlurHash string.
///
/// Returns:
///     A tuple (components_x, components_y).
#[pyfunction]
fn components(blurhash: &str) -> PyResult<(u32, u32)> {
    blurhash_codec::components(blurhash).map_err(to_py_err)
}

/// Extract the average color of a BlurHash without decoding it.
///
/// Returns:
///     A tuple (r, g, b) of sRGB bytes.
#[pyfunction]
fn average_color(blurhash: &str) -> PyResult<(u8, u8, u8)> {
    let [r, g, b] = blurhash_codec::average_color(blurhash).map_err(to_py_err)?;
    Ok((r, g, b))
}

/// Convert an sRGB byte value (0-255) to linear intensity (0.0-1.0).
#[pyfunction]
fn srgb_to_linear(value: u8) -> f64 {
    blurhash_codec::color::srgb_to_linear(value)
}

/// Convert a linear intensity to an sRGB byte value (0-255).
#[pyfunction]
fn linear_to_srgb(value: f64) -> u8 {
    blurhash_codec::color::linear_to_srgb(value)
}

/// BlurHash encoding and decoding (Rust-powered).
#[pymodule]
fn blurhash(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(is_valid, m)?)?;
    m.add_function(wrap_pyfunction!(components, m)?)?;
    m.add_function(wrap_pyfunction!(average_color, m)?)?;
    m.add_function(wrap_pyfunction!(srgb_to_linear, m)?)?;
    m.add_function(wrap_pyfunction!(linear_to_srgb, m)?)?;
    Ok(())
}
