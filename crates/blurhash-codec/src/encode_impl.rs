//! BlurHash encoding: convert an RGBA image into a compact BlurHash string.
//!
//! The encoder projects the image onto a small set of cosine basis functions
//! and quantizes the resulting components into a base83-encoded string.

use crate::base83;
use crate::color::{linear_to_srgb, sign_pow, srgb_to_linear};
use crate::error::BlurhashError;
use crate::options::{check_components, check_dimensions, EncodeOptions};
use crate::transform;

/// Encode an RGBA image into a BlurHash string.
///
/// # Arguments
///
/// * `pixels` - Flat RGBA byte array in row-major order (4 bytes per pixel).
///   Alpha is ignored.
/// * `width` - Image width in pixels.
/// * `height` - Image height in pixels.
/// * `components_x` - Number of horizontal components (1..=9).
/// * `components_y` - Number of vertical components (1..=9).
///
/// # Errors
///
/// Returns a range error if the component counts or dimensions are out of
/// range, or if the pixel buffer length does not match `width * height * 4`.
///
/// # Examples
///
/// ```
/// use blurhash_codec::encode;
/// // A 2x2 red image
/// let pixels = [255, 0, 0, 255].repeat(4);
/// let hash = encode(&pixels, 2, 2, 4, 3).unwrap();
/// assert_eq!(hash.len(), 28);
/// ```
pub fn encode(
    pixels: &[u8],
    width: u32,
    height: u32,
    components_x: u32,
    components_y: u32,
) -> Result<String, BlurhashError> {
    encode_with(
        pixels,
        width,
        height,
        &EncodeOptions::new(components_x, components_y),
    )
}

/// Encode an RGBA image with explicit [`EncodeOptions`].
///
/// # Errors
///
/// See [`encode`].
pub fn encode_with(
    pixels: &[u8],
    width: u32,
    height: u32,
    options: &EncodeOptions,
) -> Result<String, BlurhashError> {
    let EncodeOptions {
        components_x,
        components_y,
        basis,
    } = *options;
    check_components(components_x, components_y)?;
    check_dimensions(width, height)?;

    let expected_len = (width as u64)
        .checked_mul(height as u64)
        .and_then(|v| v.checked_mul(4))
        .and_then(|v| usize::try_from(v).ok())
        .ok_or(BlurhashError::InvalidDimensions {
            width,
            height,
            reason: "dimensions overflow buffer size calculation",
        })?;
    if pixels.len() != expected_len {
        return Err(BlurhashError::PixelBufferLength {
            expected: expected_len,
            actual: pixels.len(),
        });
    }

    log::debug!(
        "encoding {width}x{height} image with {components_x}x{components_y} components"
    );

    let linear_pixels: Vec<[f64; 3]> = pixels
        .chunks_exact(4)
        .map(|px| {
            [
                srgb_to_linear(px[0]),
                srgb_to_linear(px[1]),
                srgb_to_linear(px[2]),
            ]
        })
        .collect();

    let components = transform::forward(
        &linear_pixels,
        width as usize,
        height as usize,
        components_x as usize,
        components_y as usize,
        basis,
    );
    let (dc, ac) = components.split_at(1);

    let max_ac_component = ac
        .iter()
        .flatten()
        .fold(0.0f64, |max, value| max.max(value.abs()));

    // Quantize the maximum AC component.
    let quant_max_ac = (max_ac_component * 166.0 - 0.5).floor().clamp(0.0, 82.0) as u64;
    let ac_component_norm_factor = (quant_max_ac as f64 + 1.0) / 166.0;
    log::trace!("maximum AC {max_ac_component}, quantized to {quant_max_ac}");

    let dc_value = dc[0]
        .iter()
        .fold(0u64, |packed, &channel| (packed << 8) | linear_to_srgb(channel) as u64);

    let size_flag = (components_x - 1) + (components_y - 1) * 9;
    let num_components = (components_x * components_y) as usize;
    let mut result = String::with_capacity(4 + 2 * num_components);

    base83::encode_into(size_flag as u64, 1, &mut result)?;
    base83::encode_into(quant_max_ac, 1, &mut result)?;
    base83::encode_into(dc_value, 4, &mut result)?;
    for component in ac {
        let packed = component.iter().fold(0u64, |packed, &channel| {
            packed * 19 + quantize_ac(channel, ac_component_norm_factor)
        });
        base83::encode_into(packed, 2, &mut result)?;
    }

    Ok(result)
}

/// Map one AC channel to `0..=18`, with 9 meaning zero.
fn quantize_ac(value: f64, max_value: f64) -> u64 {
    (sign_pow(value / max_value, 0.5) * 9.0 + 9.5)
        .floor()
        .clamp(0.0, 18.0) as u64
}
