//! BlurHash decoding: convert a BlurHash string back into an RGBA image.
//!
//! The decoder validates the string, dequantizes the DC and AC terms, and
//! evaluates the basis expansion at every pixel of the requested canvas.

use crate::base83;
use crate::color::{sign_sqr, srgb_to_linear};
use crate::error::BlurhashError;
use crate::options::{check_dimensions, DecodeOptions};
use crate::transform;
use crate::validate::validate;

/// Extract the number of X and Y components from a BlurHash string.
///
/// Only the size flag is inspected; use [`validate`] to check the rest.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidLength`] if the BlurHash is too short
/// (< 6 characters), [`BlurhashError::InvalidBase83Character`] if the size
/// flag is not a base83 digit, and [`BlurhashError::InvalidSizeFlag`] if it
/// describes more than 9 rows.
///
/// # Examples
///
/// ```
/// use blurhash_codec::components;
/// let (cx, cy) = components("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap();
/// assert_eq!((cx, cy), (4, 3));
/// ```
pub fn components(blurhash: &str) -> Result<(u32, u32), BlurhashError> {
    let too_short = BlurhashError::InvalidLength {
        expected: 6,
        actual: blurhash.len(),
    };
    if blurhash.len() < 6 {
        return Err(too_short);
    }
    let Some(first) = blurhash.chars().next() else {
        return Err(too_short);
    };

    let size_flag = u8::try_from(first)
        .ok()
        .and_then(base83::digit)
        .ok_or(BlurhashError::InvalidBase83Character {
            character: first,
            position: 0,
        })? as u32;
    if size_flag > 80 {
        return Err(BlurhashError::InvalidSizeFlag(size_flag));
    }

    Ok((size_flag % 9 + 1, size_flag / 9 + 1))
}

fn unpack_rgb(value: u64) -> [u8; 3] {
    [
        ((value >> 16) & 0xFF) as u8,
        ((value >> 8) & 0xFF) as u8,
        (value & 0xFF) as u8,
    ]
}

/// Extract the average (DC) color of a BlurHash as sRGB bytes without
/// running the inverse transform.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidLength`] if the string is shorter than 6
/// characters and [`BlurhashError::InvalidBase83Character`] if the DC field
/// contains characters outside the alphabet.
///
/// # Examples
///
/// ```
/// use blurhash_codec::average_color;
/// assert_eq!(average_color("L6PZfSi_.AyE_3t7t7R**0o#DgR4").unwrap(), [221, 217, 213]);
/// ```
pub fn average_color(blurhash: &str) -> Result<[u8; 3], BlurhashError> {
    if blurhash.len() < 6 {
        return Err(BlurhashError::InvalidLength {
            expected: 6,
            actual: blurhash.len(),
        });
    }
    Ok(unpack_rgb(base83::decode_range(blurhash, 2, 6)?))
}

/// Decode a BlurHash string into a flat RGBA byte array.
///
/// # Arguments
///
/// * `blurhash` - The BlurHash string to decode.
/// * `width` - The desired output image width.
/// * `height` - The desired output image height.
/// * `punch` - AC contrast multiplier; values below 1.0 act as 1.0.
///
/// # Returns
///
/// A `Vec<u8>` of length `width * height * 4` containing RGBA pixel data in
/// row-major order, with alpha always 255.
///
/// # Errors
///
/// Returns a format error if the BlurHash string fails [`validate`], and a
/// range error if either dimension is zero or larger than
/// [`MAX_DIMENSION`](crate::MAX_DIMENSION).
///
/// # Examples
///
/// ```
/// use blurhash_codec::decode;
/// let pixels = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj", 32, 32, 1.0).unwrap();
/// assert_eq!(pixels.len(), 32 * 32 * 4);
/// ```
pub fn decode(
    blurhash: &str,
    width: u32,
    height: u32,
    punch: f64,
) -> Result<Vec<u8>, BlurhashError> {
    decode_with(blurhash, width, height, &DecodeOptions::with_punch(punch))
}

/// Decode a BlurHash string with explicit [`DecodeOptions`].
///
/// # Errors
///
/// See [`decode`].
pub fn decode_with(
    blurhash: &str,
    width: u32,
    height: u32,
    options: &DecodeOptions,
) -> Result<Vec<u8>, BlurhashError> {
    let (size_x, size_y) = validate(blurhash)?;
    check_dimensions(width, height)?;

    log::debug!(
        "decoding {size_x}x{size_y} blurhash to {width}x{height} (punch {})",
        options.punch
    );

    let quant_max_value = base83::decode_range(blurhash, 1, 2)?;
    // 13446 = 166 * 81 folds the `/ 9` of each dequantized digit into the scale.
    let real_max_value = (quant_max_value as f64 + 1.0) / 13446.0 * options.effective_punch();
    log::trace!("quantized maximum AC {quant_max_value}, scale {real_max_value}");

    let num_components = (size_x * size_y) as usize;
    let mut colours: Vec<[f64; 3]> = Vec::with_capacity(num_components);

    let dc = unpack_rgb(base83::decode_range(blurhash, 2, 6)?);
    colours.push(dc.map(srgb_to_linear));

    for component_idx in 1..num_components {
        let start = 4 + component_idx * 2;
        let ac_value = base83::decode_range(blurhash, start, start + 2)?;

        let quant_r = (ac_value / (19 * 19)) as f64;
        let quant_g = ((ac_value / 19) % 19) as f64;
        let quant_b = (ac_value % 19) as f64;

        colours.push([
            sign_sqr(quant_r - 9.0) * real_max_value,
            sign_sqr(quant_g - 9.0) * real_max_value,
            sign_sqr(quant_b - 9.0) * real_max_value,
        ]);
    }

    Ok(transform::inverse(
        &colours,
        size_x as usize,
        size_y as usize,
        width as usize,
        height as usize,
        options.basis,
    ))
}
