//! Color space conversion and the small numeric helpers shared by the
//! encoder and decoder.
//!
//! The transfer functions operate directly on the 0..=255 scale:
//! `srgb_to_linear` maps a byte to linear intensity in `0.0..=1.0`, and
//! `linear_to_srgb` maps back, truncating toward zero.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// `1.055 * 255`: the gamma-segment scale on the byte range.
const GAMMA_SCALE: f64 = 269.025;
/// `12.92 * 255`: the linear-segment slope on the byte range.
const LINEAR_SLOPE: f64 = 3294.6;
/// Byte value below which the sRGB curve is linear (`0.04045 * 255`).
const SRGB_KNEE: f64 = 10.31475;
/// Linear value at or below which the inverse curve is linear. This sits well
/// under `SRGB_KNEE / LINEAR_SLOPE`, so bytes 2 and 3 come back as 0 and 1.
const LINEAR_KNEE: f64 = 0.000_012_27;

/// Compute `base^2.4` in const context using the identity
/// `x^2.4 = x^2 * (x^2)^(1/5)`, where the fifth root is computed via
/// Newton's method.
const fn const_pow_2_4(base: f64) -> f64 {
    if base <= 0.0 {
        return 0.0;
    }
    let x2 = base * base;
    x2 * const_nth_root(x2, 5)
}

/// Compute the nth root of `value` using Newton's method in const context.
const fn const_nth_root(value: f64, n: u32) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    if value == 1.0 {
        return 1.0;
    }
    // Newton's method: x_{k+1} = ((n-1)*x_k + value / x_k^(n-1)) / n
    let mut x = if value < 1.0 { 1.0 } else { value };
    let nf = n as f64;
    let nm1 = (n - 1) as f64;
    let mut i = 0;
    while i < 100 {
        let mut xpow = 1.0;
        let mut j = 0;
        while j < n - 1 {
            xpow *= x;
            j += 1;
        }
        let x_new = (nm1 * x + value / xpow) / nf;
        let diff = if x_new > x { x_new - x } else { x - x_new };
        if diff < 1e-15 {
            return x_new;
        }
        x = x_new;
        i += 1;
    }
    x
}

const fn build_srgb_to_linear_lut() -> [f64; 256] {
    let mut lut = [0.0f64; 256];
    let mut i = 0usize;
    while i < 256 {
        let value = i as f64;
        lut[i] = if value > SRGB_KNEE {
            const_pow_2_4(value / GAMMA_SCALE + 0.052132)
        } else {
            value / LINEAR_SLOPE
        };
        i += 1;
    }
    lut
}

/// Precomputed sRGB-to-linear lookup table, built at compile time.
static SRGB_TO_LINEAR_LUT: [f64; 256] = build_srgb_to_linear_lut();

/// Convert an sRGB byte value (0..=255) to linear intensity (0.0..=1.0).
///
/// # Examples
///
/// ```
/// use blurhash_codec::color::srgb_to_linear;
/// assert_eq!(srgb_to_linear(0), 0.0);
/// assert!((srgb_to_linear(255) - 1.0).abs() < 1e-5);
/// ```
#[inline]
pub fn srgb_to_linear(value: u8) -> f64 {
    SRGB_TO_LINEAR_LUT[value as usize]
}

/// Convert a linear intensity back to the sRGB byte scale without clamping.
///
/// The result is truncated toward zero and may fall outside 0..=255 for
/// inputs outside 0.0..=1.0, which the inverse transform produces for
/// strong AC terms.
#[inline]
pub fn linear_to_srgb_unclamped(value: f64) -> i32 {
    let srgb = if value > LINEAR_KNEE {
        GAMMA_SCALE * value.powf(0.416666) - 13.025
    } else {
        value * LINEAR_SLOPE + 1.0
    };
    // `as` saturates and maps NaN to 0.
    srgb as i32
}

/// Convert a linear intensity to an sRGB byte, clamped to 0..=255.
///
/// # Examples
///
/// ```
/// use blurhash_codec::color::linear_to_srgb;
/// assert_eq!(linear_to_srgb(-0.5), 0);
/// assert_eq!(linear_to_srgb(1.0), 255);
/// assert_eq!(linear_to_srgb(4.0), 255);
/// ```
#[inline]
pub fn linear_to_srgb(value: f64) -> u8 {
    linear_to_srgb_unclamped(value).clamp(0, 255) as u8
}

/// Compute `sign(value) * value^2`, treating zero as positive.
///
/// ```
/// use blurhash_codec::color::sign_sqr;
/// assert_eq!(sign_sqr(3.0), 9.0);
/// assert_eq!(sign_sqr(-3.0), -9.0);
/// ```
#[inline]
pub fn sign_sqr(value: f64) -> f64 {
    if value < 0.0 {
        -value * value
    } else {
        value * value
    }
}

/// Compute `sign(value) * |value|^exp`.
///
/// # Examples
///
/// ```
/// use blurhash_codec::color::sign_pow;
/// assert!((sign_pow(4.0, 0.5) - 2.0).abs() < 1e-10);
/// assert!((sign_pow(-4.0, 0.5) - (-2.0)).abs() < 1e-10);
/// ```
#[inline]
pub fn sign_pow(value: f64, exp: f64) -> f64 {
    value.abs().powf(exp).copysign(value)
}

/// Parabolic approximation of `cos(x)`, within about 0.001 of the true
/// value over the whole period.
///
/// The argument is shifted by a quarter period and wrapped into `[-π, π]`
/// before a second-order sine approximation is applied and refined once.
///
/// ```
/// use blurhash_codec::color::fast_cos;
/// assert!((fast_cos(0.0) - 1.0).abs() < 1e-6);
/// assert!((fast_cos(std::f64::consts::PI) + 1.0).abs() < 1e-6);
/// ```
#[inline]
pub fn fast_cos(x: f64) -> f64 {
    let mut x = x + FRAC_PI_2;
    if !(-4.0 * TAU..=4.0 * TAU).contains(&x) {
        x = (x + PI).rem_euclid(TAU) - PI;
    }
    while x > PI {
        x -= TAU;
    }
    while x < -PI {
        x += TAU;
    }
    let cos = 1.273_239_54 * x - 0.405_284_735 * sign_sqr(x);
    0.225 * (sign_sqr(cos) - cos) + cos
}
