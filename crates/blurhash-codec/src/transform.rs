//! The separable 2D cosine basis shared by the encoder and the decoder.
//!
//! Basis function `(i, j)` evaluated at pixel `(x, y)` of a `width x height`
//! canvas is `cos(π·i·x/width) · cos(π·j·y/height)`. Both directions cost
//! `O(width · height · components)`; the per-axis cosines are tabulated once
//! per call so the inner loops are pure multiply-accumulate.
//!
//! With the `parallel` feature, encoding fans out over coefficients and
//! decoding over output rows. The summation order inside one coefficient or
//! one pixel is the same either way, so results are bit-identical.

use std::f64::consts::PI;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::color::{fast_cos, linear_to_srgb};

/// Which cosine the basis functions are built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Basis {
    /// The parabolic approximation [`fast_cos`]. Matches the reference
    /// decoder's output pixel for pixel.
    #[default]
    Fast,
    /// [`f64::cos`].
    Exact,
}

impl Basis {
    /// Evaluate the cosine this basis is built from.
    #[inline]
    pub fn cos(self, x: f64) -> f64 {
        match self {
            Basis::Fast => fast_cos(x),
            Basis::Exact => x.cos(),
        }
    }
}

/// `cos(π·k·n/len)` for `k in 0..count`, `n in 0..len`, stored row-major by `k`.
pub(crate) struct BasisTable {
    len: usize,
    values: Vec<f64>,
}

impl BasisTable {
    pub(crate) fn new(basis: Basis, count: usize, len: usize) -> Self {
        let lenf = len as f64;
        let mut values = Vec::with_capacity(count * len);
        for k in 0..count {
            for n in 0..len {
                values.push(basis.cos(PI * n as f64 / lenf * k as f64));
            }
        }
        Self { len, values }
    }

    #[inline]
    pub(crate) fn row(&self, k: usize) -> &[f64] {
        &self.values[k * self.len..(k + 1) * self.len]
    }

    #[inline]
    pub(crate) fn get(&self, k: usize, n: usize) -> f64 {
        self.values[k * self.len + n]
    }
}

/// Project a linear-RGB image onto the first `components_x * components_y`
/// basis functions.
///
/// `linear` holds `width * height` pixels in row-major order. The result is
/// indexed `i + j * components_x`; entry 0 is the DC (average) color and the
/// AC entries carry the usual factor of 2.
pub(crate) fn forward(
    linear: &[[f64; 3]],
    width: usize,
    height: usize,
    components_x: usize,
    components_y: usize,
    basis: Basis,
) -> Vec<[f64; 3]> {
    let cos_x = BasisTable::new(basis, components_x, width);
    let cos_y = BasisTable::new(basis, components_y, height);
    let scale = 1.0 / (width as f64 * height as f64);

    let coefficient = |index: usize| -> [f64; 3] {
        let i = index % components_x;
        let j = index / components_x;
        let normalisation = if i == 0 && j == 0 { 1.0 } else { 2.0 };
        let cos_x_row = cos_x.row(i);

        let mut sum = [0.0f64; 3];
        for (y, &cos_y_val) in cos_y.row(j).iter().enumerate() {
            let row = &linear[y * width..(y + 1) * width];
            for (px, &cos_x_val) in row.iter().zip(cos_x_row) {
                let basis = cos_x_val * cos_y_val;
                sum[0] += basis * px[0];
                sum[1] += basis * px[1];
                sum[2] += basis * px[2];
            }
        }

        let factor = normalisation * scale;
        [sum[0] * factor, sum[1] * factor, sum[2] * factor]
    };

    let count = components_x * components_y;

    #[cfg(feature = "parallel")]
    let coefficients = (0..count).into_par_iter().map(coefficient).collect();
    #[cfg(not(feature = "parallel"))]
    let coefficients = (0..count).map(coefficient).collect();

    coefficients
}

/// Evaluate the basis expansion at every pixel of a `width x height` canvas
/// and return it as RGBA bytes with opaque alpha.
///
/// `coefficients` is indexed like the output of [`forward`]. Both
/// dimensions must be non-zero.
pub(crate) fn inverse(
    coefficients: &[[f64; 3]],
    components_x: usize,
    components_y: usize,
    width: usize,
    height: usize,
    basis: Basis,
) -> Vec<u8> {
    debug_assert_eq!(coefficients.len(), components_x * components_y);
    debug_assert!(width > 0 && height > 0);

    let cos_x = BasisTable::new(basis, components_x, width);
    let cos_y = BasisTable::new(basis, components_y, height);
    let mut pixels = vec![0u8; width * height * 4];

    let fill_row = |(y, row): (usize, &mut [u8])| {
        for (x, pixel) in row.chunks_exact_mut(4).enumerate() {
            let mut rgb = [0.0f64; 3];
            for j in 0..components_y {
                let basis_y = cos_y.get(j, y);
                for i in 0..components_x {
                    let basis = cos_x.get(i, x) * basis_y;
                    let colour = &coefficients[i + j * components_x];
                    rgb[0] += colour[0] * basis;
                    rgb[1] += colour[1] * basis;
                    rgb[2] += colour[2] * basis;
                }
            }
            pixel[0] = linear_to_srgb(rgb[0]);
            pixel[1] = linear_to_srgb(rgb[1]);
            pixel[2] = linear_to_srgb(rgb[2]);
            pixel[3] = 255;
        }
    };

    #[cfg(feature = "parallel")]
    pixels
        .par_chunks_mut(width * 4)
        .enumerate()
        .for_each(fill_row);
    #[cfg(not(feature = "parallel"))]
    pixels.chunks_mut(width * 4).enumerate().for_each(fill_row);

    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::srgb_to_linear;

    #[test]
    fn test_basis_table_first_row_is_one() {
        for basis in [Basis::Fast, Basis::Exact] {
            let table = BasisTable::new(basis, 3, 7);
            for &value in table.row(0) {
                assert!((value - 1.0).abs() < 1e-6, "{basis:?}: {value}");
            }
        }
    }

    #[test]
    fn test_basis_table_matches_cos() {
        let table = BasisTable::new(Basis::Exact, 4, 5);
        for k in 0..4 {
            for n in 0..5 {
                let expected = (PI * k as f64 * n as f64 / 5.0).cos();
                assert!((table.get(k, n) - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_forward_uniform_image() {
        let value = srgb_to_linear(77);
        let linear = vec![[value, value, value]; 8 * 6];
        let coefficients = forward(&linear, 8, 6, 3, 2, Basis::Exact);
        assert_eq!(coefficients.len(), 6);
        for channel in coefficients[0] {
            assert!((channel - value).abs() < 1e-12);
        }
        // Sampling at integer positions leaves a residue of exactly one
        // sample on odd terms and cancels on even ones.
        let expected = [2.0 * value / 8.0, 0.0, 2.0 * value / 6.0];
        for (index, expected) in [1usize, 2, 3].into_iter().zip(expected) {
            for channel in coefficients[index] {
                assert!(
                    (channel - expected).abs() < 1e-12,
                    "coefficient {index}: {channel} vs {expected}"
                );
            }
        }
    }

    #[test]
    fn test_forward_detects_horizontal_gradient() {
        let width = 16;
        let linear: Vec<[f64; 3]> = (0..width * 4)
            .map(|idx| {
                let v = (idx % width) as f64 / width as f64;
                [v, 0.5, 0.0]
            })
            .collect();
        let coefficients = forward(&linear, width, 4, 2, 1, Basis::Fast);
        // Red increases with x, so the first horizontal term is strongly negative.
        assert!(coefficients[1][0] < -0.3, "{:?}", coefficients[1]);
        // Constant channels only pick up the sampling residue.
        assert!((coefficients[1][1] - 2.0 * 0.5 / width as f64).abs() < 5e-3);
        assert!(coefficients[1][2].abs() < 1e-12);
    }

    #[test]
    fn test_inverse_dc_only_is_flat_and_opaque() {
        let colour = [srgb_to_linear(40), srgb_to_linear(120), srgb_to_linear(200)];
        let pixels = inverse(&[colour], 1, 1, 5, 3, Basis::Fast);
        assert_eq!(pixels.len(), 5 * 3 * 4);
        for pixel in pixels.chunks_exact(4) {
            assert_eq!(pixel, &pixels[..4]);
            assert_eq!(pixel[3], 255);
        }
    }
}
