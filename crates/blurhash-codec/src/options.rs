//! Tunables for encoding and decoding.

use crate::error::BlurhashError;
use crate::transform::Basis;

/// Largest accepted width or height, for both source images and decode
/// targets. Bounds CPU and memory use on untrusted input.
pub const MAX_DIMENSION: u32 = 10_000;

/// Options for [`encode_with`](crate::encode_with).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    /// Number of horizontal components (1..=9).
    pub components_x: u32,
    /// Number of vertical components (1..=9).
    pub components_y: u32,
    /// Cosine used for the basis functions.
    pub basis: Basis,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            components_x: 4,
            components_y: 3,
            basis: Basis::Fast,
        }
    }
}

impl EncodeOptions {
    /// Options with the given component counts and the default basis.
    pub fn new(components_x: u32, components_y: u32) -> Self {
        Self {
            components_x,
            components_y,
            ..Self::default()
        }
    }
}

/// Options for [`decode_with`](crate::decode_with).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodeOptions {
    /// AC contrast multiplier. Values below 1 (and NaN) act as 1.
    pub punch: f64,
    /// Cosine used for the basis functions.
    pub basis: Basis,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            punch: 1.0,
            basis: Basis::Fast,
        }
    }
}

impl DecodeOptions {
    /// Options with the given punch and the default basis.
    pub fn with_punch(punch: f64) -> Self {
        Self {
            punch,
            ..Self::default()
        }
    }

    /// The multiplier actually applied to the AC scale.
    ///
    /// ```
    /// use blurhash_codec::DecodeOptions;
    /// assert_eq!(DecodeOptions::with_punch(2.5).effective_punch(), 2.5);
    /// assert_eq!(DecodeOptions::with_punch(0.0).effective_punch(), 1.0);
    /// assert_eq!(DecodeOptions::with_punch(f64::NAN).effective_punch(), 1.0);
    /// ```
    pub fn effective_punch(&self) -> f64 {
        self.punch.max(1.0)
    }
}

pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<(), BlurhashError> {
    if width == 0 || height == 0 {
        return Err(BlurhashError::InvalidDimensions {
            width,
            height,
            reason: "width and height must be > 0",
        });
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(BlurhashError::InvalidDimensions {
            width,
            height,
            reason: "dimensions must be <= 10000",
        });
    }
    Ok(())
}

pub(crate) fn check_components(components_x: u32, components_y: u32) -> Result<(), BlurhashError> {
    if !(1..=9).contains(&components_x) {
        return Err(BlurhashError::InvalidComponentCount {
            component: "x",
            value: components_x,
        });
    }
    if !(1..=9).contains(&components_y) {
        return Err(BlurhashError::InvalidComponentCount {
            component: "y",
            value: components_y,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let encode = EncodeOptions::default();
        assert_eq!((encode.components_x, encode.components_y), (4, 3));
        assert_eq!(encode.basis, Basis::Fast);

        let decode = DecodeOptions::default();
        assert_eq!(decode.punch, 1.0);
        assert_eq!(decode.basis, Basis::Fast);
    }

    #[test]
    fn test_effective_punch() {
        assert_eq!(DecodeOptions::with_punch(-3.0).effective_punch(), 1.0);
        assert_eq!(DecodeOptions::with_punch(0.5).effective_punch(), 1.0);
        assert_eq!(DecodeOptions::with_punch(1.0).effective_punch(), 1.0);
        assert_eq!(DecodeOptions::with_punch(3.0).effective_punch(), 3.0);
    }

    #[test]
    fn test_check_dimensions() {
        assert!(check_dimensions(1, 1).is_ok());
        assert!(check_dimensions(MAX_DIMENSION, MAX_DIMENSION).is_ok());
        assert!(check_dimensions(0, 4).is_err());
        assert!(check_dimensions(4, 0).is_err());
        assert!(check_dimensions(MAX_DIMENSION + 1, 4).is_err());
    }

    #[test]
    fn test_check_components() {
        assert!(check_components(1, 9).is_ok());
        assert_eq!(
            check_components(0, 3),
            Err(BlurhashError::InvalidComponentCount {
                component: "x",
                value: 0
            })
        );
        assert_eq!(
            check_components(4, 10),
            Err(BlurhashError::InvalidComponentCount {
                component: "y",
                value: 10
            })
        );
    }
}
