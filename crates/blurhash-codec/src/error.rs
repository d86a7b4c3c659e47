//! Error types for BlurHash encoding, decoding and validation.

use thiserror::Error;

/// Broad classification of a [`BlurhashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The BlurHash string itself is malformed.
    Format,
    /// A numeric argument supplied by the caller is out of range.
    Range,
}

/// Errors that can occur during BlurHash encoding or decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlurhashError {
    /// The BlurHash string has an invalid length.
    #[error("invalid BlurHash length: length is {actual} but it should be {expected}")]
    InvalidLength {
        /// The expected length (the minimum, for strings that are too short).
        expected: usize,
        /// The actual length.
        actual: usize,
    },

    /// A character outside the base83 alphabet was encountered.
    #[error("invalid base83 character {character:?} at position {position}")]
    InvalidBase83Character {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// A base83 field has more digits than fit in 64 bits.
    #[error("base83 value with {digits} digits overflows 64 bits")]
    Base83Overflow {
        /// Number of digits in the field.
        digits: usize,
    },

    /// The size flag encodes more than 9 components along an axis.
    #[error("invalid size flag {0} (must be 0..=80)")]
    InvalidSizeFlag(u32),

    /// The component count is out of the valid range (1..=9).
    #[error("component count out of range: {component} = {value} (must be 1..=9)")]
    InvalidComponentCount {
        /// Which component axis ("x" or "y").
        component: &'static str,
        /// The invalid value.
        value: u32,
    },

    /// The image dimensions are invalid (zero or too large).
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// The width value.
        width: u32,
        /// The height value.
        height: u32,
        /// Why the dimensions are invalid.
        reason: &'static str,
    },

    /// The RGBA pixel buffer does not match the stated dimensions.
    #[error("pixel buffer length {actual} does not match width * height * 4 = {expected}")]
    PixelBufferLength {
        /// `width * height * 4`.
        expected: usize,
        /// The length that was passed in.
        actual: usize,
    },

    /// A value could not be represented in base83.
    #[error("encoding error: {0}")]
    EncodingError(String),
}

impl BlurhashError {
    /// Classify the error as a format problem or a range problem.
    ///
    /// ```
    /// use blurhash_codec::{decode, ErrorKind};
    /// let err = decode("LEHV6", 8, 8, 1.0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Format);
    /// ```
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidLength { .. }
            | Self::InvalidBase83Character { .. }
            | Self::Base83Overflow { .. }
            | Self::InvalidSizeFlag(_) => ErrorKind::Format,
            Self::InvalidComponentCount { .. }
            | Self::InvalidDimensions { .. }
            | Self::PixelBufferLength { .. }
            | Self::EncodingError(_) => ErrorKind::Range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let format = BlurhashError::InvalidLength {
            expected: 28,
            actual: 27,
        };
        assert_eq!(format.kind(), ErrorKind::Format);

        let range = BlurhashError::InvalidComponentCount {
            component: "x",
            value: 10,
        };
        assert_eq!(range.kind(), ErrorKind::Range);

        let overflow = BlurhashError::Base83Overflow { digits: 28 };
        assert_eq!(overflow.kind(), ErrorKind::Format);
    }

    #[test]
    fn test_length_message_mentions_both_lengths() {
        let err = BlurhashError::InvalidLength {
            expected: 28,
            actual: 12,
        };
        let message = err.to_string();
        assert!(message.contains("28"), "{message}");
        assert!(message.contains("12"), "{message}");
    }
}
