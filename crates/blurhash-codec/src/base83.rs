//! Base83 encoding and decoding used by the BlurHash format.
//!
//! Every field of a BlurHash string is a fixed-width, big-endian base83
//! integer over a fixed 83-character alphabet. The position of a character
//! in [`ALPHABET`] is its digit value, so the ordering is part of the format.

use crate::error::BlurhashError;

/// The 83-character alphabet used by BlurHash base83 encoding.
pub const ALPHABET: &[u8; 83] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz#$%*+,-.:;=?@[]^_{|}~";

/// Marker for bytes that are not part of the alphabet.
const INVALID: u8 = 255;

/// Lookup table mapping byte values to their base83 digit value.
const fn build_decode_lut() -> [u8; 256] {
    let mut lut = [INVALID; 256];
    let mut i = 0;
    while i < 83 {
        lut[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    lut
}

static DECODE_LUT: [u8; 256] = build_decode_lut();

/// Return the digit value of `byte`, or `None` if it is not in the alphabet.
#[inline]
pub fn digit(byte: u8) -> Option<u8> {
    match DECODE_LUT[byte as usize] {
        INVALID => None,
        value => Some(value),
    }
}

/// Returns `true` if `ch` belongs to the base83 alphabet.
#[inline]
pub fn is_base83_char(ch: char) -> bool {
    u8::try_from(ch).ok().and_then(digit).is_some()
}

fn invalid_byte(byte: u8, position: usize) -> BlurhashError {
    let character = if byte.is_ascii() {
        char::from(byte)
    } else {
        char::REPLACEMENT_CHARACTER
    };
    BlurhashError::InvalidBase83Character {
        character,
        position,
    }
}

fn decode_digits(digits: &[u8], offset: usize) -> Result<u64, BlurhashError> {
    let mut value: u64 = 0;
    for (i, &byte) in digits.iter().enumerate() {
        let digit = digit(byte).ok_or_else(|| invalid_byte(byte, offset + i))?;
        value = value
            .checked_mul(83)
            .and_then(|v| v.checked_add(digit as u64))
            .ok_or(BlurhashError::Base83Overflow {
                digits: digits.len(),
            })?;
    }
    Ok(value)
}

/// Decode a whole base83 string (most significant digit first) into an integer.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidBase83Character`] if the input contains
/// a character not in the base83 alphabet, and
/// [`BlurhashError::Base83Overflow`] if the value does not fit in a `u64`.
///
/// # Examples
///
/// ```
/// use blurhash_codec::base83::decode;
/// assert_eq!(decode("0").unwrap(), 0);
/// assert_eq!(decode("~").unwrap(), 82);
/// assert_eq!(decode(&b"10"[..]).unwrap(), 83);
/// ```
pub fn decode<T: AsRef<[u8]> + ?Sized>(digits: &T) -> Result<u64, BlurhashError> {
    decode_digits(digits.as_ref(), 0)
}

/// Decode the characters `text[start..end]` as base83 digits.
///
/// Error positions are reported relative to the start of `text`.
///
/// # Errors
///
/// Returns [`BlurhashError::InvalidLength`] if `end` runs past the end of
/// `text`, and [`BlurhashError::InvalidBase83Character`] for characters
/// outside the alphabet.
///
/// ```
/// use blurhash_codec::base83::decode_range;
/// assert_eq!(decode_range("LEHV6nWB", 0, 1).unwrap(), 21);
/// ```
pub fn decode_range(text: &str, start: usize, end: usize) -> Result<u64, BlurhashError> {
    let digits = text
        .as_bytes()
        .get(start..end)
        .ok_or(BlurhashError::InvalidLength {
            expected: end,
            actual: text.len(),
        })?;
    decode_digits(digits, start)
}

/// Append `length` base83 digits of `value` to `out`.
///
/// # Errors
///
/// Returns [`BlurhashError::EncodingError`] if `value` does not fit in
/// `length` digits. Nothing is written in that case.
pub fn encode_into(value: u64, length: usize, out: &mut String) -> Result<(), BlurhashError> {
    // 83^length is the first value that does NOT fit.
    let max_value = u32::try_from(length)
        .ok()
        .and_then(|len| 83u64.checked_pow(len))
        .unwrap_or(u64::MAX);
    if value >= max_value {
        return Err(BlurhashError::EncodingError(format!(
            "value {value} is too large for {length} base83 digits (max {})",
            max_value - 1
        )));
    }

    let mut digits = vec![ALPHABET[0]; length];
    let mut remaining = value;
    for slot in digits.iter_mut().rev() {
        *slot = ALPHABET[(remaining % 83) as usize];
        remaining /= 83;
    }
    out.extend(digits.into_iter().map(char::from));
    Ok(())
}

/// Encode an integer into a base83 string of exactly `length` characters.
///
/// # Errors
///
/// Returns [`BlurhashError::EncodingError`] if the value is too large to
/// be represented in the given number of digits.
///
/// # Examples
///
/// ```
/// use blurhash_codec::base83::encode;
/// assert_eq!(encode(0, 1).unwrap(), "0");
/// assert_eq!(encode(82, 1).unwrap(), "~");
/// assert_eq!(encode(83, 2).unwrap(), "10");
/// ```
pub fn encode(value: u64, length: usize) -> Result<String, BlurhashError> {
    let mut result = String::with_capacity(length);
    encode_into(value, length, &mut result)?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_decode_single_chars() {
        assert_eq!(decode("0").unwrap(), 0);
        assert_eq!(decode("1").unwrap(), 1);
        assert_eq!(decode("A").unwrap(), 10);
        assert_eq!(decode("a").unwrap(), 36);
        assert_eq!(decode("~").unwrap(), 82);
    }

    #[test]
    fn test_encode_single_chars() {
        assert_eq!(encode(0, 1).unwrap(), "0");
        assert_eq!(encode(1, 1).unwrap(), "1");
        assert_eq!(encode(82, 1).unwrap(), "~");
    }

    #[rstest]
    #[case::one_digit(1)]
    #[case::two_digits(2)]
    #[case::four_digits(4)]
    fn test_roundtrip_boundaries(#[case] length: usize) {
        let limit = 83u64.pow(length as u32);
        for value in [0, 1, 82, limit / 2, limit - 1] {
            let encoded = encode(value, length).unwrap();
            assert_eq!(encoded.len(), length);
            assert_eq!(decode(&encoded).unwrap(), value, "roundtrip failed for {value}");
        }
    }

    #[test]
    fn test_encode_with_padding() {
        assert_eq!(encode(0, 4).unwrap(), "0000");
        assert_eq!(encode(1, 4).unwrap(), "0001");
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = String::from("L");
        encode_into(21, 1, &mut out).unwrap();
        encode_into(83, 2, &mut out).unwrap();
        assert_eq!(out, "LL10");
    }

    #[test]
    fn test_decode_multi_char() {
        assert_eq!(decode("10").unwrap(), 83);
        assert_eq!(decode("00").unwrap(), 0);
    }

    #[test]
    fn test_decode_range() {
        let hash = "L6PZfSi_.AyE_3t7t7R**0o#DgR4";
        assert_eq!(decode_range(hash, 0, 1).unwrap(), 21);
        assert_eq!(decode_range(hash, 2, 6).unwrap(), 14_539_221);
        assert!(decode_range(hash, 26, 30).is_err());
    }

    #[test]
    fn test_decode_invalid_char() {
        assert_eq!(
            decode("0!").unwrap_err(),
            BlurhashError::InvalidBase83Character {
                character: '!',
                position: 1
            }
        );
        assert!(decode(" ").is_err());
        assert!(decode("é").is_err());
    }

    #[test]
    fn test_decode_range_reports_absolute_position() {
        let err = decode_range("00 000", 1, 4).unwrap_err();
        assert_eq!(
            err,
            BlurhashError::InvalidBase83Character {
                character: ' ',
                position: 2
            }
        );
    }

    #[test]
    fn test_decode_overflow_is_format_error() {
        // 83^10 < 2^64 < 83^11
        assert!(decode("~~~~~~~~~~").is_ok());
        let err = decode("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap_err();
        assert_eq!(err, BlurhashError::Base83Overflow { digits: 28 });
        assert_eq!(err.kind(), crate::ErrorKind::Format);
        assert_eq!(
            decode_range("00~~~~~~~~~~~", 1, 13).unwrap_err(),
            BlurhashError::Base83Overflow { digits: 12 }
        );
    }

    #[test]
    fn test_encode_value_too_large() {
        assert!(encode(83, 1).is_err());
        assert!(encode(83 * 83, 2).is_err());
        let mut out = String::new();
        assert!(encode_into(83, 1, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_alphabet_completeness() {
        for (i, &ch) in ALPHABET.iter().enumerate() {
            assert_eq!(digit(ch), Some(i as u8));
            assert!(is_base83_char(ch as char));
        }
        assert!(!is_base83_char('!'));
        assert!(!is_base83_char('é'));
    }
}
