//! Structural validation of BlurHash strings.

use crate::base83;
use crate::decode_impl::components;
use crate::error::BlurhashError;

/// Check that `blurhash` is structurally valid and return its component counts.
///
/// The checks run in order: the string is at least 6 characters long, the
/// size flag is a valid digit describing at most 9x9 components, the length
/// is exactly `4 + 2 * components_x * components_y`, and every character
/// belongs to the base83 alphabet.
///
/// # Errors
///
/// Returns the first failed check as a [`BlurhashError`] of
/// [`ErrorKind::Format`](crate::ErrorKind::Format).
///
/// # Examples
///
/// ```
/// use blurhash_codec::validate;
/// assert_eq!(validate("LEHV6nWB2yk8pyo0adR*.7kCMdnj").unwrap(), (4, 3));
/// assert!(validate("LEHV6nWB").is_err());
/// ```
pub fn validate(blurhash: &str) -> Result<(u32, u32), BlurhashError> {
    let (size_x, size_y) = components(blurhash)?;

    let expected = 4 + 2 * (size_x * size_y) as usize;
    if blurhash.len() != expected {
        return Err(BlurhashError::InvalidLength {
            expected,
            actual: blurhash.len(),
        });
    }

    if let Some((position, character)) = blurhash
        .char_indices()
        .find(|&(_, ch)| !base83::is_base83_char(ch))
    {
        return Err(BlurhashError::InvalidBase83Character {
            character,
            position,
        });
    }

    Ok((size_x, size_y))
}

/// Report whether `blurhash` is valid, with a human-readable reason if not.
///
/// Never fails; the caller decides whether an invalid hash is fatal.
///
/// # Examples
///
/// ```
/// use blurhash_codec::is_valid;
/// assert_eq!(is_valid("LEHV6nWB2yk8pyo0adR*.7kCMdnj"), (true, None));
///
/// let (valid, reason) = is_valid("LEHV6nWB");
/// assert!(!valid);
/// assert!(reason.unwrap().contains("28"));
/// ```
pub fn is_valid(blurhash: &str) -> (bool, Option<String>) {
    match validate(blurhash) {
        Ok(_) => (true, None),
        Err(err) => (false, Some(err.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    const KNOWN_HASH: &str = "L6PZfSi_.AyE_3t7t7R**0o#DgR4";

    #[test]
    fn test_valid_hashes() {
        assert_eq!(validate(KNOWN_HASH).unwrap(), (4, 3));
        assert_eq!(validate("00TSUA").unwrap(), (1, 1));
    }

    #[test]
    fn test_too_short() {
        let err = validate("L6PZf").unwrap_err();
        assert_eq!(
            err,
            BlurhashError::InvalidLength {
                expected: 6,
                actual: 5
            }
        );
        assert!(validate("").is_err());
    }

    #[test]
    fn test_length_mismatch_reports_both_lengths() {
        let (valid, reason) = is_valid(&KNOWN_HASH[..20]);
        assert!(!valid);
        let reason = reason.unwrap();
        assert!(reason.contains("20"), "{reason}");
        assert!(reason.contains("28"), "{reason}");

        let longer = format!("{KNOWN_HASH}00");
        assert_eq!(
            validate(&longer).unwrap_err(),
            BlurhashError::InvalidLength {
                expected: 28,
                actual: 30
            }
        );
    }

    #[test]
    fn test_invalid_size_flag_character() {
        let err = validate("!6PZfSi_.AyE_3t7t7R**0o#DgR4").unwrap_err();
        assert_eq!(
            err,
            BlurhashError::InvalidBase83Character {
                character: '!',
                position: 0
            }
        );
    }

    #[test]
    fn test_size_flag_out_of_range() {
        // '~' is 82: nine columns would need a tenth row.
        let hash = format!("~{}", "0".repeat(4 + 2 * 2 * 10 - 1));
        assert_eq!(
            validate(&hash).unwrap_err(),
            BlurhashError::InvalidSizeFlag(82)
        );
    }

    #[test]
    fn test_invalid_payload_character() {
        let mut bad = String::from(KNOWN_HASH);
        bad.replace_range(10..11, " ");
        let err = validate(&bad).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(
            err,
            BlurhashError::InvalidBase83Character {
                character: ' ',
                position: 10
            }
        );
        let (valid, reason) = is_valid(&bad);
        assert!(!valid);
        assert!(!reason.unwrap().is_empty());
    }

    #[test]
    fn test_non_ascii_is_rejected() {
        // Same byte length as a 1x1 hash, but with a multi-byte character.
        let hash = "00é000";
        assert_eq!(hash.len(), 7);
        assert!(validate(hash).is_err());
        let hash = "00é00";
        assert_eq!(hash.len(), 6);
        assert_eq!(
            validate(hash).unwrap_err(),
            BlurhashError::InvalidBase83Character {
                character: 'é',
                position: 2
            }
        );
    }
}
