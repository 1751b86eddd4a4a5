//! Base-32 text form of a geohash.

use crate::error::{Result, TileHashError};
use once_cell::sync::Lazy;

use super::bits::encode_bits;

/// The geohash base-32 alphabet. Position in this string is the symbol value.
pub const ALPHABET: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Longest supported text geohash (12 symbols = 60 bits).
pub const MAX_TEXT_LENGTH: u8 = 12;

const BITS_PER_SYMBOL: u8 = 5;
const SYMBOL_MASK: u64 = 0x1F;

/// Reverse lookup from ASCII byte to symbol value, case-insensitive.
static DECODE_TABLE: Lazy<[Option<u8>; 128]> = Lazy::new(|| {
    let mut table = [None; 128];
    for (value, &symbol) in ALPHABET.iter().enumerate() {
        table[symbol as usize] = Some(value as u8);
        table[symbol.to_ascii_uppercase() as usize] = Some(value as u8);
    }
    table
});

pub(crate) fn check_length(length: u8) -> Result<()> {
    if !(1..=MAX_TEXT_LENGTH).contains(&length) {
        log::warn!("Rejecting geohash text length of {}", length);
        return Err(TileHashError::InvalidArgument(format!(
            "length out of range: {} (valid range is [1, {}])",
            length, MAX_TEXT_LENGTH
        )));
    }
    Ok(())
}

/// Encode a (lat, lng) point as a base-32 geohash of exactly `length` symbols.
///
/// The output is left-padded with `'0'` when the leading quintets of the hash
/// are zero, so points near the south-west origin keep their full length.
///
/// # Errors
///
/// Returns [`TileHashError::InvalidArgument`] if `length` is not in `1..=12`.
///
/// # Examples
///
/// ```rust
/// use tilehash::geohash::encode_text;
///
/// assert_eq!(encode_text(40.641026, -73.777903, 9)?, "dr5x1nkx4");
/// assert_eq!(encode_text(37.751223, -122.438297, 4)?, "9q8y");
/// assert_eq!(encode_text(-89.9, -179.9, 5)?, "0000d");
/// assert!(encode_text(0.0, 0.0, 13).is_err());
/// # Ok::<(), tilehash::TileHashError>(())
/// ```
pub fn encode_text(lat: f64, lng: f64, length: u8) -> Result<String> {
    check_length(length)?;
    let hash = encode_bits(lat, lng, length * BITS_PER_SYMBOL)?;
    Ok(to_base32(hash, length))
}

/// Render the low `length * 5` bits of `hash` as base-32 text.
///
/// Symbols are emitted most-significant quintet first. This function never
/// validates: it always produces exactly `length` symbols, treating bits
/// beyond the 64-bit integer as zero.
///
/// ```rust
/// use tilehash::geohash::to_base32;
///
/// assert_eq!(to_base32(0b01100_00101, 2), "d5");
/// assert_eq!(to_base32(7, 3), "007");
/// ```
pub fn to_base32(hash: u64, length: u8) -> String {
    let length = usize::from(length);
    let mut buf = vec![ALPHABET[0]; length];
    let mut remaining = hash;

    for slot in buf.iter_mut().rev() {
        if remaining == 0 {
            break;
        }
        *slot = ALPHABET[(remaining & SYMBOL_MASK) as usize];
        remaining >>= BITS_PER_SYMBOL;
    }

    buf.into_iter().map(char::from).collect()
}

/// Render a batch of hashes that share the same text length.
pub fn to_base32_batch<const N: usize>(hashes: &[u64; N], length: u8) -> [String; N] {
    hashes.map(|hash| to_base32(hash, length))
}

/// Parse base-32 text back into its integer form and bit width.
///
/// Uppercase symbols are accepted.
///
/// # Errors
///
/// - [`TileHashError::InvalidArgument`] for empty input or more than 12 symbols
/// - [`TileHashError::InvalidCharacter`] for a symbol outside the alphabet
///
/// # Examples
///
/// ```rust
/// use tilehash::geohash::{encode_bits, from_base32};
///
/// let (hash, bits) = from_base32("9xjddpkjd")?;
/// assert_eq!(bits, 45);
/// assert_eq!(hash, encode_bits(39.855242, -104.672130, 45)?);
/// # Ok::<(), tilehash::TileHashError>(())
/// ```
pub fn from_base32(text: &str) -> Result<(u64, u8)> {
    let length = text.chars().count();
    if length == 0 || length > usize::from(MAX_TEXT_LENGTH) {
        return Err(TileHashError::InvalidArgument(format!(
            "length out of range: {} (valid range is [1, {}])",
            length, MAX_TEXT_LENGTH
        )));
    }

    let mut hash: u64 = 0;
    for (position, character) in text.chars().enumerate() {
        let value = u32::from(character)
            .try_into()
            .ok()
            .and_then(|byte: u8| DECODE_TABLE.get(usize::from(byte)).copied().flatten())
            .ok_or(TileHashError::InvalidCharacter {
                character,
                position,
            })?;
        hash = (hash << BITS_PER_SYMBOL) | u64::from(value);
    }

    Ok((hash, length as u8 * BITS_PER_SYMBOL))
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCATIONS: [(&str, f64, f64, &str); 4] = [
        ("Twitter HQ", 37.777000, -122.416583, "9q8yym4fy"),
        ("Uber HQ", 37.775253, -122.417527, "9q8yykf2b"),
        ("Denver Airport", 39.855242, -104.672130, "9xjddpkjd"),
        ("JFK Airport", 40.641026, -73.777903, "dr5x1nkx4"),
    ];

    #[test]
    fn test_encode_text_prefixes() {
        for (name, lat, lng, geohash) in LOCATIONS {
            for length in 1..=9u8 {
                let text = encode_text(lat, lng, length).unwrap();
                assert_eq!(
                    text,
                    &geohash[..usize::from(length)],
                    "{} [length={}]",
                    name,
                    length
                );
            }
        }
    }

    #[test]
    fn test_encode_text_shorter_lengths() {
        assert_eq!(encode_text(37.751223, -122.438297, 6).unwrap(), "9q8yvb");
        assert_eq!(encode_text(37.751223, -122.438297, 5).unwrap(), "9q8yv");
        assert_eq!(encode_text(37.751223, -122.438297, 4).unwrap(), "9q8y");
    }

    #[test]
    fn test_encode_text_full_length() {
        assert_eq!(encode_text(40.641026, -73.777903, 12).unwrap(), "dr5x1nkx4k25");
    }

    #[test]
    fn test_leading_zero_quintets_are_padded() {
        // South-west corner tiles have all-zero leading groups
        let text = encode_text(-89.9, -179.9, 9).unwrap();
        assert_eq!(text, "0000d60yd");
        assert_eq!(encode_text(-90.0, -180.0, 12).unwrap(), "000000000000");

        for length in 2..=12u8 {
            let longer = encode_text(-89.9, -179.9, length).unwrap();
            let shorter = encode_text(-89.9, -179.9, length - 1).unwrap();
            assert_eq!(longer.len(), usize::from(length));
            assert!(longer.starts_with(&shorter));
        }
    }

    #[test]
    fn test_length_out_of_range() {
        for length in [0u8, 13, u8::MAX] {
            let err = encode_text(0.0, 0.0, length).unwrap_err();
            assert!(matches!(err, TileHashError::InvalidArgument(_)));
            assert!(err.to_string().contains("length out of range"));
        }
    }

    #[test]
    fn test_to_base32_pads_and_orders() {
        assert_eq!(to_base32(0, 3), "000");
        assert_eq!(to_base32(31, 1), "z");
        assert_eq!(to_base32(0b11111_00000, 2), "z0");
        assert_eq!(to_base32(u64::MAX, 13), "gzzzzzzzzzzzz");
        assert_eq!(to_base32(1, 14), "00000000000001");
    }

    #[test]
    fn test_batch() {
        let batch = to_base32_batch(&[0, 1, 31], 2);
        assert_eq!(batch, ["00".to_string(), "01".to_string(), "0z".to_string()]);
    }

    #[test]
    fn test_from_base32_inverts_encoding() {
        for (_, lat, lng, geohash) in LOCATIONS {
            let (hash, bits) = from_base32(geohash).unwrap();
            assert_eq!(bits, 45);
            assert_eq!(hash, encode_bits(lat, lng, bits).unwrap());
            assert_eq!(to_base32(hash, 9), geohash);
        }
    }

    #[test]
    fn test_from_base32_accepts_uppercase() {
        assert_eq!(from_base32("DR5X").unwrap(), from_base32("dr5x").unwrap());
    }

    #[test]
    fn test_from_base32_rejects_bad_input() {
        assert!(matches!(
            from_base32(""),
            Err(TileHashError::InvalidArgument(_))
        ));
        assert!(matches!(
            from_base32("0123456789bcd"),
            Err(TileHashError::InvalidArgument(_))
        ));
        // 'a', 'i', 'l' and 'o' are not part of the alphabet
        match from_base32("9qa") {
            Err(TileHashError::InvalidCharacter {
                character,
                position,
            }) => {
                assert_eq!(character, 'a');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(from_base32("dr5é").is_err());
    }
}
