//! Textual form of the 128-bit identifiers stored in `*_UID` columns.
//!
//! Identifiers are written as 24 characters: the 16 identifier bytes are
//! shuffled into the order the file format uses, then expanded three bytes
//! to four symbols over a private 64-symbol alphabet with `=` padding. The
//! alphabet has no lower case letters so the text survives case folding.
//!
//! The byte order has only been matched against sample files, never against
//! an identifier from an independent source. Keep it bit-for-bit; it is not a
//! general purpose UUID encoding.

use base64::alphabet::Alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use thiserror::Error;
use uuid::Uuid;

/// The 64 symbols, in value order
pub const SYMBOLS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ!#$%&()*+,-./:;<>?@[]^_`{|}~";

/// Fills the trailing partial group
pub const PADDING: char = '=';

/// Length of an encoded identifier
pub const ENCODED_LEN: usize = 24;

/// Position `i` of the on-disk byte sequence holds identifier byte `BYTE_ORDER[i]`,
/// counting identifier bytes big-endian (0 = most significant).
const BYTE_ORDER: [usize; 16] = [3, 2, 1, 0, 5, 4, 7, 6, 15, 14, 13, 12, 11, 10, 9, 8];

const ALPHABET: Alphabet = match Alphabet::new(SYMBOLS) {
    Ok(alphabet) => alphabet,
    Err(_) => panic!("identifier alphabet must be 64 distinct printable symbols"),
};

const CODEC: GeneralPurpose = GeneralPurpose::new(
    &ALPHABET,
    GeneralPurposeConfig::new()
        .with_encode_padding(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

#[derive(Debug, Error)]
pub enum ParseGuidError {
    #[error("malformed identifier text: {0}")]
    Symbols(#[from] base64::DecodeError),

    #[error("identifier decodes to {0} bytes, expected 16")]
    Length(usize),
}

/// Encode an identifier in its 24-character on-disk form
pub fn format(id: &Uuid) -> String {
    let bytes = id.as_bytes();
    let mut shuffled = [0u8; 16];
    for (slot, &source) in shuffled.iter_mut().zip(BYTE_ORDER.iter()) {
        *slot = bytes[source];
    }
    CODEC.encode(shuffled)
}

/// Decode the on-disk form of an identifier.
///
/// Characters outside the alphabet are skipped rather than rejected.
pub fn parse(value: &str) -> Result<Uuid, ParseGuidError> {
    let symbols: String = value
        .chars()
        .filter(|&c| c == PADDING || SYMBOLS.contains(c))
        .collect();

    if symbols.len() != value.len() {
        log::warn!(
            "Skipped {} unrecognised character(s) in identifier {:?}",
            value.chars().count() - symbols.len(),
            value
        );
    }

    let shuffled = CODEC.decode(symbols.as_bytes())?;
    if shuffled.len() != 16 {
        return Err(ParseGuidError::Length(shuffled.len()));
    }

    let mut bytes = [0u8; 16];
    for (&byte, &target) in shuffled.iter().zip(BYTE_ORDER.iter()) {
        bytes[target] = byte;
    }
    Ok(Uuid::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn with_byte(index: usize, value: u8) -> Uuid {
        let mut bytes = [0u8; 16];
        bytes[index] = value;
        Uuid::from_bytes(bytes)
    }

    #[test]
    fn test_alphabet_shape() {
        assert_eq!(SYMBOLS.len(), 64);
        assert!(!SYMBOLS.contains(PADDING));
        assert!(!SYMBOLS.chars().any(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_nil_identifier() {
        let text = format(&Uuid::nil());
        assert_eq!(text, "0000000000000000000000==");
        assert_eq!(text.len(), ENCODED_LEN);
        assert_eq!(parse(&text).unwrap(), Uuid::nil());
    }

    #[test]
    fn test_high_half_is_word_swapped() {
        // most significant byte lands at on-disk position 3
        assert_eq!(format(&with_byte(0, 0x01)), "00000G0000000000000000==");
    }

    #[test]
    fn test_low_half_is_reversed() {
        // least significant byte lands at on-disk position 8
        assert_eq!(format(&with_byte(15, 0xFF)), "00000000003~0000000000==");
    }

    #[test]
    fn test_parse_known_text() {
        assert_eq!(parse("00000G0000000000000000==").unwrap(), with_byte(0, 0x01));
        assert_eq!(parse("00000000003~0000000000==").unwrap(), with_byte(15, 0xFF));
    }

    #[test]
    fn test_unknown_characters_are_skipped() {
        let id = Uuid::from_u128(0x0123_4567_89AB_CDEF_FEDC_BA98_7654_3210);
        let text = format(&id);
        let noisy = format!(" {}x\n", &text[..10]) + &text[10..];
        assert_eq!(parse(&noisy).unwrap(), id);
    }

    #[test]
    fn test_short_text_is_rejected() {
        assert!(matches!(parse("0000"), Err(ParseGuidError::Length(3))));
        assert!(parse("").is_err());
    }

    #[test]
    fn test_every_identifier_is_24_chars() {
        for seed in [0u128, 1, u128::MAX, 0xDEAD_BEEF << 64] {
            let text = format(&Uuid::from_u128(seed));
            assert_eq!(text.len(), ENCODED_LEN);
            assert!(text.ends_with("=="));
        }
    }

    proptest! {
        #[test]
        fn prop_format_then_parse_round_trips(raw in any::<u128>()) {
            let id = Uuid::from_u128(raw);
            prop_assert_eq!(parse(&format(&id)).unwrap(), id);
        }
    }
}
