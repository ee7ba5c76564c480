//! Fixed-width numeric fields
//!
//! Every parameter the PRM80 exchanges is a run of ASCII digits with a width
//! known in advance by both sides. There is no delimiter and no length
//! prefix: a two-digit decimal field is exactly two bytes on the wire.
//!
//! - Decimal fields: unsigned base-10, zero-padded (`07`)
//! - Hex fields: unsigned uppercase base-16, zero-padded (`0C`, `7970`)

use std::fmt;

use crate::error::ParseError;

/// Numeric base of a wire field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Radix {
    /// Base 10
    Decimal,
    /// Base 16, rendered uppercase
    Hex,
}

impl Radix {
    /// Numeric base for `from_str_radix`
    pub fn base(self) -> u32 {
        match self {
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Radix::Decimal => f.write_str("decimal"),
            Radix::Hex => f.write_str("hex"),
        }
    }
}

/// A fixed-width numeric field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field {
    width: usize,
    radix: Radix,
}

impl Field {
    /// Two decimal digits (channel, squelch, volume, channel count)
    pub const DEC2: Field = Field::new(2, Radix::Decimal);
    /// Two hex digits (lock byte, mode byte, status bytes)
    pub const HEX2: Field = Field::new(2, Radix::Hex);
    /// Four hex digits (synthesizer values)
    pub const HEX4: Field = Field::new(4, Radix::Hex);

    /// Create a field descriptor
    pub const fn new(width: usize, radix: Radix) -> Self {
        Self { width, radix }
    }

    /// Number of bytes the field occupies on the wire
    pub fn width(&self) -> usize {
        self.width
    }

    /// Numeric base of the field
    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Decode the field from exactly `width` ASCII bytes
    ///
    /// No validation is done beyond what the integer parser itself performs,
    /// so a leading `+` is accepted the same way the firmware's clients
    /// have always seen it accepted.
    pub fn decode(&self, raw: &[u8]) -> Result<u16, ParseError> {
        if raw.len() != self.width {
            return Err(ParseError::Incomplete {
                expected: self.width,
                actual: raw.len(),
            });
        }

        let invalid = || ParseError::InvalidDigits {
            radix: self.radix,
            raw: String::from_utf8_lossy(raw).into_owned(),
        };

        let text = std::str::from_utf8(raw).map_err(|_| invalid())?;
        let value = u32::from_str_radix(text, self.radix.base()).map_err(|_| invalid())?;

        u16::try_from(value).map_err(|_| ParseError::OutOfRange {
            value,
            max: u16::MAX as u32,
        })
    }

    /// Decode a field that must fit in a single byte
    pub fn decode_u8(&self, raw: &[u8]) -> Result<u8, ParseError> {
        let value = self.decode(raw)?;
        u8::try_from(value).map_err(|_| ParseError::OutOfRange {
            value: value as u32,
            max: u8::MAX as u32,
        })
    }

    /// Render a value zero-padded to the field width
    pub fn encode(&self, value: u16) -> String {
        match self.radix {
            Radix::Decimal => format!("{:0width$}", value, width = self.width),
            Radix::Hex => format!("{:0width$X}", value, width = self.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_decode_decimal() {
        assert_eq!(Field::DEC2.decode(b"07"), Ok(7));
        assert_eq!(Field::DEC2.decode(b"99"), Ok(99));
        assert_eq!(Field::DEC2.decode(b"00"), Ok(0));
    }

    #[test]
    fn test_decode_hex_is_case_insensitive() {
        assert_eq!(Field::HEX2.decode(b"0c"), Ok(0x0C));
        assert_eq!(Field::HEX2.decode(b"FF"), Ok(0xFF));
        assert_eq!(Field::HEX4.decode(b"7970"), Ok(0x7970));
        assert_eq!(Field::HEX4.decode(b"81b0"), Ok(0x81B0));
    }

    #[test]
    fn test_decode_rejects_non_digits() {
        let err = Field::DEC2.decode(b"1A").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidDigits {
                radix: Radix::Decimal,
                raw: "1A".into()
            }
        );
        assert!(Field::HEX2.decode(b"G0").is_err());
        assert!(Field::HEX2.decode(&[0xFF, 0x30]).is_err());
    }

    #[test]
    fn test_decode_accepts_leading_plus() {
        assert_eq!(Field::DEC2.decode(b"+7"), Ok(7));
    }

    #[test]
    fn test_decode_wrong_width() {
        assert_eq!(
            Field::HEX4.decode(b"79"),
            Err(ParseError::Incomplete {
                expected: 4,
                actual: 2
            })
        );
    }

    #[test]
    fn test_decode_u8_out_of_range() {
        let wide = Field::new(3, Radix::Decimal);
        assert_eq!(wide.decode_u8(b"255"), Ok(255));
        assert_eq!(
            wide.decode_u8(b"256"),
            Err(ParseError::OutOfRange {
                value: 256,
                max: 255
            })
        );
    }

    #[test]
    fn test_encode_zero_pads() {
        assert_eq!(Field::DEC2.encode(5), "05");
        assert_eq!(Field::HEX2.encode(0x0C), "0C");
        assert_eq!(Field::HEX4.encode(0x1F), "001F");
        assert_eq!(Field::HEX4.encode(0xABCD), "ABCD");
    }

    proptest! {
        #[test]
        fn decimal_field_preserves_value(value in 0u16..100) {
            let text = Field::DEC2.encode(value);
            prop_assert_eq!(text.len(), 2);
            prop_assert_eq!(Field::DEC2.decode(text.as_bytes()), Ok(value));
        }

        #[test]
        fn hex_field_is_uppercase(value in any::<u16>()) {
            let text = Field::HEX4.encode(value);
            prop_assert_eq!(text.len(), 4);
            prop_assert!(!text.chars().any(|c| c.is_ascii_lowercase()));
        }
    }
}
