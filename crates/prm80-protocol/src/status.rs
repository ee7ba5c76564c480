//! System status record (`E` command)
//!
//! The firmware answers `E` with one run of uppercase hex, no separators:
//!
//! ```text
//! 16 00 0C 00 10 00 7970 8020 18
//! MM CC SS QQ VV LL RRRR TTTT II
//! ```
//!
//! mode, channel, channel state, squelch, volume, lock, RX synthesizer,
//! TX synthesizer, RSSI.

use crate::error::ParseError;
use crate::field::Field;

/// Frequency step of one synthesizer unit, in Hz
pub const PLL_STEP_HZ: u64 = 12_500;

/// Convert a synthesizer value to Hz
pub fn pll_to_hz(pll: u16) -> u64 {
    pll as u64 * PLL_STEP_HZ
}

/// Decoded `E` response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemStatus {
    pub mode: u8,
    pub channel: u8,
    pub channel_state: u8,
    pub squelch: u8,
    pub volume: u8,
    pub lock: u8,
    pub rx_pll: u16,
    pub tx_pll: u16,
    pub rssi: u8,
}

impl SystemStatus {
    /// Length of the encoded record in bytes
    pub const LEN: usize = 22;

    /// Byte offset of the squelch field
    pub const SQUELCH_OFFSET: usize = 6;

    /// Render the record exactly as the firmware prints it
    pub fn encode(&self) -> String {
        let mut out = String::with_capacity(Self::LEN);
        for byte in [
            self.mode,
            self.channel,
            self.channel_state,
            self.squelch,
            self.volume,
            self.lock,
        ] {
            out.push_str(&Field::HEX2.encode(byte as u16));
        }
        out.push_str(&Field::HEX4.encode(self.rx_pll));
        out.push_str(&Field::HEX4.encode(self.tx_pll));
        out.push_str(&Field::HEX2.encode(self.rssi as u16));
        out
    }

    /// Parse a record, ignoring anything after the first [`Self::LEN`] bytes
    pub fn parse(data: &[u8]) -> Result<Self, ParseError> {
        if data.len() < Self::LEN {
            return Err(ParseError::Incomplete {
                expected: Self::LEN,
                actual: data.len(),
            });
        }

        let byte = |offset: usize| Field::HEX2.decode_u8(&data[offset..offset + 2]);
        let word = |offset: usize| Field::HEX4.decode(&data[offset..offset + 4]);

        Ok(Self {
            mode: byte(0)?,
            channel: byte(2)?,
            channel_state: byte(4)?,
            squelch: byte(Self::SQUELCH_OFFSET)?,
            volume: byte(8)?,
            lock: byte(10)?,
            rx_pll: word(12)?,
            tx_pll: word(16)?,
            rssi: byte(20)?,
        })
    }

    /// Receive frequency in Hz
    pub fn rx_frequency_hz(&self) -> u64 {
        pll_to_hz(self.rx_pll)
    }

    /// Transmit frequency in Hz
    pub fn tx_frequency_hz(&self) -> u64 {
        pll_to_hz(self.tx_pll)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn power_on_status() -> SystemStatus {
        SystemStatus {
            mode: 0x16,
            channel: 0,
            channel_state: 0x0C,
            squelch: 0,
            volume: 0x10,
            lock: 0,
            rx_pll: 0x7970,
            tx_pll: 0x8020,
            rssi: 0x18,
        }
    }

    #[test]
    fn test_encode_power_on_status() {
        assert_eq!(power_on_status().encode(), "16000C0010007970802018");
    }

    #[test]
    fn test_parse_power_on_status() {
        let status = SystemStatus::parse(b"16000C0010007970802018").unwrap();
        assert_eq!(status, power_on_status());
    }

    #[test]
    fn test_parse_ignores_line_ending() {
        let status = SystemStatus::parse(b"16000C0010007970802018\r\n>").unwrap();
        assert_eq!(status.rssi, 0x18);
    }

    #[test]
    fn test_parse_short_record() {
        assert_eq!(
            SystemStatus::parse(b"1240080AFF0033F02D40"),
            Err(ParseError::Incomplete {
                expected: 22,
                actual: 20
            })
        );
    }

    #[test]
    fn test_squelch_offset() {
        let status = SystemStatus {
            squelch: 7,
            ..power_on_status()
        };
        let text = status.encode();
        let off = SystemStatus::SQUELCH_OFFSET;
        assert_eq!(&text[off..off + 2], "07");
    }

    #[test]
    fn test_pll_to_hz() {
        assert_eq!(pll_to_hz(0x8020), 410_000_000);
        assert_eq!(power_on_status().tx_frequency_hz(), 410_000_000);
        assert_eq!(power_on_status().rx_frequency_hz(), 388_600_000);
    }

    proptest! {
        #[test]
        fn encoded_status_parses_back(
            mode in any::<u8>(),
            channel in 0u8..100,
            squelch in 0u8..100,
            rx_pll in any::<u16>(),
            tx_pll in any::<u16>(),
        ) {
            let status = SystemStatus { mode, channel, squelch, rx_pll, tx_pll, ..power_on_status() };
            let text = status.encode();
            prop_assert_eq!(text.len(), SystemStatus::LEN);
            prop_assert_eq!(SystemStatus::parse(text.as_bytes()), Ok(status));
        }
    }
}
