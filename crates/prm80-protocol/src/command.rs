//! PRM80 command codes
//!
//! Every exchange starts with a single ASCII byte naming the command. Codes
//! are case-insensitive. Bytes outside the table are answered with
//! [`UNKNOWN_REPLY`](crate::UNKNOWN_REPLY).

use crate::field::Field;
use crate::prompt;
use crate::CRLF;

/// A decoded command byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// `V` - print firmware version
    Version,
    /// `N` - set current channel
    SelectChannel,
    /// `K` - set lock byte
    Lock,
    /// `F` - set squelch
    Squelch,
    /// `O` - set volume
    Volume,
    /// `D` - set mode byte
    Mode,
    /// `T` - set current channel state
    ChannelState,
    /// `U` - print the internal RAM
    RamDump,
    /// `Q` - set number of programmed channels
    ChannelCount,
    /// `P` - edit or add a channel
    EditChannel,
    /// `C` - print channel list
    ChannelList,
    /// `R` - set RX/TX synthesizer values
    SetSynthesizer,
    /// `E` - show system state
    SystemStatus,
    /// `A` - RSSI, squelch and transmit status
    QuickStatus,
    /// `#` - ping
    Ping,
    /// Anything else, including `*`
    Unknown(u8),
}

/// Prompt-and-read shape shared by the single-parameter commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Setting {
    /// Text written before the read
    pub prompt: &'static [u8],
    /// Parameter read after the prompt
    pub field: Field,
    /// Bytes written after the read, before the prompt cue
    pub trailer: &'static [u8],
}

impl Command {
    /// Every recognised command, in firmware help-page order
    pub const ALL: [Command; 15] = [
        Command::Version,
        Command::SelectChannel,
        Command::Lock,
        Command::Squelch,
        Command::Volume,
        Command::Mode,
        Command::ChannelState,
        Command::RamDump,
        Command::ChannelCount,
        Command::EditChannel,
        Command::ChannelList,
        Command::SetSynthesizer,
        Command::SystemStatus,
        Command::QuickStatus,
        Command::Ping,
    ];

    /// Decode a command byte, folding lowercase letters to uppercase
    pub fn from_byte(byte: u8) -> Self {
        match byte.to_ascii_uppercase() {
            b'V' => Command::Version,
            b'N' => Command::SelectChannel,
            b'K' => Command::Lock,
            b'F' => Command::Squelch,
            b'O' => Command::Volume,
            b'D' => Command::Mode,
            b'T' => Command::ChannelState,
            b'U' => Command::RamDump,
            b'Q' => Command::ChannelCount,
            b'P' => Command::EditChannel,
            b'C' => Command::ChannelList,
            b'R' => Command::SetSynthesizer,
            b'E' => Command::SystemStatus,
            b'A' => Command::QuickStatus,
            b'#' => Command::Ping,
            _ => Command::Unknown(byte),
        }
    }

    /// Canonical wire byte
    pub fn code(&self) -> u8 {
        match self {
            Command::Version => b'V',
            Command::SelectChannel => b'N',
            Command::Lock => b'K',
            Command::Squelch => b'F',
            Command::Volume => b'O',
            Command::Mode => b'D',
            Command::ChannelState => b'T',
            Command::RamDump => b'U',
            Command::ChannelCount => b'Q',
            Command::EditChannel => b'P',
            Command::ChannelList => b'C',
            Command::SetSynthesizer => b'R',
            Command::SystemStatus => b'E',
            Command::QuickStatus => b'A',
            Command::Ping => b'#',
            Command::Unknown(byte) => *byte,
        }
    }

    /// Short human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            Command::Version => "version",
            Command::SelectChannel => "select channel",
            Command::Lock => "lock",
            Command::Squelch => "squelch",
            Command::Volume => "volume",
            Command::Mode => "mode",
            Command::ChannelState => "channel state",
            Command::RamDump => "RAM dump",
            Command::ChannelCount => "channel count",
            Command::EditChannel => "edit channel",
            Command::ChannelList => "channel list",
            Command::SetSynthesizer => "set synthesizer",
            Command::SystemStatus => "system status",
            Command::QuickStatus => "quick status",
            Command::Ping => "ping",
            Command::Unknown(_) => "unknown",
        }
    }

    /// Prompt/field/trailer for commands that set exactly one value
    ///
    /// `Q` is the only one with a trailer: the firmware emits an extra CRLF
    /// after the channel count is read.
    pub fn setting(&self) -> Option<Setting> {
        let (prompt, field, trailer) = match self {
            Command::SelectChannel => (prompt::CHANNEL, Field::DEC2, &[][..]),
            Command::Lock => (prompt::LOCK, Field::HEX2, &[][..]),
            Command::Squelch => (prompt::SQUELCH, Field::DEC2, &[][..]),
            Command::Volume => (prompt::VOLUME, Field::DEC2, &[][..]),
            Command::Mode => (prompt::MODE, Field::HEX2, &[][..]),
            // The prompt ends in `$` but the firmware reads the digits as decimal
            Command::ChannelState => (prompt::CHANNEL_STATE, Field::DEC2, &[][..]),
            Command::ChannelCount => (prompt::CHANNEL_COUNT, Field::DEC2, CRLF),
            _ => return None,
        };
        Some(Setting {
            prompt,
            field,
            trailer,
        })
    }

    /// Whether this byte is in the command table
    pub fn is_known(&self) -> bool {
        !matches!(self, Command::Unknown(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_byte_round_trips_all_codes() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_byte(cmd.code()), cmd);
        }
    }

    #[test]
    fn test_from_byte_is_case_insensitive() {
        assert_eq!(Command::from_byte(b'v'), Command::Version);
        assert_eq!(Command::from_byte(b'e'), Command::SystemStatus);
        assert_eq!(Command::from_byte(b'q'), Command::ChannelCount);
    }

    #[test]
    fn test_unknown_bytes() {
        assert_eq!(Command::from_byte(b'Z'), Command::Unknown(b'Z'));
        assert_eq!(Command::from_byte(b'*'), Command::Unknown(b'*'));
        assert_eq!(Command::from_byte(b'H'), Command::Unknown(b'H'));
        assert_eq!(Command::from_byte(0x00), Command::Unknown(0x00));
        assert!(!Command::from_byte(b'0').is_known());
    }

    #[test]
    fn test_unknown_keeps_original_byte() {
        assert_eq!(Command::from_byte(b'z').code(), b'z');
    }

    #[test]
    fn test_only_channel_count_has_trailer() {
        for cmd in Command::ALL {
            if let Some(setting) = cmd.setting() {
                if cmd == Command::ChannelCount {
                    assert_eq!(setting.trailer, b"\r\n");
                } else {
                    assert!(setting.trailer.is_empty(), "{} has a trailer", cmd.name());
                }
            }
        }
    }

    #[test]
    fn test_setting_fields() {
        assert_eq!(Command::Lock.setting().unwrap().field, Field::HEX2);
        assert_eq!(Command::Mode.setting().unwrap().field, Field::HEX2);
        assert_eq!(Command::ChannelState.setting().unwrap().field, Field::DEC2);
        assert!(Command::SetSynthesizer.setting().is_none());
        assert!(Command::EditChannel.setting().is_none());
        assert!(Command::Version.setting().is_none());
    }
}
