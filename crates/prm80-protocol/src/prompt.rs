//! Fixed texts written by the firmware
//!
//! Prompts are written verbatim before each parameter read. Clients match
//! on them byte for byte, including the trailing space or `$`.

/// `N`: select current channel
pub const CHANNEL: &[u8] = b"Channel : ";
/// `K`: lock byte
pub const LOCK: &[u8] = b"Lock : ";
/// `F`: squelch level
pub const SQUELCH: &[u8] = b"Squelch : ";
/// `O`: volume level
pub const VOLUME: &[u8] = b"Volume : ";
/// `D`: mode byte
pub const MODE: &[u8] = b"Mode : ";
/// `T` and the third step of `P`
pub const CHANNEL_STATE: &[u8] = b"Channel state : $";
/// `Q`: number of programmed channels
pub const CHANNEL_COUNT: &[u8] = b"Channels number (00 to 99) : ";

/// `P` step 1
pub const CHANNEL_TO_SET: &[u8] = b"Channel to set : ";
/// `P` step 2
pub const PLL_VALUE: &[u8] = b"PLL value to load : $";
/// `P` optional confirmation for channels past the programmed count
pub const ADD_CHANNEL: &[u8] = b"This channel number doesn't exist. Add new channel (Y/N) ? ";

/// `R` step 1
pub const RX_FREQUENCY: &[u8] = b"RX frequency : ";
/// `R` step 2, preceded by its own line break
pub const TX_FREQUENCY: &[u8] = b"\r\nTX frequency : ";

/// `U` header line
pub const RAM_DUMP_HEADER: &[u8] = b"Display the 256 bytes from internal RAM : \r\n";
/// `C` header line
pub const CHANNEL_LIST_HEADER: &[u8] = b"Channels list :\r\n";
