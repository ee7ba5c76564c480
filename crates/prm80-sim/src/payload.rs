//! Canned firmware output
//!
//! The simulator does not model RAM or channel memory; `U`, `C` and `A`
//! replay captures of a real PRM8060.

use prm80_protocol::{prompt, Field, CRLF};

/// Version string of a PRM8060 running firmware V5
pub const DEFAULT_VERSION: &str = "PRM8060 V5.0 430";

/// Signal strength reported in the `E` record
pub const SIMULATED_RSSI: u8 = 0x18;

/// Reply to `A`: RSSI followed by squelch/transmit flags
pub const QUICK_STATUS: &[u8] = b"1801";

/// 80C552 internal RAM, 16 rows of 16 bytes. In V4 rssi_hold is at 0x53.
const RAM: [[u8; 16]; 16] = [
    [0x00, 0x00, 0x00, 0xD5, 0x09, 0x00, 0x00, 0x0F, 0x7F, 0x99, 0xD2, 0x7D, 0xB2, 0x93, 0x8F, 0xC5],
    [0x60, 0x8B, 0x43, 0xCA, 0x31, 0x43, 0xBB, 0xBA, 0xF9, 0x27, 0x87, 0x47, 0x06, 0x52, 0xBE, 0x55],
    [0x81, 0x2F, 0xFD, 0x17, 0x01, 0x12, 0xA3, 0x00, 0x13, 0x02, 0x34, 0x96, 0x0B, 0x04, 0x54, 0x7A],
    [0x13, 0x03, 0x00, 0x30, 0xB4, 0x00, 0x03, 0x00, 0xFC, 0x58, 0x71, 0x00, 0x0F, 0x08, 0x08, 0x82],
    [0x9E, 0x86, 0xEE, 0x60, 0x1F, 0x1F, 0x00, 0xFB, 0xFF, 0xFF, 0x44, 0x55, 0xFF, 0x73, 0x5A, 0xF5],
    [0x7E, 0x02, 0x06, 0x72, 0xB7, 0xFF, 0x8D, 0xB1, 0x92, 0x79, 0x93, 0x8D, 0x3E, 0x4E, 0x8E, 0x06],
    [0xDB, 0xC7, 0x3D, 0x11, 0xAE, 0x5A, 0x4F, 0x3D, 0x80, 0x82, 0xD1, 0x8A, 0x88, 0x6C, 0x7B, 0xE5],
    [0x2F, 0x98, 0x4C, 0x72, 0x5B, 0xA4, 0x78, 0x5C, 0x7D, 0x45, 0x46, 0x8C, 0x25, 0x23, 0xBB, 0x82],
    [0x60, 0x1E, 0x2F, 0x42, 0x28, 0x38, 0xE3, 0x7D, 0x94, 0xBC, 0xCA, 0xB4, 0xB1, 0x43, 0xAE, 0x84],
    [0x81, 0x88, 0x75, 0x1A, 0x2D, 0x93, 0x7E, 0xE8, 0xCF, 0x79, 0xB6, 0xE0, 0x0F, 0x31, 0xAD, 0xAA],
    [0x4F, 0x1C, 0x0F, 0x12, 0x55, 0x00, 0x24, 0x13, 0x08, 0xD2, 0x0E, 0xC0, 0x00, 0x20, 0xAF, 0x0E],
    [0x40, 0xFF, 0x40, 0x00, 0xB8, 0x00, 0x0F, 0x0F, 0xB8, 0x0F, 0x10, 0xB8, 0x0F, 0x14, 0x10, 0xFC],
    [0x08, 0xE8, 0xD8, 0x3F, 0x33, 0x20, 0xD9, 0x50, 0x8F, 0x1A, 0xA2, 0xFF, 0xCC, 0xD4, 0x2E, 0x3A],
    [0x12, 0x22, 0xB7, 0x23, 0x2F, 0x8F, 0x64, 0x47, 0x99, 0x21, 0x6C, 0xD8, 0xB4, 0xB0, 0xC3, 0x51],
    [0x90, 0xE8, 0x67, 0x5C, 0x18, 0x5E, 0xAB, 0x2D, 0xBD, 0x71, 0x52, 0x0F, 0x96, 0x6F, 0xDA, 0x56],
    [0x1D, 0xE1, 0x08, 0x42, 0xC2, 0x2D, 0x3B, 0xC7, 0x87, 0x23, 0x88, 0xE3, 0x1A, 0x95, 0xF1, 0xEE],
];

/// Programmed channels shown by `C`: (channel, PLL value, channel state)
const CHANNELS: [(u8, u16, u8); 3] = [(0, 0x8464, 0x84), (1, 0x81B0, 0x00), (2, 0x8464, 0x0C)];

/// Full `U` output: header plus one `$R0 : HH HH ...` line per row
pub fn ram_dump() -> Vec<u8> {
    let mut out = prompt::RAM_DUMP_HEADER.to_vec();
    for (row, bytes) in RAM.iter().enumerate() {
        let cells: Vec<String> = bytes
            .iter()
            .map(|&b| Field::HEX2.encode(b as u16))
            .collect();
        out.extend_from_slice(format!("${:X}0 : {}", row, cells.join(" ")).as_bytes());
        out.extend_from_slice(CRLF);
    }
    out
}

/// Full `C` output; the last line has no terminator
pub fn channel_list() -> Vec<u8> {
    let lines: Vec<String> = CHANNELS
        .iter()
        .map(|&(channel, pll, state)| {
            format!(
                "{} : {} {}",
                Field::DEC2.encode(channel as u16),
                Field::HEX4.encode(pll),
                Field::HEX2.encode(state as u16)
            )
        })
        .collect();

    let mut out = prompt::CHANNEL_LIST_HEADER.to_vec();
    out.extend_from_slice(lines.join("\r\n").as_bytes());
    out
}
