//! PRM80 Control Port Protocol
//!
//! This crate describes the command language spoken on the serial control
//! port of PRM80 family UHF transceivers (PRM8060 firmware V5):
//!
//! - **Commands**: one ASCII byte each, case-insensitive ([`Command`])
//! - **Fields**: fixed-width decimal or uppercase hex digits ([`Field`])
//! - **Status**: the 22-character `E` record ([`SystemStatus`])
//!
//! # Framing
//!
//! There is no length prefix or checksum. The client sends a command byte,
//! waits for the prompt of each parameter, and sends exactly as many digits
//! as the field is wide. Multi-line output uses CRLF, and every command ends
//! with [`PROMPT_CUE`].
//!
//! # Example
//!
//! ```rust
//! use prm80_protocol::{Command, Field, SystemStatus};
//!
//! assert_eq!(Command::from_byte(b'f'), Command::Squelch);
//! assert_eq!(Field::HEX4.encode(0x7970), "7970");
//!
//! let status = SystemStatus::parse(b"16000C0010007970802018").unwrap();
//! assert_eq!(status.tx_frequency_hz(), 410_000_000);
//! ```

pub mod command;
pub mod error;
pub mod field;
pub mod prompt;
pub mod status;

pub use command::{Command, Setting};
pub use error::ParseError;
pub use field::{Field, Radix};
pub use status::{pll_to_hz, SystemStatus, PLL_STEP_HZ};

/// Line separator inside multi-line output
pub const CRLF: &[u8] = b"\r\n";

/// Written after every command to signal readiness for the next one
pub const PROMPT_CUE: &[u8] = b"\r\n>";

/// Reply to any byte outside the command table
pub const UNKNOWN_REPLY: &[u8] = b"* ?";

/// Reply to `#`
pub const PING_REPLY: &[u8] = b"!";
