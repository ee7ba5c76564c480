//! Error types for the simulator

use prm80_protocol::{Command, ParseError};
use thiserror::Error;

/// Errors that end a simulator session
#[derive(Debug, Error)]
pub enum SimError {
    /// Transport failure (short read, broken pipe, closed port)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Client sent bytes that are not digits where digits were expected
    #[error("malformed parameter for {} command: {source}", .command.name())]
    MalformedField {
        command: Command,
        #[source]
        source: ParseError,
    },

    /// Initial device configuration cannot be represented on the wire
    #[error("invalid device config: {0}")]
    InvalidConfig(String),
}
