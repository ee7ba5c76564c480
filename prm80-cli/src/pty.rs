//! Pseudo-terminal endpoint
//!
//! The simulator answers on the master side of a pty pair; clients open the
//! slave by name (or through a symlink) as if it were the radio's serial
//! port. The slave handle stays open for the life of the process so the
//! master never reads a hang-up while no client is attached.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio_serial::{SerialPort, SerialStream};
use tracing::debug;

/// Errors setting up the pseudo-terminal
#[derive(Debug, Error)]
pub enum PtyError {
    /// Allocating or configuring the pair failed
    #[error("serial port error: {0}")]
    SerialPort(#[from] serialport::Error),

    /// Slave side has no path
    #[error("pseudo-terminal slave has no name")]
    NoName,

    /// Creating the alias failed
    #[error("failed to link {}: {source}", .link.display())]
    Link {
        link: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A raw-mode pty pair at a fixed baud rate
pub struct VirtualPort {
    master: SerialStream,
    slave: SerialStream,
    slave_name: String,
}

impl VirtualPort {
    /// Allocate a pty pair; must be called inside the tokio runtime
    pub fn open(baud_rate: u32) -> Result<Self, PtyError> {
        let (mut master, mut slave) = SerialStream::pair()?;
        master.set_baud_rate(baud_rate)?;
        slave.set_baud_rate(baud_rate)?;

        let slave_name = slave.name().ok_or(PtyError::NoName)?;
        debug!("Opened pty pair, slave {} at {} baud", slave_name, baud_rate);

        Ok(Self {
            master,
            slave,
            slave_name,
        })
    }

    /// Path clients open
    pub fn slave_name(&self) -> &str {
        &self.slave_name
    }

    /// Point `link` at the slave, replacing whatever is there
    pub fn link(&self, link: &Path) -> Result<(), PtyError> {
        let wrap = |source| PtyError::Link {
            link: link.to_path_buf(),
            source,
        };

        if fs::symlink_metadata(link).is_ok() {
            fs::remove_file(link).map_err(wrap)?;
        }
        std::os::unix::fs::symlink(&self.slave_name, link).map_err(wrap)
    }

    /// Master stream for the simulator, and the slave to hold open
    pub fn into_parts(self) -> (SerialStream, SerialStream) {
        (self.master, self.slave)
    }
}
