//! Transport endpoint
//!
//! Thin wrapper over the byte stream the simulator sits on. Reads are
//! exact-length and writes are flushed immediately, so each fragment reaches
//! the client before the simulator blocks on the next read.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

/// The simulator's end of the control-port byte stream
pub struct Endpoint<S> {
    stream: S,
}

impl<S> Endpoint<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    /// Wrap a duplex stream
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Give the stream back
    pub fn into_inner(self) -> S {
        self.stream
    }

    /// Wait for the next command byte
    ///
    /// Returns `None` when the peer has closed the stream. There is no
    /// timeout: a control port idles until the next command.
    pub async fn read_command_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.stream.read(&mut byte).await? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    /// Read exactly `len` bytes; end of stream part way is an error
    pub async fn read_exact_bytes(&mut self, len: usize) -> io::Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.stream.read_exact(&mut buf).await?;
        debug!("endpoint rx \"{}\"", buf.escape_ascii());
        Ok(buf)
    }

    /// Write and flush one response fragment
    pub async fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.stream.write_all(data).await?;
        self.stream.flush().await?;
        debug!("endpoint tx \"{}\"", data.escape_ascii());
        Ok(())
    }
}
