//! Command handlers
//!
//! One function per command code. Each handler pulls its own parameters
//! from the endpoint right after writing the matching prompt, so the reads
//! always line up with the client's turn. The dispatcher writes the prompt
//! cue afterwards; handlers never do.

use prm80_protocol::{
    prompt, Command, Field, ParseError, Setting, CRLF, PING_REPLY, UNKNOWN_REPLY,
};
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, info};

use crate::endpoint::Endpoint;
use crate::error::SimError;
use crate::payload;
use crate::state::DeviceState;

/// Channel number that never asks for creation confirmation
pub const NEW_CHANNEL_SENTINEL: u8 = 99;

/// Parameters collected by one `P` command
///
/// Edits are accepted but the simulator keeps no channel memory, so the
/// record is dropped once the command completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelEdit {
    /// Channel number to program
    pub channel: u8,
    /// Synthesizer value for the channel
    pub pll: u16,
    /// Channel state byte
    pub channel_state: u8,
    /// Answer to the add-channel question, if it was asked
    pub confirmation: Option<u8>,
}

impl ChannelEdit {
    /// Whether editing `channel` asks the add-channel question
    pub fn needs_confirmation(channel: u8, max_channels: u8) -> bool {
        channel > max_channels && channel != NEW_CHANNEL_SENTINEL
    }
}

/// Write a prompt and read the raw digits of the field that follows
async fn ask<S>(endpoint: &mut Endpoint<S>, text: &[u8], field: Field) -> Result<Vec<u8>, SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    endpoint.write(text).await?;
    Ok(endpoint.read_exact_bytes(field.width()).await?)
}

fn malformed(command: Command) -> impl FnOnce(ParseError) -> SimError {
    move |source| SimError::MalformedField { command, source }
}

/// `V`
pub async fn version<S>(state: &DeviceState, endpoint: &mut Endpoint<S>) -> Result<(), SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    endpoint.write(state.version().as_bytes()).await?;
    Ok(())
}

/// `N`, `K`, `F`, `O`, `D`, `T` and `Q`
///
/// Returns true if the stored value changed.
pub async fn set_value<S>(
    state: &mut DeviceState,
    endpoint: &mut Endpoint<S>,
    command: Command,
    setting: Setting,
) -> Result<bool, SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let raw = ask(endpoint, setting.prompt, setting.field).await?;
    let value = setting.field.decode_u8(&raw).map_err(malformed(command))?;

    let changed = match state.setting_mut(command) {
        Some(slot) if *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    };

    if !setting.trailer.is_empty() {
        endpoint.write(setting.trailer).await?;
    }

    debug!("{} set to {}", command.name(), setting.field.encode(value as u16));
    Ok(changed)
}

/// `U`
pub async fn ram_dump<S>(endpoint: &mut Endpoint<S>) -> Result<(), SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    endpoint.write(&payload::ram_dump()).await?;
    Ok(())
}

/// `P`
pub async fn edit_channel<S>(
    state: &DeviceState,
    endpoint: &mut Endpoint<S>,
) -> Result<ChannelEdit, SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let command = Command::EditChannel;

    let raw = ask(endpoint, prompt::CHANNEL_TO_SET, Field::DEC2).await?;
    let channel = Field::DEC2.decode_u8(&raw).map_err(malformed(command))?;
    endpoint.write(CRLF).await?;

    // From here on the prompts end in `$`
    let raw = ask(endpoint, prompt::PLL_VALUE, Field::HEX4).await?;
    let pll = Field::HEX4.decode(&raw).map_err(malformed(command))?;
    endpoint.write(CRLF).await?;

    let raw = ask(endpoint, prompt::CHANNEL_STATE, Field::HEX2).await?;
    let channel_state = Field::HEX2.decode_u8(&raw).map_err(malformed(command))?;
    endpoint.write(CRLF).await?;

    let confirmation = if ChannelEdit::needs_confirmation(channel, state.max_channels()) {
        endpoint.write(prompt::ADD_CHANNEL).await?;
        let answer = endpoint.read_exact_bytes(1).await?;
        endpoint.write(CRLF).await?;
        Some(answer[0])
    } else {
        None
    };

    let edit = ChannelEdit {
        channel,
        pll,
        channel_state,
        confirmation,
    };
    info!("Channel edit accepted (not stored): {:?}", edit);
    Ok(edit)
}

/// `C`
pub async fn channel_list<S>(endpoint: &mut Endpoint<S>) -> Result<(), SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    endpoint.write(&payload::channel_list()).await?;
    Ok(())
}

/// `R`
///
/// Returns true if either synthesizer value changed.
pub async fn set_synthesizer<S>(
    state: &mut DeviceState,
    endpoint: &mut Endpoint<S>,
) -> Result<bool, SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let command = Command::SetSynthesizer;
    let raw = ask(endpoint, prompt::RX_FREQUENCY, Field::HEX4).await?;
    let rx = Field::HEX4.decode(&raw).map_err(malformed(command))?;
    let raw = ask(endpoint, prompt::TX_FREQUENCY, Field::HEX4).await?;
    let tx = Field::HEX4.decode(&raw).map_err(malformed(command))?;

    let changed = state.rx_pll != rx || state.tx_pll != tx;
    state.rx_pll = rx;
    state.tx_pll = tx;
    Ok(changed)
}

/// `E`
pub async fn system_status<S>(state: &DeviceState, endpoint: &mut Endpoint<S>) -> Result<(), SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    endpoint.write(state.system_status().encode().as_bytes()).await?;
    Ok(())
}

/// `A`
pub async fn quick_status<S>(endpoint: &mut Endpoint<S>) -> Result<(), SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    endpoint.write(payload::QUICK_STATUS).await?;
    Ok(())
}

/// `#`
pub async fn ping<S>(endpoint: &mut Endpoint<S>) -> Result<(), SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    endpoint.write(PING_REPLY).await?;
    Ok(())
}

/// Anything not in the command table
pub async fn unknown<S>(endpoint: &mut Endpoint<S>) -> Result<(), SimError>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    endpoint.write(UNKNOWN_REPLY).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    async fn read_all(mut client: tokio::io::DuplexStream) -> Vec<u8> {
        let mut out = Vec::new();
        client.read_to_end(&mut out).await.unwrap();
        out
    }

    #[test]
    fn test_needs_confirmation() {
        assert!(!ChannelEdit::needs_confirmation(5, 80));
        assert!(!ChannelEdit::needs_confirmation(80, 80));
        assert!(ChannelEdit::needs_confirmation(81, 80));
        assert!(!ChannelEdit::needs_confirmation(99, 80));
        assert!(ChannelEdit::needs_confirmation(1, 0));
    }

    #[tokio::test]
    async fn test_set_value_reports_change() {
        let (mut client, sim) = tokio::io::duplex(256);
        let mut endpoint = Endpoint::new(sim);
        let mut state = DeviceState::default();
        let setting = Command::Squelch.setting().unwrap();

        client.write_all(b"0707").await.unwrap();
        assert!(set_value(&mut state, &mut endpoint, Command::Squelch, setting)
            .await
            .unwrap());
        assert!(!set_value(&mut state, &mut endpoint, Command::Squelch, setting)
            .await
            .unwrap());
        assert_eq!(state.squelch(), 7);

        drop(endpoint);
        assert_eq!(read_all(client).await, b"Squelch : Squelch : ");
    }

    #[tokio::test]
    async fn test_set_value_hex_field() {
        let (mut client, sim) = tokio::io::duplex(256);
        let mut endpoint = Endpoint::new(sim);
        let mut state = DeviceState::default();

        client.write_all(b"a5").await.unwrap();
        let setting = Command::Lock.setting().unwrap();
        set_value(&mut state, &mut endpoint, Command::Lock, setting)
            .await
            .unwrap();
        assert_eq!(state.lock(), 0xA5);
    }

    #[tokio::test]
    async fn test_set_value_malformed() {
        let (mut client, sim) = tokio::io::duplex(256);
        let mut endpoint = Endpoint::new(sim);
        let mut state = DeviceState::default();

        client.write_all(b"x1").await.unwrap();
        let setting = Command::Volume.setting().unwrap();
        let err = set_value(&mut state, &mut endpoint, Command::Volume, setting)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SimError::MalformedField {
                command: Command::Volume,
                ..
            }
        ));
        assert_eq!(state.volume(), 0x10);
    }

    #[tokio::test]
    async fn test_set_synthesizer() {
        let (mut client, sim) = tokio::io::duplex(256);
        let mut endpoint = Endpoint::new(sim);
        let mut state = DeviceState::default();

        client.write_all(b"81B08464").await.unwrap();
        assert!(set_synthesizer(&mut state, &mut endpoint).await.unwrap());
        assert_eq!(state.rx_pll(), 0x81B0);
        assert_eq!(state.tx_pll(), 0x8464);

        drop(endpoint);
        assert_eq!(
            read_all(client).await,
            b"RX frequency : \r\nTX frequency : "
        );
    }

    #[tokio::test]
    async fn test_edit_channel_without_confirmation() {
        let (mut client, sim) = tokio::io::duplex(256);
        let mut endpoint = Endpoint::new(sim);
        let state = DeviceState::default();

        client.write_all(b"058464").await.unwrap();
        client.write_all(b"0C").await.unwrap();
        let edit = edit_channel(&state, &mut endpoint).await.unwrap();

        assert_eq!(
            edit,
            ChannelEdit {
                channel: 5,
                pll: 0x8464,
                channel_state: 0x0C,
                confirmation: None
            }
        );
        assert_eq!(state, DeviceState::default());

        drop(endpoint);
        assert_eq!(
            read_all(client).await,
            b"Channel to set : \r\nPLL value to load : $\r\nChannel state : $\r\n"
        );
    }

    #[tokio::test]
    async fn test_edit_channel_with_confirmation() {
        let (mut client, sim) = tokio::io::duplex(256);
        let mut endpoint = Endpoint::new(sim);
        let state = DeviceState::default();

        client.write_all(b"858464").await.unwrap();
        client.write_all(b"84Y").await.unwrap();
        let edit = edit_channel(&state, &mut endpoint).await.unwrap();
        assert_eq!(edit.channel, 85);
        assert_eq!(edit.channel_state, 0x84);
        assert_eq!(edit.confirmation, Some(b'Y'));

        drop(endpoint);
        let out = read_all(client).await;
        assert!(out.ends_with(
            b"This channel number doesn't exist. Add new channel (Y/N) ? \r\n"
        ));
    }
}
