//! Command dispatcher
//!
//! [`Prm80Simulator`] owns the device state and maps each command tag to its
//! handler. Every command, known or not, ends with the prompt cue.

use prm80_protocol::{Command, PROMPT_CUE};
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::warn;

use crate::endpoint::Endpoint;
use crate::error::SimError;
use crate::handlers::{self, ChannelEdit};
use crate::state::{DeviceConfig, DeviceState};

/// Result of running one command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Device state differs from before the command
    pub changed: bool,
    /// Record collected by `P`
    pub edit: Option<ChannelEdit>,
}

/// A simulated PRM80 control port
#[derive(Debug, Default)]
pub struct Prm80Simulator {
    state: DeviceState,
    /// Commands handled so far, unknown bytes included
    commands_handled: u64,
}

impl Prm80Simulator {
    /// Create a simulator in the power-on state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a simulator from a validated configuration
    pub fn from_config(config: DeviceConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            state: DeviceState::from_config(config),
            commands_handled: 0,
        })
    }

    /// Current device state
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn commands_handled(&self) -> u64 {
        self.commands_handled
    }

    /// Run one command to completion, including the trailing prompt cue
    pub async fn execute<S>(
        &mut self,
        endpoint: &mut Endpoint<S>,
        command: Command,
    ) -> Result<Outcome, SimError>
    where
        S: AsyncRead + AsyncWrite + Unpin,
    {
        let state = &mut self.state;
        let mut outcome = Outcome::default();

        match command {
            Command::Version => handlers::version(state, endpoint).await?,
            Command::SelectChannel
            | Command::Lock
            | Command::Squelch
            | Command::Volume
            | Command::Mode
            | Command::ChannelState
            | Command::ChannelCount => {
                if let Some(setting) = command.setting() {
                    outcome.changed =
                        handlers::set_value(state, endpoint, command, setting).await?;
                }
            }
            Command::RamDump => handlers::ram_dump(endpoint).await?,
            Command::EditChannel => {
                outcome.edit = Some(handlers::edit_channel(state, endpoint).await?);
            }
            Command::ChannelList => handlers::channel_list(endpoint).await?,
            Command::SetSynthesizer => {
                outcome.changed = handlers::set_synthesizer(state, endpoint).await?;
            }
            Command::SystemStatus => handlers::system_status(state, endpoint).await?,
            Command::QuickStatus => handlers::quick_status(endpoint).await?,
            Command::Ping => handlers::ping(endpoint).await?,
            Command::Unknown(byte) => {
                warn!("Unknown command byte 0x{:02X}", byte);
                handlers::unknown(endpoint).await?;
            }
        }

        endpoint.write(PROMPT_CUE).await?;
        self.commands_handled += 1;
        Ok(outcome)
    }
}
