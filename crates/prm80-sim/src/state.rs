//! Simulated device state
//!
//! One record holds every setting the simulated transceiver reports. It is
//! seeded once from a [`DeviceConfig`] and afterwards only changed by
//! command handlers.

use prm80_protocol::{Command, SystemStatus};
use serde::{Deserialize, Serialize};

use crate::error::SimError;
use crate::payload::{DEFAULT_VERSION, SIMULATED_RSSI};

/// Initial settings of a simulated transceiver
///
/// Defaults match a PRM8060 running firmware V5 straight after power-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// Firmware version string returned by `V`
    pub version: String,
    /// Current channel (0-99)
    pub channel: u8,
    /// Lock byte
    pub lock: u8,
    /// Squelch level (0-99)
    pub squelch: u8,
    /// Volume level (0-99)
    pub volume: u8,
    /// Mode byte
    pub mode: u8,
    /// Current channel state byte
    pub channel_state: u8,
    /// Number of programmed channels (0-99)
    pub max_channels: u8,
    /// RX synthesizer value (includes the IF offset)
    pub rx_pll: u16,
    /// TX synthesizer value
    pub tx_pll: u16,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            channel: 0,
            lock: 0x00,
            squelch: 0,
            volume: 0x10,
            mode: 0x16,
            channel_state: 0x0C,
            max_channels: 80,
            rx_pll: 0x7970, // 410 MHz with IF offset
            tx_pll: 0x8020, // 410 MHz
        }
    }
}

impl DeviceConfig {
    /// Check that every decimal setting fits in two digits
    pub fn validate(&self) -> Result<(), SimError> {
        for (name, value) in [
            ("channel", self.channel),
            ("squelch", self.squelch),
            ("volume", self.volume),
            ("max_channels", self.max_channels),
        ] {
            if value > 99 {
                return Err(SimError::InvalidConfig(format!(
                    "{name} {value} does not fit in two decimal digits"
                )));
            }
        }
        Ok(())
    }
}

/// Live state of the simulated transceiver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    version: String,
    pub(crate) channel: u8,
    pub(crate) lock: u8,
    pub(crate) squelch: u8,
    pub(crate) volume: u8,
    pub(crate) mode: u8,
    pub(crate) channel_state: u8,
    pub(crate) max_channels: u8,
    pub(crate) rx_pll: u16,
    pub(crate) tx_pll: u16,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::from_config(DeviceConfig::default())
    }
}

impl DeviceState {
    /// Build the power-on state from a configuration
    pub fn from_config(config: DeviceConfig) -> Self {
        Self {
            version: config.version,
            channel: config.channel,
            lock: config.lock,
            squelch: config.squelch,
            volume: config.volume,
            mode: config.mode,
            channel_state: config.channel_state,
            max_channels: config.max_channels,
            rx_pll: config.rx_pll,
            tx_pll: config.tx_pll,
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }

    pub fn lock(&self) -> u8 {
        self.lock
    }

    pub fn squelch(&self) -> u8 {
        self.squelch
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn mode(&self) -> u8 {
        self.mode
    }

    pub fn channel_state(&self) -> u8 {
        self.channel_state
    }

    pub fn max_channels(&self) -> u8 {
        self.max_channels
    }

    pub fn rx_pll(&self) -> u16 {
        self.rx_pll
    }

    pub fn tx_pll(&self) -> u16 {
        self.tx_pll
    }

    /// The byte a single-parameter command writes to
    pub(crate) fn setting_mut(&mut self, command: Command) -> Option<&mut u8> {
        match command {
            Command::SelectChannel => Some(&mut self.channel),
            Command::Lock => Some(&mut self.lock),
            Command::Squelch => Some(&mut self.squelch),
            Command::Volume => Some(&mut self.volume),
            Command::Mode => Some(&mut self.mode),
            Command::ChannelState => Some(&mut self.channel_state),
            Command::ChannelCount => Some(&mut self.max_channels),
            _ => None,
        }
    }

    /// Snapshot in the form the `E` command reports it
    pub fn system_status(&self) -> SystemStatus {
        SystemStatus {
            mode: self.mode,
            channel: self.channel,
            channel_state: self.channel_state,
            squelch: self.squelch,
            volume: self.volume,
            lock: self.lock,
            rx_pll: self.rx_pll,
            tx_pll: self.tx_pll,
            rssi: SIMULATED_RSSI,
        }
    }
}
