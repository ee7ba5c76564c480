//! Simulator settings

use std::path::{Path, PathBuf};

use anyhow::Context;
use prm80_sim::DeviceConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Line speed of the PRM80 control port
pub const DEFAULT_BAUD_RATE: u32 = 4800;

/// Settings file contents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Baud rate applied to both ends of the pseudo-terminal
    pub baud_rate: u32,
    /// Filesystem alias for the pseudo-terminal slave
    pub symlink: Option<PathBuf>,
    /// Power-on state of the simulated transceiver
    pub device: DeviceConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            symlink: None,
            device: DeviceConfig::default(),
        }
    }
}

impl Settings {
    /// Get the XDG config directory for prm80sim
    /// Uses $XDG_CONFIG_HOME/prm80sim, falls back to ~/.config/prm80sim
    fn config_dir() -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_config);
            if path.is_absolute() {
                return Some(path.join("prm80sim"));
            }
        }

        dirs::home_dir().map(|h| h.join(".config").join("prm80sim"))
    }

    /// Get the default settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.json"))
    }

    /// Parse settings from JSON text
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Load settings from an explicit file; any failure is an error
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read settings {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("failed to parse settings {}", path.display()))
    }

    /// Load settings from `explicit`, or from the default location
    ///
    /// A missing or unreadable default file falls back to defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::settings_path() {
            Some(path) if path.exists() => Ok(Self::load_from(&path).unwrap_or_else(|e| {
                warn!("Ignoring settings file: {:#}", e);
                Self::default()
            })),
            _ => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_device_section() {
        let settings = Settings::from_json(
            r#"{ "baud_rate": 9600, "symlink": "/tmp/prm80simul", "device": { "max_channels": 10 } }"#,
        )
        .unwrap();

        assert_eq!(settings.baud_rate, 9600);
        assert_eq!(settings.symlink, Some(PathBuf::from("/tmp/prm80simul")));
        assert_eq!(settings.device.max_channels, 10);
        assert_eq!(settings.device.volume, 0x10);
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let path = std::env::temp_dir().join("prm80sim-does-not-exist.json");
        assert!(Settings::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("prm80sim-settings-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "device": { "squelch": 3 } }"#).unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.device.squelch, 3);
        assert_eq!(settings.baud_rate, DEFAULT_BAUD_RATE);

        std::fs::remove_file(&path).unwrap();
    }
}
