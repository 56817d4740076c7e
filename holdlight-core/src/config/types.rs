//! Top-level wall configuration
//!
//! Loaded once at startup from the embedded `wall.toml`; nothing here
//! changes while the device runs.

use core::fmt;

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::board::BoardProfile;
use super::palette::Palette;
use super::relocation::RelocationTable;

/// Maximum advertised BLE name length
pub const MAX_NAME_LEN: usize = 24;

/// Name advertised when none is configured
pub const DEFAULT_BLE_NAME: &str = "MoonBoard A";

/// Default LED data pin
pub const DEFAULT_LED_PIN: u8 = 2;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// Relocation table is full
    TooManyRelocations,
    /// BLE name does not fit
    NameTooLong,
    /// BLE name is empty
    EmptyName,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSection => write!(f, "invalid section header"),
            ConfigError::InvalidValue => write!(f, "invalid value"),
            ConfigError::TooManyRelocations => write!(f, "relocation table is full"),
            ConfigError::NameTooLong => {
                write!(f, "BLE name longer than {} bytes", MAX_NAME_LEN)
            }
            ConfigError::EmptyName => write!(f, "BLE name is empty"),
        }
    }
}

/// Complete device configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WallConfig {
    /// Board geometry
    pub board: BoardProfile,
    /// Per-hold overrides
    pub relocations: RelocationTable,
    /// Shared dimming factor (255 = full)
    pub brightness: u8,
    /// LED data GPIO
    pub led_pin: u8,
    /// Run the LED chaser at boot
    pub self_test: bool,
    /// Advertised BLE name
    pub ble_name: String<MAX_NAME_LEN>,
}

impl Default for WallConfig {
    fn default() -> Self {
        let mut ble_name = String::new();
        // Fits by construction
        let _ = ble_name.push_str(DEFAULT_BLE_NAME);

        Self {
            board: BoardProfile::default(),
            relocations: RelocationTable::new(),
            brightness: 255,
            led_pin: DEFAULT_LED_PIN,
            self_test: true,
            ble_name,
        }
    }
}

impl WallConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Palette at the configured brightness
    pub fn palette(&self) -> Palette {
        Palette::with_brightness(self.brightness)
    }

    /// Set the advertised BLE name, 1 to `MAX_NAME_LEN` bytes
    pub fn set_ble_name(&mut self, name: &str) -> Result<(), ConfigError> {
        if name.is_empty() {
            return Err(ConfigError::EmptyName);
        }
        let mut value = String::new();
        value.push_str(name).map_err(|_| ConfigError::NameTooLong)?;
        self.ble_name = value;
        Ok(())
    }
}
