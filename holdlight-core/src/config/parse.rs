//! Simple TOML parser for the wall configuration
//!
//! This is a minimal line-oriented parser that handles only the subset
//! used by `wall.toml`. It does NOT support full TOML.
//!
//! Supported features:
//! - Key = value pairs (string, integer, boolean)
//! - [section] headers
//! - Comments (# ...)
//!
//! ```toml
//! [board]
//! type = "standard"    # or "mini"
//! led_offset = 1
//! column_padding = 0
//!
//! [leds]
//! pin = "gpio2"
//! brightness = 128
//! self_test = true
//!
//! [ble]
//! name = "MoonBoard A"
//!
//! [relocations]
//! 42 = 43              # hold 42 is lit at position 43
//! ```

use super::board::BoardKind;
use super::types::{ConfigError, WallConfig};

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Board,
    Leds,
    Ble,
    Relocations,
}

/// Parse `wall.toml` content into a [`WallConfig`]
///
/// Missing keys keep their defaults. Unknown keys are ignored, unknown
/// sections are rejected.
pub fn parse_config(input: &str) -> Result<WallConfig, ConfigError> {
    let mut config = WallConfig::new();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        // Skip empty lines and comments
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') && line.ends_with(']') {
            section = parse_section_header(&line[1..line.len() - 1])?;
            continue;
        }

        if let Some((key, value)) = parse_key_value(line) {
            apply_value(section, key, value, &mut config)?;
        }
    }

    validate(&config)?;
    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "board" => Ok(Section::Board),
        "leds" => Ok(Section::Leds),
        "ble" => Ok(Section::Ble),
        "relocations" => Ok(Section::Relocations),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Parse "key = value" line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = line[eq_pos + 1..].trim();

    // Remove inline comments
    let value = if let Some(hash_pos) = value.find('#') {
        // Make sure # is not inside a string
        let quote_count = value[..hash_pos].matches('"').count();
        if quote_count % 2 == 0 {
            value[..hash_pos].trim()
        } else {
            value
        }
    } else {
        value
    };

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut WallConfig,
) -> Result<(), ConfigError> {
    match (section, key) {
        (Section::Board, "type") => {
            config.board.kind =
                BoardKind::from_name(parse_string(value)?).ok_or(ConfigError::InvalidValue)?;
        }
        (Section::Board, "led_offset") => {
            config.board.led_offset_multiplier = parse_int(value)?;
        }
        (Section::Board, "column_padding") => {
            config.board.column_skip_padding = parse_int(value)?;
        }
        (Section::Leds, "pin") => config.led_pin = parse_pin(value)?,
        (Section::Leds, "brightness") => config.brightness = parse_int(value)?,
        (Section::Leds, "self_test") => config.self_test = parse_bool(value)?,
        (Section::Ble, "name") => config.set_ble_name(parse_string(value)?)?,
        (Section::Relocations, from) => {
            let from = parse_int(parse_string(from)?)?;
            let to = parse_int(value)?;
            config.relocations.insert(from, to)?;
        }
        _ => {
            debug!("Ignoring unknown config key {}", key);
        }
    }
    Ok(())
}

/// Reject values that would make the geometry meaningless
fn validate(config: &WallConfig) -> Result<(), ConfigError> {
    if config.board.led_offset_multiplier == 0 {
        return Err(ConfigError::InvalidValue);
    }

    let positions = config.board.positions();
    if config
        .relocations
        .iter()
        .any(|r| r.from >= positions || r.to >= positions)
    {
        return Err(ConfigError::InvalidValue);
    }

    Ok(())
}

/// Parse a string value (removes quotes)
fn parse_string(value: &str) -> Result<&str, ConfigError> {
    if value.starts_with('"') && value.ends_with('"') && value.len() >= 2 {
        Ok(&value[1..value.len() - 1])
    } else {
        // Allow unquoted strings for simple values
        Ok(value)
    }
}

/// Parse an integer value
fn parse_int<T: core::str::FromStr>(value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue)
}

/// Parse a boolean value
fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Parse a pin given as "gpio2" or a bare number
fn parse_pin(value: &str) -> Result<u8, ConfigError> {
    let value = parse_string(value)?;
    let digits = value.strip_prefix("gpio").unwrap_or(value);
    let pin: u8 = parse_int(digits)?;
    // RP2040 exposes GPIO0-29
    if pin > 29 {
        return Err(ConfigError::InvalidValue);
    }
    Ok(pin)
}
