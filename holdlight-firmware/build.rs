//! Build script for holdlight-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates wall.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Positions per board type (rows * 11 columns)
const BOARDS: [(&str, i64); 2] = [("standard", 18 * 11), ("mini", 12 * 11)];

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rustc-link-arg-bins=--nmagic");
    println!("cargo:rustc-link-arg-bins=-Tlink.x");
    println!("cargo:rustc-link-arg-bins=-Tlink-rp.x");
    println!("cargo:rustc-link-arg-bins=-Tdefmt.x");

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate wall.toml at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=wall.toml");

    let config_path = Path::new("wall.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: wall.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware embeds wall.toml as its configuration.             ║\n\
            ║  Please create one in the holdlight-firmware directory.          ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read wall.toml                                 ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in wall.toml                         ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();
    let positions = validate_board(&config, &mut errors);
    validate_leds(&config, &mut errors);
    validate_ble(&config, &mut errors);
    validate_relocations(&config, positions, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid wall configuration                               ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=wall.toml validated successfully");
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check `[board]`, returning the number of hold positions
fn validate_board(config: &toml::Value, errors: &mut Vec<String>) -> i64 {
    let board = match config.get("board") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[board] must be a table".to_string());
            return BOARDS[0].1;
        }
        None => return BOARDS[0].1,
    };

    let mut positions = BOARDS[0].1;
    match board.get("type") {
        Some(toml::Value::String(kind)) => {
            match BOARDS.iter().find(|(name, _)| name.eq_ignore_ascii_case(kind)) {
                Some((_, count)) => positions = *count,
                None => errors.push(format!(
                    "[board] type must be 'standard' or 'mini', got '{}'",
                    kind
                )),
            }
        }
        Some(_) => errors.push("[board] type must be a string".to_string()),
        None => {}
    }

    if let Some(value) = board.get("led_offset") {
        match value.as_integer() {
            Some(n) if (1..=u16::MAX as i64).contains(&n) => {}
            _ => errors.push("[board] led_offset must be 1-65535".to_string()),
        }
    }

    if let Some(value) = board.get("column_padding") {
        match value.as_integer() {
            Some(n) if (0..=u16::MAX as i64).contains(&n) => {}
            _ => errors.push("[board] column_padding must be 0-65535".to_string()),
        }
    }

    positions
}

/// Check `[leds]`
fn validate_leds(config: &toml::Value, errors: &mut Vec<String>) {
    let leds = match config.get("leds") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[leds] must be a table".to_string());
            return;
        }
        None => return,
    };

    if let Some(value) = leds.get("brightness") {
        match value.as_integer() {
            Some(n) if (0..=255).contains(&n) => {}
            _ => errors.push("[leds] brightness must be 0-255".to_string()),
        }
    }

    if let Some(value) = leds.get("pin") {
        let pin = match value {
            toml::Value::String(s) => s.trim_start_matches("gpio").parse::<i64>().ok(),
            toml::Value::Integer(n) => Some(*n),
            _ => None,
        };
        match pin {
            Some(n) if (0..=29).contains(&n) => {}
            _ => errors.push("[leds] pin must be gpio0-gpio29".to_string()),
        }
    }

    if let Some(value) = leds.get("self_test") {
        if value.as_bool().is_none() {
            errors.push("[leds] self_test must be true or false".to_string());
        }
    }
}

/// Check `[ble]`
fn validate_ble(config: &toml::Value, errors: &mut Vec<String>) {
    if let Some(value) = config.get("ble").and_then(|b| b.get("name")) {
        match value.as_str() {
            Some(name) if !name.is_empty() && name.len() <= 24 => {}
            _ => errors.push("[ble] name must be 1-24 bytes".to_string()),
        }
    }
}

/// Check `[relocations]` against the board size
fn validate_relocations(config: &toml::Value, positions: i64, errors: &mut Vec<String>) {
    let relocations = match config.get("relocations") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[relocations] must be a table".to_string());
            return;
        }
        None => return,
    };

    if relocations.len() > 16 {
        errors.push("[relocations] holds at most 16 entries".to_string());
    }

    for (from, to) in relocations {
        match from.parse::<i64>() {
            Ok(n) if (0..positions).contains(&n) => {}
            _ => errors.push(format!("[relocations] '{}' is not a hold position", from)),
        }
        match to.as_integer() {
            Some(n) if (0..positions).contains(&n) => {}
            _ => errors.push(format!("[relocations] {} target is not a hold position", from)),
        }
    }
}
