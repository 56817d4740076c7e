//! Board profiles
//!
//! Every supported board has 11 columns (A to K). The row count depends on
//! the board type. The LED strip runs up one column and down the next.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of hold columns on every board (A..=K)
pub const COLUMNS: u16 = 11;

/// Supported board types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BoardKind {
    /// Full size board, 18 rows
    #[default]
    Standard,
    /// Mini board, 12 rows
    Mini,
}

impl BoardKind {
    /// Rows per column
    pub const fn rows(self) -> u16 {
        match self {
            BoardKind::Standard => 18,
            BoardKind::Mini => 12,
        }
    }

    /// Human-readable board name
    pub const fn name(self) -> &'static str {
        match self {
            BoardKind::Standard => "standard",
            BoardKind::Mini => "mini",
        }
    }

    /// Parse a board name as used in `wall.toml`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "standard" | "Standard" => Some(BoardKind::Standard),
            "mini" | "Mini" => Some(BoardKind::Mini),
            _ => None,
        }
    }
}

/// Physical layout of one board and its LED strip
///
/// Selected once at startup and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardProfile {
    /// Board type (determines rows)
    pub kind: BoardKind,
    /// Use every Nth LED on the strip (1 = every LED)
    pub led_offset_multiplier: u16,
    /// Unaddressed LEDs between the end of one column and the start of the next
    pub column_skip_padding: u16,
}

impl Default for BoardProfile {
    fn default() -> Self {
        Self::new(BoardKind::Standard)
    }
}

impl BoardProfile {
    /// Create a profile with one LED per hold and no padding
    pub const fn new(kind: BoardKind) -> Self {
        Self {
            kind,
            led_offset_multiplier: 1,
            column_skip_padding: 0,
        }
    }

    /// Use every `multiplier`th LED
    pub const fn with_led_offset(mut self, multiplier: u16) -> Self {
        self.led_offset_multiplier = multiplier;
        self
    }

    /// Skip `padding` LEDs at every column boundary
    pub const fn with_column_padding(mut self, padding: u16) -> Self {
        self.column_skip_padding = padding;
        self
    }

    /// Rows per column
    pub const fn rows(&self) -> u16 {
        self.kind.rows()
    }

    /// Number of logical hold positions (`rows * 11`)
    pub const fn positions(&self) -> u16 {
        self.rows() * COLUMNS
    }

    /// LEDs the strip needs to reach the last hold, padding included
    pub const fn total_leds(&self) -> u32 {
        self.positions() as u32 * self.led_offset_multiplier as u32
            + COLUMNS as u32 * self.column_skip_padding as u32
    }

    /// Board name for logs
    pub const fn name(&self) -> &'static str {
        self.kind.name()
    }
}
