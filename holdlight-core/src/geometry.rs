//! Board geometry
//!
//! Logical hold positions are numbered from 0, column by column, `rows`
//! holds per column. The strip is wired serpentine: odd columns (A, C, ...)
//! run bottom to top, even columns (B, D, ...) top to bottom. Optional
//! unaddressed LEDs sit between columns, and the strip may use only every
//! Nth LED.
//!
//! ```text
//! Standard board (18 rows), logical positions:
//!
//!  row   A    B    C
//!  18   17   18   53
//!  17   16   19   52
//!  ..   ..   ..   ..
//!   2    1   34   37
//!   1    0   35   36
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::config::{BoardProfile, RelocationTable};

/// Wall coordinate of a hold, e.g. `A1` or `K18`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coordinate {
    /// 1-based column (1 = A)
    pub column: u16,
    /// 1-based row, counted from the bottom
    pub row: u16,
}

impl Coordinate {
    /// Column letter; `?` past `Z`
    pub fn letter(&self) -> char {
        match self.column {
            1..=26 => (b'A' + (self.column - 1) as u8) as char,
            _ => '?',
        }
    }

    /// Label such as `"B17"`
    pub fn label(&self) -> String<8> {
        let mut label = String::new();
        // "?65535" is the longest possible label
        let _ = write!(label, "{}", self);
        label
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.letter(), self.row)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Coordinate {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}{}", self.letter(), self.row)
    }
}

/// Converts logical hold positions to LED indices and wall coordinates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeometryMapper {
    profile: BoardProfile,
    relocations: RelocationTable,
}

impl GeometryMapper {
    /// Create a mapper for a board and its relocation overrides
    pub fn new(profile: BoardProfile, relocations: RelocationTable) -> Self {
        Self {
            profile,
            relocations,
        }
    }

    /// Board profile in use
    pub fn profile(&self) -> &BoardProfile {
        &self.profile
    }

    /// Relocation table in use
    pub fn relocations(&self) -> &RelocationTable {
        &self.relocations
    }

    /// Physical LED index of a logical position
    ///
    /// `position * led_offset_multiplier + (position / rows) * column_skip_padding`,
    /// saturating at `u32::MAX`
    pub fn position_to_led(&self, position: u16) -> u32 {
        let position = position as u32;
        let column = position / self.profile.rows() as u32;
        (position * self.profile.led_offset_multiplier as u32)
            .saturating_add(column * self.profile.column_skip_padding as u32)
    }

    /// Wall coordinate of a logical position
    pub fn position_to_coordinates(&self, position: u16) -> Coordinate {
        let rows = self.profile.rows();
        let column = position / rows + 1;
        let offset = position % rows;
        let row = if column % 2 == 0 {
            rows - offset
        } else {
            offset + 1
        };
        Coordinate { column, row }
    }

    /// Apply the relocation table
    pub fn relocate_hold(&self, position: u16) -> u16 {
        self.relocations.relocate(position)
    }

    /// Step from a hold to the LED directly above it
    ///
    /// `0` when the hold is at the top or bottom of its column, where the
    /// strip turns around; `-1` in even columns; `+1` in odd columns.
    pub fn above_offset(&self, position: u16) -> i8 {
        let rows = self.profile.rows() as u32;
        let cell = position as u32 + 1;
        if cell % rows == 0 || (cell - 1) % rows == 0 {
            return 0;
        }

        let column = cell / rows + 1;
        if column % 2 == 0 {
            -1
        } else {
            1
        }
    }

    /// Check if a logical position exists on the board
    pub fn contains(&self, position: u16) -> bool {
        position < self.profile.positions()
    }

    /// Number of LEDs the strip needs to cover every position
    pub fn total_leds(&self) -> u32 {
        self.profile.total_leds()
    }
}
