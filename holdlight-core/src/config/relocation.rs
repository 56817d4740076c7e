//! Hold relocation overrides
//!
//! Corrects wiring or manufacturing anomalies without touching the board
//! geometry: a hold listed here is lit at another logical position.

use heapless::Vec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::ConfigError;

/// Maximum relocation entries
pub const MAX_RELOCATIONS: usize = 16;

/// One `original -> relocated` override
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Relocation {
    /// Logical position as sent by the app
    pub from: u16,
    /// Logical position actually lit
    pub to: u16,
}

/// Ordered relocation table, first match wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RelocationTable {
    entries: Vec<Relocation, MAX_RELOCATIONS>,
}

impl RelocationTable {
    /// Create an empty table (identity mapping)
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Build a table from `(from, to)` pairs, keeping their order
    pub fn from_pairs(pairs: &[(u16, u16)]) -> Result<Self, ConfigError> {
        let mut table = Self::new();
        for &(from, to) in pairs {
            table.insert(from, to)?;
        }
        Ok(table)
    }

    /// Append an override
    ///
    /// A later entry for the same `from` is kept but never matched.
    pub fn insert(&mut self, from: u16, to: u16) -> Result<(), ConfigError> {
        self.entries
            .push(Relocation { from, to })
            .map_err(|_| ConfigError::TooManyRelocations)
    }

    /// Find the override for `position`, if any
    pub fn lookup(&self, position: u16) -> Option<u16> {
        self.entries
            .iter()
            .find(|r| r.from == position)
            .map(|r| r.to)
    }

    /// Apply the table: the override if present, else `position`
    pub fn relocate(&self, position: u16) -> u16 {
        self.lookup(position).unwrap_or(position)
    }

    /// Number of overrides
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table has no overrides
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the overrides in match order
    pub fn iter(&self) -> impl Iterator<Item = &Relocation> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_when_empty() {
        let table = RelocationTable::new();
        assert!(table.is_empty());
        assert_eq!(table.relocate(0), 0);
        assert_eq!(table.relocate(197), 197);
    }

    #[test]
    fn test_lookup() {
        let table = RelocationTable::from_pairs(&[(42, 43), (100, 7)]).unwrap();
        assert_eq!(table.relocate(42), 43);
        assert_eq!(table.relocate(100), 7);
        assert_eq!(table.relocate(43), 43);
        assert_eq!(table.lookup(5), None);
    }

    #[test]
    fn test_first_match_wins() {
        let table = RelocationTable::from_pairs(&[(10, 11), (10, 12)]).unwrap();
        assert_eq!(table.relocate(10), 11);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_capacity() {
        let mut table = RelocationTable::new();
        for i in 0..MAX_RELOCATIONS as u16 {
            table.insert(i, i + 1).unwrap();
        }
        assert_eq!(table.insert(99, 100), Err(ConfigError::TooManyRelocations));
    }
}
