//! Configuration types
//!
//! Board geometry, relocation overrides, palette and the top-level
//! [`WallConfig`], plus a small parser for the embedded `wall.toml`.

pub mod board;
pub mod palette;
pub mod parse;
pub mod relocation;
pub mod types;

pub use board::*;
pub use palette::Palette;
pub use parse::parse_config;
pub use relocation::*;
pub use types::*;
