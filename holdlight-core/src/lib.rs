//! Board-agnostic core logic for the climbing wall display
//!
//! This crate contains everything between the raw character stream and
//! the LED frame buffer, independent of any specific hardware:
//!
//! - Board profiles, relocation table and configuration parsing
//! - Geometry: logical hold position to physical LED and wall coordinate
//! - Hold tokens and the hold renderer
//! - Config and problem frame handlers
//! - The [`Controller`] tying framer, handlers and LED surface together
//!
//! Data flow:
//!
//! ```text
//! chars ─▶ MessageFramer ─┬─▶ config handler ──────────────┐
//!                         └─▶ problem handler ─▶ renderer ─┴─▶ LedSurface
//!                                                  │
//!                                                  ▼
//!                                            GeometryMapper
//! ```

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod controller;
pub mod geometry;
pub mod handler;
pub mod hold;
pub mod render;

pub use config::{parse_config, BoardKind, BoardProfile, ConfigError, Palette, RelocationTable, WallConfig};
pub use controller::Controller;
pub use geometry::{Coordinate, GeometryMapper};
pub use handler::{Directive, ProblemSummary, Session};
pub use hold::{HoldError, HoldKind, HoldToken};
pub use render::{HoldRenderer, RenderError, RenderedHold};
