//! Holdlight Hardware Abstraction Layer
//!
//! This crate defines the two device collaborators the problem display
//! depends on. Chip-specific code (the firmware crate) and the drivers
//! crate implement them; the core crate only ever sees the traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  holdlight-core (framer, renderer, ...) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  holdlight-hal (this crate - traits)    │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  WS2812 strip │       │  BLE serial   │
//! │  (LedSurface) │       │  (Transport)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`led::LedSurface`] - Buffered addressable LED strip
//! - [`transport::Transport`] - Character stream from the phone app

#![no_std]
#![deny(unsafe_code)]

pub mod led;
pub mod transport;

// Re-export key items at crate root for convenience
pub use led::{color, LedSurface, Rgb};
pub use transport::Transport;
