//! Message transports
//!
//! [`SerialBle`] implements [`holdlight_hal::Transport`] on top of an
//! external BLE UART module.

pub mod serial;

pub use serial::{SerialBle, SerialError};
