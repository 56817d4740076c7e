//! Character stream transport
//!
//! The phone app talks to the wall over a serial-style link (a BLE UART
//! emulation on the reference board). All calls are non-blocking except
//! [`Transport::read_char`], which must only be called after
//! [`Transport::available`] returned `true`.

/// Incoming message stream
pub trait Transport {
    /// Error type for transport operations
    type Error;

    /// Bring the link up and advertise under `name`
    fn begin(&mut self, name: &str) -> Result<(), Self::Error>;

    /// Check if a peer is connected
    fn connected(&mut self) -> bool;

    /// Check if at least one character is waiting
    fn available(&mut self) -> bool;

    /// Read the next character
    fn read_char(&mut self) -> Result<char, Self::Error>;
}
