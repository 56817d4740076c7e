//! BLE UART module transport
//!
//! Serial BLE modules (HM-10, HC-08, JDY-08 and friends) expose the
//! phone link as a plain UART plus a STATE pin that is high while a
//! central is connected. The advertised name is set with an AT command
//! before the first connection.

use core::fmt;

use embedded_hal::digital::InputPin;
use embedded_io::{Read, ReadReady, Write};
use holdlight_core::config::MAX_NAME_LEN;
use holdlight_hal::Transport;

/// Serial BLE errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerialError<E> {
    /// Underlying UART failed
    Uart(E),
    /// Advertised name does not fit
    NameTooLong,
    /// Read returned no data
    NoData,
}

impl<E: fmt::Debug> fmt::Display for SerialError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialError::Uart(e) => write!(f, "UART error: {:?}", e),
            SerialError::NameTooLong => {
                write!(f, "BLE name longer than {} bytes", MAX_NAME_LEN)
            }
            SerialError::NoData => write!(f, "no data available"),
        }
    }
}

/// BLE module on a UART with a connection state pin
pub struct SerialBle<U, P> {
    uart: U,
    state: P,
}

impl<U, P> SerialBle<U, P>
where
    U: Read + Write + ReadReady,
    P: InputPin,
{
    /// Create a transport from the module's UART and STATE pin
    pub fn new(uart: U, state: P) -> Self {
        Self { uart, state }
    }

    /// Release the UART and pin
    pub fn free(self) -> (U, P) {
        (self.uart, self.state)
    }
}

impl<U, P> Transport for SerialBle<U, P>
where
    U: Read + Write + ReadReady,
    P: InputPin,
{
    type Error = SerialError<U::Error>;

    fn begin(&mut self, name: &str) -> Result<(), Self::Error> {
        if name.len() > MAX_NAME_LEN {
            return Err(SerialError::NameTooLong);
        }

        self.uart.write_all(b"AT+NAME").map_err(SerialError::Uart)?;
        self.uart
            .write_all(name.as_bytes())
            .map_err(SerialError::Uart)?;
        self.uart.write_all(b"\r\n").map_err(SerialError::Uart)?;
        self.uart.flush().map_err(SerialError::Uart)
    }

    fn connected(&mut self) -> bool {
        // A pin read error counts as disconnected
        self.state.is_high().unwrap_or(false)
    }

    fn available(&mut self) -> bool {
        self.uart.read_ready().unwrap_or(false)
    }

    fn read_char(&mut self) -> Result<char, Self::Error> {
        let mut byte = [0u8; 1];
        match self.uart.read(&mut byte).map_err(SerialError::Uart)? {
            0 => Err(SerialError::NoData),
            _ => Ok(char::from(byte[0])),
        }
    }
}
