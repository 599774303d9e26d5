/*
 *  display/transport/i2c.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  I2C transport over embedded-hal
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_hal::i2c::{Error as _, I2c};
use log::debug;

use crate::display::error::DisplayError;
use crate::display::traits::DisplayTransport;

/// Control byte announcing a single command byte
pub const CONTROL_COMMAND: u8 = 0x80;

/// Control byte announcing a run of display data
pub const CONTROL_DATA: u8 = 0x40;

/// SSD1306/SH1106 over a blocking I2C bus
///
/// Commands go out as `[0x80, cmd]`, one transaction each. Flushes send
/// the caller's block untouched: the framebuffer already starts with
/// the 0x40 data control byte.
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cTransport<I2C> {
    /// Wrap an I2C bus; `address` is the panel's 7-bit address (usually 0x3C)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Hand the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, bytes)
            .map_err(|e| DisplayError::I2c(format!("write to 0x{:02X} failed: {:?}", self.address, e.kind())))
    }
}

#[cfg(feature = "linux-i2c")]
impl I2cTransport<linux_embedded_hal::I2cdev> {
    /// Open a Linux i2c-dev bus such as "/dev/i2c-1"
    pub fn open(path: &str, address: u8) -> Result<Self, DisplayError> {
        log::info!("Opening {} for panel at 0x{:02X}", path, address);
        let i2c = linux_embedded_hal::I2cdev::new(path)
            .map_err(|e| DisplayError::I2c(format!("Failed to open {}: {}", path, e)))?;
        Ok(Self::new(i2c, address))
    }
}

impl<I2C: I2c + Send> DisplayTransport for I2cTransport<I2C> {
    fn init(&mut self) -> Result<(), DisplayError> {
        // bus is configured by whoever built `I2C`
        Ok(())
    }

    fn write_command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.write(&[CONTROL_COMMAND, cmd])
    }

    fn flush(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        debug!("i2c flush: {} bytes to 0x{:02X}", buffer.len(), self.address);
        self.write(buffer)
    }
}
