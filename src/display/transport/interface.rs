/*
 *  display/transport/interface.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Transport over any display-interface implementation
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

use display_interface::{DataFormat, WriteOnlyDataCommand};

use crate::display::error::DisplayError;
use crate::display::framebuffer::HEADER_SIZE;
use crate::display::traits::DisplayTransport;

/// Adapter for `display-interface` buses (I2C, SPI + DC pin, parallel)
///
/// The interface does its own command/data framing, so the header byte
/// at the front of every flushed block is dropped here.
pub struct InterfaceTransport<DI> {
    di: DI,
}

impl<DI: WriteOnlyDataCommand> InterfaceTransport<DI> {
    pub fn new(di: DI) -> Self {
        Self { di }
    }

    pub fn release(self) -> DI {
        self.di
    }
}

impl<DI: WriteOnlyDataCommand + Send> DisplayTransport for InterfaceTransport<DI> {
    fn init(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn write_command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.di.send_commands(DataFormat::U8(&[cmd]))?;
        Ok(())
    }

    fn write_commands(&mut self, cmds: &[u8]) -> Result<(), DisplayError> {
        self.di.send_commands(DataFormat::U8(cmds))?;
        Ok(())
    }

    fn flush(&mut self, buffer: &[u8]) -> Result<(), DisplayError> {
        let data = buffer.get(HEADER_SIZE..).unwrap_or_default();
        self.di.send_data(DataFormat::U8(data))?;
        Ok(())
    }
}
