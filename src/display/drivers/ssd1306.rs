/*
 *  display/drivers/ssd1306.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  SSD1306 OLED display driver implementation
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

use log::{debug, info};

use crate::config::DisplayConfig;
use crate::display::canvas::Canvas;
use crate::display::diagnostics::DiagnosticHook;
use crate::display::error::DisplayError;
use crate::display::traits::{DisplayCapabilities, DisplayTransport, PixelSurface};

/// SSD1306 commands
pub mod cmd {
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_ENTIRE_ON: u8 = 0xA4;
    pub const SET_NORM_INV: u8 = 0xA6;
    pub const SET_DISP: u8 = 0xAE;
    pub const SET_MEM_ADDR: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_DISP_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA0;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_COM_OUT_DIR: u8 = 0xC0;
    pub const SET_DISP_OFFSET: u8 = 0xD3;
    pub const SET_COM_PIN_CFG: u8 = 0xDA;
    pub const SET_DISP_CLK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_VCOM_DESEL: u8 = 0xDB;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;

    /// Memory addressing modes for SET_MEM_ADDR
    pub const ADDR_HORIZONTAL: u8 = 0x00;
    pub const ADDR_VERTICAL: u8 = 0x01;
}

/// I2C control byte that prefixes the framebuffer
pub const DATA_HEADER: u8 = 0x40;

/// SSD1306 display driver
///
/// Owns the framebuffer and pushes it whole: vertical addressing mode
/// walks the panel memory column by column, the same order the buffer
/// is stored in.
pub struct Ssd1306Driver<T> {
    transport: T,
    canvas: Canvas,
    capabilities: DisplayCapabilities,
    contrast: u8,
    inverted: bool,
}

impl<T: DisplayTransport> Ssd1306Driver<T> {
    /// Create a driver for a `width` x `height` panel
    ///
    /// Nothing is sent until [`begin`](PixelSurface::begin).
    pub fn new(transport: T, width: u32, height: u32) -> Result<Self, DisplayError> {
        if width == 0 || width > 128 || height == 0 || height > 64 || height % 8 != 0 {
            return Err(DisplayError::InvalidConfiguration(format!(
                "Unsupported SSD1306 size: {}x{}", width, height
            )));
        }

        let capabilities = DisplayCapabilities {
            controller: "ssd1306",
            width,
            height,
            max_fps: 30, // I2C is slower
            supports_contrast: true,
            supports_invert: true,
        };

        Ok(Self {
            transport,
            canvas: Canvas::new(width, height, DATA_HEADER)?,
            capabilities,
            contrast: 0xFF,
            inverted: false,
        })
    }

    /// Create a driver sized and tuned from configuration
    pub fn with_config(transport: T, config: &DisplayConfig) -> Result<Self, DisplayError> {
        let (width, height) = config.dimensions();
        let mut driver = Self::new(transport, width, height)?;
        if let Some(contrast) = config.contrast {
            driver.contrast = contrast;
        }
        driver.inverted = config.invert.unwrap_or(false);
        if let Some(mode) = config.mode {
            driver.canvas.set_mode(mode);
        }
        Ok(driver)
    }

    /// Power-up command stream sent by `begin`
    pub fn init_sequence(&self) -> Vec<u8> {
        let height = self.capabilities.height as u8;
        let com_pins = if height > 32 { 0x12 } else { 0x02 };
        vec![
            cmd::SET_DISP,
            cmd::SET_MEM_ADDR, cmd::ADDR_HORIZONTAL,
            cmd::SET_DISP_START_LINE,
            cmd::SET_SEG_REMAP | 0x01,
            cmd::SET_MUX_RATIO, height - 1,
            cmd::SET_COM_OUT_DIR | 0x08,
            cmd::SET_DISP_OFFSET, 0x00,
            cmd::SET_COM_PIN_CFG, com_pins,
            cmd::SET_DISP_CLK_DIV, 0x80,
            cmd::SET_PRECHARGE, 0xF1,
            cmd::SET_VCOM_DESEL, 0x40,
            cmd::SET_CONTRAST, self.contrast,
            cmd::SET_ENTIRE_ON,
            cmd::SET_NORM_INV | self.inverted as u8,
            cmd::SET_CHARGE_PUMP, 0x14,
            cmd::SET_DISP | 0x01,
        ]
    }

    /// Install (or remove) the diagnostic hook
    pub fn set_diagnostic_hook(&mut self, hook: Option<DiagnosticHook>) {
        self.canvas.set_diagnostic_hook(hook);
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Tear down, handing the transport back
    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: DisplayTransport> PixelSurface for Ssd1306Driver<T> {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    canvas_pixel_surface!();

    fn begin(&mut self) -> Result<(), DisplayError> {
        info!(
            "Initializing SSD1306 {}x{}",
            self.capabilities.width, self.capabilities.height
        );
        self.transport.init()?;
        let sequence = self.init_sequence();
        self.transport.write_commands(&sequence)?;
        self.display()
    }

    fn display(&mut self) -> Result<(), DisplayError> {
        let last_column = (self.capabilities.width - 1) as u8;
        let last_page = (self.canvas.framebuffer().pages() - 1) as u8;
        self.transport.write_commands(&[
            cmd::SET_MEM_ADDR, cmd::ADDR_VERTICAL,
            cmd::SET_COL_ADDR, 0, last_column,
            cmd::SET_PAGE_ADDR, 0, last_page,
        ])?;

        let bytes = self.canvas.framebuffer().as_bytes();
        debug!("SSD1306 flush: {} bytes", bytes.len());
        self.transport.flush(bytes)
    }

    fn set_contrast(&mut self, value: u8) -> Result<(), DisplayError> {
        self.transport.write_commands(&[cmd::SET_CONTRAST, value])?;
        self.contrast = value;
        Ok(())
    }

    fn set_invert(&mut self, inverted: bool) -> Result<(), DisplayError> {
        self.transport.write_command(cmd::SET_NORM_INV | inverted as u8)?;
        self.inverted = inverted;
        Ok(())
    }

    fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.transport.write_command(cmd::SET_DISP | on as u8)
    }
}

canvas_text_surface!(Ssd1306Driver);
