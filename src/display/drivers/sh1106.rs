/*
 *  display/drivers/sh1106.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  SH1106 OLED display driver implementation
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

/// SH1106 commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
}

/// Panel column 0 sits at RAM column 2 (132-column controller, 128 visible)
pub const COLUMN_OFFSET: u8 = 2;

/// I2C control byte that prefixes each page
pub const DATA_HEADER: u8 = 0x40;

/// SH1106 display driver
///
/// The controller only has page addressing, so a flush is one transfer
/// per page: select the page, set the column, send that page's bytes
/// gathered out of the column-major buffer.
pub struct Sh1106Driver<T> {
    transport: T,
    canvas: Canvas,
    capabilities: DisplayCapabilities,
    contrast: u8,
    inverted: bool,
    // header + one page, reused across flushes
    scratch: Vec<u8>,
}

impl<T: DisplayTransport> Sh1106Driver<T> {
    pub fn new(transport: T, width: u32, height: u32) -> Result<Self, DisplayError> {
        if width == 0 || width > 128 || height == 0 || height > 64 || height % 8 != 0 {
            return Err(DisplayError::InvalidConfiguration(format!(
                "Unsupported SH1106 size: {}x{}", width, height
            )));
        }

        let canvas = Canvas::new(width, height, DATA_HEADER)?;
        let mut scratch = Vec::new();
        scratch
            .try_reserve_exact(width as usize + 1)
            .map_err(|_| DisplayError::Allocation { bytes: width as usize + 1 })?;

        Ok(Self {
            transport,
            canvas,
            capabilities: DisplayCapabilities {
                controller: "sh1106",
                width,
                height,
                max_fps: 30,
                supports_contrast: true,
                supports_invert: true,
            },
            contrast: 0xCF,
            inverted: false,
            scratch,
        })
    }

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

    pub fn init_sequence(&self) -> Vec<u8> {
        let height = self.capabilities.height as u8;
        vec![
            cmd::DISPLAY_OFF,
            cmd::SET_CLOCK_DIV, 0x80,
            cmd::SET_MUX_RATIO, height - 1,
            cmd::SET_DISPLAY_OFFSET, 0x00,
            cmd::SET_START_LINE,
            cmd::SET_CHARGE_PUMP, 0x14,
            cmd::SET_SEG_REMAP,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_COM_PINS, 0x12,
            cmd::SET_CONTRAST, self.contrast,
            cmd::SET_PRECHARGE, 0xF1,
            cmd::SET_VCOM_DETECT, 0x40,
            if self.inverted { cmd::SET_INVERSE } else { cmd::SET_NORMAL },
            cmd::DISPLAY_ON,
        ]
    }

    pub fn set_diagnostic_hook(&mut self, hook: Option<DiagnosticHook>) {
        self.canvas.set_diagnostic_hook(hook);
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn release(self) -> T {
        self.transport
    }
}

impl<T: DisplayTransport> PixelSurface for Sh1106Driver<T> {
    fn capabilities(&self) -> &DisplayCapabilities {
        &self.capabilities
    }

    canvas_pixel_surface!();

    fn begin(&mut self) -> Result<(), DisplayError> {
        info!(
            "Initializing SH1106 {}x{}",
            self.capabilities.width, self.capabilities.height
        );
        self.transport.init()?;
        let sequence = self.init_sequence();
        self.transport.write_commands(&sequence)?;
        self.display()
    }

    fn display(&mut self) -> Result<(), DisplayError> {
        let pages = self.canvas.framebuffer().pages();
        debug!("SH1106 flush: {} pages", pages);

        for page in 0..pages {
            self.transport.write_commands(&[
                cmd::SET_PAGE_ADDR | page as u8,
                cmd::SET_LOW_COLUMN | (COLUMN_OFFSET & 0x0F),
                cmd::SET_HIGH_COLUMN | (COLUMN_OFFSET >> 4),
            ])?;

            self.scratch.clear();
            self.scratch.push(DATA_HEADER);
            self.scratch.extend(self.canvas.framebuffer().page(page));
            self.transport.flush(&self.scratch)?;
        }
        Ok(())
    }

    fn set_contrast(&mut self, value: u8) -> Result<(), DisplayError> {
        self.transport.write_commands(&[cmd::SET_CONTRAST, value])?;
        self.contrast = value;
        Ok(())
    }

    fn set_invert(&mut self, inverted: bool) -> Result<(), DisplayError> {
        let command = if inverted { cmd::SET_INVERSE } else { cmd::SET_NORMAL };
        self.transport.write_command(command)?;
        self.inverted = inverted;
        Ok(())
    }

    fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        self.transport.write_command(if on { cmd::DISPLAY_ON } else { cmd::DISPLAY_OFF })
    }
}

canvas_text_surface!(Sh1106Driver);
