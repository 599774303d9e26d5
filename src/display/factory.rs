/*
 *  display/factory.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Build a display from configuration
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

use crate::config::{BusConfig, DisplayConfig, DriverKind};
use crate::display::diagnostics::DiagnosticHook;
use crate::display::error::DisplayFactoryError;
use crate::display::traits::{DisplayTransport, TextSurface};
use crate::display::transport::PbmTransport;
use log::{debug, info};

#[cfg(feature = "driver-ssd1306")]
use crate::display::drivers::ssd1306::Ssd1306Driver;

#[cfg(feature = "driver-sh1106")]
use crate::display::drivers::sh1106::Sh1106Driver;

/// Type alias for boxed display trait objects
pub type BoxedDisplay = Box<dyn TextSurface>;

/// Type alias for boxed transports
pub type BoxedTransport = Box<dyn DisplayTransport>;

/// Factory for creating displays from configuration
pub struct DisplayDriverFactory;

impl DisplayDriverFactory {
    /// Create a display from configuration
    ///
    /// Opens the configured bus, then wraps it in the configured
    /// controller family. Nothing is sent to the panel; call `begin`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = DisplayConfig {
    ///     driver: Some(DriverKind::Ssd1306),
    ///     bus: Some(BusConfig::I2c {
    ///         bus: "/dev/i2c-1".to_string(),
    ///         address: 0x3C,
    ///         speed_hz: None,
    ///     }),
    ///     ..Default::default()
    /// };
    ///
    /// let mut display = DisplayDriverFactory::create_from_config(&config)?;
    /// display.begin()?;
    /// ```
    pub fn create_from_config(config: &DisplayConfig) -> Result<BoxedDisplay, DisplayFactoryError> {
        Self::create_with_hook(config, None)
    }

    /// As [`create_from_config`](Self::create_from_config), with a diagnostic hook installed
    pub fn create_with_hook(
        config: &DisplayConfig,
        hook: Option<DiagnosticHook>,
    ) -> Result<BoxedDisplay, DisplayFactoryError> {
        Self::validate_config(config)?;
        let transport = Self::open_transport(config)?;
        Self::create_with_transport(config, transport, hook)
    }

    /// Wrap an already opened transport in the configured controller family
    pub fn create_with_transport(
        config: &DisplayConfig,
        transport: BoxedTransport,
        hook: Option<DiagnosticHook>,
    ) -> Result<BoxedDisplay, DisplayFactoryError> {
        let driver_kind = config.driver
            .ok_or(DisplayFactoryError::NoDriverSpecified)?;
        let (width, height) = config.dimensions();
        info!("Creating {:?} display {}x{}", driver_kind, width, height);

        match driver_kind {
            #[cfg(feature = "driver-ssd1306")]
            DriverKind::Ssd1306 => {
                let mut driver = Ssd1306Driver::with_config(transport, config)?;
                driver.set_diagnostic_hook(hook);
                Ok(Box::new(driver))
            }

            #[cfg(feature = "driver-sh1106")]
            DriverKind::Sh1106 => {
                let mut driver = Sh1106Driver::with_config(transport, config)?;
                driver.set_diagnostic_hook(hook);
                Ok(Box::new(driver))
            }

            // Catch-all for disabled features
            #[allow(unreachable_patterns)]
            _ => {
                let _ = (transport, hook);
                Err(DisplayFactoryError::ConfigError(format!(
                    "{:?} driver not enabled. Enable with --features driver-{}",
                    driver_kind,
                    format!("{:?}", driver_kind).to_lowercase()
                )))
            }
        }
    }

    /// Open the configured bus
    pub fn open_transport(config: &DisplayConfig) -> Result<BoxedTransport, DisplayFactoryError> {
        let bus_config = config.bus.as_ref()
            .ok_or(DisplayFactoryError::NoBusConfiguration)?;

        match bus_config {
            #[cfg(feature = "linux-i2c")]
            BusConfig::I2c { bus, address, speed_hz } => {
                if let Some(hz) = speed_hz {
                    // i2c-dev clocks are set by the kernel, not per open
                    debug!("ignoring speed_hz {} for {}", hz, bus);
                }
                let transport = crate::display::transport::I2cTransport::open(bus, *address)?;
                Ok(Box::new(transport))
            }

            #[cfg(not(feature = "linux-i2c"))]
            BusConfig::I2c { .. } => Err(DisplayFactoryError::ConfigError(
                "I2C transport not enabled. Enable with --features linux-i2c".to_string()
            )),

            BusConfig::Pbm { path } => {
                let (width, height) = config.dimensions();
                debug!("PBM output {}", path.display());
                Ok(Box::new(PbmTransport::new(path, width, height)?))
            }
        }
    }

    /// Validate a configuration without creating a driver
    ///
    /// This is useful for checking configuration at startup before attempting
    /// to initialize hardware.
    pub fn validate_config(config: &DisplayConfig) -> Result<(), DisplayFactoryError> {
        let _driver_kind = config.driver.as_ref()
            .ok_or(DisplayFactoryError::NoDriverSpecified)?;

        let _bus_config = config.bus.as_ref()
            .ok_or(DisplayFactoryError::NoBusConfiguration)?;

        let (width, height) = config.dimensions();
        if width == 0 || height == 0 || height % 8 != 0 {
            return Err(DisplayFactoryError::ConfigError(
                format!("Invalid display size: {}x{}", width, height)
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::traits::PixelSurface;
    use crate::display::transport::MockTransport;

    #[test]
    fn test_validate_config_no_driver() {
        let config = DisplayConfig {
            driver: None,
            bus: Some(BusConfig::I2c {
                bus: "/dev/i2c-1".to_string(),
                address: 0x3C,
                speed_hz: None,
            }),
            ..Default::default()
        };

        assert!(matches!(
            DisplayDriverFactory::validate_config(&config),
            Err(DisplayFactoryError::NoDriverSpecified)
        ));
    }

    #[test]
    fn test_validate_config_no_bus() {
        let config = DisplayConfig {
            driver: Some(DriverKind::Ssd1306),
            bus: None,
            ..Default::default()
        };

        assert!(matches!(
            DisplayDriverFactory::validate_config(&config),
            Err(DisplayFactoryError::NoBusConfiguration)
        ));
    }

    #[test]
    fn test_validate_config_bad_height() {
        let config = DisplayConfig { height: Some(20), ..DisplayConfig::fallback() };
        assert!(DisplayDriverFactory::validate_config(&config).is_err());
    }

    #[cfg(feature = "driver-sh1106")]
    #[test]
    fn test_create_with_mock_transport() {
        let mock = MockTransport::new();
        let config = DisplayConfig {
            driver: Some(DriverKind::Sh1106),
            ..DisplayConfig::fallback()
        };
        let mut display =
            DisplayDriverFactory::create_with_transport(&config, Box::new(mock.clone()), None)
                .unwrap();

        assert_eq!(display.capabilities().controller, "sh1106");
        display.begin().unwrap();
        assert_eq!(mock.flush_count(), 8);
    }

    #[cfg(feature = "driver-ssd1306")]
    #[test]
    fn test_create_pbm_display() {
        let path = std::env::temp_dir()
            .join(format!("oledgfx-factory-{}.pbm", std::process::id()));
        let config = DisplayConfig {
            bus: Some(BusConfig::Pbm { path: path.clone() }),
            ..DisplayConfig::fallback()
        };
        let mut display = DisplayDriverFactory::create_from_config(&config).unwrap();
        assert_eq!(display.dimensions(), (128, 64));
        display.set_pixel(3, 3, 1);
        display.begin().unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("P1\n128 64\n"));
        let _ = std::fs::remove_file(&path);
    }
}
