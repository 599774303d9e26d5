/*
 *  display/error.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Unified error types for display subsystem
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

use thiserror::Error;

/// Unified error type for all display operations
///
/// Drawing calls never produce one of these; only construction,
/// controller setup and flushing can fail.
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Framebuffer storage could not be reserved
    #[error("Failed to allocate {bytes} byte framebuffer")]
    Allocation { bytes: usize },

    /// Width or height unusable for a page-packed buffer
    #[error("Invalid display dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Transport reported a failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// display-interface error
    #[error("Display interface error: {0:?}")]
    Interface(display_interface::DisplayError),

    /// I2C communication error
    #[error("I2C communication error: {0}")]
    I2c(String),

    /// File output error (PBM transport)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Flushed buffer does not match the configured geometry
    #[error("Buffer size mismatch: expected {expected} bytes, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Unsupported operation for this display
    #[error("Operation not supported by this display")]
    UnsupportedOperation,
}

// display_interface::DisplayError doesn't implement std::error::Error
// so it can't be a #[source]
impl From<display_interface::DisplayError> for DisplayError {
    fn from(err: display_interface::DisplayError) -> Self {
        DisplayError::Interface(err)
    }
}

/// Factory error types
#[derive(Debug, Error)]
pub enum DisplayFactoryError {
    /// No driver specified in configuration
    #[error("No display driver specified in configuration")]
    NoDriverSpecified,

    /// No bus configuration specified
    #[error("No bus configuration specified")]
    NoBusConfiguration,

    /// Display driver initialization failed
    #[error("Driver initialization failed: {0}")]
    DriverInitFailed(#[source] DisplayError),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<DisplayError> for DisplayFactoryError {
    fn from(err: DisplayError) -> Self {
        DisplayFactoryError::DriverInitFailed(err)
    }
}

impl From<DisplayFactoryError> for DisplayError {
    fn from(err: DisplayFactoryError) -> Self {
        match err {
            DisplayFactoryError::DriverInitFailed(e) => e,
            DisplayFactoryError::NoDriverSpecified =>
                DisplayError::InvalidConfiguration("No driver specified".to_string()),
            DisplayFactoryError::NoBusConfiguration =>
                DisplayError::InvalidConfiguration("No bus configuration".to_string()),
            DisplayFactoryError::ConfigError(msg) =>
                DisplayError::InvalidConfiguration(msg),
        }
    }
}
