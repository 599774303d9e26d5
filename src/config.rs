/*
 *  config.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Layered configuration: defaults, YAML file, command line
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

use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use dirs_next::home_dir;
use serde::{Deserialize, Serialize};
use std::{fs, path::{Path, PathBuf}};
use thiserror::Error;

use crate::display::mode::CompositingMode;

/// Widest panel the supported controllers can column-address
pub const MAX_WIDTH: u32 = 128;

/// Tallest panel the supported controllers can multiplex
pub const MAX_HEIGHT: u32 = 64;

/// Error type for config loading/validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Top-level app configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    /// e.g. "info" | "debug"
    pub log_level: Option<String>,
    /// Attach the logging diagnostic hook to the display
    pub diagnostics: Option<bool>,
    /// Panel geometry, controller and wiring
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub driver: Option<DriverKind>,
    pub bus: Option<BusConfig>,
    pub contrast: Option<u8>,       // 0-255
    pub invert: Option<bool>,
    pub mode: Option<CompositingMode>, // initial compositing mode
}

impl DisplayConfig {
    /// 128x64 SSD1306 rendered to `oledgfx.pbm`; used when nothing is configured
    pub fn fallback() -> Self {
        Self {
            width: Some(MAX_WIDTH),
            height: Some(MAX_HEIGHT),
            driver: Some(DriverKind::Ssd1306),
            bus: Some(BusConfig::Pbm { path: PathBuf::from("oledgfx.pbm") }),
            ..Default::default()
        }
    }

    /// Configured size or the 128x64 default
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width.unwrap_or(MAX_WIDTH), self.height.unwrap_or(MAX_HEIGHT))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BusConfig {
    I2c {
        bus: String,        // e.g. "/dev/i2c-1"
        address: u8,        // e.g. 0x3C (7-bit)
        speed_hz: Option<u32>,
    },
    /// No hardware: frames are written to a PBM image
    Pbm {
        path: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DriverKind {
    Ssd1306,
    Sh1106,
}

/// CLI overrides. All fields are Options so we can layer them over YAML.
#[derive(Debug, Parser, Clone, Default)]
#[command(name = "oledgfx", about = "Monochrome OLED graphics demo", version)]
pub struct Cli {
    /// Path to a YAML config file (overrides search)
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub log_level: Option<String>,
    /// Report discarded drawing calls at debug level
    #[arg(long, action = ArgAction::SetTrue)]
    pub diagnostics: bool,
    #[arg(long, value_enum)]
    pub driver: Option<DriverKind>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
    /// I2C bus device, e.g. /dev/i2c-1
    #[arg(long, value_hint = ValueHint::FilePath, conflicts_with = "pbm")]
    pub i2c_bus: Option<String>,
    /// 7-bit I2C address, decimal or 0x-prefixed hex
    #[arg(long, value_parser = parse_address)]
    pub i2c_address: Option<u8>,
    /// Render to this PBM file instead of a panel
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub pbm: Option<PathBuf>,
    #[arg(long)]
    pub contrast: Option<u8>,
    #[arg(long, action = ArgAction::Set)]
    pub invert: Option<bool>,
    /// Initial compositing mode: set, or, and, xor, not
    #[arg(long)]
    pub mode: Option<CompositingMode>,
    /// dump fully merged config (after overrides) and exit
    #[arg(long, action = ArgAction::SetTrue)]
    pub dump_config: bool,
}

fn parse_address(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse::<u8>(),
    };
    parsed.map_err(|e| format!("invalid I2C address {:?}: {}", s, e))
}

/// Public entry point: parse CLI, read YAML, merge, validate.
pub fn load() -> Result<Config, ConfigError> {
    let cli = Cli::parse();
    let cfg = load_from(&cli)?;

    if cli.dump_config {
        // Pretty YAML of effective config (nice for debugging)
        let s = serde_yaml::to_string(&cfg)?;
        println!("{s}");
        std::process::exit(0);
    }

    Ok(cfg)
}

/// Layer an already parsed command line over defaults and YAML
pub fn load_from(cli: &Cli) -> Result<Config, ConfigError> {
    // 1) defaults (from `Default` impl)
    let mut cfg = Config::default();

    // 2) YAML file (explicit path or search)
    if let Some(p) = cli.config.as_ref() {
        if p.exists() {
            let y = read_yaml(p)?;
            merge(&mut cfg, y);
        } else {
            return Err(ConfigError::Validation(format!(
                "Config file not found: {}",
                p.display()
            )));
        }
    } else if let Some(p) = find_config_file() {
        let y = read_yaml(&p)?;
        merge(&mut cfg, y);
    }

    // 3) CLI overrides (highest precedence)
    apply_cli_overrides(&mut cfg, cli);

    // 4) Validate
    validate(&cfg)?;

    Ok(cfg)
}

/// Try common locations in order (first hit wins).
fn find_config_file() -> Option<PathBuf> {
    // XDG-style: ~/.config/oledgfx/config.yaml
    if let Some(home) = home_dir() {
        let p = home.join(".config/oledgfx/config.yaml");
        if p.exists() { return Some(p) }
        let p = home.join(".config/oledgfx.yaml");
        if p.exists() { return Some(p) }
    }
    // project local
    for candidate in &["oledgfx.yaml", "config.yaml", "config/oledgfx.yaml"] {
        let p = PathBuf::from(candidate);
        if p.exists() { return Some(p) }
    }
    None
}

fn read_yaml(path: &Path) -> Result<Config, ConfigError> {
    let s = fs::read_to_string(path)?;
    let cfg: Config = serde_yaml::from_str(&s)?;
    Ok(cfg)
}

/// Shallow merge `src` into `dst`, Option-by-Option.
fn merge(dst: &mut Config, src: Config) {
    if src.log_level.is_some()   { dst.log_level = src.log_level; }
    if src.diagnostics.is_some() { dst.diagnostics = src.diagnostics; }
    match (&mut dst.display, src.display) {
        (None, Some(c)) => dst.display = Some(c),
        (Some(d), Some(s)) => merge_display(d, s),
        _ => {}
    }
}

fn merge_display(dst: &mut DisplayConfig, src: DisplayConfig) {
    if src.width.is_some()    { dst.width = src.width; }
    if src.height.is_some()   { dst.height = src.height; }
    if src.driver.is_some()   { dst.driver = src.driver; }
    if src.bus.is_some()      { dst.bus = src.bus; }
    if src.contrast.is_some() { dst.contrast = src.contrast; }
    if src.invert.is_some()   { dst.invert = src.invert; }
    if src.mode.is_some()     { dst.mode = src.mode; }
}

fn apply_cli_overrides(cfg: &mut Config, cli: &Cli) {
    if cli.log_level.is_some() { cfg.log_level = cli.log_level.clone(); }
    if cli.diagnostics         { cfg.diagnostics = Some(true); }

    let any_display = cli.driver.is_some()
        || cli.width.is_some()
        || cli.height.is_some()
        || cli.i2c_bus.is_some()
        || cli.i2c_address.is_some()
        || cli.pbm.is_some()
        || cli.contrast.is_some()
        || cli.invert.is_some()
        || cli.mode.is_some();

    if any_display && cfg.display.is_none() {
        cfg.display = Some(DisplayConfig::default());
    }
    let Some(display) = cfg.display.as_mut() else { return };

    if cli.driver.is_some()   { display.driver = cli.driver; }
    if cli.width.is_some()    { display.width = cli.width; }
    if cli.height.is_some()   { display.height = cli.height; }
    if cli.contrast.is_some() { display.contrast = cli.contrast; }
    if cli.invert.is_some()   { display.invert = cli.invert; }
    if cli.mode.is_some()     { display.mode = cli.mode; }

    if let Some(path) = cli.pbm.as_ref() {
        display.bus = Some(BusConfig::Pbm { path: path.clone() });
    } else if cli.i2c_bus.is_some() || cli.i2c_address.is_some() {
        // keep whatever half of the I2C wiring the file already gave us
        let (bus, address, speed_hz) = match display.bus.take() {
            Some(BusConfig::I2c { bus, address, speed_hz }) => (bus, address, speed_hz),
            _ => ("/dev/i2c-1".to_string(), 0x3C, None),
        };
        display.bus = Some(BusConfig::I2c {
            bus: cli.i2c_bus.clone().unwrap_or(bus),
            address: cli.i2c_address.unwrap_or(address),
            speed_hz,
        });
    }
}

/// Put any invariants here (required fields, ranges, etc.)
pub fn validate(cfg: &Config) -> Result<(), ConfigError> {
    let Some(display) = cfg.display.as_ref() else { return Ok(()) };

    let (w, h) = display.dimensions();
    if w == 0 || h == 0 {
        return Err(ConfigError::Validation("display width/height must be > 0".into()));
    }
    if h % 8 != 0 {
        return Err(ConfigError::Validation(format!(
            "display height {} must be a multiple of 8", h
        )));
    }
    if w > MAX_WIDTH || h > MAX_HEIGHT {
        return Err(ConfigError::Validation(format!(
            "display {}x{} exceeds {}x{}", w, h, MAX_WIDTH, MAX_HEIGHT
        )));
    }
    match display.bus.as_ref() {
        Some(BusConfig::I2c { address, .. }) if *address > 0x7F => {
            return Err(ConfigError::Validation(format!(
                "I2C address 0x{:02X} is not 7-bit", address
            )));
        }
        Some(BusConfig::I2c { bus, .. }) if bus.is_empty() => {
            return Err(ConfigError::Validation("I2C bus path is empty".into()));
        }
        Some(BusConfig::Pbm { path }) if path.as_os_str().is_empty() => {
            return Err(ConfigError::Validation("PBM output path is empty".into()));
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_yaml(name: &str, body: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("oledgfx-cfg-{}-{}.yaml", name, std::process::id()));
        fs::write(&path, body).unwrap();
        path
    }

    const SAMPLE: &str = "\
log_level: debug
display:
  driver: sh1106
  width: 128
  height: 32
  contrast: 200
  mode: xor
  bus:
    type: i2c
    bus: /dev/i2c-3
    address: 61
";

    #[test]
    fn test_yaml_is_read() {
        let path = write_yaml("read", SAMPLE);
        let cli = Cli { config: Some(path.clone()), ..Default::default() };
        let cfg = load_from(&cli).unwrap();

        assert_eq!(cfg.log_level.as_deref(), Some("debug"));
        let display = cfg.display.unwrap();
        assert_eq!(display.driver, Some(DriverKind::Sh1106));
        assert_eq!(display.dimensions(), (128, 32));
        assert_eq!(display.contrast, Some(200));
        assert_eq!(display.mode, Some(CompositingMode::Xor));
        assert_eq!(
            display.bus,
            Some(BusConfig::I2c { bus: "/dev/i2c-3".into(), address: 0x3D, speed_hz: None })
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_cli_overrides_yaml() {
        let path = write_yaml("override", SAMPLE);
        let cli = Cli::parse_from([
            "oledgfx",
            "--config", path.to_str().unwrap(),
            "--driver", "ssd1306",
            "--height", "64",
            "--i2c-address", "0x3C",
            "--log-level", "warn",
        ]);
        let cfg = load_from(&cli).unwrap();

        assert_eq!(cfg.log_level.as_deref(), Some("warn"));
        let display = cfg.display.unwrap();
        assert_eq!(display.driver, Some(DriverKind::Ssd1306));
        assert_eq!(display.dimensions(), (128, 64));
        // bus path survives, address replaced
        assert_eq!(
            display.bus,
            Some(BusConfig::I2c { bus: "/dev/i2c-3".into(), address: 0x3C, speed_hz: None })
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_mode_flag_is_parsed() {
        let path = write_yaml("mode", SAMPLE);
        let cli = Cli::parse_from([
            "oledgfx", "--config", path.to_str().unwrap(), "--mode", "AND",
        ]);
        let cfg = load_from(&cli).unwrap();
        assert_eq!(cfg.display.unwrap().mode, Some(CompositingMode::And));
        let _ = fs::remove_file(path);

        assert!(Cli::try_parse_from(["oledgfx", "--mode", "blend"]).is_err());
    }

    #[test]
    fn test_pbm_flag_replaces_bus() {
        let path = write_yaml("pbm", SAMPLE);
        let cli = Cli::parse_from([
            "oledgfx", "--config", path.to_str().unwrap(), "--pbm", "out/frame.pbm",
        ]);
        let cfg = load_from(&cli).unwrap();
        assert_eq!(
            cfg.display.unwrap().bus,
            Some(BusConfig::Pbm { path: PathBuf::from("out/frame.pbm") })
        );
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let cli = Cli {
            config: Some(PathBuf::from("/nonexistent/oledgfx.yaml")),
            ..Default::default()
        };
        assert!(matches!(load_from(&cli), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_bad_yaml_is_error() {
        let path = write_yaml("bad", "display: [not, a, map]\n");
        let cli = Cli { config: Some(path.clone()), ..Default::default() };
        assert!(matches!(load_from(&cli), Err(ConfigError::Yaml(_))));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_validation_rules() {
        let with = |display: DisplayConfig| Config { display: Some(display), ..Default::default() };

        assert!(validate(&with(DisplayConfig::fallback())).is_ok());
        assert!(validate(&Config::default()).is_ok());

        let bad = [
            DisplayConfig { width: Some(0), ..DisplayConfig::fallback() },
            DisplayConfig { height: Some(60), ..DisplayConfig::fallback() },
            DisplayConfig { width: Some(132), ..DisplayConfig::fallback() },
            DisplayConfig { height: Some(128), ..DisplayConfig::fallback() },
            DisplayConfig {
                bus: Some(BusConfig::I2c { bus: "/dev/i2c-1".into(), address: 0x80, speed_hz: None }),
                ..DisplayConfig::fallback()
            },
            DisplayConfig {
                bus: Some(BusConfig::Pbm { path: PathBuf::new() }),
                ..DisplayConfig::fallback()
            },
        ];
        for display in bad {
            assert!(validate(&with(display.clone())).is_err(), "{:?}", display);
        }
    }

    #[test]
    fn test_parse_address() {
        assert_eq!(parse_address("0x3C"), Ok(0x3C));
        assert_eq!(parse_address("60"), Ok(60));
        assert!(parse_address("0xZZ").is_err());
    }
}
