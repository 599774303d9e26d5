/*
 *  main.rs
 *
 *  oledgfx - monochrome page-packed graphics
 *  (c) 2020-26 Stuart Hunter
 *
 *  Demo: bring a panel up, draw a test card, flush, exit
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

use anyhow::{Context, Result};
use embedded_graphics::mono_font::{ascii::FONT_6X10, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use env_logger::Env;
use log::{info, warn};

use oledgfx::config::{self, DisplayConfig};
use oledgfx::display::diagnostics::log_hook;
use oledgfx::display::DisplayDriverFactory;
use oledgfx::prelude::*;

/// Border, title, rules, circles and an XOR badge
fn draw_test_card<S: TextSurface + ?Sized>(display: &mut S) {
    let (w, h) = display.dimensions();
    let (w, h) = (w as i32, h as i32);

    display.clear_all();
    display.draw_rectangle(0, 0, w, h, 1);

    let previous = display.set_font(Some(&GLCD_5X8));
    let line = display.font_height() as i32;
    let title = env!("CARGO_PKG_NAME");
    display.draw_string((w - GLCD_5X8.text_width(title)) / 2, 3, title, 1);
    display.draw_hline(4, 3 + line + 1, w - 9, 1);

    display.draw_circle(w / 4, h / 2 + 6, h / 5, 1);
    display.draw_line(4, h - 5, w / 2, 3 + line + 4, 1);

    // inverted badge: solid disc, then punch the label out of it
    display.draw_filled_circle(3 * w / 4, h / 2 + 4, h / 4, 1);
    let mode = display.set_mode(CompositingMode::Xor);
    display.draw_string(3 * w / 4 - 8, h / 2, "Hi", 1);
    display.set_mode(mode);
    display.set_font(previous);

    // embedded-graphics text through the same clip and mode
    display.set_clip(ClipRect::new(2, h - 12, (w / 2 - 4) as u16, 10));
    let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
    let _ = Text::new("1bpp", Point::new(w / 8, h - 4), style)
        .draw(&mut GraphicsTarget::new(&mut *display));
    display.clear_clip();
}

fn main() -> Result<()> {
    let cfg = config::load().context("loading configuration")?;

    let level = cfg.log_level.as_deref().unwrap_or("info");
    env_logger::Builder::from_env(Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();

    info!("{} v.{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let display_config = cfg.display.clone().unwrap_or_else(|| {
        warn!("No display configured, rendering to oledgfx.pbm");
        DisplayConfig::fallback()
    });

    let hook = cfg.diagnostics.unwrap_or(false).then(log_hook);
    let mut display = DisplayDriverFactory::create_with_hook(&display_config, hook)
        .context("creating display")?;

    display.begin().context("initializing display")?;
    draw_test_card(display.as_mut());
    display.display().context("flushing frame")?;

    let caps = display.capabilities();
    info!("Drew test card on {} {}x{}", caps.controller, caps.width, caps.height);
    Ok(())
}
