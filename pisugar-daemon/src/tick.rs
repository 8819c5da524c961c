//! Refresh loop
//!
//! Drives the plugin once per refresh interval until a shutdown has been
//! requested.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;
use log::{info, warn};
use pisugar_core::plugin::{PiSugar3, Plugin};
use pisugar_hal::I2cBus;

use crate::host::{CommandPower, ConsoleUi};

/// Tick the plugin until power-off is requested or `max_ticks` ran
///
/// Returns the number of ticks performed.
pub fn run<B, D, W>(
    plugin: &mut PiSugar3<B, D, CommandPower>,
    ui: &mut ConsoleUi<W>,
    interval: Duration,
    max_ticks: Option<u64>,
) -> u64
where
    B: I2cBus,
    D: DelayNs,
    W: Write,
{
    info!("Refresh loop started ({} ms)", interval.as_millis());

    let start = Instant::now();
    let mut ticks = 0u64;

    loop {
        let now_ms = start.elapsed().as_millis() as u64;
        plugin.on_ui_update(ui, now_ms);
        ticks += 1;

        if let Err(e) = ui.flush() {
            warn!("console flush failed: {}", e);
        }

        if plugin.power().is_requested() {
            info!("Shutdown requested, leaving refresh loop");
            break;
        }
        if max_ticks.is_some_and(|max| ticks >= max) {
            break;
        }

        thread::sleep(interval);
    }

    ticks
}
