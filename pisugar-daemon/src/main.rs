//! PiSugar 3 battery monitor daemon
//!
//! Polls the power board over I2C, shows a rotating battery reading on
//! the console and powers the host off when the battery runs low.

#![deny(unsafe_code)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use log::{info, warn};
use pisugar_core::plugin::{PiSugar3, Plugin};
use pisugar_hal::I2cConfig;
use pisugar_hal_linux::{open_bus, Delay};

mod config;
mod host;
mod tick;

use crate::config::load_config;
use crate::host::{CommandPower, ConsoleUi};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("PiSugar 3 monitor starting...");

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = load_config(path.as_deref()).context("loading configuration")?;

    let bus = open_bus(I2cConfig {
        bus: config.plugin.i2c_bus,
    })
    .context("opening I2C bus")?;

    match config.plugin.shutdown {
        Some(threshold) => info!("Shutdown threshold: {}%", threshold),
        None => info!("Shutdown threshold disabled"),
    }

    let power = CommandPower::new(config.shutdown_command.clone(), config.dry_run);
    let mut plugin = PiSugar3::new(bus, Delay, power, &config.plugin);
    let mut ui = ConsoleUi::stdout();

    plugin.on_loaded();
    plugin.on_ui_setup(&mut ui);
    if !plugin.is_ready() {
        warn!("Battery element unavailable, polling disabled");
    }

    tick::run(
        &mut plugin,
        &mut ui,
        Duration::from_millis(config.refresh_interval_ms),
        None,
    );

    plugin.on_unload(&mut ui);
    Ok(())
}
