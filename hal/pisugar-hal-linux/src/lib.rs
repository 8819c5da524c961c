//! Linux implementation of the PiSugar HAL
//!
//! Opens `/dev/i2c-N` through `linux-embedded-hal` and adapts any
//! `embedded-hal` 1.0 I2C master to [`pisugar_hal::I2cBus`].

#![deny(unsafe_code)]

pub mod i2c;

pub use i2c::{open_bus, HalI2c, OpenError};

// Blocking delay used for the sampler's pauses between outer attempts
pub use linux_embedded_hal::Delay;
