//! Plugin configuration
//!
//! Options the host passes to the battery plugin.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default I2C bus (`/dev/i2c-1` on a Raspberry Pi)
pub const DEFAULT_I2C_BUS: u8 = 1;

/// Battery plugin options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PluginConfig {
    /// Bus number the board is attached to
    pub i2c_bus: u8,
    /// Shutdown threshold in percent; absent disables the guard
    pub shutdown: Option<u8>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            i2c_bus: DEFAULT_I2C_BUS,
            shutdown: None,
        }
    }
}
