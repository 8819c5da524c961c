//! PiSugar 3 register map
//!
//! The board answers at a single fixed address and exposes every value
//! used here as a one-byte register.

/// 7-bit I2C address of the power board
pub const DEVICE_ADDRESS: u8 = 0x57;

/// Charge status flags (bit 7 set while external power is connected)
pub const REG_CHARGE_STATUS: u8 = 0x02;
/// Board info byte
pub const REG_INFO: u8 = 0x03;
/// Raw chip temperature, offset by [`TEMPERATURE_OFFSET_C`]
pub const REG_TEMPERATURE: u8 = 0x04;
/// Battery voltage, high byte (millivolts)
pub const REG_VOLTAGE_HIGH: u8 = 0x22;
/// Battery voltage, low byte (millivolts)
pub const REG_VOLTAGE_LOW: u8 = 0x23;
/// Remaining charge in percent
pub const REG_CAPACITY: u8 = 0x2a;

/// Calibration offset subtracted from the raw temperature byte
pub const TEMPERATURE_OFFSET_C: i16 = 40;

/// Bit in [`REG_CHARGE_STATUS`] that signals charging / power connected
pub const CHARGE_FLAG_MASK: u8 = 0x80;

/// Voltage reported when every attempt to read it failed
///
/// Not a measurement. It is far above any LiPo cell voltage so a reader
/// can spot it, but the type does not distinguish it from a real value.
pub const VOLTAGE_FALLBACK_V: f32 = 69.0;

/// Capacity reported when every attempt to read it failed
///
/// Not a measurement; deliberately outside 0-100. Because it is above any
/// configurable threshold it never triggers a shutdown.
pub const CAPACITY_FALLBACK_PERCENT: u16 = 420;
