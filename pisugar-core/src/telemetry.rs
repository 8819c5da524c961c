//! Telemetry values and the conversions from raw register bytes

use crate::registers::{CHARGE_FLAG_MASK, TEMPERATURE_OFFSET_C};

/// Raw bytes of the three status registers
///
/// Any of them may be missing when the bus kept failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusBytes {
    /// Charge flag byte (register 0x02)
    pub charge_flags: Option<u8>,
    /// Info byte (register 0x03)
    pub info: Option<u8>,
    /// Raw temperature byte (register 0x04)
    pub raw_temperature: Option<u8>,
}

impl StatusBytes {
    pub fn from_slots(slots: [Option<u8>; 3]) -> Self {
        let [charge_flags, info, raw_temperature] = slots;
        Self {
            charge_flags,
            info,
            raw_temperature,
        }
    }
}

/// Battery voltage in volts from the two millivolt bytes
pub fn voltage_from_bytes(high: u8, low: u8) -> f32 {
    let millivolts = ((high as u16) << 8) + low as u16;
    millivolts as f32 / 1000.0
}

/// Chip temperature in °C from the raw register byte
pub fn temperature_from_raw(raw: u8) -> i16 {
    raw as i16 - TEMPERATURE_OFFSET_C
}

/// True while charging or while external power is connected
pub fn is_charging(charge_flags: u8) -> bool {
    charge_flags & CHARGE_FLAG_MASK != 0
}

/// One tick's worth of readings
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Telemetry {
    /// Battery voltage (V), or the voltage fallback
    pub voltage_v: f32,
    /// Remaining charge (%), or the capacity fallback
    pub capacity_percent: u16,
    /// Charge flag byte
    pub charge_flags: Option<u8>,
    /// Info byte
    pub info: Option<u8>,
    /// Chip temperature (°C)
    pub temperature_c: Option<i16>,
}

impl Telemetry {
    /// Combine the three sampler results
    pub fn new(voltage_v: f32, capacity_percent: u16, status: StatusBytes) -> Self {
        Self {
            voltage_v,
            capacity_percent,
            charge_flags: status.charge_flags,
            info: status.info,
            temperature_c: status.raw_temperature.map(temperature_from_raw),
        }
    }

    /// Charging state; an unreadable flag byte counts as not charging
    pub fn is_charging(&self) -> bool {
        self.charge_flags.is_some_and(is_charging)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_offset() {
        assert_eq!(temperature_from_raw(64), 24);
        assert_eq!(temperature_from_raw(40), 0);
        assert_eq!(temperature_from_raw(0), -40);
    }

    #[test]
    fn test_charge_flag() {
        assert!(is_charging(0x80));
        assert!(is_charging(0xC3));
        assert!(!is_charging(0x00));
        assert!(!is_charging(0x7F));
    }

    #[test]
    fn test_voltage_from_bytes() {
        // 0x0F0A = 3850 mV
        assert_eq!(voltage_from_bytes(0x0F, 0x0A), 3.85);
        assert_eq!(voltage_from_bytes(0, 0), 0.0);
    }

    #[test]
    fn test_telemetry_derivations() {
        let status = StatusBytes::from_slots([Some(0x80), Some(0x11), Some(64)]);
        let t = Telemetry::new(3.85, 72, status);
        assert_eq!(t.temperature_c, Some(24));
        assert!(t.is_charging());
        assert_eq!(t.info, Some(0x11));
    }

    #[test]
    fn test_missing_status_bytes() {
        let t = Telemetry::new(3.85, 72, StatusBytes::default());
        assert_eq!(t.temperature_c, None);
        assert!(!t.is_charging());
    }
}
