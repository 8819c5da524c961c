//! Value and label formatting for the battery element

use core::fmt::Write;

use heapless::String;

use super::rotator::Slot;
use crate::telemetry::Telemetry;

/// Formatted value; the longest is a five-byte temperature like "-40°"
pub type ValueText = String<12>;

/// Element label: charging or on battery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargeLabel {
    Bat,
    Chg,
}

impl ChargeLabel {
    pub fn from_charging(charging: bool) -> Self {
        if charging {
            ChargeLabel::Chg
        } else {
            ChargeLabel::Bat
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChargeLabel::Bat => "BAT",
            ChargeLabel::Chg => "CHG",
        }
    }
}

/// Voltage with two decimals, e.g. "3.85v"
pub fn format_voltage(voltage_v: f32) -> ValueText {
    let mut out = ValueText::new();
    let _ = write!(out, "{:2.2}v", voltage_v);
    out
}

/// Capacity padded to two characters, e.g. " 7%"
pub fn format_capacity(capacity_percent: u16) -> ValueText {
    let mut out = ValueText::new();
    let _ = write!(out, "{:2}%", capacity_percent);
    out
}

/// Temperature padded to two characters, e.g. "24°"; "--°" when unknown
pub fn format_temperature(temperature_c: Option<i16>) -> ValueText {
    let mut out = ValueText::new();
    let _ = match temperature_c {
        Some(t) => write!(out, "{:2}°", t),
        None => out.push_str("--°").map_err(|_| core::fmt::Error),
    };
    out
}

/// Text for whichever slot is being shown
pub fn format_slot(slot: Slot, telemetry: &Telemetry) -> ValueText {
    match slot {
        Slot::Voltage => format_voltage(telemetry.voltage_v),
        Slot::Capacity => format_capacity(telemetry.capacity_percent),
        Slot::Temperature => format_temperature(telemetry.temperature_c),
    }
}
