//! Rotating single-value display
//!
//! One UI element cycles through voltage, capacity and temperature.

pub mod format;
pub mod rotator;

pub use format::{format_slot, ChargeLabel, ValueText};
pub use rotator::{DisplayRotator, Slot, ROTATION_PERIOD_MS};
