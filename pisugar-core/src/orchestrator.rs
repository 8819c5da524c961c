//! Per-tick telemetry driver
//!
//! Samples the board, logs temperature changes, picks the slot to show and
//! decides whether the host must power off.

use core::fmt;

use embedded_hal::delay::DelayNs;
use log::debug;
use pisugar_hal::I2cBus;

use crate::display::{format_slot, ChargeLabel, DisplayRotator, Slot, ValueText};
use crate::safety::ShutdownGuard;
use crate::sampler::TelemetrySampler;
use crate::telemetry::Telemetry;

/// What the host should render after a tick
#[derive(Debug, Clone, PartialEq)]
pub struct RenderCommand {
    /// "BAT" or "CHG"
    pub label: ChargeLabel,
    /// Formatted value of the current slot
    pub value: ValueText,
    /// Slot the value belongs to
    pub slot: Slot,
    /// Readings the command was built from
    pub telemetry: Telemetry,
    /// Capacity is at or below the configured threshold
    pub shutdown: bool,
}

/// Owns the sampler, the rotation state and the shutdown guard
pub struct TelemetryOrchestrator<B, D> {
    sampler: TelemetrySampler<B, D>,
    rotator: DisplayRotator,
    guard: ShutdownGuard,
    /// Only used to avoid repeating the same debug line every tick
    last_logged_temperature: Option<i16>,
}

impl<B, D> TelemetryOrchestrator<B, D>
where
    B: I2cBus,
    D: DelayNs,
{
    pub fn new(sampler: TelemetrySampler<B, D>, guard: ShutdownGuard) -> Self {
        Self::with_rotator(sampler, guard, DisplayRotator::new())
    }

    pub fn with_rotator(
        sampler: TelemetrySampler<B, D>,
        guard: ShutdownGuard,
        rotator: DisplayRotator,
    ) -> Self {
        Self {
            sampler,
            rotator,
            guard,
            last_logged_temperature: None,
        }
    }

    /// Run one refresh cycle
    pub fn tick(&mut self, now_ms: u64) -> RenderCommand {
        let telemetry = self.sampler.sample();
        self.log_temperature_change(&telemetry);

        let label = ChargeLabel::from_charging(telemetry.is_charging());
        let slot = self.rotator.tick(now_ms);
        let value = format_slot(slot, &telemetry);
        let shutdown = self.guard.check(telemetry.capacity_percent);

        RenderCommand {
            label,
            value,
            slot,
            telemetry,
            shutdown,
        }
    }

    fn log_temperature_change(&mut self, telemetry: &Telemetry) {
        let Some(temperature) = telemetry.temperature_c else {
            return;
        };
        if self.last_logged_temperature == Some(temperature) {
            return;
        }

        debug!(
            "pisugar3 (chg {}, info {}, temp {})",
            Hex(telemetry.charge_flags),
            Hex(telemetry.info),
            temperature
        );
        self.last_logged_temperature = Some(temperature);
    }

    pub fn guard(&self) -> &ShutdownGuard {
        &self.guard
    }

    pub fn rotator(&self) -> &DisplayRotator {
        &self.rotator
    }

    /// Tear down and give the sampler back
    pub fn into_sampler(self) -> TelemetrySampler<B, D> {
        self.sampler
    }
}

/// Upper-case hex for a byte that may be missing
struct Hex(Option<u8>);

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(b) => write!(f, "{:X}", b),
            None => f.write_str("--"),
        }
    }
}
