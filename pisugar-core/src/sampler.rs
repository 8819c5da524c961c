//! Telemetry sampler
//!
//! Composes retried register reads into the three derived readings. Each
//! reading runs its own outer retry loop on top of the reader's inner one,
//! so a fully unresponsive bus costs `3 × 3` reads and three pauses per
//! reading.

use embedded_hal::delay::DelayNs;
use pisugar_hal::I2cBus;

use crate::reader::RegisterReader;
use crate::registers::{
    CAPACITY_FALLBACK_PERCENT, DEVICE_ADDRESS, REG_CAPACITY, REG_CHARGE_STATUS, REG_INFO,
    REG_TEMPERATURE, REG_VOLTAGE_HIGH, REG_VOLTAGE_LOW, VOLTAGE_FALLBACK_V,
};
use crate::retry::{ByteCache, OuterRetry};
use crate::telemetry::{voltage_from_bytes, StatusBytes, Telemetry};

/// Why an outer attempt did not produce a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SampleError {
    /// A register stayed unreadable after the inner retries
    MissingRegister(u8),
}

/// Voltage registers in cache slot order
const VOLTAGE_REGISTERS: [u8; 2] = [REG_VOLTAGE_LOW, REG_VOLTAGE_HIGH];

/// Status registers in cache slot order
const STATUS_REGISTERS: [u8; 3] = [REG_CHARGE_STATUS, REG_INFO, REG_TEMPERATURE];

/// Reads voltage, capacity and status from the power board
pub struct TelemetrySampler<B, D> {
    reader: RegisterReader<B>,
    delay: D,
    retry: OuterRetry,
}

impl<B, D> TelemetrySampler<B, D>
where
    B: I2cBus,
    D: DelayNs,
{
    /// Create a sampler with the default outer retry policy
    pub fn new(bus: B, delay: D) -> Self {
        Self::with_retry(bus, delay, OuterRetry::default())
    }

    pub fn with_retry(bus: B, delay: D, retry: OuterRetry) -> Self {
        Self {
            reader: RegisterReader::new(bus),
            delay,
            retry,
        }
    }

    /// Battery voltage in volts
    ///
    /// Low and high bytes are cached across outer attempts. Returns
    /// [`VOLTAGE_FALLBACK_V`] when the value could never be assembled.
    pub fn read_voltage(&mut self) -> f32 {
        let Self {
            reader,
            delay,
            retry,
        } = self;
        let mut cache = ByteCache::<2>::new();

        retry
            .run(delay, || {
                cache.fill_missing(|i| reader.read(DEVICE_ADDRESS, VOLTAGE_REGISTERS[i]));
                match cache.complete() {
                    Some([low, high]) => Ok(voltage_from_bytes(high, low)),
                    None => Err(missing(&cache, &VOLTAGE_REGISTERS)),
                }
            })
            .unwrap_or(VOLTAGE_FALLBACK_V)
    }

    /// Remaining charge in percent
    ///
    /// Returns [`CAPACITY_FALLBACK_PERCENT`] when every attempt failed.
    pub fn read_capacity(&mut self) -> u16 {
        let Self {
            reader,
            delay,
            retry,
        } = self;

        retry
            .run(delay, || {
                reader
                    .read(DEVICE_ADDRESS, REG_CAPACITY)
                    .map(u16::from)
                    .ok_or(SampleError::MissingRegister(REG_CAPACITY))
            })
            .unwrap_or(CAPACITY_FALLBACK_PERCENT)
    }

    /// Charge flag, info and raw temperature bytes
    ///
    /// Bytes are cached across outer attempts. After the last attempt,
    /// whatever was obtained is returned; the rest stays `None`.
    pub fn read_status(&mut self) -> StatusBytes {
        let Self {
            reader,
            delay,
            retry,
        } = self;
        let mut cache = ByteCache::<3>::new();

        let complete = retry.run(delay, || {
            cache.fill_missing(|i| reader.read(DEVICE_ADDRESS, STATUS_REGISTERS[i]));
            cache
                .complete()
                .ok_or_else(|| missing(&cache, &STATUS_REGISTERS))
        });

        match complete {
            Some(bytes) => StatusBytes::from_slots(bytes.map(Some)),
            None => StatusBytes::from_slots(cache.slots()),
        }
    }

    /// Sample everything for one tick: capacity, voltage, then status
    pub fn sample(&mut self) -> Telemetry {
        let capacity = self.read_capacity();
        let voltage = self.read_voltage();
        let status = self.read_status();
        Telemetry::new(voltage, capacity, status)
    }

    /// Give the bus and delay back
    pub fn release(self) -> (B, D) {
        (self.reader.release(), self.delay)
    }
}

fn missing<const N: usize>(cache: &ByteCache<N>, registers: &[u8; N]) -> SampleError {
    let index = cache.first_missing().unwrap_or(0);
    SampleError::MissingRegister(registers[index])
}
