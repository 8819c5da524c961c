//! Single-register reads with bounded retries
//!
//! Transient bus faults are common on the shared header bus, so every
//! register read is attempted a few times back to back before giving up.
//! Failures never propagate; an exhausted read is reported as `None`.

use log::{debug, error};
use pisugar_hal::I2cBus;

/// Attempts per register read unless the caller asks otherwise
pub const DEFAULT_ATTEMPTS: u8 = 3;

/// Owns the bus handle and performs retried byte reads on it
pub struct RegisterReader<B> {
    bus: B,
}

impl<B: I2cBus> RegisterReader<B> {
    /// Create a reader over an already opened bus
    pub fn new(bus: B) -> Self {
        Self { bus }
    }

    /// Read one register with [`DEFAULT_ATTEMPTS`] attempts
    pub fn read(&mut self, address: u8, register: u8) -> Option<u8> {
        self.read_with_attempts(address, register, DEFAULT_ATTEMPTS)
    }

    /// Read one register, trying up to `max_attempts` times
    ///
    /// The first successful value is returned immediately. Every failed
    /// attempt that still has a successor is logged at debug level; the
    /// final failure is logged at error level and yields `None`. There is
    /// no delay between attempts.
    pub fn read_with_attempts(
        &mut self,
        address: u8,
        register: u8,
        max_attempts: u8,
    ) -> Option<u8> {
        let mut remaining = max_attempts;

        while remaining > 0 {
            remaining -= 1;
            match self.bus.read_byte_data(address, register) {
                Ok(value) => return Some(value),
                Err(e) if remaining > 0 => {
                    debug!(
                        "Retry {} for register 0x{:02x}@0x{:02x}: {:?}",
                        remaining, register, address, e
                    );
                }
                Err(e) => {
                    error!(
                        "Retries failed for register 0x{:02x}@0x{:02x}: {:?}",
                        register, address, e
                    );
                }
            }
        }

        None
    }

    /// Access the underlying bus
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.bus
    }
}
