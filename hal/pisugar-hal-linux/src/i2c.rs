//! I2C bus driver for Linux i2c-dev

use embedded_hal::i2c::{ErrorKind, I2c};
use linux_embedded_hal::I2cdev;
use log::info;
use pisugar_hal::{I2cBus, I2cBusError, I2cConfig};

/// Failure to open the bus character device
#[derive(Debug, thiserror::Error)]
#[error("failed to open I2C bus {path}")]
pub struct OpenError {
    /// Device path that was tried
    pub path: String,
    #[source]
    source: linux_embedded_hal::i2cdev::linux::LinuxI2CError,
}

/// Open `/dev/i2c-<bus>` as an [`I2cBus`]
pub fn open_bus(config: I2cConfig) -> Result<HalI2c<I2cdev>, OpenError> {
    let path = format!("/dev/i2c-{}", config.bus);
    let dev = I2cdev::new(&path).map_err(|source| OpenError {
        path: path.clone(),
        source,
    })?;
    info!("Opened I2C bus {}", path);
    Ok(HalI2c::new(dev))
}

/// Adapter from an `embedded-hal` I2C master to [`I2cBus`]
pub struct HalI2c<T> {
    inner: T,
}

impl<T> HalI2c<T> {
    /// Wrap an `embedded-hal` I2C master
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Release the wrapped master
    pub fn into_inner(self) -> T {
        self.inner
    }
}

fn map_error<E: embedded_hal::i2c::Error>(e: E) -> I2cBusError {
    match e.kind() {
        ErrorKind::Bus => I2cBusError::Bus,
        ErrorKind::ArbitrationLoss => I2cBusError::ArbitrationLost,
        ErrorKind::NoAcknowledge(_) => I2cBusError::Nack,
        ErrorKind::Overrun => I2cBusError::Overrun,
        _ => I2cBusError::Other,
    }
}

impl<T: I2c> I2cBus for HalI2c<T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.inner.write(address, data).map_err(map_error)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.inner.read(address, buf).map_err(map_error)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.inner
            .write_read(address, write_data, read_buf)
            .map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::{NoAcknowledgeSource, Operation};

    #[derive(Debug)]
    struct FakeError(ErrorKind);

    impl embedded_hal::i2c::Error for FakeError {
        fn kind(&self) -> ErrorKind {
            self.0
        }
    }

    /// Single-device register file; `fail_with` makes every transaction fail
    struct FakeMaster {
        registers: [u8; 0x30],
        fail_with: Option<ErrorKind>,
    }

    impl embedded_hal::i2c::ErrorType for FakeMaster {
        type Error = FakeError;
    }

    impl I2c for FakeMaster {
        fn transaction(
            &mut self,
            _address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if let Some(kind) = self.fail_with {
                return Err(FakeError(kind));
            }
            let mut pointer = 0usize;
            for op in operations {
                match op {
                    Operation::Write(bytes) => pointer = bytes[0] as usize,
                    Operation::Read(buf) => {
                        for b in buf.iter_mut() {
                            *b = self.registers[pointer];
                            pointer += 1;
                        }
                    }
                }
            }
            Ok(())
        }
    }

    #[test]
    fn test_read_byte_data_through_adapter() {
        let mut registers = [0u8; 0x30];
        registers[0x2a] = 72;
        let mut bus = HalI2c::new(FakeMaster {
            registers,
            fail_with: None,
        });
        assert_eq!(bus.read_byte_data(0x57, 0x2a), Ok(72));
    }

    #[test]
    fn test_error_kinds_are_mapped() {
        let cases = [
            (ErrorKind::Bus, I2cBusError::Bus),
            (ErrorKind::ArbitrationLoss, I2cBusError::ArbitrationLost),
            (
                ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address),
                I2cBusError::Nack,
            ),
            (ErrorKind::Overrun, I2cBusError::Overrun),
            (ErrorKind::Other, I2cBusError::Other),
        ];

        for (kind, expected) in cases {
            let mut bus = HalI2c::new(FakeMaster {
                registers: [0; 0x30],
                fail_with: Some(kind),
            });
            assert_eq!(bus.read_byte_data(0x57, 0x02), Err(expected));
        }
    }
}
