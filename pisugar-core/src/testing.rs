//! Test doubles shared by the unit tests

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Once;

use embedded_hal::delay::DelayNs;
use log::{Level, LevelFilter, Log, Metadata, Record};
use pisugar_hal::{I2cBus, I2cBusError};

use crate::registers::DEVICE_ADDRESS;
use crate::traits::{HostPower, LabeledValueSpec, LabeledValueUi, UiError};

const REGISTER_COUNT: usize = 0x40;

/// Register file of a simulated power board
///
/// Each register can be scripted to fail a number of times before
/// answering, or to fail forever.
pub struct FakeBoard {
    values: [u8; REGISTER_COUNT],
    pending_failures: [u8; REGISTER_COUNT],
    always_fail: [bool; REGISTER_COUNT],
    reads: [usize; REGISTER_COUNT],
}

impl FakeBoard {
    pub fn new() -> Self {
        Self {
            values: [0; REGISTER_COUNT],
            pending_failures: [0; REGISTER_COUNT],
            always_fail: [false; REGISTER_COUNT],
            reads: [0; REGISTER_COUNT],
        }
    }

    pub fn set(&mut self, register: u8, value: u8) {
        self.values[register as usize] = value;
    }

    pub fn fail_next(&mut self, register: u8, times: u8) {
        self.pending_failures[register as usize] = times;
    }

    pub fn fail_always(&mut self, register: u8) {
        self.always_fail[register as usize] = true;
    }

    pub fn read_count(&self, register: u8) -> usize {
        self.reads[register as usize]
    }

    pub fn total_reads(&self) -> usize {
        self.reads.iter().sum()
    }
}

impl I2cBus for FakeBoard {
    type Error = I2cBusError;

    fn write(&mut self, _address: u8, _data: &[u8]) -> Result<(), Self::Error> {
        Err(I2cBusError::Other)
    }

    fn read(&mut self, _address: u8, _buf: &mut [u8]) -> Result<(), Self::Error> {
        Err(I2cBusError::Other)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        if address != DEVICE_ADDRESS {
            return Err(I2cBusError::Nack);
        }
        let reg = write_data[0] as usize;
        if reg >= REGISTER_COUNT {
            return Err(I2cBusError::Nack);
        }
        self.reads[reg] += 1;

        if self.always_fail[reg] {
            return Err(I2cBusError::Bus);
        }
        if self.pending_failures[reg] > 0 {
            self.pending_failures[reg] -= 1;
            return Err(I2cBusError::ArbitrationLost);
        }

        read_buf[0] = self.values[reg];
        Ok(())
    }
}

/// Board handle that stays adjustable while a sampler owns the bus
#[derive(Clone)]
pub struct SharedBoard(pub Rc<RefCell<FakeBoard>>);

impl SharedBoard {
    pub fn new(board: FakeBoard) -> Self {
        Self(Rc::new(RefCell::new(board)))
    }

    pub fn set(&self, register: u8, value: u8) {
        self.0.borrow_mut().set(register, value);
    }

    pub fn total_reads(&self) -> usize {
        self.0.borrow().total_reads()
    }
}

impl I2cBus for SharedBoard {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.borrow_mut().write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.0.borrow_mut().read(address, buf)
    }

    fn write_read(
        &mut self,
        address: u8,
        write_data: &[u8],
        read_buf: &mut [u8],
    ) -> Result<(), Self::Error> {
        self.0.borrow_mut().write_read(address, write_data, read_buf)
    }
}

/// Delay that records what was asked of it instead of sleeping
#[derive(Default)]
pub struct RecordingDelay {
    pub pauses_ms: Vec<u32>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.pauses_ms.push(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
    }
}

/// UI element store that records every call
#[derive(Default)]
pub struct RecordingUi {
    pub elements: Vec<(String, String, String, (u32, u32))>,
    pub forced_status: Vec<String>,
    pub label_writes: usize,
    pub value_writes: usize,
    pub fail_setup: bool,
    pub fail_remove: bool,
}

impl RecordingUi {
    pub fn label(&self, key: &str) -> Option<&str> {
        self.find(key).map(|e| e.1.as_str())
    }

    pub fn value(&self, key: &str) -> Option<&str> {
        self.find(key).map(|e| e.2.as_str())
    }

    fn find(&self, key: &str) -> Option<&(String, String, String, (u32, u32))> {
        self.elements.iter().find(|e| e.0 == key)
    }
}

impl LabeledValueUi for RecordingUi {
    fn width(&self) -> u32 {
        250
    }

    fn add_labeled_value(&mut self, spec: &LabeledValueSpec) -> Result<(), UiError> {
        if self.fail_setup {
            return Err(UiError::Unavailable);
        }
        if self.find(spec.key).is_some() {
            return Err(UiError::DuplicateElement);
        }
        self.elements.push((
            spec.key.to_string(),
            spec.label.to_string(),
            spec.value.to_string(),
            spec.position,
        ));
        Ok(())
    }

    fn remove_element(&mut self, key: &str) -> Result<(), UiError> {
        if self.fail_remove {
            return Err(UiError::Unavailable);
        }
        let before = self.elements.len();
        self.elements.retain(|e| e.0 != key);
        if self.elements.len() == before {
            return Err(UiError::UnknownElement);
        }
        Ok(())
    }

    fn set_label(&mut self, key: &str, label: &str) {
        self.label_writes += 1;
        if let Some(e) = self.elements.iter_mut().find(|e| e.0 == key) {
            e.1 = label.to_string();
        }
    }

    fn set_value(&mut self, key: &str, value: &str) {
        self.value_writes += 1;
        if let Some(e) = self.elements.iter_mut().find(|e| e.0 == key) {
            e.2 = value.to_string();
        }
    }

    fn force_update(&mut self, status: &str) {
        self.forced_status.push(status.to_string());
    }
}

/// Counts power-off requests
#[derive(Default)]
pub struct RecordingPower {
    pub shutdown_calls: usize,
}

impl HostPower for RecordingPower {
    fn shutdown(&mut self) {
        self.shutdown_calls += 1;
    }
}

thread_local! {
    static RECORDS: RefCell<Vec<(Level, String)>> = const { RefCell::new(Vec::new()) };
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format!("{}", record.args());
        RECORDS.with(|r| r.borrow_mut().push((record.level(), line)));
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;
static INIT: Once = Once::new();

/// Install the capturing logger and clear this thread's records
pub fn capture_logs() {
    INIT.call_once(|| {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(LevelFilter::Trace);
    });
    RECORDS.with(|r| r.borrow_mut().clear());
}

/// Log lines emitted on this thread since [`capture_logs`]
pub fn logged() -> Vec<(Level, String)> {
    RECORDS.with(|r| r.borrow().clone())
}

/// Number of captured lines at `level`
pub fn logged_at(level: Level) -> usize {
    RECORDS.with(|r| r.borrow().iter().filter(|(l, _)| *l == level).count())
}
