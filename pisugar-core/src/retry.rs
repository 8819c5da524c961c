//! Outer retry loop for derived readings
//!
//! A derived reading (voltage, capacity, status) is attempted a fixed
//! number of times with a pause after every failed attempt. Readings built
//! from several registers keep the bytes they already obtained in a
//! [`ByteCache`] so later attempts only re-read what is still missing.

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use log::error;

/// Attempts per derived reading
pub const OUTER_ATTEMPTS: u8 = 3;

/// Pause after each failed outer attempt
pub const OUTER_PAUSE_MS: u32 = 500;

/// Fixed-count, fixed-pause retry policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OuterRetry {
    /// Maximum number of attempts
    pub attempts: u8,
    /// Pause after every failed attempt (ms)
    pub pause_ms: u32,
}

impl Default for OuterRetry {
    fn default() -> Self {
        Self::new(OUTER_ATTEMPTS, OUTER_PAUSE_MS)
    }
}

impl OuterRetry {
    pub const fn new(attempts: u8, pause_ms: u32) -> Self {
        Self { attempts, pause_ms }
    }

    /// Run `attempt` until it succeeds or the attempts are used up
    ///
    /// Each failure is logged at error level and followed by a pause,
    /// including the last one. Returns `None` once every attempt failed.
    pub fn run<T, E, D, F>(&self, delay: &mut D, mut attempt: F) -> Option<T>
    where
        E: Debug,
        D: DelayNs,
        F: FnMut() -> Result<T, E>,
    {
        let mut remaining = self.attempts;

        while remaining > 0 {
            match attempt() {
                Ok(value) => return Some(value),
                Err(e) => {
                    error!("Try again: {:?}", e);
                    delay.delay_ms(self.pause_ms);
                    remaining -= 1;
                }
            }
        }

        None
    }
}

/// Bytes gathered so far for a multi-register reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteCache<const N: usize> {
    slots: [Option<u8>; N],
}

impl<const N: usize> Default for ByteCache<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ByteCache<N> {
    pub const fn new() -> Self {
        Self { slots: [None; N] }
    }

    /// Fetch every slot that is still empty
    ///
    /// Filled slots are left alone; `fetch` receives the slot index.
    pub fn fill_missing<F>(&mut self, mut fetch: F)
    where
        F: FnMut(usize) -> Option<u8>,
    {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.is_none() {
                *slot = fetch(index);
            }
        }
    }

    /// All bytes, once every slot is filled
    pub fn complete(&self) -> Option<[u8; N]> {
        let mut out = [0u8; N];
        for (dst, slot) in out.iter_mut().zip(self.slots.iter()) {
            *dst = (*slot)?;
        }
        Some(out)
    }

    /// Index of the first empty slot
    pub fn first_missing(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Current contents, filled or not
    pub fn slots(&self) -> [Option<u8>; N] {
        self.slots
    }
}
