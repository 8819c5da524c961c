//! Display slot rotation
//!
//! The shown value advances cyclically Voltage → Capacity → Temperature,
//! at most once per rotation period, and only when the host ticks.

/// Minimum time a slot stays on screen (ms)
pub const ROTATION_PERIOD_MS: u64 = 5_000;

/// Which reading is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Slot {
    #[default]
    Voltage,
    Capacity,
    Temperature,
}

impl Slot {
    /// Next slot in the cycle
    pub fn next(self) -> Self {
        match self {
            Slot::Voltage => Slot::Capacity,
            Slot::Capacity => Slot::Temperature,
            Slot::Temperature => Slot::Voltage,
        }
    }
}

/// Time-driven slot state machine
#[derive(Debug, Clone)]
pub struct DisplayRotator {
    slot: Slot,
    /// `None` until the first tick arms the timer
    next_advance_ms: Option<u64>,
    period_ms: u64,
}

impl Default for DisplayRotator {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayRotator {
    /// Start on [`Slot::Voltage`] with the default period
    pub fn new() -> Self {
        Self::with_period(ROTATION_PERIOD_MS)
    }

    pub fn with_period(period_ms: u64) -> Self {
        Self {
            slot: Slot::Voltage,
            next_advance_ms: None,
            period_ms,
        }
    }

    /// Advance if the deadline has passed and return the slot to render
    ///
    /// The first tick shows the initial slot and arms the deadline at
    /// `now_ms + period`. Later ticks at or after the deadline advance one
    /// slot and re-arm relative to `now_ms`, so a late tick never causes
    /// more than one step.
    pub fn tick(&mut self, now_ms: u64) -> Slot {
        match self.next_advance_ms {
            None => {
                self.next_advance_ms = Some(now_ms.saturating_add(self.period_ms));
            }
            Some(deadline) if now_ms >= deadline => {
                self.slot = self.slot.next();
                self.next_advance_ms = Some(now_ms.saturating_add(self.period_ms));
            }
            Some(_) => {}
        }
        self.slot
    }

    /// Slot shown by the most recent tick
    pub fn slot(&self) -> Slot {
        self.slot
    }

    /// Time at which the next advance becomes due, once armed
    pub fn next_advance_ms(&self) -> Option<u64> {
        self.next_advance_ms
    }
}
