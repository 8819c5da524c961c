//! Shutdown threshold check

/// True iff a threshold is configured and capacity is at or below it
///
/// `None` means the guard is disabled. The capacity fallback (420) is above
/// every representable threshold, so a dead bus never powers the host off.
pub fn should_shutdown(capacity_percent: u16, threshold: Option<u8>) -> bool {
    match threshold {
        Some(limit) => capacity_percent <= u16::from(limit),
        None => false,
    }
}

/// Stateless low-battery guard
///
/// It keeps answering `true` on every tick below the threshold; making the
/// power-off itself terminal is the host's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShutdownGuard {
    threshold: Option<u8>,
}

impl ShutdownGuard {
    pub fn new(threshold: Option<u8>) -> Self {
        Self { threshold }
    }

    /// Guard that never fires
    pub fn disabled() -> Self {
        Self { threshold: None }
    }

    pub fn check(&self, capacity_percent: u16) -> bool {
        should_shutdown(capacity_percent, self.threshold)
    }

    pub fn threshold(&self) -> Option<u8> {
        self.threshold
    }
}
