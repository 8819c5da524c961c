//! Host power control

/// Host capable of powering the device off
pub trait HostPower {
    /// Request power-off
    ///
    /// Called on every tick while the battery is below the threshold, so
    /// implementations must tolerate repeated calls.
    fn shutdown(&mut self);
}
