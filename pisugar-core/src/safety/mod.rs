//! Low-battery protection
//!
//! Decides when the host should power off.

pub mod guard;

pub use guard::{should_shutdown, ShutdownGuard};
