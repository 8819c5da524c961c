//! Host collaborator traits
//!
//! These traits define the interface between the telemetry logic and the
//! host that renders the UI and powers the device off.

pub mod power;
pub mod ui;

pub use power::HostPower;
pub use ui::{LabeledValueSpec, LabeledValueUi, UiError};
