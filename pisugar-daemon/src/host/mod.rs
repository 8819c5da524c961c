//! Host-side collaborators for running the plugin as a standalone daemon

pub mod console;
pub mod power;

pub use console::ConsoleUi;
pub use power::CommandPower;
