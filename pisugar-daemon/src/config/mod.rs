//! Daemon configuration
//!
//! Parses the TOML configuration, falling back to the defaults embedded in
//! the binary.

mod loader;

pub use loader::load_config;
