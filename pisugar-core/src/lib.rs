//! Board-agnostic telemetry logic for the PiSugar 3 battery monitor
//!
//! This crate contains all application logic that does not depend on
//! a specific bus backend or host UI:
//!
//! - Register map of the power board
//! - Register reads with bounded retries
//! - Telemetry sampling (voltage, capacity, status) with outer retries
//! - Display slot rotation and value formatting
//! - Low-battery shutdown decision
//! - Per-tick orchestration and the plugin lifecycle
//! - Host collaborator traits (UI element, power-off)
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod display;
pub mod orchestrator;
pub mod plugin;
pub mod reader;
pub mod registers;
pub mod retry;
pub mod safety;
pub mod sampler;
pub mod telemetry;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
