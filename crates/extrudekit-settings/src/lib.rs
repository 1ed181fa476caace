//! ExtrudeKit Settings Crate
//!
//! Handles generation-session configuration and its persistence.

pub mod config;
pub mod error;

pub use config::{Config, ExtrusionSettings, MachineSettings, OutputSettings};
pub use error::{SettingsError, SettingsResult};
