//! Configuration and settings management for ExtrudeKit
//!
//! A config file describes one generation session: where the tool starts, how
//! fast it moves, how much filament it lays down, and where the program goes.
//! Supports JSON and TOML, chosen by file extension.

use extrudekit_core::{NumberFormat, Position};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{SettingsError, SettingsResult};

/// Printer motion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineSettings {
    /// Starting X position in mm
    pub start_x: f64,
    /// Starting Y position in mm
    pub start_y: f64,
    /// Starting Z position in mm
    pub start_z: f64,
    /// Feed rate for extruding moves in mm/min
    pub feedrate: f64,
    /// Feed rate for travel moves in mm/min
    pub travel_feedrate: f64,
    /// Height of the first layer above the start position, in mm
    pub layer_height: f64,
}

impl Default for MachineSettings {
    fn default() -> Self {
        Self {
            start_x: 100.0,
            start_y: 100.0,
            start_z: 0.0,
            feedrate: 1000.0,
            travel_feedrate: 3000.0,
            layer_height: 0.2,
        }
    }
}

impl MachineSettings {
    /// The configured start position
    pub fn start_position(&self) -> Position {
        Position::new(self.start_x, self.start_y, self.start_z)
    }
}

/// Extrusion settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtrusionSettings {
    /// Filament length extruded per mm of travel
    pub density: f64,
}

impl Default for ExtrusionSettings {
    fn default() -> Self {
        Self { density: 0.05 }
    }
}

/// Output file settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Destination for the generated program
    pub path: PathBuf,
    /// Emit the printer start sequence
    pub emit_init: bool,
    /// Emit the printer end sequence
    pub emit_finalize: bool,
    /// How numeric fields are written
    pub number_format: NumberFormat,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.gcode"),
            emit_init: true,
            emit_finalize: true,
            number_format: NumberFormat::Shortest,
        }
    }
}

/// Complete session configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Motion settings
    pub machine: MachineSettings,
    /// Extrusion settings
    pub extrusion: ExtrusionSettings,
    /// Output settings
    pub output: OutputSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_for(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(SettingsError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn is_non_negative(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<platform config dir>/extrudekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("extrudekit").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Load configuration from a `.json` or `.toml` file
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_for(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a `.json` or `.toml` file
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_for(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.machine.start_position().is_finite() {
            return Err(SettingsError::invalid(
                "machine.start",
                "start position must be finite",
            ));
        }

        if !is_positive(self.machine.feedrate) {
            return Err(SettingsError::invalid("machine.feedrate", "must be > 0"));
        }

        if !is_positive(self.machine.travel_feedrate) {
            return Err(SettingsError::invalid(
                "machine.travel_feedrate",
                "must be > 0",
            ));
        }

        if !is_non_negative(self.machine.layer_height) {
            return Err(SettingsError::invalid(
                "machine.layer_height",
                "must be >= 0",
            ));
        }

        if !is_non_negative(self.extrusion.density) {
            return Err(SettingsError::invalid(
                "extrusion.density",
                "must be a finite value >= 0",
            ));
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(SettingsError::invalid("output.path", "must not be empty"));
        }

        Ok(())
    }
}
