//! # ExtrudeKit
//!
//! Generates printer G-code straight from a small drawing API instead of a
//! slicer. The workspace is split into:
//!
//! 1. **extrudekit-core** - positions, number formatting, errors
//! 2. **extrudekit-emitter** - the stateful command emitter and its shapes
//! 3. **extrudekit-settings** - session configuration files
//! 4. **extrudekit** - this crate: program assembly, logging, and the CLI

pub mod program;

pub use extrudekit_core::{format_number, Error, NumberFormat, Position, Result};
pub use extrudekit_emitter::{finalize_block, init_block, Emitter};
pub use extrudekit_settings::{
    Config, ExtrusionSettings, MachineSettings, OutputSettings, SettingsError,
};
pub use program::{build_program, Shape};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so G-code written to stdout stays clean
/// - RUST_LOG environment variable support
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
