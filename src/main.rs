//! # ExtrudeKit CLI
//!
//! ```bash
//! # 40 x 20 mm rectangle with the default session settings
//! extrudekit rectangle --width 40 --depth 20
//!
//! # 64-sided circle approximation, written to a chosen file
//! extrudekit --output circle.gcode polygon --radius 15 --sides 64
//!
//! # Shrinking spiral with a pause after each pass
//! extrudekit --config pla.toml spiral --width 60 --depth 60 --delta 2 --dwell 500
//!
//! # Write a default config to edit
//! extrudekit init-config pla.toml
//! ```

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use extrudekit::{build_program, init_logging, Config, Shape, BUILD_DATE, VERSION};

/// ExtrudeKit - G-code for FDM printers without a slicer
#[derive(Parser, Debug)]
#[command(name = "extrudekit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Session config (.toml or .json); falls back to the user config, then defaults
    #[arg(long, short, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the program here instead of the configured output path
    #[arg(long, short, global = true, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a closed rectangle starting at the configured position
    Rectangle {
        /// Length along X in mm
        #[arg(long)]
        width: f64,
        /// Length along Y in mm
        #[arg(long)]
        depth: f64,
    },

    /// Print a regular polygon centred on the configured position
    Polygon {
        /// Circumscribed radius in mm
        #[arg(long)]
        radius: f64,
        /// Number of sides
        #[arg(long, default_value_t = 64)]
        sides: u32,
    },

    /// Print an open rectangular spiral
    Spiral {
        /// Initial length along X in mm
        #[arg(long)]
        width: f64,
        /// Initial length along Y in mm
        #[arg(long)]
        depth: f64,
        /// How much both lengths shrink each pass, in mm
        #[arg(long)]
        delta: f64,
        /// Pause after each pass, in milliseconds
        #[arg(long, default_value_t = 0.0)]
        dwell: f64,
    },

    /// Write a default configuration file
    InitConfig {
        /// Destination (.toml or .json); defaults to the user config location
        path: Option<PathBuf>,
    },
}

fn load_config(explicit: Option<&PathBuf>) -> anyhow::Result<Config> {
    if let Some(path) = explicit {
        return Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()));
    }

    match Config::default_path() {
        Ok(path) if path.is_file() => Config::load_from_file(&path)
            .with_context(|| format!("loading config {}", path.display())),
        _ => {
            tracing::debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    tracing::debug!("extrudekit {} (built {})", VERSION, BUILD_DATE);

    let shape = match cli.command {
        Commands::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::default_path()?,
            };
            Config::default().save_to_file(&path)?;
            println!("Wrote default config to {}", path.display());
            return Ok(());
        }
        Commands::Rectangle { width, depth } => Shape::Rectangle { width, depth },
        Commands::Polygon { radius, sides } => Shape::Polygon { radius, sides },
        Commands::Spiral {
            width,
            depth,
            delta,
            dwell,
        } => Shape::Spiral {
            width,
            depth,
            delta,
            dwell_ms: dwell,
        },
    };

    let mut config = load_config(cli.config.as_ref())?;
    if let Some(output) = cli.output {
        config.output.path = output;
    }

    let program = build_program(&config, &shape);
    program.serialize(&config.output.path)?;

    println!(
        "Wrote {} commands to {}",
        program.len(),
        config.output.path.display()
    );
    Ok(())
}
