//! The command emitter: position/density state plus the ordered command log.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use extrudekit_core::{format_number, Error, NumberFormat, Position, Result};

use crate::blocks::{finalize_block, init_block};

/// Stateful G-code builder.
///
/// Every drawing call appends to an append-only log and updates the tracked
/// position to the exact target, even when unchanged axes are left out of the
/// emitted text.
///
/// `cache_density`/`restore_density` and `cache_position`/`restore_position`
/// share one slot each: a second cache call overwrites the first, so these
/// pairs must not be nested. The composite moves in this crate use the scoped
/// helpers ([`Emitter::without_extrusion`], [`Emitter::returning_to_start`])
/// instead and never disturb those slots.
#[derive(Debug, Clone)]
pub struct Emitter {
    position: Position,
    density: f64,
    position_cache: Position,
    density_cache: f64,
    log: Vec<String>,
    number_format: NumberFormat,
}

impl Emitter {
    /// Creates an emitter at `start` with zero density and an empty log.
    pub fn new(start: Position) -> Self {
        Self {
            position: start,
            density: 0.0,
            position_cache: Position::origin(),
            density_cache: 0.0,
            log: Vec::new(),
            number_format: NumberFormat::default(),
        }
    }

    /// Creates an emitter at (x, y, z).
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Self::new(Position::new(x, y, z))
    }

    /// Sets how numeric fields are rendered for all subsequent commands.
    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    /// Current tool position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Current extrusion density (mm of filament per mm travelled).
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Sets the extrusion density. Zero means travel only.
    pub fn set_density(&mut self, density: f64) {
        self.density = density;
    }

    /// How numeric fields are rendered.
    pub fn number_format(&self) -> NumberFormat {
        self.number_format
    }

    /// Every command emitted so far, in execution order.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Number of log entries (init/finalize blocks count as one each).
    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    /// Consumes the emitter and returns its log.
    pub fn into_log(self) -> Vec<String> {
        self.log
    }

    fn num(&self, value: f64) -> String {
        format_number(value, self.number_format)
    }

    fn push(&mut self, command: String) {
        tracing::trace!(command = %command, "emit");
        self.log.push(command);
    }

    /// Appends `G1 F<rate>`.
    pub fn set_feedrate(&mut self, rate: f64) {
        let cmd = format!("G1 F{}", self.num(rate));
        self.push(cmd);
    }

    /// Appends `G04 P<ms>`.
    pub fn dwell(&mut self, ms: f64) {
        let cmd = format!("G04 P{}", self.num(ms));
        self.push(cmd);
    }

    /// Appends `G1 E<amount>` without moving.
    pub fn extrude(&mut self, amount: f64) {
        let cmd = format!("G1 E{}", self.num(amount));
        self.push(cmd);
    }

    /// Draws to (x, y) at the current height.
    pub fn draw_line(&mut self, x: f64, y: f64) {
        self.draw_line_3d(x, y, self.position.z);
    }

    /// Draws a straight line to (x, y, z) at the current density.
    ///
    /// Only axes that change are written, and `E` only when density is
    /// non-zero. A move to the current position therefore emits a bare `G1`
    /// (or `G1 E0` while extruding).
    pub fn draw_line_3d(&mut self, x: f64, y: f64, z: f64) {
        let target = Position::new(x, y, z);
        let extrusion = self.position.distance_to(&target) * self.density;

        let mut cmd = String::from("G1");
        if x != self.position.x {
            cmd.push_str(&format!(" X{}", self.num(x)));
        }
        if y != self.position.y {
            cmd.push_str(&format!(" Y{}", self.num(y)));
        }
        if z != self.position.z {
            cmd.push_str(&format!(" Z{}", self.num(z)));
        }
        if self.density != 0.0 {
            cmd.push_str(&format!(" E{}", self.num(extrusion)));
        }

        self.push(cmd);
        self.position = target;
    }

    /// Draws by an offset in the XY plane.
    pub fn draw_relative(&mut self, dx: f64, dy: f64) {
        self.draw_relative_3d(dx, dy, 0.0);
    }

    /// Draws by an offset on all three axes.
    pub fn draw_relative_3d(&mut self, dx: f64, dy: f64, dz: f64) {
        let target = self.position.offset(dx, dy, dz);
        self.draw_line_3d(target.x, target.y, target.z);
    }

    /// Runs `f` at the given density, then puts the previous density back.
    ///
    /// The previous value lives on the call stack, so scopes nest freely.
    pub fn with_density<R>(&mut self, density: f64, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.density;
        self.density = density;
        let result = f(self);
        self.density = saved;
        result
    }

    /// Runs `f` with extrusion switched off.
    pub fn without_extrusion<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.with_density(0.0, f)
    }

    /// Runs `f`, then travels back to wherever the tool was before it.
    pub fn returning_to_start<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let start = self.position;
        let result = f(self);
        tracing::debug!(%start, "returning to start");
        self.travel_to_3d(start.x, start.y, start.z);
        result
    }

    /// Moves to (x, y) at the current height without extruding.
    pub fn travel_to(&mut self, x: f64, y: f64) {
        self.travel_to_3d(x, y, self.position.z);
    }

    /// Moves to (x, y, z) without extruding; density is unchanged afterwards.
    pub fn travel_to_3d(&mut self, x: f64, y: f64, z: f64) {
        self.without_extrusion(|e| e.draw_line_3d(x, y, z));
    }

    /// Moves straight up or down to `z` without extruding.
    pub fn set_height(&mut self, z: f64) {
        let Position { x, y, .. } = self.position;
        self.travel_to_3d(x, y, z);
    }

    /// Moves by an offset in the XY plane without extruding.
    pub fn move_relative(&mut self, dx: f64, dy: f64) {
        self.move_relative_3d(dx, dy, 0.0);
    }

    /// Moves by an offset on all three axes without extruding.
    pub fn move_relative_3d(&mut self, dx: f64, dy: f64, dz: f64) {
        self.without_extrusion(|e| e.draw_relative_3d(dx, dy, dz));
    }

    /// Raises (or lowers, for negative `dz`) the tool without extruding.
    pub fn lift(&mut self, dz: f64) {
        self.move_relative_3d(0.0, 0.0, dz);
    }

    /// Saves the current density into the single density slot.
    pub fn cache_density(&mut self) {
        self.density_cache = self.density;
    }

    /// Sets density from the slot; 0 if nothing was ever cached.
    pub fn restore_density(&mut self) {
        self.density = self.density_cache;
    }

    /// Saves the current position into the single position slot.
    pub fn cache_position(&mut self) {
        self.position_cache = self.position;
    }

    /// Travels (without extruding) to the cached position, or the origin if
    /// nothing was ever cached.
    ///
    /// The emitted `G1` names only the axes that actually move.
    pub fn restore_position(&mut self) {
        let Position { x, y, z } = self.position_cache;
        tracing::debug!(cached = %self.position_cache, "restoring cached position");
        self.travel_to_3d(x, y, z);
    }

    /// Appends the printer start sequence as one entry.
    pub fn initialize(&mut self) {
        self.push(init_block());
    }

    /// Appends the printer end sequence as one entry.
    pub fn finalize(&mut self) {
        self.push(finalize_block());
    }

    /// The whole program as text, exactly as [`Emitter::serialize`] writes it.
    pub fn to_gcode(&self) -> String {
        let mut out = String::new();
        for entry in &self.log {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    /// Writes every entry followed by a newline, in log order.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        for entry in &self.log {
            writer.write_all(entry.as_bytes())?;
            writer.write_all(b"\n")?;
        }
        writer.flush()
    }

    /// Writes the program to `path`, replacing anything already there.
    ///
    /// The log is left untouched, so a failed write can be retried.
    pub fn serialize(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let write_error = |source: std::io::Error| Error::Write {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(write_error)?;
        self.write_to(BufWriter::new(file)).map_err(write_error)?;

        tracing::info!("Wrote {} G-code entries to {}", self.log.len(), path.display());
        Ok(())
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(Position::origin())
    }
}
