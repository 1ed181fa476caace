//! Assembles a complete print program for one shape from a session config.

use extrudekit_core::Position;
use extrudekit_emitter::{Emitter, INIT_END_POSITION};
use extrudekit_settings::Config;

/// A single shape to print
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Closed rectangle with its first corner at the start position
    Rectangle { width: f64, depth: f64 },
    /// Regular polygon of `radius` centred on the start position
    Polygon { radius: f64, sides: u32 },
    /// Open rectangular spiral shrinking by `delta` each pass
    Spiral {
        width: f64,
        depth: f64,
        delta: f64,
        dwell_ms: f64,
    },
}

impl Shape {
    fn draw(&self, emitter: &mut Emitter) {
        match *self {
            Shape::Rectangle { width, depth } => emitter.rectangle(width, depth),
            Shape::Polygon { radius, sides } => emitter.inscribed_polygon(radius, sides),
            Shape::Spiral {
                width,
                depth,
                delta,
                dwell_ms,
            } => {
                emitter.rectangular_spiral(width, depth, delta, dwell_ms);
            }
        }
    }
}

/// Builds the full program: start sequence, travel to the first layer,
/// the shape, and the end sequence.
pub fn build_program(config: &Config, shape: &Shape) -> Emitter {
    let machine = &config.machine;
    let output = &config.output;

    let origin = if output.emit_init {
        INIT_END_POSITION
    } else {
        Position::origin()
    };
    let mut emitter = Emitter::new(origin).with_number_format(output.number_format);

    if output.emit_init {
        emitter.initialize();
    }

    let start = machine.start_position();
    emitter.set_feedrate(machine.travel_feedrate);
    emitter.travel_to_3d(start.x, start.y, start.z + machine.layer_height);

    emitter.set_feedrate(machine.feedrate);
    emitter.with_density(config.extrusion.density, |e| shape.draw(e));

    if output.emit_finalize {
        emitter.finalize();
    }

    tracing::debug!(
        ?shape,
        format = ?emitter.number_format(),
        commands = emitter.len(),
        "built program"
    );
    emitter
}
