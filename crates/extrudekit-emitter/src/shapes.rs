//! Extruded shapes built from the emitter primitives.
//!
//! None of these keep state of their own; they only sequence relative moves.

use std::f64::consts::TAU;

use crate::emitter::Emitter;

impl Emitter {
    /// Extrudes a closed rectangle from the current position: +X, +Y, -X, -Y.
    pub fn rectangle(&mut self, length_x: f64, length_y: f64) {
        tracing::debug!(length_x, length_y, "rectangle");
        self.draw_relative(length_x, 0.0);
        self.draw_relative(0.0, length_y);
        self.draw_relative(-length_x, 0.0);
        self.draw_relative(0.0, -length_y);
    }

    /// Extrudes a regular polygon from the current position, then travels
    /// back to where it started.
    ///
    /// Moves `radius` along +X without extruding, then walks the chords of the
    /// unit circle: chord `k` runs from angle `2πk/n` to `2π(k+1)/n` and is not
    /// scaled by `radius`. For `radius != 1` the outline is a unit polygon whose
    /// first vertex sits `radius` from the start. Use [`inscribed_polygon`] for
    /// a polygon of the given radius centred on the start.
    ///
    /// Emits `sides + 1` drawing moves followed by the return travel.
    ///
    /// [`inscribed_polygon`]: Emitter::inscribed_polygon
    pub fn regular_polygon(&mut self, radius: f64, sides: u32) {
        self.polygon(radius, sides, 1.0);
    }

    /// Extrudes a regular polygon inscribed in a circle of `radius` centred on
    /// the current position, then travels back to the centre.
    ///
    /// Same command sequence as [`regular_polygon`] with every chord scaled
    /// by `radius`.
    ///
    /// [`regular_polygon`]: Emitter::regular_polygon
    pub fn inscribed_polygon(&mut self, radius: f64, sides: u32) {
        self.polygon(radius, sides, radius);
    }

    fn polygon(&mut self, radius: f64, sides: u32, chord_scale: f64) {
        if sides < 3 {
            tracing::warn!(sides, "polygon with fewer than 3 sides is degenerate");
        }
        tracing::debug!(radius, sides, chord_scale, start = %self.position(), "polygon");

        self.returning_to_start(|e| {
            e.move_relative(radius, 0.0);

            let n = f64::from(sides);
            for k in 0..sides {
                let from = TAU * f64::from(k) / n;
                let to = TAU * f64::from(k + 1) / n;
                e.draw_relative(
                    chord_scale * (to.cos() - from.cos()),
                    chord_scale * (to.sin() - from.sin()),
                );
            }
        });
    }

    /// Extrudes an open rectangular spiral that shrinks by `delta` each pass.
    ///
    /// Pass `k` draws an X leg of `length_x - k*delta` then a Y leg of
    /// `length_y - k*delta`, flips direction, and dwells for `dwell_ms`.
    /// Draws `ceil(min(length_x, length_y) / delta)` passes and returns that
    /// count.
    ///
    /// A step that is not positive and finite, or too small to change the
    /// shorter leg, draws nothing and returns 0.
    pub fn rectangular_spiral(
        &mut self,
        length_x: f64,
        length_y: f64,
        delta: f64,
        dwell_ms: f64,
    ) -> usize {
        if !(delta > 0.0 && delta.is_finite() && length_x.is_finite() && length_y.is_finite()) {
            tracing::warn!(
                length_x,
                length_y,
                delta,
                "spiral needs finite lengths and a positive step; nothing drawn"
            );
            return 0;
        }

        let shorter = length_x.min(length_y);
        if shorter <= 0.0 {
            return 0;
        }
        if shorter - delta == shorter {
            tracing::warn!(
                length_x,
                length_y,
                delta,
                "spiral step is below the precision of the leg lengths; nothing drawn"
            );
            return 0;
        }

        let passes = (shorter / delta).ceil() as usize;
        let mut sign = 1.0;
        for k in 0..passes {
            let shrink = k as f64 * delta;
            self.draw_relative(sign * (length_x - shrink), 0.0);
            self.draw_relative(0.0, sign * (length_y - shrink));
            sign = -sign;
            self.dwell(dwell_ms);
        }

        tracing::debug!(length_x, length_y, delta, passes, "rectangular spiral");
        passes
    }
}

#[cfg(test)]
mod tests {
    use crate::{Emitter, Position};

    #[test]
    fn test_rectangle_from_origin() {
        let mut emitter = Emitter::default();
        emitter.rectangle(5.0, 3.0);
        assert_eq!(emitter.log(), ["G1 X5", "G1 Y3", "G1 X0", "G1 Y0"]);
        assert_eq!(emitter.position(), Position::origin());
    }

    #[test]
    fn test_polygon_square_returns_to_centre() {
        let mut emitter = Emitter::at(10.0, 10.0, 0.2);
        emitter.set_density(0.05);
        emitter.regular_polygon(2.0, 4);

        // outward travel + 4 chords + return travel
        assert_eq!(emitter.len(), 6);
        assert_eq!(emitter.log()[0], "G1 X12");
        assert!(emitter.log()[1..5].iter().all(|c| c.contains(" E")));
        assert!(!emitter.log()[5].contains('E'));

        let end = emitter.position();
        assert_eq!(end, Position::new(10.0, 10.0, 0.2));
        assert_eq!(emitter.density(), 0.05);
    }

    #[test]
    fn test_spiral_pass_count() {
        let mut emitter = Emitter::default();
        let passes = emitter.rectangular_spiral(10.0, 6.0, 2.0, 0.0);
        assert_eq!(passes, 3);
        // two legs and a dwell per pass
        assert_eq!(emitter.len(), 9);
        assert_eq!(emitter.log()[2], "G04 P0");
    }

    #[test]
    fn test_spiral_step_below_precision_draws_nothing() {
        let mut emitter = Emitter::default();
        assert_eq!(emitter.rectangular_spiral(1e17, 1e17, 1.0, 0.0), 0);
        assert!(emitter.is_empty());

        // only the shorter leg bounds the pass count
        assert_eq!(emitter.rectangular_spiral(1e17, 1.0, 1.0, 0.0), 1);
        assert_eq!(emitter.len(), 3);
    }

    #[test]
    fn test_spiral_rejects_non_positive_delta() {
        let mut emitter = Emitter::default();
        assert_eq!(emitter.rectangular_spiral(10.0, 10.0, 0.0, 0.0), 0);
        assert_eq!(emitter.rectangular_spiral(10.0, 10.0, -1.0, 0.0), 0);
        assert_eq!(emitter.rectangular_spiral(f64::INFINITY, 10.0, 1.0, 0.0), 0);
        assert!(emitter.is_empty());
    }
}
