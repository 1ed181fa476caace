//! # ExtrudeKit Emitter
//!
//! Builds printer G-code one command at a time. The [`Emitter`] tracks the
//! tool position and the current extrusion density, turns drawing intents
//! into `G1` moves, and keeps every command in an ordered log that can be
//! written out when the program is complete.
//!
//! ```
//! use extrudekit_emitter::Emitter;
//!
//! let mut emitter = Emitter::at(0.0, 0.0, 0.0);
//! emitter.set_density(0.05);
//! emitter.draw_line_3d(10.0, 0.0, 0.0);
//! assert_eq!(emitter.log(), ["G1 X10 E0.5"]);
//! ```

pub mod blocks;
pub mod emitter;
pub mod shapes;

pub use blocks::{
    finalize_block, init_block, FINALIZE_COMMANDS, INIT_COMMANDS, INIT_END_POSITION,
};
pub use emitter::Emitter;
pub use extrudekit_core::{Error, NumberFormat, Position, Result};
